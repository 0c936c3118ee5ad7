//! Heart rate vs pace scatter panel

use crate::metrics::WorkoutLog;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

pub(super) fn draw(area: &DrawingArea<BitMapBackend, Shift>, log: &WorkoutLog) -> Result<()> {
    let points: Vec<(f64, f64)> = log
        .iter()
        .map(|r| (r.avg_pace_min_per_500m, r.max_heart_rate as f64))
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = points
        .iter()
        .map(|(x, _)| *x)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_max - x_min) * 0.05).max(0.01);
    let y_pad = ((y_max - y_min) * 0.05).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Heart Rate vs Pace", ("sans-serif", 40))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    chart
        .configure_mesh()
        .x_desc("Pace (min/500m)")
        .y_desc("Max Heart Rate (bpm)")
        .x_label_formatter(&|pace| format!("{:.2}", pace))
        .y_label_formatter(&|bpm| format!("{:.0}", bpm))
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|(pace, bpm)| Circle::new((*pace, *bpm), 5, RED.mix(0.6).filled())),
    )?;

    Ok(())
}
