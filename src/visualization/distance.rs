//! Distance over time line panel

use crate::metrics::WorkoutLog;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use plotters::coord::Shift;
use plotters::prelude::*;

pub(super) fn draw(area: &DrawingArea<BitMapBackend, Shift>, log: &WorkoutLog) -> Result<()> {
    let points: Vec<(NaiveDate, f64)> = log
        .iter()
        .map(|r| (r.date, r.distance_meters as f64 / 1000.0))
        .collect();
    if points.is_empty() {
        return Ok(());
    }

    let first = points.first().unwrap().0;
    let last = points.last().unwrap().0;
    // Keep the axis non-degenerate for single-day logs
    let x_end = if last > first {
        last
    } else {
        first + Duration::days(1)
    };
    let max_km = points.iter().map(|(_, km)| *km).fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption("Distance Over Time", ("sans-serif", 40))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(first..x_end, 0f64..(max_km * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Distance (km)")
        .x_label_formatter(&|d| d.format("%b %d").to_string())
        .y_label_formatter(&|km| format!("{:.1}", km))
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.clone(), &BLUE))?
        .label("Distance")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart.draw_series(
        points
            .iter()
            .map(|(date, km)| Circle::new((*date, *km), 4, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
