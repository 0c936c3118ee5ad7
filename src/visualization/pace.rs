//! Pace distribution histogram panel

use crate::metrics::WorkoutLog;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;

const NUM_BINS: usize = 10;

pub(super) fn draw(area: &DrawingArea<BitMapBackend, Shift>, log: &WorkoutLog) -> Result<()> {
    let paces: Vec<f64> = log.iter().map(|r| r.avg_pace_min_per_500m).collect();
    if paces.is_empty() {
        return Ok(());
    }

    let min_pace = paces.iter().copied().fold(f64::INFINITY, f64::min);
    let max_pace = paces.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_width = ((max_pace - min_pace) / NUM_BINS as f64).max(f64::EPSILON);

    let mut bins = vec![0u32; NUM_BINS];
    for &pace in &paces {
        // Clamp so the maximum lands in the last bin
        let idx = (((pace - min_pace) / bin_width).floor() as usize).min(NUM_BINS - 1);
        bins[idx] += 1;
    }
    let max_count = bins.iter().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(area)
        .caption("Pace Distribution", ("sans-serif", 40))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            min_pace..(min_pace + bin_width * NUM_BINS as f64),
            0f64..(max_count as f64 * 1.1),
        )?;

    chart
        .configure_mesh()
        .x_desc("Pace (min/500m)")
        .y_desc("Frequency")
        .x_label_formatter(&|pace| format!("{:.2}", pace))
        .y_label_formatter(&|count| format!("{:.0}", count))
        .draw()?;

    chart.draw_series(bins.iter().enumerate().map(|(idx, &count)| {
        let x0 = min_pace + idx as f64 * bin_width;
        let x1 = x0 + bin_width;
        Rectangle::new([(x0, 0.0), (x1, count as f64)], GREEN.mix(0.7).filled())
    }))?;

    Ok(())
}
