//! Calories per workout bar panel

use crate::metrics::WorkoutLog;
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;

pub(super) fn draw(area: &DrawingArea<BitMapBackend, Shift>, log: &WorkoutLog) -> Result<()> {
    let calories: Vec<f64> = log.iter().map(|r| r.calories_burned as f64).collect();
    if calories.is_empty() {
        return Ok(());
    }

    let max_calories = calories.iter().copied().fold(0.0, f64::max);
    let count = calories.len() as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Calories Burned per Workout", ("sans-serif", 40))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(count - 0.5), 0f64..(max_calories * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Workout Number")
        .y_desc("Calories")
        .x_label_formatter(&|n| format!("{:.0}", n))
        .y_label_formatter(&|cal| format!("{:.0}", cal))
        .draw()?;

    chart.draw_series(calories.iter().enumerate().map(|(idx, &cal)| {
        let x = idx as f64;
        Rectangle::new([(x - 0.4, 0.0), (x + 0.4, cal)], ORANGE.mix(0.7).filled())
    }))?;

    Ok(())
}
