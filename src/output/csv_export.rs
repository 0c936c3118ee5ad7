//! CSV export functionality

use crate::metrics::WorkoutLog;
use anyhow::Result;
use csv::Writer;
use std::fs::File;

/// CSV exporter for workout logs
pub struct CsvExporter;

impl CsvExporter {
    /// Export the log to a CSV file, one row per workout
    pub fn export(log: &WorkoutLog, path: &str) -> Result<()> {
        let file = File::create(path)?;
        let mut wtr = Writer::from_writer(file);

        wtr.write_record(&[
            "date",
            "distance_meters",
            "duration_minutes",
            "avg_pace_min_per_500m",
            "max_heart_rate",
            "calories_burned",
            "stroke_rate",
            "week",
        ])?;

        for record in log.iter() {
            wtr.write_record(&[
                record.date.to_string(),
                record.distance_meters.to_string(),
                record.duration_minutes.to_string(),
                record.avg_pace_min_per_500m.to_string(),
                record.max_heart_rate.to_string(),
                record.calories_burned.to_string(),
                record.stroke_rate.to_string(),
                record.week.map(|w| w.to_string()).unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
