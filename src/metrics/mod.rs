//! Workout records, the in-memory log, and summary aggregation

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metrics for a single rowing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Distance covered in meters
    pub distance_meters: u32,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Average split in minutes per 500 m
    pub avg_pace_min_per_500m: f64,
    /// Peak heart rate in beats per minute
    pub max_heart_rate: u32,
    /// Estimated energy expenditure in kcal
    pub calories_burned: u32,
    /// Strokes per minute
    pub stroke_rate: u32,
    /// ISO week number, filled in by [`WorkoutLog::label_weeks`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
}

/// Aggregated statistics across the whole log
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub total_workouts: usize,
    pub total_distance_km: f64,
    pub total_duration_hours: f64,
    pub total_calories: u64,
    pub avg_pace_min_per_500m: f64,
    pub best_pace_min_per_500m: f64,
    pub avg_stroke_rate: f64,
    /// Meters rowed per ISO week, ordered by week number
    pub weekly_distance_m: BTreeMap<u32, u64>,
}

/// Collector for workout records in chronological order
#[derive(Debug, Clone)]
pub struct WorkoutLog {
    records: Vec<WorkoutRecord>,
}

impl WorkoutLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record to the log
    pub fn add(&mut self, record: WorkoutRecord) {
        self.records.push(record);
    }

    /// Get the number of records collected
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records
    pub fn iter(&self) -> impl Iterator<Item = &WorkoutRecord> {
        self.records.iter()
    }

    /// Get all records as a slice
    pub fn records(&self) -> &[WorkoutRecord] {
        &self.records
    }

    /// Stamp every record with the ISO week number of its date
    pub fn label_weeks(&mut self) {
        for record in &mut self.records {
            record.week = Some(record.date.iso_week().week());
        }
    }

    /// Compute aggregated statistics over the whole log
    pub fn aggregate(&self) -> WorkoutSummary {
        if self.records.is_empty() {
            return WorkoutSummary::default();
        }

        let total_workouts = self.records.len();
        let total_distance_m: u64 = self.records.iter().map(|r| r.distance_meters as u64).sum();
        let total_minutes: u64 = self.records.iter().map(|r| r.duration_minutes as u64).sum();
        let total_calories: u64 = self.records.iter().map(|r| r.calories_burned as u64).sum();

        let avg_pace = self
            .records
            .iter()
            .map(|r| r.avg_pace_min_per_500m)
            .sum::<f64>()
            / total_workouts as f64;
        // Best pace is the lowest split
        let best_pace = self
            .records
            .iter()
            .map(|r| r.avg_pace_min_per_500m)
            .fold(f64::INFINITY, f64::min);
        let avg_stroke_rate = self
            .records
            .iter()
            .map(|r| r.stroke_rate as f64)
            .sum::<f64>()
            / total_workouts as f64;

        let mut weekly_distance_m = BTreeMap::new();
        for record in &self.records {
            let week = record
                .week
                .unwrap_or_else(|| record.date.iso_week().week());
            *weekly_distance_m.entry(week).or_insert(0) += record.distance_meters as u64;
        }

        WorkoutSummary {
            total_workouts,
            total_distance_km: total_distance_m as f64 / 1000.0,
            total_duration_hours: total_minutes as f64 / 60.0,
            total_calories,
            avg_pace_min_per_500m: avg_pace,
            best_pace_min_per_500m: best_pace,
            avg_stroke_rate,
            weekly_distance_m,
        }
    }
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}
