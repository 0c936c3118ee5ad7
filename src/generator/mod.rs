//! Synthetic workout dataset generation
//!
//! Every field of a generated record is drawn from a fixed uniform range
//! with a seeded RNG, so the same seed always reproduces the same dataset.

use crate::metrics::{WorkoutLog, WorkoutRecord};
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use thiserror::Error;

/// Default number of simulated days
pub const DEFAULT_DAYS: usize = 30;

/// Upper bound on simulated days, keeps the date arithmetic in range
pub const MAX_DAYS: usize = 36_500;

/// Default RNG seed
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for dataset generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of consecutive calendar days to simulate, ending today
    pub days: usize,
    /// Seed for the pseudo-random field draws
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for the given number of days
    pub fn new(days: usize) -> Self {
        Self {
            days,
            ..Default::default()
        }
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::InvalidDays(
                "must simulate at least one day".to_string(),
            ));
        }
        if self.days > MAX_DAYS {
            return Err(ConfigError::InvalidDays(format!(
                "must simulate at most {} days",
                MAX_DAYS
            )));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid day count
    #[error("Invalid day count: {0}")]
    InvalidDays(String),
}

/// Generator holding one sampling distribution per workout field
pub struct WorkoutGenerator {
    config: GeneratorConfig,
    distance_meters: Uniform<u32>,
    duration_minutes: Uniform<u32>,
    avg_pace: Uniform<f64>,
    max_heart_rate: Uniform<u32>,
    calories_burned: Uniform<u32>,
    stroke_rate: Uniform<u32>,
}

impl WorkoutGenerator {
    /// Create a generator with realistic ranges for a recreational rower
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            distance_meters: Uniform::new(2000, 10_000),
            duration_minutes: Uniform::new(20, 60),
            avg_pace: Uniform::new(1.8, 2.5),
            max_heart_rate: Uniform::new(140, 190),
            calories_burned: Uniform::new(200, 600),
            stroke_rate: Uniform::new(18, 32),
        }
    }

    /// Generate the synthetic log, one record per day in chronological
    /// order with the most recent session dated today
    pub fn generate(&self) -> WorkoutLog {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let today = Local::now().date_naive();

        let mut log = WorkoutLog::new();
        for offset in (0..self.config.days).rev() {
            let date = today - Duration::days(offset as i64);
            log.add(self.sample_session(date, &mut rng));
        }
        log
    }

    fn sample_session(&self, date: NaiveDate, rng: &mut StdRng) -> WorkoutRecord {
        WorkoutRecord {
            date,
            distance_meters: self.distance_meters.sample(rng),
            duration_minutes: self.duration_minutes.sample(rng),
            avg_pace_min_per_500m: self.avg_pace.sample(rng),
            max_heart_rate: self.max_heart_rate.sample(rng),
            calories_burned: self.calories_burned.sample(rng),
            stroke_rate: self.stroke_rate.sample(rng),
            week: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.days, 30);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_days() {
        let config = GeneratorConfig::new(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_oversized_days() {
        assert!(GeneratorConfig::new(MAX_DAYS).validate().is_ok());
        assert!(GeneratorConfig::new(MAX_DAYS + 1).validate().is_err());
        assert!(GeneratorConfig::new(usize::MAX).validate().is_err());
    }

    #[test]
    fn test_generates_one_record_per_day() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let log = generator.generate();
        assert_eq!(log.len(), 30);
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let first = generator.generate();
        let second = generator.generate();
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = WorkoutGenerator::new(GeneratorConfig::default()).generate();
        let b = WorkoutGenerator::new(GeneratorConfig::default().with_seed(7)).generate();

        let distances_a: Vec<u32> = a.iter().map(|r| r.distance_meters).collect();
        let distances_b: Vec<u32> = b.iter().map(|r| r.distance_meters).collect();
        assert_ne!(distances_a, distances_b);
    }

    #[test]
    fn test_fields_stay_in_range() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        for record in generator.generate().iter() {
            assert!((2000..10_000).contains(&record.distance_meters));
            assert!((20..60).contains(&record.duration_minutes));
            assert!(record.avg_pace_min_per_500m >= 1.8 && record.avg_pace_min_per_500m < 2.5);
            assert!((140..190).contains(&record.max_heart_rate));
            assert!((200..600).contains(&record.calories_burned));
            assert!((18..32).contains(&record.stroke_rate));
            assert_eq!(record.week, None);
        }
    }

    #[test]
    fn test_dates_ascend_and_end_today() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let log = generator.generate();
        let records = log.records();

        for pair in records.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert_eq!(records[records.len() - 1].date, Local::now().date_naive());
    }
}
