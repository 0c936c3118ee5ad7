//! CLI argument parsing and the analysis pipeline

use crate::environment;
use crate::generator::{GeneratorConfig, WorkoutGenerator};
use crate::metrics::WorkoutSummary;
use crate::output::CsvExporter;
use crate::visualization::WorkoutDashboard;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

/// File name of the rendered chart inside the output directory
const CHART_FILE: &str = "workout_analysis.png";

/// File name of the tabular export inside the output directory
const CSV_FILE: &str = "sample_workout_data.csv";

/// Generate a month of synthetic rowing workouts and analyze them
#[derive(Parser, Debug)]
#[command(name = "rowing-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory the chart and CSV are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Seed for the synthetic dataset
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Number of days to simulate
    #[arg(long, default_value = "30")]
    pub days: usize,
}

impl Cli {
    /// Run the analysis pipeline
    pub fn run(&self) -> Result<()> {
        tracing::info!("Starting rowing workout analyzer");

        println!("\n{}", "=".repeat(70));
        println!("   🚣 Rowing Workout Analyzer");
        println!("{}", "=".repeat(70));
        println!();

        // 1. Environment check, stop early (but cleanly) outside the build dir
        if !environment::check() {
            return Ok(());
        }

        // 2. Generate the synthetic dataset
        println!("\n📊 Generating sample workout data...");
        let config = GeneratorConfig::new(self.days).with_seed(self.seed);
        config.validate()?;
        let generator = WorkoutGenerator::new(config);
        let mut log = generator.generate();
        log.label_weeks();
        tracing::info!("Generated {} workout records", log.len());

        // 3. Print the report
        let summary = log.aggregate();
        self.print_report(&summary);

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory: {}", self.output_dir))?;

        // 4. Render the chart, a failure here never aborts the run
        println!("\n📈 Creating visualization...");
        let chart_path = format!("{}/{}", self.output_dir, CHART_FILE);
        match WorkoutDashboard::render(&log, &chart_path) {
            Ok(()) => println!("📊 Visualization saved as '{}'", chart_path),
            Err(e) => {
                tracing::warn!("chart rendering failed: {:#}", e);
                println!("⚠️  Could not create visualization: {}", e);
            }
        }

        // 5. Persist the dataset
        let csv_path = format!("{}/{}", self.output_dir, CSV_FILE);
        CsvExporter::export(&log, &csv_path)
            .with_context(|| format!("Failed to export CSV to: {}", csv_path))?;
        println!("💾 Sample data saved as '{}'", csv_path);

        println!("\n✅ Analysis complete!");
        Ok(())
    }

    /// Print the summary report
    fn print_report(&self, summary: &WorkoutSummary) {
        println!("\n📊 Workout Analysis Report");
        println!("{}", "=".repeat(50));
        println!("📈 Total workouts: {}", summary.total_workouts);
        println!("🏃 Total distance: {:.1} km", summary.total_distance_km);
        println!("⏱️  Total time: {:.1} hours", summary.total_duration_hours);
        println!("🔥 Total calories: {}", summary.total_calories);

        println!("\n📈 Performance Trends:");
        println!(
            "  Average pace: {:.2} min/500m",
            summary.avg_pace_min_per_500m
        );
        println!("  Best pace: {:.2} min/500m", summary.best_pace_min_per_500m);
        println!("  Average stroke rate: {:.1} spm", summary.avg_stroke_rate);

        println!("\n📅 Weekly Progress:");
        for (week, meters) in &summary.weekly_distance_m {
            println!("  Week {}: {:.1} km", week, *meters as f64 / 1000.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn cli_for(dir: &Path) -> Cli {
        Cli {
            output_dir: dir.to_str().unwrap().to_string(),
            seed: 42,
            days: 30,
        }
    }

    #[test]
    fn test_run_writes_both_artifacts() {
        let dir = tempdir().unwrap();
        let cli = cli_for(dir.path());
        cli.run().unwrap();

        let chart = dir.path().join(CHART_FILE);
        let csv = dir.path().join(CSV_FILE);
        assert!(chart.exists());
        assert!(csv.exists());

        let contents = fs::read_to_string(csv).unwrap();
        assert_eq!(contents.lines().count(), 31); // header plus 30 records
    }

    #[test]
    fn test_run_survives_chart_failure() {
        let dir = tempdir().unwrap();
        // A directory squatting on the chart path makes rendering fail
        fs::create_dir(dir.path().join(CHART_FILE)).unwrap();

        let cli = cli_for(dir.path());
        cli.run().unwrap();

        assert!(dir.path().join(CSV_FILE).exists());
        assert!(dir.path().join(CHART_FILE).is_dir());
    }

    #[test]
    fn test_run_rejects_zero_days() {
        let dir = tempdir().unwrap();
        let mut cli = cli_for(dir.path());
        cli.days = 0;
        assert!(cli.run().is_err());
    }

    #[test]
    fn test_run_rejects_oversized_days() {
        let dir = tempdir().unwrap();
        let mut cli = cli_for(dir.path());
        cli.days = usize::MAX;
        assert!(cli.run().is_err());
    }

    #[test]
    fn test_run_creates_missing_output_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports").join("august");
        let cli = cli_for(&nested);
        cli.run().unwrap();

        assert!(nested.join(CSV_FILE).exists());
    }
}
