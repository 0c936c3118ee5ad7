//! Rowing workout data analyzer
//!
//! Generates a synthetic month of rowing sessions with a seeded RNG,
//! computes summary statistics and weekly distance totals, renders a
//! four-panel chart, and exports the dataset as CSV.
//!
//! # Architecture
//!
//! - **Generator**: seeded synthetic dataset production
//! - **Metrics**: the workout log and its aggregation
//! - **Visualization**: plotters-based dashboard rendering
//! - **Output**: tabular export
//!
//! # Example
//!
//! ```rust,no_run
//! use rowing_analyzer::{GeneratorConfig, WorkoutGenerator};
//!
//! let generator = WorkoutGenerator::new(GeneratorConfig::default());
//! let mut log = generator.generate();
//! log.label_weeks();
//!
//! let summary = log.aggregate();
//! println!("total distance: {:.1} km", summary.total_distance_km);
//! ```

pub mod cli;
pub mod environment;
pub mod generator;
pub mod metrics;
pub mod output;
pub mod visualization;

// Re-export commonly used types
pub use generator::{GeneratorConfig, WorkoutGenerator};
pub use metrics::{WorkoutLog, WorkoutRecord, WorkoutSummary};
pub use output::CsvExporter;
pub use visualization::WorkoutDashboard;
