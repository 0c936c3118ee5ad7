//! Chart rendering for the workout dashboard
//!
//! Each panel module draws one chart into a quadrant of a shared bitmap;
//! [`WorkoutDashboard::render`] composes the 2x2 grid and writes the PNG.

mod calories;
mod distance;
mod heart_rate;
mod pace;

use crate::metrics::WorkoutLog;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::fs::{self, File};

/// Output bitmap size in pixels, 3:2 for a large-format raster export
const DASHBOARD_SIZE: (u32, u32) = (3000, 2000);

/// Four-panel dashboard renderer
pub struct WorkoutDashboard;

impl WorkoutDashboard {
    /// Render the dashboard to a PNG file
    ///
    /// An empty log produces no file and is not an error.
    pub fn render(log: &WorkoutLog, path: &str) -> Result<()> {
        if log.is_empty() {
            return Ok(());
        }

        // The bitmap backend defers file I/O to present(), so probe the
        // path up front to fail before anything is drawn
        File::create(path).with_context(|| format!("Cannot write chart to: {}", path))?;

        let drawn = Self::draw_panels(log, path);
        if drawn.is_err() {
            // The backend re-saves on drop, leave no blank or truncated file
            fs::remove_file(path).ok();
        }
        drawn
    }

    fn draw_panels(log: &WorkoutLog, path: &str) -> Result<()> {
        let root = BitMapBackend::new(path, DASHBOARD_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let panels = root.split_evenly((2, 2));
        distance::draw(&panels[0], log)?;
        pace::draw(&panels[1], log)?;
        heart_rate::draw(&panels[2], log)?;
        calories::draw(&panels[3], log)?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GeneratorConfig, WorkoutGenerator};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_png() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let log = generator.generate();

        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        WorkoutDashboard::render(&log, path.to_str().unwrap()).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_render_empty_log_writes_nothing() {
        let log = WorkoutLog::new();

        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        WorkoutDashboard::render(&log, path.to_str().unwrap()).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_render_to_blocked_path_fails() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let log = generator.generate();

        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        fs::create_dir(&path).unwrap();

        assert!(WorkoutDashboard::render(&log, path.to_str().unwrap()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_render_leaves_no_file() {
        let generator = WorkoutGenerator::new(GeneratorConfig::default());
        let log = generator.generate();

        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        // A link to the always-full device lets the path probe succeed
        // while the final save fails
        std::os::unix::fs::symlink("/dev/full", &path).unwrap();

        assert!(WorkoutDashboard::render(&log, path.to_str().unwrap()).is_err());
        assert!(!path.exists());
    }
}
