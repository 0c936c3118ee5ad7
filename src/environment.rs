//! Build environment detection
//!
//! The analyzer is meant to be launched through Cargo so that it runs out
//! of the project's own build directory rather than from a stray copy of
//! the binary.

use std::env;
use std::path::Path;

/// Check whether the running executable lives in the Cargo build
/// directory, printing the verdict and a launch hint when it does not.
///
/// Returns `false` when the caller should stop early.
pub fn check() -> bool {
    let exe = match env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("could not resolve executable path: {}", e);
            println!("⚠️  Could not determine the executable path");
            return false;
        }
    };

    let target_override = env::var_os("CARGO_TARGET_DIR");
    if in_build_dir(&exe, target_override.as_deref().map(Path::new)) {
        println!("✅ Running from the Cargo build directory");
        println!("📍 Executable: {}", exe.display());
        true
    } else {
        println!("⚠️  Not running from the Cargo build directory");
        println!("💡 Launch with: cargo run --release");
        false
    }
}

/// The executable counts as in-tree when its path has a `target`
/// component, or sits under `CARGO_TARGET_DIR` when that is set.
fn in_build_dir(exe: &Path, target_override: Option<&Path>) -> bool {
    if let Some(dir) = target_override {
        if exe.starts_with(dir) {
            return true;
        }
    }
    exe.components().any(|c| c.as_os_str() == "target")
}
