use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::schedule::{phase::PhaseWindow, plan::Schedule};

/// Human-readable report printed after a successful write.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub path: PathBuf,
    pub total_duration: f64,
    pub phases: [PhaseWindow; 4],
    /// SHA-256 of the written document, lowercase hex.
    pub digest: String,
}

impl Summary {
    pub fn new(schedule: &Schedule, path: &Path, digest: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            total_duration: schedule.total_duration(),
            phases: *schedule.phases(),
            digest: digest.into(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SVG animation saved to {}", self.path.display())?;
        writeln!(
            f,
            "Total animation duration (cycle): {:.2} seconds",
            self.total_duration
        )?;
        writeln!(f)?;
        writeln!(f, "Animation phases:")?;
        for w in &self.phases {
            writeln!(
                f,
                "Phase {} ({:.2}s - {:.2}s): {}",
                w.phase.number(),
                w.start,
                w.end(),
                w.phase.description()
            )?;
        }
        write!(f, "sha256: {}", self.digest)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/summary.rs"]
mod tests;
