use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    core::{Point, ensure_finite, ensure_ident},
    error::{TriAnimError, TriAnimResult},
};

/// Largest accepted level count.
pub const MAX_COUNT: u32 = 1024;

/// Input parameters for one generated sequence.
///
/// Every field has a default, so a JSON file only needs to name the values it
/// changes. Construct with [`AnimationConfig::default`] and adjust, or load
/// with [`AnimationConfig::from_json_path`]; call [`AnimationConfig::validate`]
/// (or let [`crate::compute_schedule`] do it) before use.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of nested levels (N). Must be in `2..=MAX_COUNT`.
    pub count: u32,
    /// Translation of the root group.
    pub placement: Point,
    /// Uniform scale of the root group.
    pub overall_scale: f64,
    /// Seconds before the first build-in step.
    pub base_delay: f64,
    /// Seconds per step, shared by every phase.
    pub base_duration: f64,
    /// Per-level scale multiplier.
    pub scale_factor: f64,
    /// Per-level rotation in degrees.
    pub rotation_increment: f64,
    /// Name used in `{{define "…"}}`.
    pub template_name: String,
    /// Fragment id of the referenced shape (`href="#…"`).
    pub shape_href: String,
    /// Id of the loop clock every directive is timed against.
    pub clock_id: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            count: 6,
            placement: Point::new(905.0, 700.0),
            overall_scale: 0.7,
            base_delay: 0.35,
            base_duration: 0.8,
            scale_factor: 0.75,
            rotation_increment: 12.0,
            template_name: "tri_anim".to_string(),
            shape_href: "tri".to_string(),
            clock_id: "clock".to_string(),
        }
    }
}

impl AnimationConfig {
    /// Load a (possibly partial) config from a JSON file.
    pub fn from_json_path(path: &Path) -> TriAnimResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| TriAnimError::serde(format!("parse config '{}': {e}", path.display())))
    }

    /// Parse a (possibly partial) config from a JSON string.
    pub fn from_json_str(s: &str) -> TriAnimResult<Self> {
        serde_json::from_str(s).map_err(|e| TriAnimError::serde(format!("parse config: {e}")))
    }

    pub fn validate(&self) -> TriAnimResult<()> {
        if self.count < 2 {
            return Err(TriAnimError::invalid_config(format!(
                "count must be >= 2 (got {})",
                self.count
            )));
        }
        if self.count > MAX_COUNT {
            return Err(TriAnimError::invalid_config(format!(
                "count must be <= {MAX_COUNT} (got {})",
                self.count
            )));
        }

        ensure_finite("placement.x", self.placement.x)?;
        ensure_finite("placement.y", self.placement.y)?;
        ensure_finite("overall_scale", self.overall_scale)?;
        ensure_finite("base_delay", self.base_delay)?;
        ensure_finite("base_duration", self.base_duration)?;
        ensure_finite("scale_factor", self.scale_factor)?;
        ensure_finite("rotation_increment", self.rotation_increment)?;

        if self.overall_scale <= 0.0 {
            return Err(TriAnimError::invalid_config("overall_scale must be > 0"));
        }
        if self.base_delay < 0.0 {
            return Err(TriAnimError::invalid_config("base_delay must be >= 0"));
        }
        if self.base_duration <= 0.0 {
            return Err(TriAnimError::invalid_config("base_duration must be > 0"));
        }
        if self.scale_factor <= 0.0 {
            return Err(TriAnimError::invalid_config("scale_factor must be > 0"));
        }

        ensure_ident("template_name", &self.template_name)?;
        ensure_ident("shape_href", &self.shape_href)?;
        ensure_ident("clock_id", &self.clock_id)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/config.rs"]
mod tests;
