//! Configuration for the slash composer

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Result, SlashError};

/// Composer configuration
///
/// The defaults reproduce the bare slash product: no vertex cap, with the
/// output size checked against the closed-form count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlashConfig {
    /// Upper bound on the vertex count of any produced graph
    pub max_vertices: Option<usize>,
    /// Fraction of `max_vertices` past which a warning is logged
    pub warn_fraction: f64,
    /// Re-check the vertex count of every output against the formula
    pub verify_counts: bool,
}

impl Default for SlashConfig {
    fn default() -> Self {
        SlashConfig {
            max_vertices: None,
            warn_fraction: 0.9,
            verify_counts: true,
        }
    }
}

impl SlashConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the vertex count of produced graphs
    pub fn with_max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = Some(limit);
        self
    }

    /// Set the warning threshold as a fraction of the cap
    pub fn with_warn_fraction(mut self, fraction: f64) -> Self {
        self.warn_fraction = fraction;
        self
    }

    /// Enable or disable output count verification
    pub fn with_verify_counts(mut self, verify: bool) -> Self {
        self.verify_counts = verify;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.warn_fraction) {
            return Err(SlashError::InvalidArgument(format!(
                "warn_fraction must be in [0, 1], got {}",
                self.warn_fraction
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SlashConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check a prospective vertex count against the cap
    pub(crate) fn check_vertex_budget(&self, requested: usize) -> Result<()> {
        let Some(limit) = self.max_vertices else {
            return Ok(());
        };

        if requested > limit {
            return Err(SlashError::VertexLimitExceeded { requested, limit });
        }
        if requested as f64 >= limit as f64 * self.warn_fraction {
            tracing::warn!(requested, limit, "vertex count is close to the configured cap");
        }
        Ok(())
    }
}
