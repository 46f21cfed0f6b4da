//! Sensitivity engine configuration.
//!
//! Sources, lowest to highest priority:
//! 1. Defaults
//! 2. TOML file
//! 3. Environment variables (`PRICER_RISK_*`)
//!
//! ```toml
//! forward_relative_shift = 0.01
//! rate_shift = 0.01
//! vega_shift = 0.001
//! node_insertion = "base_plus_shift"
//! parallel_nodes = false
//! ```

use std::path::Path;

use pricer_core::market_data::NodeInsertion;
use serde::{Deserialize, Serialize};

use super::error::SensitivityError;

/// Environment variable overriding `forward_relative_shift`.
pub const ENV_FORWARD_SHIFT: &str = "PRICER_RISK_FORWARD_SHIFT";
/// Environment variable overriding `rate_shift`.
pub const ENV_RATE_SHIFT: &str = "PRICER_RISK_RATE_SHIFT";
/// Environment variable overriding `vega_shift`.
pub const ENV_VEGA_SHIFT: &str = "PRICER_RISK_VEGA_SHIFT";
/// Environment variable overriding `node_insertion`.
pub const ENV_NODE_INSERTION: &str = "PRICER_RISK_NODE_INSERTION";
/// Environment variable overriding `parallel_nodes`.
pub const ENV_PARALLEL_NODES: &str = "PRICER_RISK_PARALLEL_NODES";

/// Default shifts and execution options for the sensitivity engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensitivityConfig {
    /// Relative forward shift for forward delta.
    pub forward_relative_shift: f64,
    /// Shift passed to the forward delta inside discount-rate sensitivity.
    pub rate_shift: f64,
    /// Absolute volatility shift for vega.
    pub vega_shift: f64,
    /// Value given to vega nodes that are not on the surface.
    pub node_insertion: NodeInsertion,
    /// Evaluate vega surface nodes on the rayon pool.
    pub parallel_nodes: bool,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            forward_relative_shift: 0.01,
            rate_shift: 0.01,
            vega_shift: 0.001,
            node_insertion: NodeInsertion::BasePlusShift,
            parallel_nodes: false,
        }
    }
}

impl SensitivityConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative forward shift.
    pub fn with_forward_relative_shift(mut self, shift: f64) -> Self {
        self.forward_relative_shift = shift;
        self
    }

    /// Set the rate shift.
    pub fn with_rate_shift(mut self, shift: f64) -> Self {
        self.rate_shift = shift;
        self
    }

    /// Set the vega shift.
    pub fn with_vega_shift(mut self, shift: f64) -> Self {
        self.vega_shift = shift;
        self
    }

    /// Set the node insertion rule.
    pub fn with_node_insertion(mut self, insertion: NodeInsertion) -> Self {
        self.node_insertion = insertion;
        self
    }

    /// Enable or disable parallel vega nodes.
    pub fn with_parallel_nodes(mut self, parallel: bool) -> Self {
        self.parallel_nodes = parallel;
        self
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, SensitivityError> {
        let config: SensitivityConfig = toml::from_str(content)
            .map_err(|e| SensitivityError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SensitivityError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SensitivityError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build the configuration from all sources.
    ///
    /// Starts from the file when given, otherwise the defaults, then applies
    /// the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, SensitivityError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env_overrides()
    }

    /// Apply `PRICER_RISK_*` variables from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, SensitivityError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Keys are the `PRICER_RISK_*` names. Unparsable values are errors,
    /// not ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, SensitivityError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_FORWARD_SHIFT) {
            self.forward_relative_shift = parse_f64(ENV_FORWARD_SHIFT, &value)?;
        }
        if let Some(value) = lookup(ENV_RATE_SHIFT) {
            self.rate_shift = parse_f64(ENV_RATE_SHIFT, &value)?;
        }
        if let Some(value) = lookup(ENV_VEGA_SHIFT) {
            self.vega_shift = parse_f64(ENV_VEGA_SHIFT, &value)?;
        }
        if let Some(value) = lookup(ENV_NODE_INSERTION) {
            self.node_insertion = parse_node_insertion(&value)?;
        }
        if let Some(value) = lookup(ENV_PARALLEL_NODES) {
            self.parallel_nodes = parse_bool(ENV_PARALLEL_NODES, &value)?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that every shift can build a scenario.
    pub fn validate(&self) -> Result<(), SensitivityError> {
        check_shift("forward_relative_shift", self.forward_relative_shift)?;
        check_shift("rate_shift", self.rate_shift)?;
        check_shift("vega_shift", self.vega_shift)
    }
}

fn check_shift(name: &str, shift: f64) -> Result<(), SensitivityError> {
    if shift.is_finite() && shift > 0.0 {
        Ok(())
    } else {
        Err(SensitivityError::Config(format!(
            "{} must be positive and finite, got {}",
            name, shift
        )))
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64, SensitivityError> {
    value
        .trim()
        .parse()
        .map_err(|_| SensitivityError::Config(format!("{}: not a number: {}", key, value)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SensitivityError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SensitivityError::Config(format!(
            "{}: not a boolean: {}",
            key, value
        ))),
    }
}

fn parse_node_insertion(value: &str) -> Result<NodeInsertion, SensitivityError> {
    match value.trim().to_lowercase().as_str() {
        "base_plus_shift" => Ok(NodeInsertion::BasePlusShift),
        "shift_only" => Ok(NodeInsertion::ShiftOnly),
        _ => Err(SensitivityError::Config(format!(
            "{}: must be base_plus_shift or shift_only, got {}",
            ENV_NODE_INSERTION, value
        ))),
    }
}
