//! Reconciliation tunables.
//!
//! The matching threshold and coordinate tolerance were tuned
//! empirically against live provider data, so they are configuration
//! rather than hard-coded literals. Defaults match the tuned values;
//! env vars override them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Tunable parameters of the reconciliation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconConfig {
    /// Two hits are title-compatible when their bigram Dice
    /// similarity is strictly greater than this. Range [0, 1].
    pub title_similarity_threshold: f64,
    /// Per-axis coordinate tolerance in degrees (~111 m per 0.001 at
    /// the equator). Axis-aligned box, not a radius.
    pub coord_tolerance_degrees: f64,
    /// Platform-only promotional category names (normalized form)
    /// dropped during menu merges. Explicit list, never inferred.
    pub excluded_categories: Vec<String>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            title_similarity_threshold: 0.5,
            coord_tolerance_degrees: 0.001,
            excluded_categories: vec!["picked for you".to_owned()],
        }
    }
}

impl ReconConfig {
    /// Load configuration from environment variables, after loading
    /// `.env` files. Unset vars keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set var fails to parse or is out of
    /// range.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        build_recon_config(|key| std::env::var(key))
    }
}

/// Build a [`ReconConfig`] using the provided env-var lookup.
///
/// The parsing/validation logic is decoupled from the actual
/// environment so tests can drive it with a plain closure — no
/// `set_var`/`remove_var` needed.
pub fn build_recon_config<F>(lookup: F) -> Result<ReconConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut config = ReconConfig::default();

    let parse_f64 = |var: &str, raw: &str| -> Result<f64, ConfigError> {
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_owned(),
            reason: e.to_string(),
        })
    };

    let var = "MEALMUX_SIMILARITY_THRESHOLD";
    if let Ok(raw) = lookup(var) {
        let value = parse_f64(var, &raw)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: format!("{value} is outside [0, 1]"),
            });
        }
        config.title_similarity_threshold = value;
    }

    let var = "MEALMUX_COORD_TOLERANCE_DEG";
    if let Ok(raw) = lookup(var) {
        let value = parse_f64(var, &raw)?;
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: format!("{value} is not positive"),
            });
        }
        config.coord_tolerance_degrees = value;
    }

    let var = "MEALMUX_EXCLUDED_CATEGORIES";
    if let Ok(raw) = lookup(var) {
        config.excluded_categories = raw
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
    }

    Ok(config)
}
