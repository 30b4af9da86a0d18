use serde::{Deserialize, Serialize};
use std::env;

use crate::consts::{CHECK_ON_CURVE_ENV_VAR, CURVE_ENV_VAR, DEFAULT_CURVE_NAME};

/// Settings shared by every compression a [crate::compress::Compressor] performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionConfig {
    /// Curve name, resolved through [crate::curve::CurveId::from_name].
    pub curve: String,
    /// Reject finite points whose coordinates do not satisfy the curve
    /// equation instead of leaving the sign bit unset.
    pub check_on_curve: bool,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            curve: DEFAULT_CURVE_NAME.to_string(),
            check_on_curve: false,
        }
    }
}

impl CompressionConfig {
    pub fn new(curve: impl Into<String>) -> Self {
        Self {
            curve: curve.into(),
            ..Self::default()
        }
    }

    pub fn with_check_on_curve(mut self, check_on_curve: bool) -> Self {
        self.check_on_curve = check_on_curve;
        self
    }

    /// Defaults overridden by `GROTH16_COMPRESS_CURVE` and
    /// `GROTH16_COMPRESS_CHECK_ON_CURVE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(curve) = lookup(CURVE_ENV_VAR).filter(|c| !c.trim().is_empty()) {
            config.curve = curve;
        }
        if let Some(flag) = lookup(CHECK_ON_CURVE_ENV_VAR) {
            config.check_on_curve = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }
        config
    }
}
