//! # Force model descriptors
//!
//! [`ModelKind`] selects a force model from configuration. It can be written as a short
//! descriptor string or embedded in a serde document:
//!
//! | descriptor            | model                                        |
//! |-----------------------|----------------------------------------------|
//! | `null`                | [`NullModel`]                                |
//! | `kepler`              | [`KeplerModel`] with `μ = 1` (normalized)    |
//! | `kepler:gauss`        | [`KeplerModel`] with `μ = k²` (AU, days)     |
//! | `kepler:mu=<value>`   | [`KeplerModel`] with the given positive `μ`  |
//!
//! Keywords are case-insensitive and surrounding whitespace is ignored.
//!
//! ```rust
//! use twobody::force_model::ModelKind;
//!
//! let kind: ModelKind = "kepler:mu=398600.4418".parse().unwrap();
//! assert_eq!(kind, ModelKind::Kepler { mu: 398600.4418 });
//! assert_eq!(kind.to_string(), "kepler:mu=398600.4418");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::{
    constants::{GAUSS_GRAV_SQUARED, NORMALIZED_MU},
    force_model::{ForceModel, KeplerModel, NullModel},
    model_errors::ModelError,
};

/// Runtime selection of a force model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum ModelKind {
    /// Force-free placeholder, see [`NullModel`].
    Null,
    /// Two-body point-mass gravity with parameter `mu`, see [`KeplerModel`].
    Kepler {
        #[serde(deserialize_with = "deserialize_mu")]
        mu: f64,
    },
}

/// Reject the same `mu` values as the descriptor parser.
fn deserialize_mu<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let mu = f64::deserialize(deserializer)?;

    KeplerModel::try_with_mu(mu)
        .map(|model| model.mu())
        .map_err(serde::de::Error::custom)
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Kepler { mu: NORMALIZED_MU }
    }
}

impl ModelKind {
    /// Instantiate the described model behind a thread-safe trait object.
    pub fn build(&self) -> Box<dyn ForceModel + Send + Sync> {
        debug!(kind = %self, "building force model");
        match *self {
            ModelKind::Null => Box::new(NullModel),
            ModelKind::Kepler { mu } => Box::new(KeplerModel::with_mu(mu)),
        }
    }
}

fn parse_kepler_option(option: &str) -> Result<f64, ModelError> {
    if option.eq_ignore_ascii_case("gauss") {
        return Ok(GAUSS_GRAV_SQUARED);
    }

    let Some((key, value)) = option.split_once('=') else {
        return Err(ModelError::InvalidModelSpec(format!(
            "unknown kepler option: {option}"
        )));
    };

    if !key.trim().eq_ignore_ascii_case("mu") {
        return Err(ModelError::InvalidModelSpec(format!(
            "unknown kepler option: {}",
            key.trim()
        )));
    }

    let mu = value.trim().parse::<f64>().map_err(|e| {
        ModelError::InvalidModelSpec(format!("cannot parse mu from {:?}: {e}", value.trim()))
    })?;

    KeplerModel::try_with_mu(mu).map(|model| model.mu())
}

impl FromStr for ModelKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, option) = match s.split_once(':') {
            Some((name, option)) => (name.trim(), Some(option.trim())),
            None => (s, None),
        };

        match (name.to_ascii_lowercase().as_str(), option) {
            ("null", None) => Ok(ModelKind::Null),
            ("kepler", None) => Ok(ModelKind::Kepler { mu: NORMALIZED_MU }),
            ("kepler", Some(option)) => Ok(ModelKind::Kepler {
                mu: parse_kepler_option(option)?,
            }),
            _ => Err(ModelError::InvalidModelSpec(format!(
                "Invalid force model: {s}"
            ))),
        }
    }
}

impl TryFrom<&str> for ModelKind {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModelKind::Null => write!(f, "null"),
            ModelKind::Kepler { mu } if mu == NORMALIZED_MU => write!(f, "kepler"),
            ModelKind::Kepler { mu } if mu == GAUSS_GRAV_SQUARED => write!(f, "kepler:gauss"),
            ModelKind::Kepler { mu } => write!(f, "kepler:mu={mu}"),
        }
    }
}
