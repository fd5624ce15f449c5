//! Model configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What to do when a mine code names a hero that is not in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownOwnerPolicy {
    /// Decode the mine as unclaimed and log a warning.
    ///
    /// Every unknown id maps to `None`, so a mine going from `$7` to `$8`
    /// keeps the same (absent) owner even though its code changed.
    #[default]
    Unclaimed,
    /// Fail the build or advance with `WorldModelError::UnknownOwner`.
    Reject,
}

/// How `advance` treats the controlling hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerPolicy {
    /// Keep the hero from the previous model. It goes stale as the hero moves;
    /// look the hero up by id for current facts.
    #[default]
    CarryForward,
    /// Take the controlling hero from the new snapshot.
    Refresh,
}

/// Configuration for building and advancing a [`crate::WorldModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub unknown_owner: UnknownOwnerPolicy,
    pub controller: ControllerPolicy,
}

impl ModelConfig {
    /// Configuration that rejects unknown mine owners and refreshes the
    /// controlling hero every turn.
    pub fn strict() -> Self {
        Self {
            unknown_owner: UnknownOwnerPolicy::Reject,
            controller: ControllerPolicy::Refresh,
        }
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// ```toml
    /// unknown_owner = "reject"
    /// controller = "refresh"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldModelError;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert_eq!(config.unknown_owner, UnknownOwnerPolicy::Unclaimed);
        assert_eq!(config.controller, ControllerPolicy::CarryForward);
    }

    #[test]
    fn test_from_toml() {
        let config = ModelConfig::from_toml_str(
            r#"
            unknown_owner = "reject"
            controller = "refresh"
            "#,
        )
        .unwrap();
        assert_eq!(config, ModelConfig::strict());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ModelConfig::from_toml_str("controller = \"refresh\"").unwrap();
        assert_eq!(config.unknown_owner, UnknownOwnerPolicy::Unclaimed);
        assert_eq!(config.controller, ControllerPolicy::Refresh);

        assert_eq!(ModelConfig::from_toml_str("").unwrap(), ModelConfig::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = ModelConfig::from_toml_str("unknown_owner = \"ignore\"").unwrap_err();
        assert!(matches!(err, WorldModelError::Config(_)));
    }
}
