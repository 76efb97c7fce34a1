use derive_more::{Display, Error, From};
use othello::Weights;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;

/// Which side a leaf position is scored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafPerspective {
    /// Weighted score of whichever player is to move at the leaf.
    #[default]
    SideToMove,
    /// Black's weighted score minus White's.
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root. At least 1, so a decision always has a move.
    #[serde(deserialize_with = "deserialize_depth")]
    pub depth: u8,
    /// Wall-clock budget per decision, in milliseconds.
    pub time_limit_ms: u64,
    pub weights: Weights,
    pub perspective: LeafPerspective,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            time_limit_ms: 5000,
            weights: Weights::default(),
            perspective: LeafPerspective::default(),
        }
    }
}

fn deserialize_depth<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let depth = u8::deserialize(deserializer)?;
    if depth == 0 {
        return Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(0),
            &"a search depth of at least 1",
        ));
    }
    Ok(depth)
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "cannot read config: {}", _0)]
    Io(std::io::Error),
    #[display(fmt = "cannot parse config: {}", _0)]
    Parse(serde_json::Error),
}

impl SearchConfig {
    /// Parse a JSON config. Missing keys keep their default values.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::load_from_json(&contents)?)
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = SearchConfig::load_from_json("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.depth, 4);
        assert_eq!(config.time_limit(), Duration::from_secs(5));
        assert_eq!(config.weights.corner, 10);
        assert_eq!(config.perspective, LeafPerspective::SideToMove);
    }

    #[test]
    fn test_load_config_partial() {
        let json = r#"{
            "depth": 2,
            "weights": { "corner": 25 }
        }"#;
        let config = SearchConfig::load_from_json(json).unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.weights.corner, 25);
        // Others should be default
        assert_eq!(config.weights.edge, 5);
        assert_eq!(config.weights.interior, 1);
        assert_eq!(config.time_limit_ms, 5000);
    }

    #[test]
    fn test_load_config_full() {
        let json = r#"{
            "depth": 6,
            "time_limit_ms": 250,
            "weights": { "corner": 30, "edge": 4, "interior": -1 },
            "perspective": "balance"
        }"#;
        let config = SearchConfig::load_from_json(json).unwrap();
        assert_eq!(config.depth, 6);
        assert_eq!(config.time_limit(), Duration::from_millis(250));
        assert_eq!(
            config.weights,
            Weights {
                corner: 30,
                edge: 4,
                interior: -1
            }
        );
        assert_eq!(config.perspective, LeafPerspective::Balance);
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(SearchConfig::load_from_json("{ invalid json }").is_err());
        assert!(SearchConfig::load_from_json(r#"{ "perspective": "white" }"#).is_err());
        assert!(SearchConfig::load_from_json(r#"{ "depth": -1 }"#).is_err());
    }

    #[test]
    fn test_load_config_zero_depth() {
        let err = SearchConfig::load_from_json(r#"{ "depth": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        assert_eq!(SearchConfig::load_from_json(r#"{ "depth": 1 }"#).unwrap().depth, 1);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = SearchConfig::load_from_file("/nonexistent/othello-search.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SearchConfig {
            depth: 3,
            perspective: LeafPerspective::Balance,
            ..SearchConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SearchConfig::load_from_json(&json).unwrap(), config);
    }
}
