use anyhow::Result;
use common::{Config, ConfigLoader};
use engine::Position;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENV_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    pub env_url: String,
    pub request_timeout_ms: u64,
    pub starting_fen: String,
}

impl PlayerOptions {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn starting_position(&self) -> Position {
        Position::new(self.starting_fen.as_str())
    }
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            env_url: DEFAULT_ENV_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            starting_fen: Position::starting().to_string(),
        }
    }
}

impl Config for PlayerOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            env_url: config
                .get("env_url")
                .and_then(|v| v.as_string())
                .unwrap_or(defaults.env_url),
            request_timeout_ms: config
                .get("request_timeout_ms")
                .and_then(|v| v.as_u64())
                .unwrap_or(defaults.request_timeout_ms),
            starting_fen: config
                .get("starting_fen")
                .and_then(|v| v.as_string())
                .unwrap_or(defaults.starting_fen),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = ConfigLoader::without_file("player".to_string()).unwrap();
        let options: PlayerOptions = config.load().unwrap();

        assert_eq!(options.request_timeout(), Duration::from_millis(1000));
        assert_eq!(options.starting_position(), Position::starting());
    }

    #[test]
    fn test_scoped_values() {
        let config = ConfigLoader::from_str(
            r#"
            player {
                request_timeout_ms = 250
                starting_fen = "8/8/8/8/8/8/8/k6K b - - 0 1"
            }
            "#,
            "player".to_string(),
        )
        .unwrap();
        let options: PlayerOptions = config.load().unwrap();

        assert_eq!(options.request_timeout_ms, 250);
        assert_eq!(
            options.starting_position().color(),
            Some(engine::Color::Black)
        );
    }
}
