use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sinuca::{MatchState, Player};

use crate::ConfigError;

fn default_amount_of_colored_balls() -> u32 {
    15
}

/// Who plays, and with how many colored balls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub player_1: String,
    /// Omit for a match against nobody.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_2: Option<String>,
    #[serde(default = "default_amount_of_colored_balls")]
    pub amount_of_colored_balls: u32,
}

impl MatchConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open match config '{}'", path.display()))?;
        let config: MatchConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse match config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_1.trim().is_empty() {
            return Err(ConfigError::EmptyPlayerName);
        }
        if self.amount_of_colored_balls == 0 {
            return Err(ConfigError::NoColoredBalls);
        }
        Ok(())
    }

    pub fn new_match(&self) -> MatchState {
        MatchState::new(
            Player::new(&self.player_1),
            self.player_2.as_deref().map(Player::new),
            self.amount_of_colored_balls,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"player_1": "Migge"}"#).unwrap();
        assert_eq!(config.player_2, None);
        assert_eq!(config.amount_of_colored_balls, 15);
        assert_eq!(config.validate(), Ok(()));

        let state = config.new_match();
        assert!(state.player2().is_none());
        assert_eq!(state.amount_of_colored_balls(), 15);
    }

    #[test]
    fn parse_two_players() {
        let config: MatchConfig = serde_json::from_str(
            r#"{"player_1": "Migge", "player_2": "Piku", "amount_of_colored_balls": 3}"#,
        )
        .unwrap();
        let state = config.new_match();
        assert_eq!(state.player2().map(|p| p.name.as_str()), Some("Piku"));
        assert_eq!(state.amount_of_colored_balls(), 3);
    }

    #[test]
    fn validation() {
        let mut config = MatchConfig {
            player_1: String::from("  "),
            player_2: None,
            amount_of_colored_balls: 15,
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyPlayerName));
        config.player_1 = String::from("Migge");
        config.amount_of_colored_balls = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoColoredBalls));
    }
}
