use serde::{Deserialize, Serialize};

/// A competitor in one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    score: u32,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            score: 0,
        }
    }

    /// The number of colored balls this player has potted.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
