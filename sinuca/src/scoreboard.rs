use serde::{Deserialize, Serialize};

use crate::TurnOwner;

/// What a scoreboard shows at one moment of the match.
///
/// When there is no player 2, its name is empty and its score is zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player1_name: String,
    pub player1_score: u32,
    pub player2_name: String,
    pub player2_score: u32,
    pub current_owner: TurnOwner,
}

impl Snapshot {
    /// The player with the strictly higher score, or `None` on a tie.
    pub fn leader(&self) -> Option<TurnOwner> {
        match self.player1_score.cmp(&self.player2_score) {
            std::cmp::Ordering::Less => Some(TurnOwner::Player2),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(TurnOwner::Player1),
        }
    }

    pub fn name_of(&self, owner: TurnOwner) -> &str {
        match owner {
            TurnOwner::Player1 => &self.player1_name,
            TurnOwner::Player2 => &self.player2_name,
        }
    }
}

/// Renders the scoreboard line, e.g. `*Migge 3 x 1 Piku`. The asterisk sits
/// on the side of the player whose turn it is.
impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.current_owner == TurnOwner::Player1 {
            write!(f, "*")?;
        }
        write!(
            f,
            "{} {} x {} {}",
            self.player1_name, self.player1_score, self.player2_score, self.player2_name
        )?;
        if self.current_owner == TurnOwner::Player2 {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchState, Player};

    #[test]
    fn scoreboard_marks_current_owner() {
        let mut state = MatchState::new(Player::new("Migge"), Some(Player::new("Piku")), 15);
        state.record_score();
        assert_eq!(state.current_snapshot().to_string(), "*Migge 1 x 0 Piku");
        state.record_cue_ball_struck();
        state.attempt_turn_switch();
        assert_eq!(state.current_snapshot().to_string(), "Migge 1 x 0 Piku*");
    }

    #[test]
    fn scoreboard_without_player_2() {
        let state = MatchState::new(Player::new("Migge"), None, 15);
        assert_eq!(state.current_snapshot().to_string(), "*Migge 0 x 0 ");
    }

    #[test]
    fn leader() {
        let mut snapshot = Snapshot {
            player1_name: String::from("Migge"),
            player1_score: 4,
            player2_name: String::from("Piku"),
            player2_score: 4,
            current_owner: TurnOwner::Player1,
        };
        assert_eq!(snapshot.leader(), None);
        snapshot.player2_score = 5;
        assert_eq!(snapshot.leader(), Some(TurnOwner::Player2));
        assert_eq!(snapshot.name_of(TurnOwner::Player2), "Piku");
        snapshot.player1_score = 9;
        assert_eq!(snapshot.leader(), Some(TurnOwner::Player1));
    }
}
