use serde::{Deserialize, Serialize};

/// Identifies which player a [`Turn`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOwner {
    Player1,
    Player2,
}

impl TurnOwner {
    /// The owner of the turn that follows this one.
    pub fn other(self) -> Self {
        match self {
            TurnOwner::Player1 => TurnOwner::Player2,
            TurnOwner::Player2 => TurnOwner::Player1,
        }
    }
}

impl std::fmt::Display for TurnOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOwner::Player1 => write!(f, "player 1"),
            TurnOwner::Player2 => write!(f, "player 2"),
        }
    }
}

/// Where the current turn is in its strike-then-settle cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// The owner has not struck the cue ball yet.
    AwaitingStrike,
    /// The cue ball was struck; the turn ends once motion settles.
    Struck,
}

/// The record of one turn. Turns are never removed from a match, so the
/// sequence of turns doubles as the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    owner: TurnOwner,
    /// Colored balls potted during this turn.
    pub amount_scored: u32,
    pub has_hit_cue_ball: bool,
}

impl Turn {
    pub fn new(owner: TurnOwner) -> Self {
        Self {
            owner,
            amount_scored: 0,
            has_hit_cue_ball: false,
        }
    }

    pub fn owner(&self) -> TurnOwner {
        self.owner
    }

    pub fn phase(&self) -> TurnPhase {
        if self.has_hit_cue_ball {
            TurnPhase::Struck
        } else {
            TurnPhase::AwaitingStrike
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_owner() {
        assert_eq!(TurnOwner::Player1.other(), TurnOwner::Player2);
        assert_eq!(TurnOwner::Player2.other(), TurnOwner::Player1);
        assert_eq!(TurnOwner::Player1.other().other(), TurnOwner::Player1);
    }

    #[test]
    fn new_turn_awaits_strike() {
        let mut turn = Turn::new(TurnOwner::Player2);
        assert_eq!(turn.owner(), TurnOwner::Player2);
        assert_eq!(turn.amount_scored, 0);
        assert_eq!(turn.phase(), TurnPhase::AwaitingStrike);
        turn.has_hit_cue_ball = true;
        assert_eq!(turn.phase(), TurnPhase::Struck);
    }
}
