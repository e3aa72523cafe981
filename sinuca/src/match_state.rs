use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{Player, Snapshot, Turn, TurnOwner};

/// The scoring and turn state of one match.
///
/// The surrounding physics/rendering layer drives it with three events: the cue
/// ball was struck ([`record_cue_ball_struck()`](Self::record_cue_ball_struck)),
/// all balls came to rest ([`attempt_turn_switch()`](Self::attempt_turn_switch))
/// and a colored ball fell into a hole ([`record_score()`](Self::record_score)).
///
/// The match does not reject events that arrive after it is over. Scoring
/// after that point still counts towards [`balls_in_hole()`](Self::balls_in_hole),
/// so callers should stop forwarding events once [`is_match_over()`](Self::is_match_over)
/// returns true.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    player1: Player,
    /// `None` when there is no second competitor.
    player2: Option<Player>,
    amount_of_colored_balls: u32,
    balls_in_hole: u32,
    finished_turns: Vec<Turn>,
    current_turn: Turn,
}

impl MatchState {
    /// Starts a match. Player 1 owns the first turn.
    pub fn new(player1: Player, player2: Option<Player>, amount_of_colored_balls: u32) -> Self {
        Self {
            player1,
            player2,
            amount_of_colored_balls,
            balls_in_hole: 0,
            finished_turns: Vec::new(),
            current_turn: Turn::new(TurnOwner::Player1),
        }
    }

    pub fn player1(&self) -> &Player {
        &self.player1
    }

    pub fn player2(&self) -> Option<&Player> {
        self.player2.as_ref()
    }

    pub fn amount_of_colored_balls(&self) -> u32 {
        self.amount_of_colored_balls
    }

    /// Colored balls potted so far, by either player.
    pub fn balls_in_hole(&self) -> u32 {
        self.balls_in_hole
    }

    pub fn balls_remaining(&self) -> u32 {
        self.amount_of_colored_balls
            .saturating_sub(self.balls_in_hole)
    }

    pub fn current_turn(&self) -> &Turn {
        &self.current_turn
    }

    /// All turns in chronological order. The last one is the current turn.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> + '_ {
        self.finished_turns
            .iter()
            .chain(std::iter::once(&self.current_turn))
    }

    pub fn turn_count(&self) -> usize {
        self.finished_turns.len() + 1
    }

    pub fn record_cue_ball_struck(&mut self) {
        trace!(owner = %self.current_turn.owner(), "Cue ball struck");
        self.current_turn.has_hit_cue_ball = true;
    }

    /// Passes the turn to the other player, but only if the current owner has
    /// struck the cue ball. Returns whether the turn was switched.
    ///
    /// Call this only once all balls have settled.
    pub fn attempt_turn_switch(&mut self) -> bool {
        if !self.current_turn.has_hit_cue_ball {
            return false;
        }
        let next_turn = Turn::new(self.current_turn.owner().other());
        let finished = std::mem::replace(&mut self.current_turn, next_turn);
        debug!(
            finished = %finished.owner(),
            amount_scored = finished.amount_scored,
            next = %self.current_turn.owner(),
            "Turn switched"
        );
        self.finished_turns.push(finished);
        true
    }

    /// Credits one potted colored ball to the owner of the current turn.
    ///
    /// If player 2 owns the turn but there is no player 2, nobody's score
    /// changes, yet the ball still counts towards [`balls_in_hole()`](Self::balls_in_hole).
    pub fn record_score(&mut self) {
        if self.is_match_over() {
            warn!(
                balls_in_hole = self.balls_in_hole,
                amount_of_colored_balls = self.amount_of_colored_balls,
                "Ball potted after the match was over"
            );
        }
        self.current_turn.amount_scored += 1;
        match self.current_turn.owner() {
            TurnOwner::Player1 => self.player1.increase_score(),
            TurnOwner::Player2 => {
                if let Some(player2) = &mut self.player2 {
                    player2.increase_score();
                }
            }
        }
        self.balls_in_hole += 1;
        debug!(
            owner = %self.current_turn.owner(),
            balls_in_hole = self.balls_in_hole,
            "Ball potted"
        );
    }

    pub fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            player1_name: self.player1.name.clone(),
            player1_score: self.player1.score(),
            player2_name: self
                .player2
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            player2_score: self.player2.as_ref().map_or(0, Player::score),
            current_owner: self.current_turn.owner(),
        }
    }

    /// True once every colored ball has been potted.
    pub fn is_match_over(&self) -> bool {
        self.balls_in_hole >= self.amount_of_colored_balls
    }
}
