use serde::{Deserialize, Serialize};

use crate::MatchState;

/// Something the physics/rendering layer observed that matters to the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// The current player released the cue and hit the cue ball.
    CueBallStruck,
    /// Every ball on the table has come to rest.
    MotionSettled,
    /// A colored ball entered a hole.
    BallPotted,
}

impl MatchState {
    /// Forwards an event to the matching transition.
    pub fn apply(&mut self, event: MatchEvent) {
        match event {
            MatchEvent::CueBallStruck => self.record_cue_ball_struck(),
            MatchEvent::MotionSettled => {
                self.attempt_turn_switch();
            }
            MatchEvent::BallPotted => self.record_score(),
        }
    }
}
