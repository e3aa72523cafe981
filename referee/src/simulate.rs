use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use sinuca::{is_settled, strike_strength, MatchEvent, MAX_HOLD_SECS};
use tracing::trace;

/// Fraction of its speed the cue ball keeps per simulation step.
const FELT_DAMPING: f32 = 0.8;

/// Chance that some colored ball drops during one step of motion.
const POT_CHANCE_PER_STEP: f64 = 0.04;

/// Generates the events a table might report for a whole match, shot by shot,
/// until all `amount_of_colored_balls` are potted.
///
/// This is a stand-in for a physics engine. Every shot holds the cue back for
/// a random time, and the struck ball slows down each step until it counts as
/// settled. While it moves, balls drop at random.
pub fn simulate_events(rng: &mut StdRng, amount_of_colored_balls: u32) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    let mut balls_remaining = amount_of_colored_balls;
    while balls_remaining > 0 {
        let hold_secs = rng.gen_range(0.0..MAX_HOLD_SECS * 1.25);
        let mut velocity = Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU))
            * strike_strength(hold_secs);
        trace!(hold_secs, speed = velocity.length(), "Simulated strike");
        events.push(MatchEvent::CueBallStruck);

        while !is_settled([velocity]) {
            if balls_remaining > 0 && rng.gen_bool(POT_CHANCE_PER_STEP) {
                events.push(MatchEvent::BallPotted);
                balls_remaining -= 1;
            }
            velocity *= FELT_DAMPING;
        }
        events.push(MatchEvent::MotionSettled);
    }
    events
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use sinuca::{MatchState, Player};

    use super::*;
    use crate::{play_session, MatchOutcome};

    #[test]
    fn simulated_match_finishes() {
        let mut rng = StdRng::seed_from_u64(7);
        let events = simulate_events(&mut rng, 15);
        let potted = events
            .iter()
            .filter(|event| **event == MatchEvent::BallPotted)
            .count();
        assert_eq!(potted, 15);
        assert_eq!(events.first(), Some(&MatchEvent::CueBallStruck));
        assert_eq!(events.last(), Some(&MatchEvent::MotionSettled));

        let mut state = MatchState::new(Player::new("Migge"), Some(Player::new("Piku")), 15);
        let result = play_session(&mut state, events, &mut None).unwrap();
        assert_ne!(result.outcome, MatchOutcome::Unfinished);
        assert_eq!(state.balls_in_hole(), 15);
    }

    #[test]
    fn same_seed_same_match() {
        let a = simulate_events(&mut StdRng::seed_from_u64(42), 5);
        let b = simulate_events(&mut StdRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }
}
