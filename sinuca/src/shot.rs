//! Engine-independent helpers for the cue: how hard a strike is and when the
//! table has come to rest.

use std::ops::RangeInclusive;

use glam::Vec2;

/// Bodies slower than this count as resting.
pub const SETTLE_SPEED: f32 = 8.0;

/// How long the cue may be held back before the strike is at full strength, in seconds.
pub const MAX_HOLD_SECS: f32 = 1.2;

pub const MIN_STRIKE_STRENGTH: f32 = 10.0;
pub const MAX_STRIKE_STRENGTH: f32 = 300.0;

/// Maps `value` linearly from `range` onto `domain`.
///
/// Values past the end of `range` are clamped to the end of `domain`. Values
/// before its start are not clamped.
pub fn map_range(range: RangeInclusive<f32>, domain: RangeInclusive<f32>, value: f32) -> f32 {
    if value > *range.end() {
        return *domain.end();
    }
    domain.start()
        + (domain.end() - domain.start()) * (value - range.start()) / (range.end() - range.start())
}

/// Strength of a strike after holding the cue back for `hold_secs`.
pub fn strike_strength(hold_secs: f32) -> f32 {
    map_range(
        0.0..=MAX_HOLD_SECS,
        MIN_STRIKE_STRENGTH..=MAX_STRIKE_STRENGTH,
        hold_secs,
    )
}

/// The impulse to apply to the cue ball at `ball` when the cue is released
/// towards `pointer`. Zero if both positions coincide.
pub fn strike_impulse(ball: Vec2, pointer: Vec2, hold_secs: f32) -> Vec2 {
    (pointer - ball).normalize_or_zero() * strike_strength(hold_secs)
}

/// Whether every body moves slower than [`SETTLE_SPEED`].
pub fn is_settled<I: IntoIterator<Item = Vec2>>(velocities: I) -> bool {
    velocities
        .into_iter()
        .all(|velocity| velocity.length() < SETTLE_SPEED)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn strength_is_bounded_for_nonnegative_holds(hold_millis: u16) -> bool {
            let strength = strike_strength(hold_millis as f32 / 1000.0);
            (MIN_STRIKE_STRENGTH..=MAX_STRIKE_STRENGTH).contains(&strength)
        }
    }

    #[test]
    fn strength_endpoints() {
        assert_eq!(strike_strength(0.0), MIN_STRIKE_STRENGTH);
        assert_eq!(strike_strength(MAX_HOLD_SECS), MAX_STRIKE_STRENGTH);
        assert_eq!(strike_strength(5.0), MAX_STRIKE_STRENGTH);
        assert!((strike_strength(0.6) - 155.0).abs() < 1e-3);
    }

    #[test]
    fn map_range_does_not_clamp_below() {
        assert!((map_range(0.0..=1.0, 10.0..=20.0, -1.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn impulse_points_at_pointer() {
        let impulse = strike_impulse(Vec2::new(1.0, 1.0), Vec2::new(1.0, 5.0), MAX_HOLD_SECS);
        assert!((impulse - Vec2::new(0.0, MAX_STRIKE_STRENGTH)).length() < 1e-3);
        assert_eq!(strike_impulse(Vec2::ONE, Vec2::ONE, 1.0), Vec2::ZERO);
    }

    #[test]
    fn settled() {
        assert!(is_settled(Vec::<Vec2>::new()));
        assert!(is_settled([Vec2::new(3.0, 4.0), Vec2::ZERO]));
        assert!(!is_settled([Vec2::ZERO, Vec2::new(SETTLE_SPEED, 0.0)]));
    }
}
