use crate::MatchEvent;

impl quickcheck::Arbitrary for MatchEvent {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[
            MatchEvent::CueBallStruck,
            MatchEvent::MotionSettled,
            MatchEvent::BallPotted,
        ])
        .unwrap()
    }
}

/// Any sequence of events a table could report, including nonsensical ones
/// such as settling twice in a row.
#[derive(Clone, Debug)]
pub struct EventSequence(pub Vec<MatchEvent>);

impl quickcheck::Arbitrary for EventSequence {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        EventSequence(Vec::<MatchEvent>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(EventSequence))
    }
}
