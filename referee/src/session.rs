use sinuca::{MatchEvent, MatchState, TurnOwner};
use tracing::{debug, info};

use crate::Recorder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Won { owner: TurnOwner },
    Tie,
    /// The events ran out before every colored ball was potted.
    Unfinished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResult {
    pub outcome: MatchOutcome,
    pub events_applied: usize,
    /// Events that arrived after the match was over.
    pub events_ignored: usize,
}

/// Feeds `events` into `state` until the match is over. Remaining events are
/// counted but not applied.
///
/// Returns an error only if the recording cannot be written.
pub fn play_session<I: IntoIterator<Item = MatchEvent>>(
    state: &mut MatchState,
    events: I,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<SessionResult> {
    let mut events_applied = 0;
    let mut events_ignored = 0;
    for event in events {
        if state.is_match_over() {
            events_ignored += 1;
            continue;
        }
        state.apply(event);
        events_applied += 1;
        if let Some(rec) = recorder {
            rec.store_event(event);
        }
        if event != MatchEvent::CueBallStruck {
            debug!(scoreboard = %state.current_snapshot(), ?event);
        }
    }
    if events_ignored > 0 {
        info!(events_ignored, "Ignored events after the match was over");
    }

    if let Some(rec) = recorder {
        let path = rec.write_match_recording(state)?;
        debug!(path = %path.display(), "Wrote match recording");
    }

    let outcome = if !state.is_match_over() {
        MatchOutcome::Unfinished
    } else {
        match state.current_snapshot().leader() {
            Some(owner) => MatchOutcome::Won { owner },
            None => MatchOutcome::Tie,
        }
    };
    Ok(SessionResult {
        outcome,
        events_applied,
        events_ignored,
    })
}
