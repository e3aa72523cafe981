use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::Serialize;
use sinuca::{MatchEvent, MatchState, Snapshot};

/// Collects the events of a match and writes them, together with the final
/// match state, to a numbered JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    events: Vec<MatchEvent>,
}

#[derive(Serialize)]
struct MatchRecording<'a> {
    scoreboard: Snapshot,
    events: &'a [MatchEvent],
    state: &'a MatchState,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            events: Vec::new(),
        })
    }

    pub fn store_event(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    /// Writes the stored events and `state` to `match_NNNNNN.json`, then
    /// starts over with an empty event list. Returns the path written.
    pub fn write_match_recording(&mut self, state: &MatchState) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("match_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        let events = std::mem::take(&mut self.events);
        serde_json::to_writer_pretty(
            writer,
            &MatchRecording {
                scoreboard: state.current_snapshot(),
                events: &events,
                state,
            },
        )?;
        self.num += 1;
        Ok(filepath)
    }
}
