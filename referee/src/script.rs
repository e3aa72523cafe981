use std::path::Path;

use anyhow::Context;
use sinuca::MatchEvent;

use crate::ScriptError;

/// A recorded sequence of table events, one JSON object per line, e.g.
/// `{"type": "CueBallStruck"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventScript(pub Vec<MatchEvent>);

impl EventScript {
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut events = Vec::new();
        for (line_idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let event = serde_json::from_str(line).map_err(|err| ScriptError::InvalidEvent {
                line: line_idx + 1,
                err,
            })?;
            events.push(event);
        }
        Ok(EventScript(events))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read event script '{}'", path.display()))?;
        Ok(Self::parse(&text)?)
    }
}
