/// The error type for [`MatchConfig::validate()`](crate::MatchConfig::validate).
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyPlayerName,
    NoColoredBalls,
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyPlayerName => write!(f, "Player 1 needs a non-empty name"),
            ConfigError::NoColoredBalls => {
                write!(f, "A match needs at least one colored ball")
            }
        }
    }
}

/// The error type for parsing an [`EventScript`](crate::EventScript).
#[derive(Debug)]
pub enum ScriptError {
    InvalidEvent {
        /// 1-based, like an editor shows it.
        line: usize,
        err: serde_json::Error,
    },
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::InvalidEvent { err, .. } => Some(err),
        }
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::InvalidEvent { line, err: _ } => {
                write!(f, "Line {} is not a valid match event", line)
            }
        }
    }
}
