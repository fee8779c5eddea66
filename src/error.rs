use std::fmt;

/// Errors that can stop a training run.
#[derive(Debug)]
pub enum TrainError {
    /// The configuration was rejected before training started.
    InvalidConfig(String),
    /// The parameter source could not supply the requested initial values.
    InitExhausted { requested: usize, remaining: usize },
    /// Writing a status line failed.
    Io(std::io::Error),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InitExhausted {
                requested,
                remaining,
            } => write!(
                f,
                "parameter source exhausted: requested {requested}, {remaining} remaining"
            ),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for TrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrainError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, TrainError>;
