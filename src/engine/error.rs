//! Engine error kinds

use crate::core::LengthNotSupported;
use std::fmt;

/// Failures surfaced by [`Game`](super::Game) and [`Round`](super::Round)
/// operations.
///
/// Both kinds are synchronous and final: the engine never retries, and a
/// failed operation leaves the aggregate unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The aggregate is in a state that forbids the requested operation.
    InvalidAction(&'static str),
    /// The dictionary cannot supply a word of the requested length.
    LengthNotSupported(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction(what) => write!(f, "invalid action: cannot {what}"),
            Self::LengthNotSupported(length) => {
                write!(f, "no words of length {length} are available")
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<LengthNotSupported> for GameError {
    fn from(err: LengthNotSupported) -> Self {
        Self::LengthNotSupported(err.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_refused_action() {
        let err = GameError::InvalidAction("guess on a completed round");
        assert_eq!(
            err.to_string(),
            "invalid action: cannot guess on a completed round",
        );
    }

    #[test]
    fn length_error_converts_from_dictionary_error() {
        let err = GameError::from(LengthNotSupported { length: 9 });
        assert_eq!(err, GameError::LengthNotSupported(9));
    }
}
