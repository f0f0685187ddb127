//! Action parsing errors.

use crate::error::{DuelError, ErrorSeverity};

/// Errors produced when turning a catalog id into an [`super::Action`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseActionError {
    /// The id is not part of the action catalog.
    #[error("unknown action id `{0}`")]
    Unknown(String),

    /// A catalog position outside `1..=7` (or `0` for no action).
    #[error("catalog position {0} is out of range")]
    PositionOutOfRange(usize),
}

impl DuelError for ParseActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "ACTION_UNKNOWN_ID",
            Self::PositionOutOfRange(_) => "ACTION_POSITION_OUT_OF_RANGE",
        }
    }
}
