//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and action providers so clients
//! can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use duel_core::{DuelError, ErrorSeverity, FighterId, MatchStatus};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("action provider for fighter {fighter} not set")]
    ProviderNotSet { fighter: FighterId },

    #[error("action provider for fighter {fighter} failed: {message}")]
    Provider { fighter: FighterId, message: String },

    #[error("action provider input closed")]
    InputClosed,

    #[error("match worker command channel closed")]
    CommandChannelClosed,

    #[error("match worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("match worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("match already decided ({status:?}); reset to play again")]
    MatchDecided { status: MatchStatus },
}

impl DuelError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Provider { .. } | Self::InputClosed => ErrorSeverity::Recoverable,
            Self::MatchDecided { .. } => ErrorSeverity::Validation,
            Self::ProviderNotSet { .. }
            | Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotSet { .. } => "RUNTIME_PROVIDER_NOT_SET",
            Self::Provider { .. } => "RUNTIME_PROVIDER_FAILED",
            Self::InputClosed => "RUNTIME_INPUT_CLOSED",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::MatchDecided { .. } => "RUNTIME_MATCH_DECIDED",
        }
    }
}
