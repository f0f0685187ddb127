//! Event types for different topics.

use duel_core::{FighterId, MatchStatus, RoundReport};
use serde::{Deserialize, Serialize};

/// Events related to action selection.
///
/// Only the fact that a fighter locked in is published; the choice itself
/// stays private until the round resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    ActionLocked { fighter: FighterId },
}

/// Events related to round resolution and match lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A round was resolved and committed.
    Resolved { report: Box<RoundReport> },

    /// The round that just resolved left a fighter (or both) at 0 hp.
    Decided { round: u32, status: MatchStatus },

    /// The match was reset to its starting state.
    Reset,
}
