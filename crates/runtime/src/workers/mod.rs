//! Worker tasks that back the runtime orchestration.
//!
//! The match worker is the single owner of the duel state; everything else
//! talks to it through [`Command`]s.

mod match_worker;

pub use match_worker::{Command, MatchWorker};
