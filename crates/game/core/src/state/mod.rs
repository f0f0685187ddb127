//! Authoritative duel state.
//!
//! This module owns the fighter data, the two-slot [`FighterStore`], the
//! chronological [`MatchLog`] and the [`Match`] that ties them together.
//! Runtime layers clone or query this state but mutate it only through
//! [`Match`].
pub mod duel;
pub mod fighter;
pub mod log;
pub mod store;

pub use duel::{Match, MatchStatus, RoundReport};
pub use fighter::{Fighter, FighterId};
pub use log::{MatchLog, RoundEntry};
pub use store::FighterStore;
