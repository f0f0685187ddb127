//! Deterministic rules for a two-fighter, simultaneous-choice duel.
//!
//! `duel-core` defines the canonical rules (action catalog, per-fighter
//! evaluation, round combination) and exposes pure APIs that the runtime and
//! frontends reuse. Round resolution is a pure function of two fighter
//! snapshots; all state mutation flows through [`Match`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod narrative;
pub mod sprite;
pub mod state;

pub use action::{
    Action, ActionId, CatalogEntry, ParseActionError, Zone, catalog,
};
pub use combat::{ActionOutcome, OutcomeKind, evaluate_action};
pub use config::DuelConfig;
pub use engine::{RoundLines, RoundResolution, resolve_round, resolve_round_with};
pub use error::{DuelError, ErrorSeverity};
pub use narrative::{Locale, Narrator};
pub use sprite::{SpriteId, SpriteKey, SpriteTable};
pub use state::{
    Fighter, FighterId, FighterStore, Match, MatchLog, MatchStatus, RoundEntry, RoundReport,
};
