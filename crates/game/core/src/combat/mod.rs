//! Per-fighter action evaluation (phase 1 of a round).
//!
//! This module provides pure functions that decide what one fighter's action
//! does against the opponent's simultaneous choice. Both fighters are
//! evaluated against each other's pre-round snapshot, so the two calls are
//! independent and may run in either order.
//!
//! # Core Functions
//!
//! - `evaluate_action`: outcome of one fighter's action (deltas, dealt damage)
//! - `strike_damage`: raw strike damage from the attacker's energy
//! - `can_counter`: counter eligibility from pre-round initiative

pub mod damage;
pub mod evaluate;
pub mod outcome;

pub use damage::{
    BLOCK_REDUCTION, COUNTER_MIN_INITIATIVE, COUNTER_REPRISAL, can_counter, strike_damage,
};
pub use evaluate::evaluate_action;
pub use outcome::{ActionOutcome, OutcomeKind};
