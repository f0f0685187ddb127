//! Runtime orchestration for the two-fighter duel.
//!
//! This crate wires together the action provider abstraction and the match
//! worker into a cohesive runtime API. Consumers embed [`Runtime`] to drive
//! rounds, subscribe to events, and inspect the match through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    ActionProvider, IdleActionProvider, Result, RuntimeError, RuntimeHandle,
    ScriptedActionProvider,
};
pub use events::{Event, EventBus, RoundEvent, SelectionEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
