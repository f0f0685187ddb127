//! Hot-seat terminal frontend for the duel.
//!
//! Both fighters type their choice into the same terminal; the runtime
//! resolves the round and the client prints the stat bars, sprite ids and
//! recent history.

mod app;
mod config;
mod input;
pub mod logging;
pub mod render;

pub use app::CliApp;
pub use config::CliConfig;
pub use input::{Choice, StdinActionProvider, parse_choice};
