//! Asynchronous abstraction for sourcing each fighter's choice.
//!
//! Runtime users plug in [`ActionProvider`] implementations so a match can be
//! driven by human input or scripted fixtures.
use std::collections::VecDeque;

use async_trait::async_trait;
use duel_core::{Action, FighterId, Match};
use tokio::sync::Mutex;

use super::errors::Result;

/// Trait for providing a fighter's action for the upcoming round.
///
/// Both fighters' providers receive the same pre-round snapshot, so neither
/// can see the other's pending choice through the state.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Scripted/replayed actions
/// - Testing fixtures
#[async_trait]
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `fighter` based on the current match.
    ///
    /// # Arguments
    /// * `fighter` - The fighter choosing an action
    /// * `state` - Read-only snapshot of the match before the round
    async fn provide_action(&self, fighter: FighterId, state: &Match) -> Result<Action>;
}

/// A provider that never selects anything; the fighter waits every round.
pub struct IdleActionProvider;

#[async_trait]
impl ActionProvider for IdleActionProvider {
    async fn provide_action(&self, _fighter: FighterId, _state: &Match) -> Result<Action> {
        Ok(Action::None)
    }
}

/// Replays a fixed sequence of actions, then waits once it runs out.
pub struct ScriptedActionProvider {
    script: Mutex<VecDeque<Action>>,
}

impl ScriptedActionProvider {
    pub fn new(script: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Actions not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl ActionProvider for ScriptedActionProvider {
    async fn provide_action(&self, _fighter: FighterId, _state: &Match) -> Result<Action> {
        Ok(self.script.lock().await.pop_front().unwrap_or_default())
    }
}
