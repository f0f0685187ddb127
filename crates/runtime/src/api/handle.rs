//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! recording selections, resolving rounds, or streaming events from specific
//! topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use duel_core::{Action, FighterId, Match, RoundReport};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Record `fighter`'s choice for the upcoming round.
    pub async fn select_action(&self, fighter: FighterId, action: Action) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::SelectAction {
            fighter,
            action,
            reply: reply_tx,
        })
        .await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Resolve one round with the currently selected actions.
    ///
    /// Rounds are processed one at a time by the worker, so round N+1 always
    /// sees round N's committed result.
    pub async fn resolve_round(&self) -> Result<RoundReport> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::ResolveRound { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current match (read-only snapshot)
    pub async fn query_match(&self) -> Result<Match> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::QueryMatch { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start over from the configured initial state.
    pub async fn reset(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::Reset { reply: reply_tx }).await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Selection` - a fighter locked in a choice
    /// - `Topic::Round` - rounds resolved, match decided, resets
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
