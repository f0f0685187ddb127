//! High-level runtime orchestrator.
//!
//! The runtime owns the match worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive the duel round by round.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use duel_core::{DuelConfig, FighterId, Match, MatchStatus, RoundReport};

use crate::api::{ActionProvider, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, MatchWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub duel: DuelConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Refuse to resolve rounds once a fighter is at 0 hp (default: false)
    pub halt_on_knockout: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            duel: DuelConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            halt_on_knockout: false,
        }
    }
}

/// Main runtime that orchestrates the duel
///
/// Runtime owns the worker and the two action providers.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    halt_on_knockout: bool,

    // Indexed by fighter, A first
    providers: [Option<Box<dyn ActionProvider>>; 2],

    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Play a single round
    ///
    /// Both providers are asked against the same pre-round snapshot, then
    /// both selections are recorded and the round is resolved. Requires a
    /// provider for each fighter.
    pub async fn step(&mut self) -> Result<RoundReport> {
        let provider_a = self.provider(FighterId::A)?;
        let provider_b = self.provider(FighterId::B)?;

        let snapshot = self.handle.query_match().await?;
        let status = snapshot.status();
        if self.halt_on_knockout && status.is_decided() {
            return Err(RuntimeError::MatchDecided { status });
        }

        let action_a = provider_a.provide_action(FighterId::A, &snapshot).await?;
        let action_b = provider_b.provide_action(FighterId::B, &snapshot).await?;
        debug!(round = snapshot.round() + 1, "both actions provided");

        self.handle.select_action(FighterId::A, action_a).await?;
        self.handle.select_action(FighterId::B, action_b).await?;

        self.handle.resolve_round().await
    }

    /// Play rounds until the match is decided or `max_rounds` have run.
    ///
    /// Returns the status after the last round played.
    pub async fn run_until_decided(&mut self, max_rounds: u32) -> Result<MatchStatus> {
        let mut status = self.handle.query_match().await?.status();
        for _ in 0..max_rounds {
            if status.is_decided() {
                break;
            }
            status = self.step().await?.status;
        }
        Ok(status)
    }

    /// Read-only snapshot of the current match
    pub async fn current_match(&self) -> Result<Match> {
        self.handle.query_match().await
    }

    /// Set the action provider for `fighter`
    pub fn set_provider(&mut self, fighter: FighterId, provider: impl ActionProvider + 'static) {
        self.providers[slot(fighter)] = Some(Box::new(provider));
    }

    /// Shutdown the runtime gracefully
    ///
    /// Outstanding handle clones keep the worker alive until they are
    /// dropped as well.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }

    fn provider(&self, fighter: FighterId) -> Result<&dyn ActionProvider> {
        self.providers[slot(fighter)]
            .as_deref()
            .ok_or(RuntimeError::ProviderNotSet { fighter })
    }
}

const fn slot(fighter: FighterId) -> usize {
    match fighter {
        FighterId::A => 0,
        FighterId::B => 1,
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    initial_match: Option<Match>,
    providers: [Option<Box<dyn ActionProvider>>; 2],
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            initial_match: None,
            providers: [None, None],
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing match instead of a fresh one built from
    /// [`RuntimeConfig::duel`]
    pub fn initial_match(mut self, duel: Match) -> Self {
        self.initial_match = Some(duel);
        self
    }

    /// Set the action provider for `fighter` (optional)
    pub fn provider(mut self, fighter: FighterId, provider: impl ActionProvider + 'static) -> Self {
        self.providers[slot(fighter)] = Some(Box::new(provider));
        self
    }

    /// Refuse to resolve rounds once the match is decided
    pub fn halt_on_knockout(mut self, halt: bool) -> Self {
        self.config.halt_on_knockout = halt;
        self
    }

    /// Build the runtime and spawn the match worker
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Runtime {
        let duel = self
            .initial_match
            .unwrap_or_else(|| Match::new(&self.config.duel));

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = MatchWorker::new(
            duel,
            command_rx,
            event_bus,
            self.config.halt_on_knockout,
        );
        let worker_handle = tokio::spawn(worker.run());

        Runtime {
            handle,
            halt_on_knockout: self.config.halt_on_knockout,
            providers: self.providers,
            worker_handle,
        }
    }
}
