//! Match worker that owns the authoritative [`duel_core::Match`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), resolves
//! rounds through [`Match::play_round`], and publishes events to the
//! EventBus.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use duel_core::{Action, FighterId, Match, MatchStatus, RoundReport};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, EventBus, RoundEvent, SelectionEvent};

/// Commands that can be sent to the match worker
pub enum Command {
    /// Record a fighter's choice for the upcoming round.
    SelectAction {
        fighter: FighterId,
        action: Action,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Resolve one round with the currently selected actions.
    ResolveRound {
        reply: oneshot::Sender<Result<RoundReport>>,
    },
    /// Query the current match (read-only).
    QueryMatch { reply: oneshot::Sender<Match> },
    /// Return to the configured starting state.
    Reset { reply: oneshot::Sender<()> },
}

/// Background task that processes match commands one at a time.
///
/// The worker holds no providers and performs no I/O; it only applies
/// commands to the match it owns.
pub struct MatchWorker {
    duel: Match,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    halt_on_knockout: bool,
}

impl MatchWorker {
    pub fn new(
        duel: Match,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        halt_on_knockout: bool,
    ) -> Self {
        info!(
            target: "runtime::worker",
            round = duel.round(),
            halt_on_knockout,
            "MatchWorker initialized"
        );

        Self {
            duel,
            command_rx,
            event_bus,
            halt_on_knockout,
        }
    }

    /// Main worker loop. Exits once every command sender is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "command channel closed, worker exiting");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectAction {
                fighter,
                action,
                reply,
            } => {
                self.handle_selection(fighter, action);
                if reply.send(Ok(())).is_err() {
                    debug!("SelectAction reply channel closed (caller dropped)");
                }
            }
            Command::ResolveRound { reply } => {
                let result = self.handle_round();
                if reply.send(result).is_err() {
                    debug!("ResolveRound reply channel closed (caller dropped)");
                }
            }
            Command::QueryMatch { reply } => {
                if reply.send(self.duel.clone()).is_err() {
                    debug!("QueryMatch reply channel closed (caller dropped)");
                }
            }
            Command::Reset { reply } => {
                self.duel.reset();
                info!(target: "runtime::worker", "match reset");
                self.event_bus.publish(Event::Round(RoundEvent::Reset));
                if reply.send(()).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_selection(&mut self, fighter: FighterId, action: Action) {
        self.duel.select(fighter, action);
        debug!(target: "runtime::worker", %fighter, %action, "action selected");
        self.event_bus
            .publish(Event::Selection(SelectionEvent::ActionLocked { fighter }));
    }

    fn handle_round(&mut self) -> Result<RoundReport> {
        let before = self.duel.status();
        if self.halt_on_knockout && before.is_decided() {
            debug!(target: "runtime::worker", ?before, "round refused, match decided");
            return Err(RuntimeError::MatchDecided { status: before });
        }

        let report = self.duel.play_round();
        let (a, b) = (&report.resolution.self_next, &report.resolution.enemy_next);
        info!(
            target: "runtime::worker",
            round = report.round,
            a_hp = a.hp,
            a_energy = a.energy,
            a_initiative = a.initiative,
            b_hp = b.hp,
            b_energy = b.energy,
            b_initiative = b.initiative,
            "round resolved"
        );

        self.event_bus.publish(Event::Round(RoundEvent::Resolved {
            report: Box::new(report.clone()),
        }));

        if before == MatchStatus::Ongoing && report.status.is_decided() {
            info!(target: "runtime::worker", round = report.round, status = ?report.status, "match decided");
            self.event_bus.publish(Event::Round(RoundEvent::Decided {
                round: report.round,
                status: report.status,
            }));
        }

        Ok(report)
    }
}
