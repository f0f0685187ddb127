//! The match: two fighters plus their history.

use super::fighter::{Fighter, FighterId};
use super::log::MatchLog;
use super::store::FighterStore;
use crate::action::Action;
use crate::config::DuelConfig;
use crate::engine::{RoundResolution, resolve_round_with};
use crate::narrative::Narrator;

/// Whether the match has been decided.
///
/// Informational only: the resolver keeps resolving rounds after a fighter
/// reaches 0 hp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    Ongoing,
    Won(FighterId),
    /// Both fighters fell in the same round.
    Draw,
}

impl MatchStatus {
    pub const fn is_decided(&self) -> bool {
        !matches!(self, MatchStatus::Ongoing)
    }
}

/// Outcome of [`Match::play_round`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// 1-based number of the round just resolved.
    pub round: u32,
    pub resolution: RoundResolution,
    pub status: MatchStatus,
}

/// Exactly two fighters plus the chronological log.
///
/// The enclosing application owns the match and drives it with a simple
/// command/apply cycle: record selections, call [`Match::play_round`], read
/// the committed result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    store: FighterStore,
    log: MatchLog,
    round: u32,
    initial: Fighter,
    narrator: Narrator,
}

impl Match {
    pub fn new(config: &DuelConfig) -> Self {
        let initial = config.initial_fighter();
        Self {
            store: FighterStore::seeded(initial),
            log: MatchLog::new(),
            round: 0,
            initial,
            narrator: config.narrator(),
        }
    }

    /// Starts from explicit fighter states instead of the configured seed.
    pub fn from_fighters(config: &DuelConfig, a: Fighter, b: Fighter) -> Self {
        Self {
            store: FighterStore::new(a, b),
            ..Self::new(config)
        }
    }

    pub fn fighter(&self, id: FighterId) -> &Fighter {
        self.store.get(id)
    }

    pub fn store(&self) -> &FighterStore {
        &self.store
    }

    pub fn log(&self) -> &MatchLog {
        &self.log
    }

    /// Number of rounds resolved so far.
    pub const fn round(&self) -> u32 {
        self.round
    }

    pub const fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn select(&mut self, id: FighterId, action: Action) {
        self.store.set_action(id, action);
    }

    pub fn status(&self) -> MatchStatus {
        let (a, b) = self.store.snapshot();
        match (a.is_defeated(), b.is_defeated()) {
            (false, false) => MatchStatus::Ongoing,
            (true, true) => MatchStatus::Draw,
            (true, false) => MatchStatus::Won(FighterId::B),
            (false, true) => MatchStatus::Won(FighterId::A),
        }
    }

    /// Resolves one round against the committed state, persists both next
    /// states and appends the round's lines to the history.
    pub fn play_round(&mut self) -> RoundReport {
        let (a, b) = self.store.snapshot();
        let resolution = resolve_round_with(&self.narrator, &a, &b);

        self.store.replace(FighterId::A, resolution.self_next);
        self.store.replace(FighterId::B, resolution.enemy_next);
        self.round += 1;
        self.log.push(self.round, resolution.log_lines.clone());

        RoundReport {
            round: self.round,
            resolution,
            status: self.status(),
        }
    }

    /// Back to the starting state with an empty history.
    pub fn reset(&mut self) {
        self.store.reset(self.initial);
        self.log.clear();
        self.round = 0;
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(&DuelConfig::default())
    }
}
