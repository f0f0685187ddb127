//! Fighter attributes and identity.

use crate::action::Action;
use crate::narrative::Locale;

/// Which side of the duel a fighter stands on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum FighterId {
    A,
    B,
}

impl FighterId {
    pub const fn opponent(self) -> FighterId {
        match self {
            FighterId::A => FighterId::B,
            FighterId::B => FighterId::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            FighterId::A => 0,
            FighterId::B => 1,
        }
    }

    /// Name used in narrative lines.
    pub const fn name(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, FighterId::A) => "Fighter A",
            (Locale::En, FighterId::B) => "Fighter B",
            (Locale::Ru, FighterId::A) => "Игрок A",
            (Locale::Ru, FighterId::B) => "Игрок B",
        }
    }
}

/// One combatant's round-to-round state.
///
/// `hp`, `energy` and `initiative` always sit inside their closed ranges;
/// every constructor and every resolution step clamps on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub hp: u32,
    pub energy: u32,
    pub initiative: u32,
    pub action: Action,
}

impl Fighter {
    pub const MAX_HP: u32 = 100;
    pub const MAX_ENERGY: u32 = 10;
    pub const MAX_INITIATIVE: u32 = 5;

    /// State both fighters start a match with.
    pub const INITIAL: Fighter = Fighter {
        hp: 100,
        energy: 5,
        initiative: 3,
        action: Action::None,
    };

    /// Creates a fighter with every stat clamped into range and no action.
    pub fn new(hp: u32, energy: u32, initiative: u32) -> Self {
        Self {
            hp: hp.min(Self::MAX_HP),
            energy: energy.min(Self::MAX_ENERGY),
            initiative: initiative.min(Self::MAX_INITIATIVE),
            action: Action::None,
        }
    }

    #[must_use]
    pub const fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Terminal state: the fighter has been defeated.
    pub const fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    /// Hp after taking `damage`, floored at 0.
    pub fn hp_after(&self, damage: u32) -> u32 {
        self.hp.saturating_sub(damage).min(Self::MAX_HP)
    }
}

impl Default for Fighter {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Applies a signed delta to `value` and clamps the result to `0..=max`.
pub(crate) fn clamp_delta(value: u32, delta: i32, max: u32) -> u32 {
    let shifted = i64::from(value) + i64::from(delta);
    shifted.clamp(0, i64::from(max)) as u32
}
