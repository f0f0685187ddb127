use crate::narrative::{Locale, Narrator};
use crate::state::Fighter;

/// Match setup and presentation parameters.
///
/// Rule constants (damage, costs, thresholds) are fixed and live in
/// [`crate::combat`]; only the starting state and narration are tunable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    pub starting_hp: u32,
    pub starting_energy: u32,
    pub starting_initiative: u32,
    /// Language of labels and log lines.
    pub locale: Locale,
    /// Close every round's log with a separator line.
    pub round_separator: bool,
}

impl DuelConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HP: u32 = Fighter::INITIAL.hp;
    pub const DEFAULT_STARTING_ENERGY: u32 = Fighter::INITIAL.energy;
    pub const DEFAULT_STARTING_INITIATIVE: u32 = Fighter::INITIAL.initiative;

    pub fn new() -> Self {
        Self {
            starting_hp: Self::DEFAULT_STARTING_HP,
            starting_energy: Self::DEFAULT_STARTING_ENERGY,
            starting_initiative: Self::DEFAULT_STARTING_INITIATIVE,
            locale: Locale::default(),
            round_separator: false,
        }
    }

    /// Starting fighter, clamped into the legal stat ranges.
    pub fn initial_fighter(&self) -> Fighter {
        Fighter::new(
            self.starting_hp,
            self.starting_energy,
            self.starting_initiative,
        )
    }

    pub fn narrator(&self) -> Narrator {
        Narrator::new(self.locale).with_separator(self.round_separator)
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_the_standard_fighter() {
        assert_eq!(DuelConfig::default().initial_fighter(), Fighter::INITIAL);
    }

    #[test]
    fn oversized_starting_values_are_clamped() {
        let config = DuelConfig {
            starting_hp: 500,
            starting_initiative: 12,
            ..DuelConfig::default()
        };
        let fighter = config.initial_fighter();
        assert_eq!(fighter.hp, Fighter::MAX_HP);
        assert_eq!(fighter.initiative, Fighter::MAX_INITIATIVE);
    }
}
