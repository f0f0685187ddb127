//! Outcome types produced by action evaluation.

use crate::action::Zone;
use crate::state::Fighter;
use crate::state::fighter::clamp_delta;

/// Which branch of the rules a fighter's action took this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    /// No action selected.
    Waiting,
    /// Unopposed strike; `damage` is the full dealt amount.
    StrikeLanded { zone: Zone, damage: u32 },
    /// Opponent guarded the struck zone; `damage` is already floored at 0.
    StrikeBlocked { zone: Zone, damage: u32 },
    /// Opponent countered with enough initiative; the strike deals nothing.
    StrikeCountered { zone: Zone },
    /// Guarded the exact zone the opponent struck.
    GuardHeld { zone: Zone },
    /// Guarded a zone that was not struck.
    Guarded { zone: Zone },
    /// Eligible counter against an incoming strike.
    CounterLanded,
    /// Counter attempted below the initiative threshold.
    CounterNoInitiative,
    /// Eligible counter but the opponent did not strike.
    CounterWhiffed,
}

/// Result of evaluating one fighter's action against the opponent's
/// pre-round state.
///
/// Deltas are unclamped; clamping happens once when the outcome is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub energy_delta: i32,
    pub initiative_delta: i32,
    /// Damage inflicted on the opponent this round, never negative.
    pub dealt_damage: u32,
    pub kind: OutcomeKind,
}

impl ActionOutcome {
    pub(crate) const WAITING: ActionOutcome = ActionOutcome {
        energy_delta: 0,
        initiative_delta: 0,
        dealt_damage: 0,
        kind: OutcomeKind::Waiting,
    };

    /// Energy after this outcome, clamped to `0..=MAX_ENERGY`.
    pub fn next_energy(&self, before: &Fighter) -> u32 {
        clamp_delta(before.energy, self.energy_delta, Fighter::MAX_ENERGY)
    }

    /// Initiative after this outcome, clamped to `0..=MAX_INITIATIVE`.
    pub fn next_initiative(&self, before: &Fighter) -> u32 {
        clamp_delta(before.initiative, self.initiative_delta, Fighter::MAX_INITIATIVE)
    }

    /// Applies the resource changes to `before`. Hp is left untouched; it only
    /// changes from the opponent's dealt damage during combination.
    pub fn apply(&self, before: &Fighter) -> Fighter {
        Fighter {
            energy: self.next_energy(before),
            initiative: self.next_initiative(before),
            ..*before
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_resources_and_keeps_hp() {
        let before = Fighter::new(60, 10, 1);
        let outcome = ActionOutcome {
            energy_delta: 2,
            initiative_delta: -3,
            dealt_damage: 0,
            kind: OutcomeKind::CounterNoInitiative,
        };

        let after = outcome.apply(&before);
        assert_eq!(after.hp, 60);
        assert_eq!(after.energy, 10);
        assert_eq!(after.initiative, 0);
    }
}
