//! Round resolution (phase 2): combine both fighters' outcomes.
//!
//! [`resolve_round`] is the single entry point the enclosing application
//! calls once per round. It evaluates both actions against the pre-round
//! snapshots, cross-applies dealt damage, clamps every stat, and assembles
//! the round's log lines in a fixed order:
//!
//! 1. summary naming both chosen actions
//! 2. fighter A's outcome line
//! 3. fighter B's outcome line
//! 4. separator marker (only when the narrator enables it)

use arrayvec::ArrayVec;

use crate::combat::{ActionOutcome, evaluate_action};
use crate::narrative::Narrator;
use crate::state::{Fighter, FighterId};

/// Maximum number of log lines a single round produces.
pub const MAX_ROUND_LINES: usize = 4;

/// Log lines of one round, in their observable order.
pub type RoundLines = ArrayVec<String, MAX_ROUND_LINES>;

/// Next states and narrative produced by one round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResolution {
    /// Fighter A after the round.
    pub self_next: Fighter,
    /// Fighter B after the round.
    pub enemy_next: Fighter,
    pub self_outcome: ActionOutcome,
    pub enemy_outcome: ActionOutcome,
    pub log_lines: RoundLines,
}

/// Resolves one round with the default narrator.
pub fn resolve_round(self_before: &Fighter, enemy_before: &Fighter) -> RoundResolution {
    resolve_round_with(&Narrator::default(), self_before, enemy_before)
}

/// Resolves one round between fighter A (`self_before`) and fighter B
/// (`enemy_before`).
///
/// Pure: the inputs are borrowed immutably and identical inputs always yield
/// identical output. A round can be resolved with fighters already at 0 hp;
/// stopping a decided match is the caller's decision.
pub fn resolve_round_with(
    narrator: &Narrator,
    self_before: &Fighter,
    enemy_before: &Fighter,
) -> RoundResolution {
    let self_outcome = evaluate_action(self_before, enemy_before);
    let enemy_outcome = evaluate_action(enemy_before, self_before);

    let self_next = combine(self_before, &self_outcome, &enemy_outcome);
    let enemy_next = combine(enemy_before, &enemy_outcome, &self_outcome);

    let mut log_lines = RoundLines::new();
    log_lines.push(narrator.summary(self_before.action, enemy_before.action));
    log_lines.push(narrator.outcome(FighterId::A, &self_outcome.kind));
    log_lines.push(narrator.outcome(FighterId::B, &enemy_outcome.kind));
    if let Some(separator) = narrator.separator_line() {
        log_lines.push(separator.to_owned());
    }

    RoundResolution {
        self_next,
        enemy_next,
        self_outcome,
        enemy_outcome,
        log_lines,
    }
}

/// Applies a fighter's own resource deltas and the opponent's dealt damage.
fn combine(before: &Fighter, own: &ActionOutcome, opponent: &ActionOutcome) -> Fighter {
    Fighter {
        hp: before.hp_after(opponent.dealt_damage),
        ..own.apply(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Zone};
    use crate::combat::OutcomeKind;
    use crate::narrative::{Locale, ROUND_SEPARATOR};

    fn fighter(hp: u32, energy: u32, initiative: u32, action: Action) -> Fighter {
        Fighter::new(hp, energy, initiative).with_action(action)
    }

    const ALL_ACTIONS: [Action; 8] = [
        Action::None,
        Action::Strike(Zone::Head),
        Action::Strike(Zone::Body),
        Action::Strike(Zone::Legs),
        Action::Guard(Zone::Head),
        Action::Guard(Zone::Body),
        Action::Guard(Zone::Legs),
        Action::Counter,
    ];

    #[test]
    fn strike_into_matching_guard() {
        let a = fighter(100, 5, 3, Action::Strike(Zone::Head));
        let b = fighter(100, 5, 3, Action::Guard(Zone::Head));

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_next.energy, 4);
        assert_eq!(round.self_next.initiative, 2);
        assert_eq!(round.self_next.hp, 100);
        assert_eq!(round.enemy_next.energy, 7);
        assert_eq!(round.enemy_next.initiative, 4);
        assert_eq!(round.enemy_next.hp, 92);
    }

    #[test]
    fn high_energy_strike_lands_clean() {
        let a = fighter(100, 8, 3, Action::Strike(Zone::Head));
        let b = fighter(100, 5, 3, Action::None);

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_outcome.dealt_damage, 17);
        assert_eq!(round.self_next.energy, 8);
        assert_eq!(round.enemy_next.hp, 83);
    }

    #[test]
    fn counter_without_initiative_floors_initiative() {
        for b_action in ALL_ACTIONS {
            let a = fighter(100, 5, 2, Action::Counter);
            let b = fighter(100, 5, 3, b_action);

            let round = resolve_round(&a, &b);

            assert_eq!(round.self_next.initiative, 0);
            assert_eq!(round.self_next.energy, 4);
            assert_eq!(round.self_outcome.dealt_damage, 0);
            assert_eq!(round.self_outcome.kind, OutcomeKind::CounterNoInitiative);
        }
    }

    #[test]
    fn counter_negates_strike_and_ripostes() {
        let a = fighter(100, 5, 4, Action::Counter);
        let b = fighter(100, 5, 3, Action::Strike(Zone::Legs));

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_next.hp, 100);
        assert_eq!(round.self_next.initiative, 1);
        assert_eq!(round.self_next.energy, 4);
        assert_eq!(round.enemy_next.hp, 99);
        assert_eq!(round.enemy_outcome.kind, OutcomeKind::StrikeCountered { zone: Zone::Legs });
    }

    #[test]
    fn log_lines_follow_fixed_order() {
        let a = fighter(100, 5, 3, Action::Strike(Zone::Head));
        let b = fighter(100, 5, 3, Action::Guard(Zone::Head));

        let round = resolve_round(&a, &b);

        assert_eq!(
            round.log_lines.as_slice(),
            [
                "Fighter A chose Head strike, Fighter B chose Head guard",
                "Fighter A: strike to the head was blocked. Damage: 8",
                "Fighter B: defended the head successfully. +2 energy",
            ]
        );
    }

    #[test]
    fn separator_closes_the_round_when_enabled() {
        let narrator = Narrator::new(Locale::En).with_separator(true);
        let round = resolve_round_with(&narrator, &Fighter::INITIAL, &Fighter::INITIAL);

        assert_eq!(round.log_lines.len(), MAX_ROUND_LINES);
        assert_eq!(round.log_lines.last().map(String::as_str), Some(ROUND_SEPARATOR));
    }

    #[test]
    fn defeated_fighters_still_resolve() {
        let a = fighter(0, 5, 3, Action::Guard(Zone::Body));
        let b = fighter(10, 5, 3, Action::Strike(Zone::Legs));

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_next.hp, 0);
        assert_eq!(round.self_next.energy, 6);
        assert_eq!(round.enemy_next.initiative, 2);
    }

    #[test]
    fn selected_actions_carry_over() {
        let a = fighter(100, 5, 3, Action::Guard(Zone::Legs));
        let b = fighter(100, 5, 3, Action::Counter);

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_next.action, a.action);
        assert_eq!(round.enemy_next.action, b.action);
    }

    #[test]
    fn unrecognized_id_resolves_as_waiting() {
        let a = fighter(100, 5, 3, Action::from_id_lossy("kick"));
        let b = fighter(100, 5, 3, Action::Strike(Zone::Body));

        let round = resolve_round(&a, &b);

        assert_eq!(round.self_outcome, ActionOutcome::WAITING);
        assert_eq!(round.self_next.energy, 5);
        assert_eq!(round.self_next.initiative, 3);
        assert_eq!(round.self_next.hp, 85);
        assert_eq!(round.log_lines[1], "Fighter A: waiting...");
    }

    #[test]
    fn every_combination_stays_in_range_and_is_symmetric() {
        let hps = [0, 1, 9, 50, 100];
        for hp in hps {
            for energy in 0..=Fighter::MAX_ENERGY {
                for initiative in 0..=Fighter::MAX_INITIATIVE {
                    for a_action in ALL_ACTIONS {
                        for b_action in ALL_ACTIONS {
                            let a = fighter(hp, energy, initiative, a_action);
                            let b = fighter(
                                100 - hp,
                                Fighter::MAX_ENERGY - energy,
                                Fighter::MAX_INITIATIVE - initiative,
                                b_action,
                            );

                            let forward = resolve_round(&a, &b);
                            let swapped = resolve_round(&b, &a);

                            for next in [forward.self_next, forward.enemy_next] {
                                assert!(next.hp <= Fighter::MAX_HP);
                                assert!(next.energy <= Fighter::MAX_ENERGY);
                                assert!(next.initiative <= Fighter::MAX_INITIATIVE);
                            }

                            // Evaluation order does not change numeric results.
                            assert_eq!(forward.self_next, swapped.enemy_next);
                            assert_eq!(forward.enemy_next, swapped.self_next);
                            assert_eq!(forward.self_outcome, swapped.enemy_outcome);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_resolution_is_identical() {
        let a = fighter(73, 7, 4, Action::Strike(Zone::Body));
        let b = fighter(88, 2, 5, Action::Counter);

        let first = resolve_round(&a, &b);
        for _ in 0..16 {
            assert_eq!(resolve_round(&a, &b), first);
        }
    }

    #[test]
    fn hp_never_increases() {
        for a_action in ALL_ACTIONS {
            for b_action in ALL_ACTIONS {
                let a = fighter(40, 5, 3, a_action);
                let b = fighter(40, 5, 3, b_action);
                let round = resolve_round(&a, &b);
                assert!(round.self_next.hp <= a.hp);
                assert!(round.enemy_next.hp <= b.hp);
            }
        }
    }
}
