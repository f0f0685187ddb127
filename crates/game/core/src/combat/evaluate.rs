//! Phase 1: evaluate one fighter's action against the opponent's choice.

use super::damage::{BLOCK_REDUCTION, COUNTER_REPRISAL, can_counter, strike_damage};
use super::outcome::{ActionOutcome, OutcomeKind};
use crate::action::{Action, Zone};
use crate::state::Fighter;

/// Evaluates `me`'s selected action against `enemy`'s simultaneous choice.
///
/// Both arguments are pre-round snapshots. The function is pure, so
/// `evaluate_action(a, b)` and `evaluate_action(b, a)` can be computed in
/// any order with identical results.
///
/// # Rules
///
/// | Action  | Initiative | Energy                          | Dealt damage            |
/// |---------|------------|---------------------------------|-------------------------|
/// | none    | 0          | 0                               | 0                       |
/// | strike  | -1         | 0 clean, -1 blocked / countered | raw, raw - 7, or 0      |
/// | guard   | +1         | +2 on matching strike, else +1  | 0                       |
/// | counter | -3         | -1                              | 1 if eligible vs strike |
pub fn evaluate_action(me: &Fighter, enemy: &Fighter) -> ActionOutcome {
    match me.action {
        Action::None => ActionOutcome::WAITING,
        Action::Strike(zone) => evaluate_strike(me, enemy, zone),
        Action::Guard(zone) => evaluate_guard(enemy, zone),
        Action::Counter => evaluate_counter(me, enemy),
    }
}

fn evaluate_strike(me: &Fighter, enemy: &Fighter, zone: Zone) -> ActionOutcome {
    let raw = strike_damage(me.energy);

    let (damage, energy_delta, kind) = if enemy.action == Action::Guard(zone) {
        let damage = raw - BLOCK_REDUCTION;
        let blocked = OutcomeKind::StrikeBlocked {
            zone,
            damage: damage.max(0) as u32,
        };
        (damage, -1, blocked)
    } else if enemy.action == Action::Counter && can_counter(enemy.initiative) {
        (0, -1, OutcomeKind::StrikeCountered { zone })
    } else {
        let landed = OutcomeKind::StrikeLanded {
            zone,
            damage: raw.max(0) as u32,
        };
        (raw, 0, landed)
    };

    ActionOutcome {
        energy_delta,
        initiative_delta: -1,
        dealt_damage: damage.max(0) as u32,
        kind,
    }
}

fn evaluate_guard(enemy: &Fighter, zone: Zone) -> ActionOutcome {
    let (energy_delta, kind) = if enemy.action == Action::Strike(zone) {
        (2, OutcomeKind::GuardHeld { zone })
    } else {
        (1, OutcomeKind::Guarded { zone })
    };

    ActionOutcome {
        energy_delta,
        initiative_delta: 1,
        dealt_damage: 0,
        kind,
    }
}

fn evaluate_counter(me: &Fighter, enemy: &Fighter) -> ActionOutcome {
    // The cost is paid whether or not the counter succeeds.
    let (dealt_damage, kind) = if !can_counter(me.initiative) {
        (0, OutcomeKind::CounterNoInitiative)
    } else if enemy.action.is_strike() {
        (COUNTER_REPRISAL, OutcomeKind::CounterLanded)
    } else {
        (0, OutcomeKind::CounterWhiffed)
    };

    ActionOutcome {
        energy_delta: -1,
        initiative_delta: -3,
        dealt_damage,
        kind,
    }
}
