//! Damage and eligibility rules.

/// Base damage of every strike before energy scaling.
pub const STRIKE_BASE_DAMAGE: i32 = 10;

/// Energy beyond this value adds nothing to the base scaling.
pub const STRIKE_ENERGY_CAP: u32 = 5;

/// Bonus applied when the attacker's energy is at least [`HIGH_ENERGY`].
pub const HIGH_ENERGY_BONUS: i32 = 2;
pub const HIGH_ENERGY: u32 = 7;

/// Penalty applied when the attacker's energy is at most [`LOW_ENERGY`].
pub const LOW_ENERGY_PENALTY: i32 = 2;
pub const LOW_ENERGY: u32 = 3;

/// Damage removed by a guard on the struck zone.
pub const BLOCK_REDUCTION: i32 = 7;

/// Pre-round initiative required for a counter to take effect.
pub const COUNTER_MIN_INITIATIVE: u32 = 3;

/// Damage a successful counter deals back to the striker.
pub const COUNTER_REPRISAL: u32 = 1;

/// Raw strike damage for an attacker with `energy`.
///
/// # Formula
///
/// ```text
/// damage = 10 + min(energy, 5)
/// if energy >= 7: damage += 2
/// if energy <= 3: damage -= 2
/// ```
///
/// The two adjustments are mutually exclusive.
pub fn strike_damage(energy: u32) -> i32 {
    let mut damage = STRIKE_BASE_DAMAGE + energy.min(STRIKE_ENERGY_CAP) as i32;
    if energy >= HIGH_ENERGY {
        damage += HIGH_ENERGY_BONUS;
    }
    if energy <= LOW_ENERGY {
        damage -= LOW_ENERGY_PENALTY;
    }
    damage
}

/// Whether a fighter with this pre-round initiative may counter.
pub const fn can_counter(initiative: u32) -> bool {
    initiative >= COUNTER_MIN_INITIATIVE
}
