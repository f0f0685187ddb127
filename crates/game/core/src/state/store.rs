//! Fighter State Store: the two current fighters and their pending choices.

use super::fighter::{Fighter, FighterId};
use crate::action::Action;

/// Holds both fighters. No behaviour beyond read and replace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterStore {
    fighters: [Fighter; 2],
}

impl FighterStore {
    pub const fn new(a: Fighter, b: Fighter) -> Self {
        Self { fighters: [a, b] }
    }

    /// Both fighters seeded with the same starting state.
    pub const fn seeded(initial: Fighter) -> Self {
        Self::new(initial, initial)
    }

    pub fn get(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    /// Records the action `id` will take in the upcoming round.
    pub fn set_action(&mut self, id: FighterId, action: Action) {
        self.fighters[id.index()].action = action;
    }

    pub fn replace(&mut self, id: FighterId, fighter: Fighter) {
        self.fighters[id.index()] = fighter;
    }

    /// Immutable snapshot of both fighters, A first.
    pub const fn snapshot(&self) -> (Fighter, Fighter) {
        (self.fighters[0], self.fighters[1])
    }

    pub fn reset(&mut self, initial: Fighter) {
        self.fighters = [initial; 2];
    }
}
