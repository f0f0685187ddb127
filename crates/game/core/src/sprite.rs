//! Sprite Key Table for the rendering collaborator.
//!
//! The resolver never reads these values; they are part of each action's
//! identity and are exposed so a renderer can pick the right animation strip
//! on a shared sprite sheet.

use crate::action::{Action, ActionId};
use crate::state::Fighter;

/// Location of an animation strip on the sprite sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteKey {
    pub row: u32,
    pub start_frame: u32,
    pub frame_count: u32,
}

impl SpriteKey {
    pub const fn new(row: u32, start_frame: u32, frame_count: u32) -> Self {
        Self {
            row,
            start_frame,
            frame_count,
        }
    }
}

/// Every animation the renderer can show: one per catalog action plus the
/// synthetic idle, win and lose poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpriteId {
    Action(ActionId),
    Idle,
    Win,
    Lose,
}

impl SpriteId {
    /// Pose for `fighter` given the opponent's state.
    ///
    /// Defeat takes precedence over victory, victory over the selected
    /// action, and a fighter without a selection idles.
    pub fn for_fighter(fighter: &Fighter, opponent: &Fighter) -> Self {
        if fighter.is_defeated() {
            SpriteId::Lose
        } else if opponent.is_defeated() {
            SpriteId::Win
        } else {
            Self::for_action(fighter.action)
        }
    }

    pub fn for_action(action: Action) -> Self {
        action.id().map_or(SpriteId::Idle, SpriteId::Action)
    }

    /// Stable id used in data files and by renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::Action(id) => <&'static str>::from(*id),
            SpriteId::Idle => "idle",
            SpriteId::Win => "win",
            SpriteId::Lose => "lose",
        }
    }
}

impl core::fmt::Display for SpriteId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from [`SpriteId`] to its strip on the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteTable {
    /// Indexed by [`ActionId`] catalog order.
    pub actions: [SpriteKey; 7],
    pub idle: SpriteKey,
    pub win: SpriteKey,
    pub lose: SpriteKey,
}

impl SpriteTable {
    /// Layout of the bundled character sheet.
    pub const DEFAULT: SpriteTable = SpriteTable {
        actions: [
            SpriteKey::new(2, 0, 6), // hit_head
            SpriteKey::new(2, 9, 5), // hit_body
            SpriteKey::new(0, 9, 7), // hit_legs
            SpriteKey::new(3, 0, 2), // block_head
            SpriteKey::new(3, 0, 2), // block_body
            SpriteKey::new(3, 0, 2), // block_legs
            SpriteKey::new(4, 9, 3), // parry
        ],
        idle: SpriteKey::new(0, 3, 3),
        win: SpriteKey::new(5, 0, 4),
        lose: SpriteKey::new(3, 3, 5),
    };

    pub fn get(&self, id: SpriteId) -> SpriteKey {
        match id {
            SpriteId::Action(action) => self.actions[action as usize],
            SpriteId::Idle => self.idle,
            SpriteId::Win => self.win,
            SpriteId::Lose => self.lose,
        }
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Zone;

    #[test]
    fn default_table_matches_sheet_layout() {
        let table = SpriteTable::default();
        assert_eq!(
            table.get(SpriteId::Action(ActionId::HitBody)),
            SpriteKey::new(2, 9, 5)
        );
        assert_eq!(
            table.get(SpriteId::Action(ActionId::Parry)),
            SpriteKey::new(4, 9, 3)
        );
        assert_eq!(table.get(SpriteId::Lose), SpriteKey::new(3, 3, 5));
    }

    #[test]
    fn defeat_beats_victory_beats_action() {
        let down = Fighter::new(0, 5, 3).with_action(Action::Counter);
        let up = Fighter::new(30, 5, 3).with_action(Action::Strike(Zone::Head));

        assert_eq!(SpriteId::for_fighter(&down, &up), SpriteId::Lose);
        assert_eq!(SpriteId::for_fighter(&up, &down), SpriteId::Win);
        assert_eq!(SpriteId::for_fighter(&down, &down), SpriteId::Lose);
    }

    #[test]
    fn no_selection_idles() {
        let fighter = Fighter::INITIAL;
        assert_eq!(SpriteId::for_fighter(&fighter, &fighter), SpriteId::Idle);
        assert_eq!(SpriteId::Idle.to_string(), "idle");
        assert_eq!(
            SpriteId::for_action(Action::Guard(Zone::Legs)).to_string(),
            "block_legs"
        );
    }
}
