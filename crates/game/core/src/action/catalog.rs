//! Ordered action catalog consumed by selection controls and log rendering.

use super::{Action, ParseActionError, Zone};
use crate::narrative::Locale;

/// Stable string ids of the seven selectable actions, in catalog order.
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
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionId {
    HitHead,
    HitBody,
    HitLegs,
    BlockHead,
    BlockBody,
    BlockLegs,
    Parry,
}

impl ActionId {
    /// All ids in catalog order.
    pub const ALL: [ActionId; 7] = [
        ActionId::HitHead,
        ActionId::HitBody,
        ActionId::HitLegs,
        ActionId::BlockHead,
        ActionId::BlockBody,
        ActionId::BlockLegs,
        ActionId::Parry,
    ];

    pub const fn action(self) -> Action {
        match self {
            ActionId::HitHead => Action::Strike(Zone::Head),
            ActionId::HitBody => Action::Strike(Zone::Body),
            ActionId::HitLegs => Action::Strike(Zone::Legs),
            ActionId::BlockHead => Action::Guard(Zone::Head),
            ActionId::BlockBody => Action::Guard(Zone::Body),
            ActionId::BlockLegs => Action::Guard(Zone::Legs),
            ActionId::Parry => Action::Counter,
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                ActionId::HitHead => "Head strike",
                ActionId::HitBody => "Body strike",
                ActionId::HitLegs => "Leg strike",
                ActionId::BlockHead => "Head guard",
                ActionId::BlockBody => "Body guard",
                ActionId::BlockLegs => "Leg guard",
                ActionId::Parry => "Parry",
            },
            Locale::Ru => match self {
                ActionId::HitHead => "Удар в голову",
                ActionId::HitBody => "Удар в корпус",
                ActionId::HitLegs => "Удар в ноги",
                ActionId::BlockHead => "Защита головы",
                ActionId::BlockBody => "Защита корпуса",
                ActionId::BlockLegs => "Защита ног",
                ActionId::Parry => "Парирование",
            },
        }
    }
}

/// One row of the selection control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// 1-based position shown next to the label.
    pub position: usize,
    pub id: ActionId,
    pub action: Action,
}

impl CatalogEntry {
    pub const fn label(&self, locale: Locale) -> &'static str {
        self.id.label(locale)
    }
}

/// Returns the catalog in its fixed order.
pub fn catalog() -> impl Iterator<Item = CatalogEntry> {
    ActionId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, id)| CatalogEntry {
            position: index + 1,
            id,
            action: id.action(),
        })
}

impl Action {
    /// Looks up an action by its 1-based catalog position; `0` selects no
    /// action.
    pub fn from_position(position: usize) -> Result<Action, ParseActionError> {
        match position {
            0 => Ok(Action::None),
            n => ActionId::ALL
                .get(n - 1)
                .map(|id| id.action())
                .ok_or(ParseActionError::PositionOutOfRange(n)),
        }
    }
}
