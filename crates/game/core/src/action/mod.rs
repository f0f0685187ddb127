//! Action domain - the fixed catalog of duel moves.
//!
//! Every round each fighter privately picks one [`Action`]. The catalog is
//! small and closed, so actions are modelled as a sum type rather than the
//! string ids the selection control and data files use. Conversion between
//! the two lives here:
//!
//! - [`Action::from_str`] is strict and rejects unknown ids
//! - [`Action::from_id_lossy`] never fails and maps unknown ids to
//!   [`Action::None`], which is how resolution treats malformed input
//!
//! # Module Structure
//!
//! - `catalog`: ordered catalog ids and display labels
//! - `error`: parse errors for action ids

pub mod catalog;
pub mod error;

pub use catalog::{ActionId, CatalogEntry, catalog};
pub use error::ParseActionError;

use core::str::FromStr;

use crate::narrative::Locale;

/// Body zone targeted by a strike or protected by a guard.
///
/// Strikes and guards only interact when their zones match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Zone {
    Head,
    Body,
    Legs,
}

impl Zone {
    /// Zone name as it appears inside narrative lines.
    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Zone::Head) => "head",
            (Locale::En, Zone::Body) => "body",
            (Locale::En, Zone::Legs) => "legs",
            (Locale::Ru, Zone::Head) => "голову",
            (Locale::Ru, Zone::Body) => "корпус",
            (Locale::Ru, Zone::Legs) => "ноги",
        }
    }
}

/// A fighter's choice for the upcoming round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// No action selected; the fighter waits.
    #[default]
    None,
    /// Offensive action against one zone.
    Strike(Zone),
    /// Defensive action protecting one zone.
    Guard(Zone),
    /// Initiative-gated parry ("parry" in the catalog).
    Counter,
}

impl Action {
    /// Parses a catalog id, falling back to [`Action::None`] for anything
    /// unrecognized.
    pub fn from_id_lossy(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    /// Catalog id for this action, or `None` when nothing is selected.
    pub const fn id(self) -> Option<ActionId> {
        match self {
            Action::None => None,
            Action::Strike(Zone::Head) => Some(ActionId::HitHead),
            Action::Strike(Zone::Body) => Some(ActionId::HitBody),
            Action::Strike(Zone::Legs) => Some(ActionId::HitLegs),
            Action::Guard(Zone::Head) => Some(ActionId::BlockHead),
            Action::Guard(Zone::Body) => Some(ActionId::BlockBody),
            Action::Guard(Zone::Legs) => Some(ActionId::BlockLegs),
            Action::Counter => Some(ActionId::Parry),
        }
    }

    pub const fn is_strike(self) -> bool {
        matches!(self, Action::Strike(_))
    }

    /// Display label used by the selection control and the round summary.
    pub const fn label(self, locale: Locale) -> &'static str {
        match self.id() {
            Some(id) => id.label(locale),
            None => match locale {
                Locale::En => "nothing",
                Locale::Ru => "ничего",
            },
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Action::None);
        }
        trimmed
            .parse::<ActionId>()
            .map(ActionId::action)
            .map_err(|_| ParseActionError::Unknown(trimmed.to_owned()))
    }
}

impl From<ActionId> for Action {
    fn from(id: ActionId) -> Self {
        id.action()
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.id() {
            Some(id) => f.write_str(id.as_ref()),
            None => f.write_str("none"),
        }
    }
}
