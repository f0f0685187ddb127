//! Human-readable round narration.
//!
//! Resolution produces typed [`OutcomeKind`] values; this module is the only
//! place that turns them into text. Wording is data, the resolver never
//! inspects it.

use crate::action::Action;
use crate::combat::OutcomeKind;
use crate::state::FighterId;

/// Language used for labels and log lines.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Marker appended after a round when separators are enabled.
pub const ROUND_SEPARATOR: &str = "----------";

/// Renders summary, outcome and separator lines for one locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Narrator {
    pub locale: Locale,
    /// Append [`ROUND_SEPARATOR`] as the last line of every round.
    pub separator: bool,
}

impl Narrator {
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            separator: false,
        }
    }

    #[must_use]
    pub const fn with_separator(mut self, separator: bool) -> Self {
        self.separator = separator;
        self
    }

    /// First line of a round: both fighters' chosen action labels.
    pub fn summary(&self, a: Action, b: Action) -> String {
        let (first, second) = (FighterId::A.name(self.locale), FighterId::B.name(self.locale));
        let (label_a, label_b) = (a.label(self.locale), b.label(self.locale));
        match self.locale {
            Locale::En => format!("{first} chose {label_a}, {second} chose {label_b}"),
            Locale::Ru => format!("{first} выбрал {label_a}, {second} выбрал {label_b}"),
        }
    }

    /// Line describing one fighter's outcome for the round.
    pub fn outcome(&self, who: FighterId, kind: &OutcomeKind) -> String {
        let name = who.name(self.locale);
        match self.locale {
            Locale::En => Self::outcome_en(name, kind),
            Locale::Ru => Self::outcome_ru(name, kind),
        }
    }

    pub const fn separator_line(&self) -> Option<&'static str> {
        if self.separator {
            Some(ROUND_SEPARATOR)
        } else {
            None
        }
    }

    fn outcome_en(name: &str, kind: &OutcomeKind) -> String {
        let zone = |z: &crate::action::Zone| z.label(Locale::En);
        match kind {
            OutcomeKind::Waiting => format!("{name}: waiting..."),
            OutcomeKind::StrikeLanded { zone: z, damage } => {
                format!("{name}: clean strike to the {}. Damage: {damage}", zone(z))
            }
            OutcomeKind::StrikeBlocked { zone: z, damage } => {
                format!("{name}: strike to the {} was blocked. Damage: {damage}", zone(z))
            }
            OutcomeKind::StrikeCountered { zone: z } => {
                format!(
                    "{name}: parried! Strike to the {} was deflected, took 1 damage.",
                    zone(z)
                )
            }
            OutcomeKind::GuardHeld { zone: z } => {
                format!("{name}: defended the {} successfully. +2 energy", zone(z))
            }
            OutcomeKind::Guarded { zone: z } => {
                format!("{name}: guarding the {}. +1 energy", zone(z))
            }
            OutcomeKind::CounterLanded => {
                format!("{name}: parry! Riposte, the opponent takes 1 damage.")
            }
            OutcomeKind::CounterNoInitiative => {
                format!("{name}: not enough initiative to parry!")
            }
            OutcomeKind::CounterWhiffed => format!("{name}: parry, but there was no attack."),
        }
    }

    fn outcome_ru(name: &str, kind: &OutcomeKind) -> String {
        let zone = |z: &crate::action::Zone| z.label(Locale::Ru);
        match kind {
            OutcomeKind::Waiting => format!("{name}: ожидание..."),
            OutcomeKind::StrikeLanded { zone: z, damage } => {
                format!("{name}: успешная атака в {}. Урон: {damage}", zone(z))
            }
            OutcomeKind::StrikeBlocked { zone: z, damage } => {
                format!("{name}: атака в {} блокирована. Урон: {damage}", zone(z))
            }
            OutcomeKind::StrikeCountered { zone: z } => {
                format!(
                    "{name}: парирование! Атака в {} отражена, получил 1 урон.",
                    zone(z)
                )
            }
            OutcomeKind::GuardHeld { zone: z } => {
                format!("{name}: успешно защитил {}. +2 энергии", zone(z))
            }
            OutcomeKind::Guarded { zone: z } => format!("{name}: защищает {}. +1 энергия", zone(z)),
            OutcomeKind::CounterLanded => {
                format!("{name}: парирование! Контратака, противник получает 1 урон.")
            }
            OutcomeKind::CounterNoInitiative => {
                format!("{name}: недостаточно инициативы для парирования!")
            }
            OutcomeKind::CounterWhiffed => format!("{name}: парирование, но атаки не было."),
        }
    }
}
