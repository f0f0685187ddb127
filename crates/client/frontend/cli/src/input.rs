//! Hot-seat action input read from stdin.
use std::io::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use duel_core::{Action, FighterId, Locale, Match, ParseActionError, catalog};
use duel_runtime::{ActionProvider, Result, RuntimeError};

/// What a line of player input asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Select(Action),
    Quit,
}

/// Parses one line: a catalog number, a catalog id, empty for no action, or
/// `q` to quit.
pub fn parse_choice(line: &str) -> std::result::Result<Choice, ParseActionError> {
    let text = line.trim().to_ascii_lowercase();
    match text.as_str() {
        "q" | "quit" => Ok(Choice::Quit),
        _ => match text.parse::<usize>() {
            Ok(position) => Action::from_position(position).map(Choice::Select),
            Err(_) => text.parse::<Action>().map(Choice::Select),
        },
    }
}

/// Menu listing every catalog entry with its number.
pub fn menu(locale: Locale) -> String {
    let mut menu = String::from("  0) nothing");
    for entry in catalog() {
        menu.push_str(&format!("\n  {}) {} [{}]", entry.position, entry.label(locale), entry.id));
    }
    menu
}

/// Both fighters type into the same terminal, one after the other.
///
/// Clones share one buffered reader, so no line is lost between seats.
#[derive(Clone)]
pub struct StdinActionProvider {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
    locale: Locale,
}

impl StdinActionProvider {
    pub fn new(locale: Locale) -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
            locale,
        }
    }
}

#[async_trait]
impl ActionProvider for StdinActionProvider {
    async fn provide_action(&self, fighter: FighterId, state: &Match) -> Result<Action> {
        let mut lines = self.lines.lock().await;
        let current = state.fighter(fighter).action;

        println!("\n{} (round {}):", fighter.name(self.locale), state.round() + 1);
        println!("{}", menu(self.locale));

        loop {
            print!("choice (last: {})> ", current.label(self.locale));
            std::io::stdout()
                .flush()
                .map_err(|err| RuntimeError::Provider {
                    fighter,
                    message: err.to_string(),
                })?;

            let line = lines
                .next_line()
                .await
                .map_err(|err| RuntimeError::Provider {
                    fighter,
                    message: err.to_string(),
                })?
                .ok_or(RuntimeError::InputClosed)?;

            match parse_choice(&line) {
                Ok(Choice::Select(action)) => {
                    tracing::debug!(%fighter, "choice entered");
                    return Ok(action);
                }
                Ok(Choice::Quit) => return Err(RuntimeError::InputClosed),
                Err(err) => println!("{err}, try again"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::Zone;

    #[test]
    fn numbers_pick_catalog_positions() {
        assert_eq!(parse_choice("1"), Ok(Choice::Select(Action::Strike(Zone::Head))));
        assert_eq!(parse_choice(" 7 "), Ok(Choice::Select(Action::Counter)));
        assert_eq!(parse_choice("0"), Ok(Choice::Select(Action::None)));
        assert_eq!(
            parse_choice("8"),
            Err(ParseActionError::PositionOutOfRange(8))
        );
    }

    #[test]
    fn ids_and_empty_lines_are_accepted() {
        assert_eq!(
            parse_choice("block_legs"),
            Ok(Choice::Select(Action::Guard(Zone::Legs)))
        );
        assert_eq!(parse_choice("HIT_BODY"), Ok(Choice::Select(Action::Strike(Zone::Body))));
        assert_eq!(parse_choice(""), Ok(Choice::Select(Action::None)));
    }

    #[test]
    fn q_quits_and_junk_is_rejected() {
        assert_eq!(parse_choice("q"), Ok(Choice::Quit));
        assert!(matches!(parse_choice("kick"), Err(ParseActionError::Unknown(_))));
    }

    #[test]
    fn menu_lists_all_entries() {
        let menu = menu(Locale::En);
        assert_eq!(menu.lines().count(), 8);
        assert!(menu.contains("7) "));
        assert!(menu.contains("[parry]"));
    }
}
