//! Plain-text rendering of the match for the terminal.
use duel_core::{Fighter, FighterId, Locale, Match, MatchStatus, SpriteId, SpriteTable};

const HP_BAR_WIDTH: u32 = 20;

/// Fixed-width bar, e.g. `[#####-----]` for 5 of 10.
pub fn bar(value: u32, max: u32, width: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        value.min(max) * width / max
    };
    format!(
        "[{}{}]",
        "#".repeat(filled as usize),
        "-".repeat((width - filled) as usize)
    )
}

fn fighter_line(
    id: FighterId,
    fighter: &Fighter,
    opponent: &Fighter,
    sprites: &SpriteTable,
    locale: Locale,
) -> String {
    let sprite = SpriteId::for_fighter(fighter, opponent);
    let key = sprites.get(sprite);
    format!(
        "{:<9} HP {} {:>3}/{}  EN {} {:>2}/{}  IN {} {}/{}  sprite {} (row {}, frames {}+{})",
        id.name(locale),
        bar(fighter.hp, Fighter::MAX_HP, HP_BAR_WIDTH),
        fighter.hp,
        Fighter::MAX_HP,
        bar(fighter.energy, Fighter::MAX_ENERGY, Fighter::MAX_ENERGY),
        fighter.energy,
        Fighter::MAX_ENERGY,
        bar(fighter.initiative, Fighter::MAX_INITIATIVE, Fighter::MAX_INITIATIVE),
        fighter.initiative,
        Fighter::MAX_INITIATIVE,
        sprite,
        key.row,
        key.start_frame,
        key.frame_count,
    )
}

/// Both fighters' stats plus the newest `log_lines` lines of history.
pub fn render_match(duel: &Match, sprites: &SpriteTable, log_lines: usize) -> String {
    let locale = duel.narrator().locale;
    let (a, b) = duel.store().snapshot();

    let mut out = vec![
        fighter_line(FighterId::A, &a, &b, sprites, locale),
        fighter_line(FighterId::B, &b, &a, sprites, locale),
    ];

    if log_lines > 0 && !duel.log().is_empty() {
        out.push(String::new());
        out.extend(
            duel.log()
                .newest_first()
                .take(log_lines)
                .map(|line| format!("  {line}")),
        );
    }

    out.join("\n")
}

/// Announcement for a decided match, `None` while the fight goes on.
pub fn status_line(status: MatchStatus, locale: Locale) -> Option<String> {
    match status {
        MatchStatus::Ongoing => None,
        MatchStatus::Won(winner) => Some(match locale {
            Locale::En => format!("{} wins!", winner.name(locale)),
            Locale::Ru => format!("{} победил!", winner.name(locale)),
        }),
        MatchStatus::Draw => Some(match locale {
            Locale::En => "Both fighters are down. Draw!".to_owned(),
            Locale::Ru => "Оба бойца повержены. Ничья!".to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Action, DuelConfig, Zone};

    #[test]
    fn bars_scale_to_width() {
        assert_eq!(bar(5, 10, 10), "[#####-----]");
        assert_eq!(bar(100, 100, 20), format!("[{}]", "#".repeat(20)));
        assert_eq!(bar(0, 5, 5), "[-----]");
        assert_eq!(bar(0, 0, 4), "[----]");
    }

    #[test]
    fn fresh_match_shows_idle_fighters_and_no_history() {
        let text = render_match(&Match::default(), &SpriteTable::default(), 10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Fighter A"));
        assert!(lines[0].contains("100/100"));
        assert!(lines[1].contains("sprite idle (row 0, frames 3+3)"));
    }

    #[test]
    fn history_is_newest_first_and_truncated() {
        let mut duel = Match::default();
        duel.select(FighterId::A, Action::Strike(Zone::Head));
        duel.play_round();
        duel.select(FighterId::A, Action::Counter);
        duel.play_round();

        let text = render_match(&duel, &SpriteTable::default(), 2);
        let history: Vec<&str> = text.lines().skip(3).collect();

        assert_eq!(history.len(), 2);
        assert!(history[0].contains("Fighter A chose Parry"));
    }

    #[test]
    fn knockout_switches_sprites() {
        let config = DuelConfig::default();
        let duel = Match::from_fighters(&config, Fighter::new(40, 5, 3), Fighter::new(0, 5, 3));

        let text = render_match(&duel, &SpriteTable::default(), 0);

        assert!(text.lines().next().is_some_and(|l| l.contains("sprite win")));
        assert!(text.lines().nth(1).is_some_and(|l| l.contains("sprite lose")));
        assert_eq!(
            status_line(duel.status(), Locale::En).as_deref(),
            Some("Fighter A wins!")
        );
    }
}
