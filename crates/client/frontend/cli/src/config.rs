//! CLI configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for the hot-seat terminal client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `duel.toml` and `sprites.ron`; bundled data when unset.
    pub data_dir: Option<PathBuf>,
    /// Number of history lines printed after each round.
    pub log_lines: usize,
    pub halt_on_knockout: bool,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_lines: 10,
            halt_on_knockout: false,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Content directory (default: bundled data)
    /// - `DUEL_LOG_LINES` - History lines shown per round (default: 10)
    /// - `DUEL_HALT_ON_KNOCKOUT` - Stop once a fighter is down (default: false;
    ///   empty, `1`, `true`, `yes`, `on` enable it)
    /// - `DUEL_SESSION_ID` - Log session name (default: auto-generated)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            data_dir: lookup("DUEL_DATA_DIR").map(PathBuf::from),
            session_id: lookup("DUEL_SESSION_ID"),
            ..Self::default()
        };

        if let Some(lines) = read_var::<usize>(&lookup, "DUEL_LOG_LINES") {
            config.log_lines = lines;
        }

        if let Some(halt) = lookup("DUEL_HALT_ON_KNOCKOUT").and_then(|v| parse_flag(&v)) {
            config.halt_on_knockout = halt;
        }

        config
    }
}

/// Boolean env flag. A bare (empty) variable counts as set; unrecognized
/// values are ignored so a typo never flips the default.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
