//! Glue code tying content, the runtime, and terminal I/O together.
use anyhow::{Context, Result};

use duel_content::ContentFactory;
use duel_core::{FighterId, SpriteTable};
use duel_runtime::{Runtime, RuntimeConfig, RuntimeError};

use crate::config::CliConfig;
use crate::input::StdinActionProvider;
use crate::render::{render_match, status_line};

pub struct CliApp {
    config: CliConfig,
    sprites: SpriteTable,
    runtime: Runtime,
}

impl CliApp {
    /// Loads content and starts the runtime. Must run inside a tokio runtime.
    pub fn build(config: CliConfig) -> Result<Self> {
        let factory = config
            .data_dir
            .clone()
            .map_or_else(ContentFactory::bundled, ContentFactory::new);

        let duel = factory
            .load_config_or_default()
            .context("failed to load duel config")?;
        let sprites = factory
            .load_sprites_or_default()
            .context("failed to load sprite table")?;
        let locale = duel.locale;

        tracing::info!(data_dir = %factory.data_dir().display(), ?locale, "content loaded");

        let seat = StdinActionProvider::new(locale);
        let runtime = Runtime::builder()
            .config(RuntimeConfig {
                duel,
                halt_on_knockout: config.halt_on_knockout,
                ..RuntimeConfig::default()
            })
            .provider(FighterId::A, seat.clone())
            .provider(FighterId::B, seat)
            .build();

        Ok(Self {
            config,
            sprites,
            runtime,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("CLI client starting...");

        let initial = self.runtime.current_match().await?;
        println!("{}", render_match(&initial, &self.sprites, self.config.log_lines));
        println!("(number, id or empty line to choose; q to quit)");

        let mut announced = initial.status().is_decided();

        loop {
            match self.runtime.step().await {
                Ok(report) => {
                    let duel = self.runtime.current_match().await?;
                    println!();
                    println!("{}", render_match(&duel, &self.sprites, self.config.log_lines));

                    if !announced {
                        if let Some(line) = status_line(report.status, duel.narrator().locale) {
                            println!("\n{line}");
                            announced = true;
                        }
                    }
                }
                Err(RuntimeError::InputClosed) => {
                    tracing::info!("input closed, leaving");
                    break;
                }
                Err(RuntimeError::MatchDecided { status }) => {
                    tracing::info!(?status, "match decided, halting");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        self.runtime.shutdown().await?;
        Ok(())
    }
}
