//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use duel_core::{DuelConfig, SpriteTable};

use crate::loaders::{ConfigLoader, LoadResult, SpriteLoader};

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── duel.toml
/// └── sprites.ron
/// ```
///
/// Either file may be absent; the `_or_default` loaders then fall back to the
/// built-in values.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "duel.toml";
    pub const SPRITES_FILE: &'static str = "sprites.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(crate::bundled_data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load match configuration from `duel.toml`.
    pub fn load_config(&self) -> LoadResult<DuelConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    /// Load the sprite table from `sprites.ron`.
    pub fn load_sprites(&self) -> LoadResult<SpriteTable> {
        SpriteLoader::load(&self.data_dir.join(Self::SPRITES_FILE))
    }

    /// Like [`Self::load_config`], but a missing file yields the default.
    pub fn load_config_or_default(&self) -> LoadResult<DuelConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(DuelConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Like [`Self::load_sprites`], but a missing file yields the default.
    pub fn load_sprites_or_default(&self) -> LoadResult<SpriteTable> {
        let path = self.data_dir.join(Self::SPRITES_FILE);
        if !path.exists() {
            return Ok(SpriteTable::default());
        }
        SpriteLoader::load(&path)
    }
}
