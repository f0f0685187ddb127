//! Sprite sheet layout loader.

use std::path::Path;

use duel_core::SpriteTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the sprite key table from RON files.
pub struct SpriteLoader;

impl SpriteLoader {
    /// Load a sprite table from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a SpriteTable
    pub fn load(path: &Path) -> LoadResult<SpriteTable> {
        let content = read_file(path)?;
        let table: SpriteTable = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sprite table RON: {}", e))?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{ActionId, SpriteId, SpriteKey};
    use std::io::Write;

    #[test]
    fn bundled_sheet_matches_builtin_table() {
        let path = crate::bundled_data_dir().join("sprites.ron");
        assert_eq!(SpriteLoader::load(&path).unwrap(), SpriteTable::default());
    }

    #[test]
    fn custom_sheet_overrides_strips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut table = SpriteTable::default();
        table.actions[ActionId::Parry as usize] = SpriteKey::new(7, 1, 2);
        let text = ron::to_string(&table).unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let loaded = SpriteLoader::load(file.path()).unwrap();
        assert_eq!(
            loaded.get(SpriteId::Action(ActionId::Parry)),
            SpriteKey::new(7, 1, 2)
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SpriteLoader::load(Path::new("/nonexistent/sprites.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sprites.ron"));
    }
}
