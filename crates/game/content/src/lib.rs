//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the duel's data files:
//! - Match setup and narration (data-driven via TOML)
//! - Sprite sheet layout (data-driven via RON)
//!
//! Content is consumed by the runtime and frontends and never changes the
//! rules themselves; those are fixed in `duel-core`.
//!
//! All loaders use duel-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, SpriteLoader};

use std::path::PathBuf;

/// Directory holding the data files shipped with this crate.
pub fn bundled_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
