//! Data-driven weapon definitions and loaders.
//!
//! Weapon definitions describe clip names, sound cues, blend windows, and the
//! fire rate of a [`weapon_core::WeaponConfig`]. They are read from RON or
//! TOML files and never appear in controller state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, WeaponLoader};

/// Directory holding the weapon definitions shipped with this crate.
pub fn bundled_weapons_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weapons")
}
