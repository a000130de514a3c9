//! Static flavor content and loaders for the dungeon crawler.
//!
//! This crate houses the built-in content catalog (dungeon and room
//! templates, monster name pools, artifact name pools) and provides loaders
//! for RON/TOML override files:
//! - Content catalog overrides (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the generators through
//! [`delve_core::ContentOracle`] and never appears in game state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::Catalog;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory};
