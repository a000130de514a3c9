//! Environment oracles injected into the game rules.
//!
//! The rules in this crate never reach for a global RNG or hard-coded
//! content tables. Randomness comes from [`RollProvider`] and flavor content
//! from [`ContentOracle`], so callers can substitute seeded generators and
//! custom catalogs.

mod content;
mod rolls;

pub use content::{ContentOracle, Template};
pub use rolls::{PcgRolls, RollProvider, SequenceRolls};
