//! Production roll provider backed by the `rand` crate.

use rand::Rng;

use delve_core::RollProvider;

/// [`RollProvider`] drawing from the thread-local OS-seeded generator.
///
/// Each call borrows the current thread's generator, so a shared instance
/// is safe across concurrent sessions without any locking of our own.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngRolls;

impl RollProvider for ThreadRngRolls {
    fn roll(&self, sides: u32) -> u32 {
        rand::rng().random_range(1..=sides.max(1))
    }

    fn uniform(&self) -> f64 {
        rand::rng().random()
    }
}
