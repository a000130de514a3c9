//! Turn-to-turn run state carried inside a session snapshot.

mod snapshot;

pub use snapshot::RunSnapshot;
