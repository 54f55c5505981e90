pub mod performance;
pub mod roster;
pub mod snapshot;
