//! Liftoff Core - quest requirement validation and progress scoring.
//!
//! This crate holds the quest business rules for Liftoff. It performs no I/O
//! of its own: quest definitions and progress snapshots arrive through the
//! repository traits, and the tier-one prerequisite lookup is injected through
//! [`quests::TierCompletionChecker`].

pub mod errors;
pub mod quests;

pub use quests::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
