//! Domain model for lesson word assignment and scheduling.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep invariant checks next to the data they protect.
//!
//! # Invariants
//! - Every committed word is identified by a stable `WordId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod group;
pub mod lesson;
pub mod schedule;
pub mod word;
