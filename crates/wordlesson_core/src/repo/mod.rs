//! Word storage abstractions.
//!
//! # Responsibility
//! - Hold the canonical committed word records for one lesson.
//! - Keep uniqueness checks out of service orchestration.
//!
//! # Invariants
//! - Store writes must enforce `Word::validate()` before mutation.

pub mod word_store;
