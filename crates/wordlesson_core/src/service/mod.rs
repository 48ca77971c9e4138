//! Core use-case services.
//!
//! # Responsibility
//! - Turn UI events (typed text, file contents, toggles, drags) into
//!   validated state changes.
//! - Keep rendering and persistence collaborators decoupled from state.

pub mod chip_service;
pub mod group_registry;
pub mod staging;
