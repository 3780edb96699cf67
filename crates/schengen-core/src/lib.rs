//! # Schengen Core
//!
//! This crate provides the rolling-window day accounting engine for the
//! Schengen Area 90/180 rule. It computes a traveler's compliance status
//! from their visit history, validates hypothetical future trips against
//! the rule, and searches for safe future travel windows.
//!
//! Every operation is synchronous and pure: callers supply visit records,
//! a reference date, and a membership lookup, and get back plain
//! serializable values. Nothing is cached, mutated, or persisted here.

/// Injected Schengen membership lookup
mod membership;
pub use membership::*;

/// Data model for visits, status snapshots, and trip validation results
mod types;
pub use types::*;

/// Rolling-window status computation
mod status;
pub use status::*;

/// Future-trip validation against the 90/180 rule
mod trip;
pub use trip::*;

/// Safe travel-date search
mod search;
pub use search::*;
