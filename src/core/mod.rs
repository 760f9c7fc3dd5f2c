// src/core/mod.rs

// The collection-and-aggregation pipeline. Nothing in here touches the terminal.

/// Shared data structures: collector results, findings and ownership records.
pub mod models;

/// Failure taxonomy used at the collector boundaries.
pub mod error;

/// Message locale selection.
pub mod locale;

/// Turns raw operator input into a `Target`.
pub mod target;

/// HTTP and DNS capabilities behind traits.
pub mod transport;

/// The ordered heuristic rule table.
pub mod knowledge_base;

/// The collectors and the session orchestrator.
pub mod scanner;

/// Report assembly and persistence.
pub mod report;
