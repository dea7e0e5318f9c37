//! Domain model for the trigger-questions catalog.
//!
//! # Responsibility
//! - Define the canonical live record, its history snapshot shape, and the
//!   source-shorthand enumeration shared by all layers.
//!
//! # Invariants
//! - A live `Question` carries a version strictly greater than every
//!   snapshot recorded for it.
//! - History snapshots are append-only and never mutated after creation.

pub mod question;
