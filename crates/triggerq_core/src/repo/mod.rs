//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the catalog.
//! - Isolate SQLite query details from service/boundary orchestration.
//!
//! # Invariants
//! - Every tracked mutation snapshots pre-change state into history and
//!   bumps the live version inside one transaction.
//! - Repositories refuse to operate on unmigrated connections.

pub mod question_repo;
