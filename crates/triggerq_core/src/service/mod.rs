//! Service layer: the validation boundary in front of the repositories.
//!
//! # Responsibility
//! - Validate and normalize incoming request data before persistence.
//! - Compose repository reads into richer response shapes.
//!
//! # Invariants
//! - Validation failures never reach the repository layer.
//! - Service APIs never bypass repository transaction contracts.

pub mod question_service;
