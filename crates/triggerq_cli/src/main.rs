//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `triggerq_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("triggerq_core ping={}", triggerq_core::ping());
    println!("triggerq_core version={}", triggerq_core::core_version());
}
