//! Input Mapping: raw key events mapped to frame-loop actions.
//!
//! # Invariants
//! - Mapping is pure and synchronous; it never blocks and never draws.
//! - Only the quit key produces an action; everything else is a no-op.

pub mod action;

pub use action::{Action, Key, KeyState, action_for};

pub fn crate_info() -> &'static str {
    "trigon-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
