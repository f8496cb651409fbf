//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers consume frame state; they never produce or mutate it.
//! - Output is a function of the frame handed in, nothing else.

mod renderer;

pub use renderer::{DebugTextRenderer, FrameRenderer};

pub fn crate_info() -> &'static str {
    "trigon-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
