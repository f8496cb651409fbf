//! Frame Loop Controller: per-iteration orchestration and lifecycle.
//!
//! # Invariants
//! - The close flag is read once per iteration, before any other work.
//! - `Terminated` is terminal: zero frames are issued after it.
//! - Frame state is recomputed every iteration, never cached across frames.

mod clock;
mod frame_loop;
mod headless;

pub use clock::StartClock;
pub use frame_loop::{FrameContext, FrameLoop, LoopPhase};
pub use headless::{HeadlessContext, run_bounded};

pub fn crate_info() -> &'static str {
    "trigon-frame v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("frame"));
    }
}
