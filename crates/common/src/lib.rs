//! Shared types: framebuffer extents and per-frame state.
//!
//! # Invariants
//! - `FrameState` is transient: rebuilt from scratch every iteration,
//!   never cached across frames.
//! - Aspect ratio is always finite; degenerate extents yield a sentinel.

pub mod types;

pub use types::{Extent, FrameState};
