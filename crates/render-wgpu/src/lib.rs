//! wgpu render backend: GPU bring-up and the triangle pipeline.
//!
//! # Invariants
//! - Exactly one pipeline, one vertex buffer, and one uniform buffer exist
//!   per process run; they drop together when the renderer does.
//! - The vertex buffer is static: uploaded once, never rewritten.
//! - Initialization failures are fatal. Nothing here retries.

mod context;
mod gpu;
mod shaders;

pub use context::{GpuContext, GpuInitError};
pub use gpu::TriangleRenderer;
