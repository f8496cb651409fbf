//! Transform Computation: model rotation, orthographic projection, and the
//! combined MVP matrix.
//!
//! # Invariants
//! - Every function here is pure: same inputs, same matrix, no state.
//! - The model matrix is a rotation only; it never translates or scales.
//! - The projection depends on the aspect ratio alone.

mod mvp;

pub use mvp::{ROTATION_AXIS, model_matrix, mvp_matrix, projection_matrix};

pub fn crate_info() -> &'static str {
    "trigon-transform v0.1.0"
}
