use glam::Mat4;

/// Framebuffer size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Degenerate extents yield the sentinel ratio 1.0
    /// instead of dividing by zero, so every frame carries a finite
    /// transform even when the surface cannot be drawn to.
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// True when either dimension is zero (e.g. a minimized window).
    /// Such extents cannot back a configured surface.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Per-iteration values for one rendered frame.
///
/// Produced by the frame loop at the top of each iteration and consumed by
/// renderers. Holds everything a renderer needs, so renderers never reach
/// back into the window or the clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Position of this frame in the run, starting at 0.
    pub index: u64,
    /// Seconds since the loop's clock started.
    pub elapsed_seconds: f32,
    /// Framebuffer extent sampled for this iteration.
    pub extent: Extent,
    /// Aspect ratio derived from `extent`.
    pub aspect_ratio: f32,
    /// Combined model-view-projection matrix for this frame.
    pub mvp: Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_eq!(Extent::new(640, 480).aspect_ratio(), 640.0 / 480.0);
        assert_eq!(Extent::new(800, 400).aspect_ratio(), 2.0);
    }

    #[test]
    fn zero_height_yields_sentinel_ratio() {
        let e = Extent::new(640, 0);
        assert!(e.is_degenerate());
        assert_eq!(e.aspect_ratio(), 1.0);
    }

    #[test]
    fn zero_width_yields_sentinel_ratio() {
        let e = Extent::new(0, 480);
        assert!(e.is_degenerate());
        assert_eq!(e.aspect_ratio(), 1.0);
    }

    #[test]
    fn normal_extent_is_not_degenerate() {
        assert!(!Extent::new(1, 1).is_degenerate());
        assert!(!Extent::new(640, 480).is_degenerate());
    }
}
