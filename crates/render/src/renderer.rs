use trigon_common::FrameState;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes the state of one frame and produces output. It never
/// computes transforms and never touches loop state; frame data flows one
/// way, from the loop into the renderer.
pub trait FrameRenderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given frame state.
    fn render_frame(&self, frame: &FrameState) -> Self::Output;
}

/// Debug text renderer: drives the frame loop without a GPU.
///
/// Produces one human-readable line per frame. Useful for CLI output,
/// logging, and exercising the loop in tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl FrameRenderer for DebugTextRenderer {
    type Output = String;

    fn render_frame(&self, frame: &FrameState) -> String {
        let col = frame.mvp.x_axis;
        format!(
            "frame {:>4}  t={:.3}s  {}x{}  aspect={:.4}  mvp.x=({:.4}, {:.4}, {:.4}, {:.4})",
            frame.index,
            frame.elapsed_seconds,
            frame.extent.width,
            frame.extent.height,
            frame.aspect_ratio,
            col.x,
            col.y,
            col.z,
            col.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;
    use trigon_common::Extent;

    fn frame() -> FrameState {
        FrameState {
            index: 3,
            elapsed_seconds: 0.5,
            extent: Extent::new(640, 480),
            aspect_ratio: 640.0 / 480.0,
            mvp: Mat4::IDENTITY,
        }
    }

    #[test]
    fn line_carries_frame_fields() {
        let output = DebugTextRenderer::new().render_frame(&frame());
        assert!(output.contains("frame"));
        assert!(output.contains("640x480"));
        assert!(output.contains("t=0.500s"));
    }

    #[test]
    fn same_frame_renders_the_same_line() {
        let renderer = DebugTextRenderer::new();
        let f = frame();
        assert_eq!(renderer.render_frame(&f), renderer.render_frame(&f));
    }

    #[test]
    fn line_reflects_the_matrix_column() {
        let mut f = frame();
        f.mvp = Mat4::IDENTITY * 2.0;
        let output = DebugTextRenderer::new().render_frame(&f);
        assert!(output.contains("mvp.x=(2.0000"));
    }
}
