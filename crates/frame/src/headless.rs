use trigon_common::Extent;
use trigon_render::FrameRenderer;

use crate::{FrameContext, FrameLoop};

/// Scripted context for bounded, GPU-free runs.
///
/// The clock is virtual: it advances by a fixed step each call to
/// [`advance`](Self::advance), and the close flag raises itself once the
/// configured number of frames has elapsed. Like the real flag, it is
/// monotonic.
#[derive(Debug)]
pub struct HeadlessContext {
    extent: Extent,
    step_seconds: f32,
    frame_limit: u64,
    frames_elapsed: u64,
}

impl HeadlessContext {
    pub fn new(extent: Extent, step_seconds: f32, frame_limit: u64) -> Self {
        Self {
            extent,
            step_seconds,
            frame_limit,
            frames_elapsed: 0,
        }
    }

    /// Advance the virtual clock by one frame step.
    pub fn advance(&mut self) {
        self.frames_elapsed += 1;
    }
}

impl FrameContext for HeadlessContext {
    fn framebuffer_extent(&self) -> Extent {
        self.extent
    }

    fn elapsed_seconds(&self) -> f32 {
        self.frames_elapsed as f32 * self.step_seconds
    }

    fn close_requested(&self) -> bool {
        self.frames_elapsed >= self.frame_limit
    }
}

/// Drive a frame loop to termination against a scripted context.
///
/// Returns one renderer output per issued frame. The context's close flag
/// bounds the run, observed by the loop exactly like the windowed flag.
pub fn run_bounded<R: FrameRenderer>(
    frame_loop: &mut FrameLoop,
    ctx: &mut HeadlessContext,
    renderer: &R,
) -> Vec<R::Output> {
    frame_loop.begin();
    let mut outputs = Vec::new();
    while let Some(frame) = frame_loop.next_frame(ctx) {
        outputs.push(renderer.render_frame(&frame));
        ctx.advance();
    }
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoopPhase;
    use trigon_render::DebugTextRenderer;

    #[test]
    fn bounded_run_renders_exactly_the_requested_frames() {
        let mut frame_loop = FrameLoop::new();
        let mut ctx = HeadlessContext::new(Extent::new(640, 480), 1.0 / 60.0, 5);

        let outputs = run_bounded(&mut frame_loop, &mut ctx, &DebugTextRenderer::new());

        assert_eq!(outputs.len(), 5);
        assert_eq!(frame_loop.frames_issued(), 5);
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
    }

    #[test]
    fn zero_frame_limit_renders_nothing() {
        let mut frame_loop = FrameLoop::new();
        let mut ctx = HeadlessContext::new(Extent::new(640, 480), 1.0 / 60.0, 0);

        let outputs = run_bounded(&mut frame_loop, &mut ctx, &DebugTextRenderer::new());

        assert!(outputs.is_empty());
        assert_eq!(frame_loop.frames_issued(), 0);
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
    }

    #[test]
    fn virtual_clock_advances_by_fixed_steps() {
        let mut frame_loop = FrameLoop::new();
        let mut ctx = HeadlessContext::new(Extent::new(100, 100), 0.5, 3);
        frame_loop.begin();

        let first = frame_loop.next_frame(&ctx).unwrap();
        ctx.advance();
        let second = frame_loop.next_frame(&ctx).unwrap();

        assert_eq!(first.elapsed_seconds, 0.0);
        assert_eq!(second.elapsed_seconds, 0.5);
    }

    #[test]
    fn degenerate_extent_still_yields_frames() {
        let mut frame_loop = FrameLoop::new();
        let mut ctx = HeadlessContext::new(Extent::new(640, 0), 1.0 / 60.0, 2);

        let outputs = run_bounded(&mut frame_loop, &mut ctx, &DebugTextRenderer::new());

        assert_eq!(outputs.len(), 2);
        assert!(outputs[0].contains("aspect=1.0000"));
    }
}
