use trigon_common::{Extent, FrameState};
use trigon_transform::mvp_matrix;

/// Lifecycle of the frame loop controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Resources are not ready yet; no frames may be issued.
    NotStarted,
    /// Frames are issued until the close flag reads true.
    Running,
    /// The close flag was observed. Terminal: the phase never reverts.
    Terminated,
}

/// What the loop asks of its window (or stand-in) each iteration.
///
/// Implementations wrap the live window or a scripted context; the loop
/// itself never reaches for globals.
pub trait FrameContext {
    /// Current framebuffer size in physical pixels.
    fn framebuffer_extent(&self) -> Extent;

    /// Monotonic seconds since the context's clock started.
    fn elapsed_seconds(&self) -> f32;

    /// Close flag. Monotonic: once this reads true it stays true.
    fn close_requested(&self) -> bool;
}

/// Frame loop controller: issues per-iteration frame state until closed.
///
/// One iteration is: close check, extent query, aspect derivation, clock
/// sample, transform computation. Draw submission and presentation belong
/// to the caller; event draining belongs to the windowing layer.
#[derive(Debug)]
pub struct FrameLoop {
    phase: LoopPhase,
    frames_issued: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::NotStarted,
            frames_issued: 0,
        }
    }

    /// Enter `Running`. Called once, after window and GPU resources exist.
    /// Calling again, or after termination, has no effect.
    pub fn begin(&mut self) {
        if self.phase == LoopPhase::NotStarted {
            self.phase = LoopPhase::Running;
            tracing::debug!("frame loop running");
        }
    }

    /// Produce the next frame's state, or `None` once the loop is over.
    ///
    /// The close flag is read first, before any other context query. A flag
    /// already raised when this is called means zero further frames.
    pub fn next_frame(&mut self, ctx: &impl FrameContext) -> Option<FrameState> {
        if self.phase != LoopPhase::Running {
            return None;
        }
        if ctx.close_requested() {
            self.phase = LoopPhase::Terminated;
            tracing::info!(frames = self.frames_issued, "frame loop terminated");
            return None;
        }

        let extent = ctx.framebuffer_extent();
        let aspect_ratio = extent.aspect_ratio();
        let elapsed_seconds = ctx.elapsed_seconds();
        let mvp = mvp_matrix(elapsed_seconds, aspect_ratio);

        let index = self.frames_issued;
        self.frames_issued += 1;

        Some(FrameState {
            index,
            elapsed_seconds,
            extent,
            aspect_ratio,
            mvp,
        })
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Frames issued so far across the whole run.
    pub fn frames_issued(&self) -> u64 {
        self.frames_issued
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeContext {
        extent: Extent,
        elapsed: f32,
        close: bool,
    }

    impl FrameContext for FakeContext {
        fn framebuffer_extent(&self) -> Extent {
            self.extent
        }

        fn elapsed_seconds(&self) -> f32 {
            self.elapsed
        }

        fn close_requested(&self) -> bool {
            self.close
        }
    }

    fn ctx() -> FakeContext {
        FakeContext {
            extent: Extent::new(640, 480),
            elapsed: 0.0,
            close: false,
        }
    }

    #[test]
    fn issues_nothing_before_begin() {
        let mut frame_loop = FrameLoop::new();
        assert!(frame_loop.next_frame(&ctx()).is_none());
        assert_eq!(frame_loop.phase(), LoopPhase::NotStarted);
        assert_eq!(frame_loop.frames_issued(), 0);
    }

    #[test]
    fn begin_enters_running_once() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        assert_eq!(frame_loop.phase(), LoopPhase::Running);
        frame_loop.begin();
        assert_eq!(frame_loop.phase(), LoopPhase::Running);
    }

    #[test]
    fn close_before_first_iteration_issues_zero_frames() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let mut c = ctx();
        c.close = true;

        assert!(frame_loop.next_frame(&c).is_none());
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
        assert_eq!(frame_loop.frames_issued(), 0);
    }

    #[test]
    fn issues_frames_with_increasing_indices() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let c = ctx();

        for expected in 0..3 {
            let frame = frame_loop.next_frame(&c).unwrap();
            assert_eq!(frame.index, expected);
        }
        assert_eq!(frame_loop.phase(), LoopPhase::Running);
        assert_eq!(frame_loop.frames_issued(), 3);
    }

    #[test]
    fn termination_is_permanent() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let mut c = ctx();

        frame_loop.next_frame(&c).unwrap();
        c.close = true;
        assert!(frame_loop.next_frame(&c).is_none());

        // Even a lowered flag cannot revive a terminated loop.
        c.close = false;
        assert!(frame_loop.next_frame(&c).is_none());
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
        assert_eq!(frame_loop.frames_issued(), 1);
    }

    #[test]
    fn begin_cannot_restart_a_terminated_loop() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let mut c = ctx();
        c.close = true;
        frame_loop.next_frame(&c);

        frame_loop.begin();
        assert_eq!(frame_loop.phase(), LoopPhase::Terminated);
        assert!(frame_loop.next_frame(&c).is_none());
    }

    #[test]
    fn zero_height_extent_completes_with_sentinel_aspect() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let mut c = ctx();
        c.extent = Extent::new(640, 0);

        let frame = frame_loop.next_frame(&c).unwrap();
        assert!(frame.extent.is_degenerate());
        assert_eq!(frame.aspect_ratio, 1.0);
        assert_eq!(frame_loop.phase(), LoopPhase::Running);
    }

    #[test]
    fn frame_carries_the_transform_for_its_inputs() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.begin();
        let mut c = ctx();
        c.extent = Extent::new(800, 400);
        c.elapsed = 2.0;

        let frame = frame_loop.next_frame(&c).unwrap();
        assert_eq!(frame.elapsed_seconds, 2.0);
        assert_eq!(frame.aspect_ratio, 2.0);
        assert_eq!(frame.mvp, mvp_matrix(2.0, 2.0));
    }
}
