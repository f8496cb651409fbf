use std::time::Instant;

/// Monotonic elapsed-time source for the frame loop.
///
/// Starts counting at construction. Successive reads never decrease.
#[derive(Debug, Clone)]
pub struct StartClock {
    started: Instant,
}

impl StartClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds since the clock was created.
    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

impl Default for StartClock {
    fn default() -> Self {
        Self::new()
    }
}
