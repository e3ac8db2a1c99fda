//! Frame pacing without async/await or platform timers.
//!
//! The caller owns the loop and the sleeping; the pacer only does the
//! deadline arithmetic.

use embassy_time::{Duration, Instant};

/// Target frame rate of the update loop.
pub const DEFAULT_FPS: u32 = 62;

/// Default frame duration based on target FPS (16 ms).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Timing information for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-cadence frame pacer with drift correction.
///
/// Falling behind by more than two frames resets the schedule to `now`
/// instead of bursting through the backlog.
pub struct FramePacer {
    next_frame: Instant,
    frame_duration: Duration,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::with_frame_duration(DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(frame_duration: Duration) -> Self {
        Self {
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Account for one frame at `now` and compute the next deadline.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}
