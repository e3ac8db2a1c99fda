//! High-level facade tying the scheduler, pacer and device sink together.

use embassy_time::Instant;
use log::{info, warn};

use crate::color::Color;
use crate::effect::{EffectId, EffectRequest, StartError, fill_level_bar};
use crate::frame::Frame;
use crate::pacer::{FramePacer, FrameResult};
use crate::scheduler::EffectScheduler;
use crate::segment::SegmentMap;
use crate::sink::{DeviceSink, SinkError};

/// Owns the device sink and drives one effect at a time over it.
///
/// The caller runs the loop: call [`tick`](Self::tick) with the current
/// time, sleep for the returned duration, repeat. Everything else is
/// synchronous command-style API.
pub struct LightController<S: DeviceSink> {
    sink: S,
    scheduler: EffectScheduler,
    pacer: FramePacer,
}

impl<S: DeviceSink> LightController<S> {
    pub fn new(sink: S, segments: SegmentMap) -> Self {
        Self {
            sink,
            scheduler: EffectScheduler::new(segments),
            pacer: FramePacer::new(),
        }
    }

    /// Verify the sink is usable and blank all zones.
    pub fn initialize(&mut self) -> Result<(), SinkError> {
        let status = self.sink.status();
        if !status.connected {
            warn!("device sink not connected");
            return Err(SinkError::Disconnected);
        }
        self.sink.clear_all()?;
        self.sink.commit()?;
        info!(
            "controller ready, {} segments, streaming: {}",
            self.scheduler.segments().count(),
            status.streaming
        );
        Ok(())
    }

    /// Stop everything and leave the lights dark.
    pub fn shutdown(&mut self) -> Result<(), SinkError> {
        info!("controller shutting down");
        self.scheduler.shutdown(&mut self.sink)
    }

    /// Start an effect, replacing the running one. `now` is the start of
    /// the effect's timeline.
    pub fn start_effect(&mut self, request: EffectRequest, now: Instant) -> Result<(), StartError> {
        self.scheduler.start(request, now, &mut self.sink)
    }

    /// Stop the running effect without touching the lights.
    pub fn stop_current_effect(&mut self) {
        self.scheduler.stop();
    }

    /// Set every zone to one color immediately.
    ///
    /// Does not stop a running effect; the effect's next tick will paint
    /// over this. Useful as a backdrop for sparse effects.
    pub fn set_solid_color(&mut self, color: Color) -> Result<(), SinkError> {
        self.sink.set_all_zones_color(color)?;
        self.sink.commit()
    }

    /// Stop the running effect and blank all zones.
    pub fn clear_all_lights(&mut self) -> Result<(), SinkError> {
        self.scheduler.shutdown(&mut self.sink)
    }

    /// Show a fill level (0-100) as a red-to-green bar.
    pub fn percentage_bar(&mut self, percentage: f32) -> Result<(), SinkError> {
        let mut frame = Frame::new(self.scheduler.segments().count());
        fill_level_bar(&mut frame, percentage / 100.0);
        self.scheduler.deliver_frame(&frame, &mut self.sink)
    }

    /// Advance the running effect by one frame and compute pacing.
    ///
    /// A transport hiccup drops one frame and is only logged; a lost
    /// connection stops the effect.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        match self.scheduler.tick(now, &mut self.sink) {
            Ok(()) => {}
            Err(SinkError::Disconnected) => {
                warn!("device disconnected, stopping current effect");
                self.scheduler.stop();
            }
            Err(error) => {
                warn!("frame not delivered: {error}");
            }
        }
        self.pacer.tick(now)
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn current_effect(&self) -> Option<EffectId> {
        self.scheduler.current_effect()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
