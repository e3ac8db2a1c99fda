//! Single-active-effect scheduler.
//!
//! At most one effect runs at a time; starting a new one cancels the
//! current one in the same call, so there is never a tick where two effects
//! interleave writes. The scheduler owns the staging [`Frame`] and is the
//! only place that talks to the [`DeviceSink`].
//!
//! Time always comes in from the caller as an [`Instant`]; the scheduler
//! never reads a clock. That makes cancellation synchronous and turns a
//! stale tick (one scheduled before a stop) into a harmless no-op.

use embassy_time::Instant;
use log::{debug, info, warn};

use crate::effect::{EffectId, EffectRequest, EffectSlot, Finale, Progress, StartError};
use crate::frame::{Frame, GroupCommand, ZoneCommand};
use crate::segment::SegmentMap;
use crate::sink::{DeviceSink, SinkError};

struct ActiveEffect {
    id: EffectId,
    slot: EffectSlot,
    started: Instant,
}

/// A terminal frame waiting for its delivery time.
///
/// Tagged with the generation that produced it; a start or stop bumps the
/// generation and orphans the finale, so a superseded effect can never
/// overwrite its successor's output.
struct PendingFinale {
    generation: u32,
    due: Instant,
    frame: Frame,
}

/// Drives one effect at a time against a device sink.
pub struct EffectScheduler {
    segments: SegmentMap,
    active: Option<ActiveEffect>,
    finale: Option<PendingFinale>,
    generation: u32,
    frame: Frame,
}

impl EffectScheduler {
    pub fn new(segments: SegmentMap) -> Self {
        let frame = Frame::new(segments.count());
        Self {
            segments,
            active: None,
            finale: None,
            generation: 0,
            frame,
        }
    }

    /// Whether an effect is currently running.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the running effect, if any.
    pub fn current_effect(&self) -> Option<EffectId> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn segments(&self) -> &SegmentMap {
        &self.segments
    }

    /// Start an effect, replacing whatever is running.
    ///
    /// Parameters are validated before any state changes; on `Err` the
    /// previous effect keeps running untouched. Tick #0 renders and is
    /// delivered synchronously; a sink failure on that first frame is
    /// logged but does not abort the start (the next tick retries).
    pub fn start<S: DeviceSink>(
        &mut self,
        request: EffectRequest,
        now: Instant,
        sink: &mut S,
    ) -> Result<(), StartError> {
        let id = request.id();
        let slot = request.build()?;

        self.stop();
        info!("starting effect {}", id.as_str());
        self.active = Some(ActiveEffect {
            id,
            slot,
            started: now,
        });

        if let Err(error) = self.tick(now, sink) {
            warn!("first frame of {} not delivered: {}", id.as_str(), error);
        }
        Ok(())
    }

    /// Stop the running effect and cancel any pending finale.
    ///
    /// Idempotent, never touches the device; the lights keep showing
    /// whatever frame was committed last.
    pub fn stop(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.finale = None;
        if let Some(active) = self.active.take() {
            info!("stopping effect {}", active.id.as_str());
        }
    }

    /// Stop and blank every zone.
    pub fn shutdown<S: DeviceSink>(&mut self, sink: &mut S) -> Result<(), SinkError> {
        self.stop();
        sink.clear_all()?;
        sink.commit()
    }

    /// Advance the running effect to `now` and deliver one frame.
    ///
    /// When idle this only checks for a due finale. A tick dated before the
    /// effect started is a stale callback from a superseded schedule and is
    /// ignored.
    pub fn tick<S: DeviceSink>(&mut self, now: Instant, sink: &mut S) -> Result<(), SinkError> {
        self.deliver_due_finale(now, sink)?;

        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        let Some(elapsed) = now.checked_duration_since(active.started) else {
            return Ok(());
        };

        self.frame.reset();
        let progress = active.slot.render(elapsed, &mut self.frame);
        let id = active.id;

        if let Progress::Finished(finale) = progress {
            debug!("effect {} finished", id.as_str());
            self.active = None;
            if let Some(Finale { delay, frame }) = finale {
                self.finale = Some(PendingFinale {
                    generation: self.generation,
                    due: now + delay,
                    frame,
                });
            }
        }

        Self::write_frame(&self.segments, &self.frame, sink)
    }

    /// Write an externally built frame, e.g. a static bar display.
    pub fn deliver_frame<S: DeviceSink>(
        &self,
        frame: &Frame,
        sink: &mut S,
    ) -> Result<(), SinkError> {
        Self::write_frame(&self.segments, frame, sink)
    }

    fn deliver_due_finale<S: DeviceSink>(
        &mut self,
        now: Instant,
        sink: &mut S,
    ) -> Result<(), SinkError> {
        match self.finale.take() {
            None => Ok(()),
            // Orphaned by a later start/stop; never delivered.
            Some(finale) if finale.generation != self.generation => Ok(()),
            Some(finale) if finale.due > now => {
                self.finale = Some(finale);
                Ok(())
            }
            Some(finale) => {
                debug!("delivering finale frame");
                Self::write_frame(&self.segments, &finale.frame, sink)
            }
        }
    }

    /// Write one staged frame: the group command first, then per-zone
    /// commands in ascending segment order, then a single commit.
    ///
    /// Writes are best-effort; the first error is remembered and returned
    /// but the remaining zones and the commit are still attempted, so one
    /// bad zone does not hold back the rest of the frame.
    fn write_frame<S: DeviceSink>(
        segments: &SegmentMap,
        frame: &Frame,
        sink: &mut S,
    ) -> Result<(), SinkError> {
        if frame.group().is_none() && frame.iter().next().is_none() {
            return Ok(());
        }

        let mut first_error = None;
        let mut record = |result: Result<(), SinkError>| {
            if let Err(error) = result {
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        };

        if let Some(group) = frame.group() {
            record(match group {
                GroupCommand::Rgb(color) => sink.set_group_color(color),
                GroupCommand::ColorTemperature { mireds, brightness } => {
                    sink.set_group_color_temperature(mireds, brightness)
                }
                GroupCommand::Xy { x, y, brightness } => sink.set_group_xy(x, y, brightness),
            });
        }

        for (index, command) in frame.iter() {
            let Some(zone) = segments.id_at(index) else {
                continue;
            };
            record(match command {
                ZoneCommand::Rgb(color) => sink.set_zone_color(zone, color),
                ZoneCommand::ColorTemperature { mireds, brightness } => {
                    sink.set_zone_color_temperature(zone, mireds, brightness)
                }
                ZoneCommand::Xy { x, y, brightness } => sink.set_zone_xy(zone, x, y, brightness),
                ZoneCommand::Brightness(brightness) => sink.set_zone_brightness(zone, brightness),
            });
        }

        record(sink.commit());
        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
