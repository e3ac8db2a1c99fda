//! Device sink boundary.
//!
//! The engine stages per-zone or whole-group color commands through this
//! trait and commits them as one frame per tick. Transport, pairing and
//! authentication live behind the implementation; the engine only sees
//! staging calls, `commit` and a status query.

use thiserror::Error;

use crate::color::Color;
use crate::segment::ZoneId;

/// Failure reported by the device sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SinkError {
    /// A command or commit could not be delivered. One dropped frame is not
    /// fatal to a running effect.
    #[error("command could not be delivered")]
    Transport,
    /// The connection to the device is gone.
    #[error("device connection lost")]
    Disconnected,
}

/// Snapshot of the sink's connection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkStatus {
    pub connected: bool,
    pub streaming: bool,
}

/// Abstract lighting device accepting staged color commands.
///
/// Staging calls buffer state; nothing is guaranteed to reach the device
/// until [`commit`](DeviceSink::commit) flushes the staged state as one
/// atomic frame. A [`Color`] carrying an alpha must be blended over the
/// currently staged value for that zone; an opaque color replaces it.
pub trait DeviceSink {
    fn set_zone_color(&mut self, zone: ZoneId, color: Color) -> Result<(), SinkError>;

    fn set_all_zones_color(&mut self, color: Color) -> Result<(), SinkError>;

    /// Stage off (opaque black) for one zone.
    fn clear_zone(&mut self, zone: ZoneId) -> Result<(), SinkError>;

    /// Stage off for every zone.
    fn clear_all(&mut self) -> Result<(), SinkError>;

    /// Stage one color for the whole group.
    fn set_group_color(&mut self, color: Color) -> Result<(), SinkError>;

    /// Stage a group color temperature in mireds (153-500) with brightness 0-1.
    fn set_group_color_temperature(&mut self, mireds: u16, brightness: f32)
    -> Result<(), SinkError>;

    /// Stage a group CIE-xy chromaticity with brightness 0-1.
    fn set_group_xy(&mut self, x: f32, y: f32, brightness: f32) -> Result<(), SinkError>;

    fn set_zone_color_temperature(
        &mut self,
        zone: ZoneId,
        mireds: u16,
        brightness: f32,
    ) -> Result<(), SinkError>;

    fn set_zone_xy(&mut self, zone: ZoneId, x: f32, y: f32, brightness: f32)
    -> Result<(), SinkError>;

    /// Adjust only the brightness of a zone, keeping its staged color.
    fn set_zone_brightness(&mut self, zone: ZoneId, brightness: f32) -> Result<(), SinkError>;

    /// Flush all staged state to the device as one frame.
    fn commit(&mut self) -> Result<(), SinkError>;

    fn status(&self) -> SinkStatus;
}
