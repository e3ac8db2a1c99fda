//! Per-tick staging buffer.
//!
//! Effects render into a [`Frame`] instead of touching the device sink
//! directly. The scheduler then writes the staged commands in ascending
//! segment order and commits once, so a frame always reaches the device
//! atomically. A zone left unset in a tick is simply not re-staged and the
//! device keeps its previous state for it.

use heapless::Vec;

use crate::color::{BLACK, Color};
use crate::segment::MAX_ZONES;

/// One staged command for a single zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneCommand {
    Rgb(Color),
    ColorTemperature { mireds: u16, brightness: f32 },
    Xy { x: f32, y: f32, brightness: f32 },
    /// Adjust brightness only, keeping the zone's staged color.
    Brightness(f32),
}

/// One staged command addressing the whole group at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupCommand {
    Rgb(Color),
    ColorTemperature { mireds: u16, brightness: f32 },
    Xy { x: f32, y: f32, brightness: f32 },
}

/// Staged commands for one tick: at most one command per zone plus an
/// optional whole-group command (written before the per-zone ones).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    zones: Vec<Option<ZoneCommand>, MAX_ZONES>,
    group: Option<GroupCommand>,
}

impl Frame {
    /// Create an empty frame for `count` segments (capped at [`MAX_ZONES`]).
    pub fn new(count: usize) -> Self {
        let mut zones = Vec::new();
        for _ in 0..count.min(MAX_ZONES) {
            let _ = zones.push(None);
        }
        Self { zones, group: None }
    }

    /// Number of segments this frame covers.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Drop all staged commands, keeping the segment count.
    pub fn reset(&mut self) {
        for slot in &mut self.zones {
            *slot = None;
        }
        self.group = None;
    }

    /// Stage a command for one segment. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, command: ZoneCommand) {
        if let Some(slot) = self.zones.get_mut(index) {
            *slot = Some(command);
        }
    }

    /// Stage an RGB color for one segment.
    pub fn set_color(&mut self, index: usize, color: Color) {
        self.set(index, ZoneCommand::Rgb(color));
    }

    /// Stage the same command for every segment.
    pub fn set_all(&mut self, command: ZoneCommand) {
        for slot in &mut self.zones {
            *slot = Some(command);
        }
    }

    /// Stage the same RGB color for every segment.
    pub fn set_all_color(&mut self, color: Color) {
        self.set_all(ZoneCommand::Rgb(color));
    }

    /// Stage off (opaque black) for one segment.
    pub fn clear(&mut self, index: usize) {
        self.set_color(index, BLACK);
    }

    /// Stage off for every segment.
    pub fn clear_all(&mut self) {
        self.set_all_color(BLACK);
    }

    /// Stage a whole-group command.
    pub fn set_group(&mut self, command: GroupCommand) {
        self.group = Some(command);
    }

    /// The staged group command, if any.
    pub fn group(&self) -> Option<GroupCommand> {
        self.group
    }

    /// The staged command for one segment, if any.
    pub fn zone(&self, index: usize) -> Option<ZoneCommand> {
        self.zones.get(index).copied().flatten()
    }

    /// Iterate staged per-zone commands in ascending segment order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ZoneCommand)> + '_ {
        self.zones
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|command| (index, command)))
    }
}
