//! Static fill-level bar rendering.

use super::span;
use crate::color::{self, Color, interpolate};
use crate::frame::Frame;

const AMBER_STOP: Color = Color::new(255, 200, 0);
const ORANGE_STOP: Color = Color::new(255, 100, 0);

fn level_color(level: f32) -> Color {
    if level > 0.8 {
        interpolate(color::LIME_GREEN, color::BRIGHT_GREEN, (level - 0.8) * 5.0)
    } else if level > 0.6 {
        interpolate(AMBER_STOP, color::LIME_GREEN, (level - 0.6) * 5.0)
    } else if level > 0.4 {
        interpolate(ORANGE_STOP, AMBER_STOP, (level - 0.4) * 5.0)
    } else if level > 0.2 {
        interpolate(color::RED, ORANGE_STOP, (level - 0.2) * 5.0)
    } else {
        color::RED
    }
}

/// Render a fill level (0-1) as a red-to-green bar across the strip.
///
/// Each segment sees the level shifted by its distance from the strip
/// center, so the bar appears to fill up from one end.
#[allow(clippy::cast_precision_loss)]
pub fn fill_level_bar(frame: &mut Frame, level: f32) {
    let center = span(frame.len()) / 2.0;
    for index in 0..frame.len() {
        let segment_level = (level + (index as f32 - center) * 0.1).clamp(0.0, 1.0);
        frame.set_color(index, level_color(segment_level));
    }
}
