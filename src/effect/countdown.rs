//! Countdown effects: pulses that speed up as time runs out, ending in a
//! white flash and a delayed settle onto the final color.

use core::f32::consts::PI;

use embassy_time::Duration;
use libm::{fmodf, sinf};

use super::{Effect, Finale, Progress, SegmentColorPairs, elapsed_ms, progress_of};
use crate::color::{self, Color, interpolate};
use crate::frame::Frame;

/// Transition color between the start and end thirds of a countdown.
const MID: Color = Color::new(255, 200, 0);

/// How long the terminal white flash stays before the end color settles.
const SETTLE_DELAY: Duration = Duration::from_millis(200);

fn band_color(start: Color, end: Color, time_left: f32) -> Color {
    if time_left > 0.66 {
        start
    } else if time_left > 0.33 {
        interpolate(start, MID, (0.66 - time_left) * 3.0)
    } else {
        interpolate(MID, end, (0.33 - time_left) * 3.0)
    }
}

/// Pulse period shrinks linearly from 2.2 s to 200 ms as time runs out.
fn pulse_period_ms(time_left: f32) -> f32 {
    2000.0 * time_left + 200.0
}

/// Whole-strip countdown: a pulse that accelerates while the color walks
/// from the start color through amber to the end color.
#[derive(Debug, Clone)]
pub struct CountdownPulse {
    total: Duration,
    start_color: Color,
    end_color: Color,
}

impl CountdownPulse {
    pub fn new(total: Duration, start_color: Color, end_color: Color) -> Self {
        Self {
            total,
            start_color,
            end_color,
        }
    }
}

impl Effect for CountdownPulse {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.total {
            frame.set_all_color(color::WHITE);
            let mut settle = Frame::new(frame.len());
            settle.set_all_color(self.end_color);
            return Progress::Finished(Some(Finale {
                delay: SETTLE_DELAY,
                frame: settle,
            }));
        }

        let time_left = 1.0 - progress_of(elapsed, self.total);
        let period = pulse_period_ms(time_left);
        let phase = fmodf(elapsed_ms(elapsed), period) / period;
        let brightness = 0.2 + 0.8 * sinf(phase * PI);
        let color = band_color(self.start_color, self.end_color, time_left);
        frame.set_all_color(color.scaled(brightness));
        Progress::Running
    }
}

/// Countdown with an independent color pair per segment and a phase offset
/// between segments. Segments without a configured pair are left alone.
#[derive(Debug, Clone)]
pub struct SegmentedCountdown {
    total: Duration,
    pairs: SegmentColorPairs,
}

impl SegmentedCountdown {
    pub fn new(total: Duration, pairs: SegmentColorPairs) -> Self {
        Self { total, pairs }
    }
}

impl Effect for SegmentedCountdown {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.total {
            frame.set_all_color(color::WHITE);
            let mut settle = Frame::new(frame.len());
            for (index, (_, end)) in self.pairs.iter().enumerate() {
                settle.set_color(index, *end);
            }
            return Progress::Finished(Some(Finale {
                delay: SETTLE_DELAY,
                frame: settle,
            }));
        }

        let time_left = 1.0 - progress_of(elapsed, self.total);
        let period = pulse_period_ms(time_left);
        for index in 0..frame.len() {
            let Some((start, end)) = self.pairs.get(index).copied() else {
                continue;
            };
            let phase_offset = index as f32 * 0.33 * PI;
            let phase = fmodf(elapsed_ms(elapsed), period) / period + phase_offset;
            let brightness = 0.2 + 0.8 * sinf(phase * PI);
            let color = band_color(start, end, time_left);
            frame.set_color(index, color.scaled(brightness));
        }
        Progress::Running
    }
}
