//! Continuous wave effects: periodic patterns that run until a bound or an
//! explicit stop.

use core::f32::consts::PI;

use embassy_time::Duration;
use libm::sinf;

use super::{Effect, Progress, elapsed_ms, past_run_time, phase_of, progress_of, span};
use crate::color::{Color, hsv_to_rgb, interpolate};
use crate::frame::{Frame, GroupCommand, ZoneCommand};

/// A gradient scrolling across the strip, wrapping at the ends.
#[derive(Debug, Clone)]
pub struct GradientWave {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl GradientWave {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
        }
    }
}

impl Effect for GradientWave {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let phase = phase_of(elapsed, self.period);
        let span = span(frame.len());
        for index in 0..frame.len() {
            let wave_pos = (index as f32 / span + phase) % 1.0;
            frame.set_color(index, interpolate(self.color1, self.color2, wave_pos));
        }
        Progress::Running
    }
}

/// A brightness pulse radiating from the strip center outward.
#[derive(Debug, Clone)]
pub struct Ripple {
    color: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl Ripple {
    pub fn new(color: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color,
            period,
            run_time,
        }
    }
}

impl Effect for Ripple {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let phase = phase_of(elapsed, self.period);
        let center = span(frame.len()) / 2.0;
        for index in 0..frame.len() {
            let distance = (index as f32 - center).abs() / center.max(1.0);
            let brightness = (1.0 - (phase - distance).abs()).max(0.0);
            frame.set_color(index, self.color.scaled(brightness));
        }
        Progress::Running
    }
}

/// A static gradient breathing between 30% and 100% brightness.
#[derive(Debug, Clone)]
pub struct Breathing {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl Breathing {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
        }
    }
}

impl Effect for Breathing {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let phase = phase_of(elapsed, self.period);
        let brightness = 0.3 + 0.7 * (sinf(phase * PI * 2.0) * 0.5 + 0.5);
        let span = span(frame.len());
        for index in 0..frame.len() {
            let gradient_pos = index as f32 / span;
            let color = interpolate(self.color1, self.color2, gradient_pos);
            frame.set_color(index, color.scaled(brightness));
        }
        Progress::Running
    }
}

/// A full-hue rainbow scrolling across the strip.
#[derive(Debug, Clone)]
pub struct RainbowWave {
    period: Duration,
    run_time: Option<Duration>,
}

impl RainbowWave {
    pub fn new(period: Duration, run_time: Option<Duration>) -> Self {
        Self { period, run_time }
    }
}

impl Effect for RainbowWave {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let hue_shift = phase_of(elapsed, self.period);
        for index in 0..frame.len() {
            let hue = (hue_shift + index as f32 * 0.25) % 1.0;
            frame.set_color(index, hsv_to_rgb(hue, 1.0, 1.0));
        }
        Progress::Running
    }
}

/// Per-segment pulses between two colors, phase-shifted along the strip.
#[derive(Debug, Clone)]
pub struct PulseWave {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl PulseWave {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
        }
    }
}

impl Effect for PulseWave {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let phase = phase_of(elapsed, self.period);
        for index in 0..frame.len() {
            let segment_phase = (phase + index as f32 * 0.25) % 1.0;
            let pulse = sinf(segment_phase * PI);
            frame.set_color(
                index,
                interpolate(self.color1, self.color2, pulse * pulse),
            );
        }
        Progress::Running
    }
}

/// A fixed group color with a brightness wave traveling over it.
///
/// The base color goes out as a group command on the first tick; afterwards
/// only per-zone brightness commands are staged, so the device keeps the
/// color and just dims it. Ends by restoring the base color at full.
#[derive(Debug, Clone)]
pub struct BrightnessWave {
    color: Color,
    duration: Duration,
    primed: bool,
}

impl BrightnessWave {
    pub fn new(color: Color, duration: Duration) -> Self {
        Self {
            color,
            duration,
            primed: false,
        }
    }
}

impl Effect for BrightnessWave {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_group(GroupCommand::Rgb(self.color));
            return Progress::Finished(None);
        }
        if !self.primed {
            frame.set_group(GroupCommand::Rgb(self.color));
            self.primed = true;
        }
        for index in 0..frame.len() {
            let phase = elapsed_ms(elapsed) / 500.0 + index as f32 * PI / 2.0;
            let brightness = sinf(phase) * 0.4 + 0.6;
            frame.set(index, ZoneCommand::Brightness(brightness));
        }
        Progress::Running
    }
}

/// A rotating two-color vortex with a slow depth oscillation.
#[derive(Debug, Clone)]
pub struct Spiral {
    color1: Color,
    color2: Color,
    duration: Duration,
}

impl Spiral {
    pub fn new(color1: Color, color2: Color, duration: Duration) -> Self {
        Self {
            color1,
            color2,
            duration,
        }
    }
}

impl Effect for Spiral {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let rotation = progress_of(elapsed, self.duration) * 3.0 * PI * 2.0;
        let count = frame.len().max(1) as f32;
        let depth = sinf(elapsed_ms(elapsed) * 0.003) * 0.3 + 0.7;
        for index in 0..frame.len() {
            let angle = rotation + index as f32 * PI * 2.0 / count;
            let intensity = (sinf(angle) + 1.0) / 2.0;
            let color = interpolate(self.color1, self.color2, intensity);
            frame.set_color(index, color.scaled(depth));
        }
        Progress::Running
    }
}
