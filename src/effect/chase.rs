//! Chase and bounce effects: a lit spot moving along the strip.

use core::f32::consts::PI;

use embassy_time::Duration;
use heapless::Vec;
use libm::{fmodf, sinf};

use super::{Effect, Progress, bounce_index, elapsed_ms, past_run_time, phase_of, span};
use crate::color::{Color, interpolate};
use crate::frame::Frame;
use crate::segment::MAX_ZONES;

/// A bright spot circling the strip with a dim trail on both sides.
///
/// The position advances continuously with time (`speed` segments per
/// second) and wraps; distance to the spot is measured around the wrap.
#[derive(Debug, Clone)]
pub struct Chase {
    color: Color,
    speed: f32,
    run_time: Option<Duration>,
}

impl Chase {
    pub fn new(color: Color, speed: f32, run_time: Option<Duration>) -> Self {
        Self {
            color,
            speed,
            run_time,
        }
    }
}

impl Effect for Chase {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            return Progress::Finished(None);
        }
        let count = frame.len().max(1) as f32;
        let position = fmodf(elapsed_ms(elapsed) / 1000.0 * self.speed, count);
        for index in 0..frame.len() {
            let offset = index as f32 - position;
            let distance = offset
                .abs()
                .min((offset + count).abs())
                .min((offset - count).abs());
            let brightness = (1.0 - distance * 0.4).max(0.0);
            frame.set_color(index, self.color.scaled(brightness));
        }
        Progress::Running
    }
}

/// One lit segment sweeping back and forth, colored by its position.
#[derive(Debug, Clone)]
pub struct Bounce {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl Bounce {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
        }
    }
}

impl Effect for Bounce {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let cycle = phase_of(elapsed, self.period);
        let active = bounce_index(cycle, frame.len());
        let span = span(frame.len());
        for index in 0..frame.len() {
            if index == active {
                let factor = index as f32 / span;
                frame.set_color(index, interpolate(self.color1, self.color2, factor));
            } else {
                frame.clear(index);
            }
        }
        Progress::Running
    }
}

/// A bouncing spot whose brightness pulses on an independent period.
#[derive(Debug, Clone)]
pub struct PulsingBounce {
    color1: Color,
    color2: Color,
    bounce_period: Duration,
    pulse_period: Duration,
    run_time: Option<Duration>,
}

impl PulsingBounce {
    pub fn new(
        color1: Color,
        color2: Color,
        bounce_period: Duration,
        pulse_period: Duration,
        run_time: Option<Duration>,
    ) -> Self {
        Self {
            color1,
            color2,
            bounce_period,
            pulse_period,
            run_time,
        }
    }
}

impl Effect for PulsingBounce {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let cycle = phase_of(elapsed, self.bounce_period);
        let pulse_phase = phase_of(elapsed, self.pulse_period);
        let brightness = 0.5 + 0.5 * sinf(pulse_phase * PI * 2.0);
        let active = bounce_index(cycle, frame.len());
        let span = span(frame.len());
        for index in 0..frame.len() {
            if index == active {
                let factor = index as f32 / span;
                let color = interpolate(self.color1, self.color2, factor);
                frame.set_color(index, color.scaled(brightness));
            } else {
                frame.clear(index);
            }
        }
        Progress::Running
    }
}

/// A bouncing spot leaving an exponentially decaying trail behind it.
#[derive(Debug, Clone)]
pub struct FadeBounce {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
    trail: Vec<f32, MAX_ZONES>,
}

impl FadeBounce {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
            trail: Vec::new(),
        }
    }
}

impl Effect for FadeBounce {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            frame.clear_all();
            return Progress::Finished(None);
        }
        while self.trail.len() < frame.len() {
            let _ = self.trail.push(0.0);
        }
        let cycle = phase_of(elapsed, self.period);
        let active = bounce_index(cycle, frame.len());
        let span = span(frame.len());
        for index in 0..frame.len() {
            let brightness = if index == active {
                self.trail[index] = 1.0;
                1.0
            } else {
                self.trail[index] *= 0.85;
                self.trail[index]
            };
            let factor = index as f32 / span;
            let color = interpolate(self.color1, self.color2, factor);
            frame.set_color(index, color.scaled(brightness));
        }
        Progress::Running
    }
}

/// Two spots bouncing in opposite directions, one per color.
///
/// Where they cross, the first wave wins the color and full brightness.
#[derive(Debug, Clone)]
pub struct DoubleBounce {
    color1: Color,
    color2: Color,
    period: Duration,
    run_time: Option<Duration>,
}

impl DoubleBounce {
    pub fn new(color1: Color, color2: Color, period: Duration, run_time: Option<Duration>) -> Self {
        Self {
            color1,
            color2,
            period,
            run_time,
        }
    }
}

impl Effect for DoubleBounce {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if past_run_time(elapsed, self.run_time) {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let cycle = phase_of(elapsed, self.period);
        let count = frame.len();
        let wave1 = bounce_index(cycle, count);
        let wave2 = count.saturating_sub(1) - wave1;
        for index in 0..count {
            let mut brightness = 0.0f32;
            let mut use_first = false;
            if index == wave1 {
                brightness = 1.0;
                use_first = true;
            }
            if index == wave2 {
                brightness = brightness.max(0.8);
                use_first = false;
            }
            if brightness > 0.0 {
                let color = if use_first { self.color1 } else { self.color2 };
                frame.set_color(index, color.scaled(brightness));
            } else {
                frame.clear(index);
            }
        }
        Progress::Running
    }
}

/// Cascading bright streaks falling across the strip, alternating colors.
#[derive(Debug, Clone)]
pub struct Meteor {
    color1: Color,
    color2: Color,
    duration: Duration,
}

impl Meteor {
    pub fn new(color1: Color, color2: Color, duration: Duration) -> Self {
        Self {
            color1,
            color2,
            duration,
        }
    }
}

impl Effect for Meteor {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = phase_of(elapsed, Duration::from_millis(500));
        for index in 0..frame.len() {
            let segment_phase = (progress + index as f32 * 0.3) % 1.0;
            let color = if segment_phase < 0.2 {
                let intensity = 1.0 - segment_phase / 0.2;
                let color = if index % 2 == 0 {
                    self.color1
                } else {
                    self.color2
                };
                color.scaled(intensity)
            } else {
                let fade = (segment_phase - 0.2) / 0.8;
                self.color2.scaled((0.3 * (1.0 - fade)).max(0.0))
            };
            frame.set_color(index, color);
        }
        Progress::Running
    }
}
