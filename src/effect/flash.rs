//! One-shot flash effects: bounded bursts that end on their own, always
//! leaving the strip dark.

use embassy_time::Duration;
use libm::powf;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{ColorSequence, Effect, Progress, elapsed_ms};
use crate::color::{self, Color, PALETTE};
use crate::frame::Frame;

/// Step length used by the step-counted fades (one frame at 60 Hz).
const STEP_MS: u64 = 16;

/// A flash decaying quadratically, trailing off along the strip.
#[derive(Debug, Clone)]
pub struct Flash {
    color: Color,
    duration: Duration,
}

impl Flash {
    pub fn new(color: Color, duration: Duration) -> Self {
        Self { color, duration }
    }
}

impl Effect for Flash {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        let steps = (self.duration.as_millis() / STEP_MS).max(1);
        let step = elapsed.as_millis() / STEP_MS;
        if step >= steps {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let factor = 1.0 - step as f32 / steps as f32;
        let brightness = factor * factor;
        for index in 0..frame.len() {
            let segment_factor = (brightness - index as f32 * 0.1).max(0.0);
            frame.set_color(index, self.color.scaled(segment_factor));
        }
        Progress::Running
    }
}

/// Whole-strip color flashes stepping through a sequence.
///
/// Stages a frame only on the tick where the step changes; in between the
/// device keeps the current color. Runs the sequence `flash_count` times.
#[derive(Debug, Clone)]
pub struct FlashSequence {
    colors: ColorSequence,
    flash_count: u32,
    flash_speed: Duration,
    last_step: Option<u64>,
}

impl FlashSequence {
    pub fn new(colors: ColorSequence, flash_count: u32, flash_speed: Duration) -> Self {
        Self {
            colors,
            flash_count,
            flash_speed,
            last_step: None,
        }
    }
}

impl Effect for FlashSequence {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        let step = elapsed.as_millis() / self.flash_speed.as_millis().max(1);
        let total = u64::from(self.flash_count) * self.colors.len() as u64;
        if step >= total {
            frame.clear_all();
            return Progress::Finished(None);
        }
        if self.last_step != Some(step) {
            self.last_step = Some(step);
            let index = (step as usize) % self.colors.len();
            let color = self.colors.get(index).copied().unwrap_or(color::BLACK);
            frame.set_all_color(color);
        }
        Progress::Running
    }
}

/// A seeded random flash sequence: 4-6 distinct palette colors flashed at
/// 150 ms for roughly the requested duration.
#[derive(Debug, Clone)]
pub struct RandomSequence {
    inner: FlashSequence,
}

impl RandomSequence {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(duration: Duration, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let length = rng.gen_range(4..=6usize);

        // Partial Fisher-Yates over the palette gives distinct picks.
        let mut indices = [0usize; PALETTE.len()];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        let mut colors = ColorSequence::new();
        for i in 0..length {
            let j = rng.gen_range(i..PALETTE.len());
            indices.swap(i, j);
            let _ = colors.push(PALETTE[indices[i]]);
        }

        let flash_speed = Duration::from_millis(150);
        let flash_count =
            (duration.as_millis() / (length as u64 * flash_speed.as_millis())).max(1) as u32;
        Self {
            inner: FlashSequence::new(colors, flash_count, flash_speed),
        }
    }
}

impl Effect for RandomSequence {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        self.inner.render(elapsed, frame)
    }
}

/// Blood-red wash fading linearly to off over one second.
#[derive(Debug, Clone)]
pub struct FadeToBlack {
    _private: (),
}

impl FadeToBlack {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for FadeToBlack {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for FadeToBlack {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        const STEPS: u64 = 60;
        let step = elapsed.as_millis() / STEP_MS;
        if step >= STEPS {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let factor = 1.0 - step as f32 / STEPS as f32;
        frame.set_all_color(color::BLOOD_RED.scaled(factor));
        Progress::Running
    }
}

/// On/off pulses that accelerate exponentially from the start period to the
/// end period over `pulse_count` pulses.
#[derive(Debug, Clone)]
pub struct AcceleratingPulse {
    color: Color,
    pulse_count: u32,
    start_period: Duration,
    end_period: Duration,
    pulse: u32,
    phase_start: Duration,
    is_on: bool,
}

impl AcceleratingPulse {
    pub fn new(
        color: Color,
        pulse_count: u32,
        start_period: Duration,
        end_period: Duration,
    ) -> Self {
        Self {
            color,
            pulse_count,
            start_period,
            end_period,
            pulse: 0,
            phase_start: Duration::from_ticks(0),
            is_on: false,
        }
    }
}

impl Effect for AcceleratingPulse {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if self.pulse >= self.pulse_count {
            frame.clear_all();
            return Progress::Finished(None);
        }

        let progress = self.pulse as f32 / (self.pulse_count.saturating_sub(1).max(1)) as f32;
        let start = self.start_period.as_millis() as f32;
        let end = self.end_period.as_millis() as f32;
        let period = start * powf(end / start, progress);

        if elapsed_ms(elapsed) - elapsed_ms(self.phase_start) >= period {
            if self.is_on {
                frame.clear_all();
                self.is_on = false;
            } else {
                frame.set_all_color(self.color);
                self.is_on = true;
                self.pulse += 1;
            }
            self.phase_start = elapsed;
        }
        Progress::Running
    }
}

/// Fixed-rate strobe, ending dark.
#[derive(Debug, Clone)]
pub struct Strobe {
    color: Color,
    duration: Duration,
    period: Duration,
    is_on: bool,
    last_toggle: Duration,
}

impl Strobe {
    pub fn new(color: Color, duration: Duration, period: Duration) -> Self {
        Self {
            color,
            duration,
            period,
            is_on: false,
            last_toggle: Duration::from_ticks(0),
        }
    }
}

impl Effect for Strobe {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed >= self.duration {
            frame.clear_all();
            return Progress::Finished(None);
        }
        if elapsed >= self.last_toggle + self.period {
            if self.is_on {
                frame.clear_all();
            } else {
                frame.set_all_color(self.color);
            }
            self.is_on = !self.is_on;
            self.last_toggle = elapsed;
        }
        Progress::Running
    }
}
