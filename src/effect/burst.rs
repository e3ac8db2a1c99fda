//! Impact effects: explosions, strikes and elemental bursts. All of these
//! are bounded and terminate on their own.

use core::f32::consts::PI;

use embassy_time::Duration;
use heapless::Vec;
use libm::{fmodf, sinf};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Effect, Progress, elapsed_ms, progress_of, span};
use crate::color::{self, Color, interpolate, scale_channel};
use crate::frame::Frame;
use crate::segment::MAX_ZONES;

/// A bright flash blended over a base color, decaying quadratically.
///
/// The base color goes out opaque on the first tick; after that only the
/// translucent flash overlay is staged and the sink blends it over the base.
#[derive(Debug, Clone)]
pub struct ExplosionFlash {
    base: Color,
    flash: Color,
    duration: Duration,
    primed: bool,
}

impl ExplosionFlash {
    pub fn new(base: Color, flash: Color, duration: Duration) -> Self {
        Self {
            base,
            flash,
            duration,
            primed: false,
        }
    }
}

impl Effect for ExplosionFlash {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        const FADE_STEPS: u64 = 30;
        let step = elapsed.as_millis() / 16;
        if elapsed >= self.duration || step >= FADE_STEPS {
            frame.set_all_color(self.base);
            return Progress::Finished(None);
        }
        if !self.primed {
            frame.set_all_color(self.base);
            self.primed = true;
            return Progress::Running;
        }
        let linear = 1.0 - step as f32 / FADE_STEPS as f32;
        let alpha = linear * linear;
        frame.set_all_color(self.flash.with_alpha(alpha));
        Progress::Running
    }
}

/// An explosion rippling outward from the strip center, fading with time.
#[derive(Debug, Clone)]
pub struct ExplosionRipple {
    base: Color,
    flash: Color,
    duration: Duration,
}

impl ExplosionRipple {
    pub fn new(base: Color, flash: Color, duration: Duration) -> Self {
        Self {
            base,
            flash,
            duration,
        }
    }
}

impl Effect for ExplosionRipple {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_all_color(self.base);
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        // Time for the wave to travel across the strip.
        let wave_speed = self.duration.as_millis() as f32 / 4.0;
        let wave_position = elapsed_ms(elapsed) / wave_speed;
        let center = span(frame.len()) / 2.0;
        let decay = (1.0 - progress) * (1.0 - progress);
        for index in 0..frame.len() {
            let distance = (index as f32 - center).abs();
            let intensity = (1.0 - (wave_position - distance).abs()).max(0.0);
            let alpha = intensity * decay;
            if alpha > 0.01 {
                frame.set_color(index, self.flash.with_alpha(alpha));
            } else {
                frame.set_color(index, self.base);
            }
        }
        Progress::Running
    }
}

/// A single ring expanding across the strip, fading as it travels.
#[derive(Debug, Clone)]
pub struct Shockwave {
    color: Color,
    duration: Duration,
}

impl Shockwave {
    pub fn new(color: Color, duration: Duration) -> Self {
        Self { color, duration }
    }
}

impl Effect for Shockwave {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let wave_position = progress * (frame.len() as f32 + 1.0);
        for index in 0..frame.len() {
            let distance = (index as f32 - wave_position).abs();
            let intensity = if distance < 1.0 {
                (1.0 - distance) * (1.0 - progress)
            } else {
                0.0
            };
            frame.set_color(index, self.color.scaled(intensity));
        }
        Progress::Running
    }
}

/// An instant over-bright flash, a brief hold, then a rapid fade.
#[derive(Debug, Clone)]
pub struct EnergyBurst {
    color: Color,
    duration: Duration,
}

impl EnergyBurst {
    pub fn new(color: Color, duration: Duration) -> Self {
        Self { color, duration }
    }
}

impl Effect for EnergyBurst {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let intensity = if progress < 0.1 {
            1.0
        } else if progress < 0.3 {
            0.9
        } else {
            (1.0 - (progress - 0.3) / 0.7 * 1.5).max(0.0)
        };
        let burst = if progress < 0.1 { 1.3 } else { 1.0 };
        frame.set_all_color(self.color.scaled(intensity * burst));
        Progress::Running
    }
}

/// Two triangular impacts in a row, the second tinted warmer.
#[derive(Debug, Clone)]
pub struct DoubleStrike {
    color: Color,
    duration: Duration,
}

impl DoubleStrike {
    pub fn new(color: Color, duration: Duration) -> Self {
        Self { color, duration }
    }

    fn intensity(strike_progress: f32) -> f32 {
        if strike_progress < 0.3 {
            strike_progress / 0.3
        } else {
            1.0 - (strike_progress - 0.3) / 0.7
        }
    }
}

impl Effect for DoubleStrike {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let strike_ms = self.duration.as_millis() as f32 / 2.0;
        let elapsed_ms = elapsed_ms(elapsed);
        let color = if elapsed_ms < strike_ms {
            let intensity = Self::intensity(elapsed_ms / strike_ms);
            self.color.scaled(intensity)
        } else {
            let intensity = Self::intensity((elapsed_ms - strike_ms) / strike_ms);
            Color::new(
                scale_channel(self.color.r, 1.2),
                scale_channel(self.color.g, 0.9),
                scale_channel(self.color.b, 0.9),
            )
            .scaled(intensity)
        };
        frame.set_all_color(color);
        Progress::Running
    }
}

/// Reversed color progression with temporal distortion and flicker.
#[derive(Debug, Clone)]
pub struct TimeRewind {
    color1: Color,
    color2: Color,
    duration: Duration,
}

impl TimeRewind {
    pub fn new(color1: Color, color2: Color, duration: Duration) -> Self {
        Self {
            color1,
            color2,
            duration,
        }
    }
}

impl Effect for TimeRewind {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let distorted = sinf(progress * PI * 4.0) * 0.3 + progress;
        let mut wrapped = fmodf(distorted, 1.0);
        if wrapped < 0.0 {
            wrapped += 1.0;
        }
        let reverse = 1.0 - wrapped;
        let color = interpolate(self.color1, self.color2, reverse);
        let flicker = sinf(elapsed_ms(elapsed) * 0.02) * 0.2 + 0.8;
        for index in 0..frame.len() {
            let segment_phase = (reverse + index as f32 * 0.2) % 1.0;
            frame.set_color(index, color.scaled(flicker * (0.5 + segment_phase * 0.5)));
        }
        Progress::Running
    }
}

/// White strike, dimmer secondary flash, then electric blue afterglow with
/// random flicker.
#[derive(Debug, Clone)]
pub struct Lightning {
    duration: Duration,
    rng: SmallRng,
}

impl Lightning {
    pub fn new(duration: Duration, seed: u64) -> Self {
        Self {
            duration,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Effect for Lightning {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let color = if progress < 0.05 {
            color::WHITE
        } else if progress < 0.15 {
            color::WHITE.scaled(0.7)
        } else {
            let glow_progress = (progress - 0.15) / 0.85;
            let intensity = (1.0 - glow_progress).max(0.0);
            let flicker = if self.rng.r#gen::<f32>() > 0.7 { 1.2 } else { 1.0 };
            color::ELECTRIC_BLUE.scaled(intensity * flicker)
        };
        frame.set_all_color(color);
        Progress::Running
    }
}

/// Toxic green draining to black, segment by segment, with a slow bubble
/// modulation. Ends fully dark.
#[derive(Debug, Clone)]
pub struct PoisonDrip {
    duration: Duration,
}

impl PoisonDrip {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Effect for PoisonDrip {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_all_color(color::BLACK);
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let green = color::EMERALD;
        for index in 0..frame.len() {
            let delay = index as f32 * 0.15;
            let segment_progress = ((progress - delay) / (1.0 - delay)).clamp(0.0, 1.0);
            let intensity = 1.0 - segment_progress;
            let bubble = sinf((elapsed_ms(elapsed) + index as f32 * 500.0) * 0.005) * 0.2 + 0.8;
            frame.set_color(
                index,
                Color::new(
                    scale_channel(green.r, intensity * bubble * 0.3),
                    scale_channel(green.g, intensity * bubble),
                    scale_channel(green.b, intensity * bubble * 0.1),
                ),
            );
        }
        Progress::Running
    }
}

/// A bright freeze that fragments into darker blues.
///
/// Fragment timings are drawn once at construction so a run is fully
/// determined by its seed.
#[derive(Debug, Clone)]
pub struct IceShatter {
    duration: Duration,
    delays: Vec<f32, MAX_ZONES>,
    rng: SmallRng,
}

impl IceShatter {
    pub fn new(duration: Duration, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut delays = Vec::new();
        for _ in 0..MAX_ZONES {
            let _ = delays.push(rng.r#gen::<f32>() * 0.2);
        }
        Self {
            duration,
            delays,
            rng,
        }
    }
}

impl Effect for IceShatter {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        if progress < 0.3 {
            let freeze = (progress / 0.1).min(1.0);
            frame.set_all_color(color::ICE_BLUE.scaled(freeze));
            return Progress::Running;
        }
        let shatter_progress = (progress - 0.3) / 0.7;
        for index in 0..frame.len() {
            let delay = self.delays.get(index).copied().unwrap_or(0.0);
            let fragment = ((shatter_progress - delay) / (1.0 - delay)).clamp(0.0, 1.0);
            let color = interpolate(color::ICE_BLUE, color::DEEP_BLUE, fragment);
            let flicker = if fragment < 0.1 {
                self.rng.r#gen::<f32>()
            } else {
                1.0
            };
            frame.set_color(
                index,
                Color::new(
                    scale_channel(color.r, (1.0 - fragment * 0.5) * flicker),
                    scale_channel(color.g, (1.0 - fragment * 0.5) * flicker),
                    scale_channel(color.b, (1.0 - fragment * 0.3) * flicker),
                ),
            );
        }
        Progress::Running
    }
}
