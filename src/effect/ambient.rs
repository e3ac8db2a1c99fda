//! Ambient effects driving color temperature, CIE-xy chromaticity and alpha
//! layering rather than plain RGB.

use embassy_time::Duration;
use libm::{roundf, sinf};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Effect, Progress, elapsed_ms, phase_of, progress_of};
use crate::color::{self, Color, MIRED_COOL, MIRED_WARM, hsv_to_rgb};
use crate::frame::{Frame, GroupCommand, ZoneCommand};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mireds(value: f32) -> u16 {
    roundf(value.clamp(f32::from(MIRED_COOL), f32::from(MIRED_WARM))) as u16
}

/// Warm-to-daylight color temperature sweep with a quadratic brightness
/// ramp. Ends holding bright daylight.
#[derive(Debug, Clone)]
pub struct Sunrise {
    duration: Duration,
}

impl Sunrise {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Effect for Sunrise {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_group(GroupCommand::ColorTemperature {
                mireds: MIRED_COOL,
                brightness: 1.0,
            });
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let brightness = 0.1 + 0.9 * progress * progress;
        let ct = f32::from(MIRED_WARM) - f32::from(MIRED_WARM - MIRED_COOL) * progress;
        frame.set_group(GroupCommand::ColorTemperature {
            mireds: mireds(ct),
            brightness,
        });
        Progress::Running
    }
}

/// Morning, noon, evening and night in four color temperature phases.
/// Ends on a warm, dim evening tone.
#[derive(Debug, Clone)]
pub struct DayNight {
    duration: Duration,
}

impl DayNight {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Effect for DayNight {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_group(GroupCommand::ColorTemperature {
                mireds: 370,
                brightness: 0.3,
            });
            return Progress::Finished(None);
        }
        let progress = progress_of(elapsed, self.duration);
        let (ct, brightness) = if progress < 0.25 {
            let phase = progress * 4.0;
            (400.0 - 150.0 * phase, 0.3 + 0.7 * phase)
        } else if progress < 0.5 {
            let phase = (progress - 0.25) * 4.0;
            (250.0 - 97.0 * phase, 1.0)
        } else if progress < 0.75 {
            let phase = (progress - 0.5) * 4.0;
            (153.0 + 217.0 * phase, 1.0 - 0.5 * phase)
        } else {
            let phase = (progress - 0.75) * 4.0;
            (370.0 + 80.0 * phase, 0.5 - 0.3 * phase)
        };
        frame.set_group(GroupCommand::ColorTemperature {
            mireds: mireds(ct),
            brightness,
        });
        Progress::Running
    }
}

/// Per-zone candle flicker: small random brightness and color temperature
/// variations around a warm base.
#[derive(Debug, Clone)]
pub struct Candlelight {
    duration: Duration,
    rng: SmallRng,
}

impl Candlelight {
    pub fn new(duration: Duration, seed: u64) -> Self {
        Self {
            duration,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Effect for Candlelight {
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        const BASE_CT: f32 = 450.0;
        const BASE_BRIGHTNESS: f32 = 0.6;
        if elapsed > self.duration {
            frame.clear_all();
            return Progress::Finished(None);
        }
        for index in 0..frame.len() {
            let flicker = self.rng.r#gen::<f32>() * 0.3 - 0.15;
            let brightness = (BASE_BRIGHTNESS + flicker).clamp(0.2, 1.0);
            let ct = BASE_CT + self.rng.r#gen::<f32>() * 50.0 - 25.0;
            frame.set(
                index,
                ZoneCommand::ColorTemperature {
                    mireds: mireds(ct),
                    brightness,
                },
            );
        }
        Progress::Running
    }
}

/// CIE-xy chromaticity waypoints for the precision rainbow.
const XY_WAYPOINTS: [(f32, f32); 7] = [
    (0.640, 0.330), // red
    (0.450, 0.450), // orange
    (0.400, 0.500), // yellow
    (0.300, 0.600), // green
    (0.150, 0.300), // cyan
    (0.150, 0.060), // blue
    (0.280, 0.150), // purple
];

/// A rainbow cycling through precise xy chromaticity points, phase-shifted
/// across segments.
#[derive(Debug, Clone)]
pub struct XyRainbow {
    duration: Duration,
}

impl XyRainbow {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Effect for XyRainbow {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.clear_all();
            return Progress::Finished(None);
        }
        let phase = phase_of(elapsed, Duration::from_millis(1000));
        let count = XY_WAYPOINTS.len();
        for index in 0..frame.len() {
            let segment_phase = (phase + index as f32 * 0.33) % 1.0;
            let scaled = segment_phase * count as f32;
            let current = (scaled as usize) % count;
            let next = (current + 1) % count;
            let t = scaled % 1.0;
            let (x1, y1) = XY_WAYPOINTS[current];
            let (x2, y2) = XY_WAYPOINTS[next];
            frame.set(
                index,
                ZoneCommand::Xy {
                    x: x1 + (x2 - x1) * t,
                    y: y1 + (y2 - y1) * t,
                    brightness: 1.0,
                },
            );
        }
        Progress::Running
    }
}

/// Layered alpha composition over a solid base: a pulsing translucent blue
/// wash with a sweeping white highlight on top.
#[derive(Debug, Clone)]
pub struct AlphaLayers {
    base: Color,
    duration: Duration,
    primed: bool,
}

impl AlphaLayers {
    pub fn new(base: Color, duration: Duration) -> Self {
        Self {
            base,
            duration,
            primed: false,
        }
    }
}

impl Effect for AlphaLayers {
    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            frame.set_all_color(self.base);
            return Progress::Finished(None);
        }
        if !self.primed {
            frame.set_all_color(self.base);
            self.primed = true;
            return Progress::Running;
        }
        let pulse = sinf(elapsed_ms(elapsed) * 0.003) * 0.5 + 0.5;
        let blue_overlay = color::BLUE.with_alpha(pulse * 0.5);
        let sweep = phase_of(elapsed, Duration::from_millis(1500));
        let count = frame.len().max(1) as f32;
        for index in 0..frame.len() {
            let position = index as f32 / count;
            let distance = (position - sweep).abs();
            if distance < 0.3 {
                let alpha = (0.3 - distance) / 0.3 * 0.7;
                frame.set_color(index, color::WHITE.with_alpha(alpha));
            } else {
                frame.set_color(index, blue_overlay);
            }
        }
        Progress::Running
    }
}

/// One step of the checkpoint flash sequence: either a hue flash or a white
/// color temperature hold.
#[derive(Debug, Clone, Copy)]
enum Checkpoint {
    /// Hue on the device's 0-65535 wheel, full saturation and brightness.
    Hue(u16),
    /// Color temperature in mireds, full brightness.
    Ct(u16),
}

const CHECKPOINTS: [Checkpoint; 4] = [
    Checkpoint::Hue(0),
    Checkpoint::Ct(366),
    Checkpoint::Hue(46920),
    Checkpoint::Ct(366),
];

const CHECKPOINT_STEP: Duration = Duration::from_millis(150);

/// Red / white / blue / white flashed through native hue and color
/// temperature commands, stepping every 150 ms for the whole duration.
#[derive(Debug, Clone)]
pub struct CheckpointSequence {
    duration: Duration,
    last_step: Option<u64>,
}

impl CheckpointSequence {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_step: None,
        }
    }
}

impl Effect for CheckpointSequence {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        if elapsed > self.duration {
            return Progress::Finished(None);
        }
        let step = elapsed.as_millis() / CHECKPOINT_STEP.as_millis();
        if self.last_step == Some(step) {
            return Progress::Running;
        }
        self.last_step = Some(step);
        let checkpoint = CHECKPOINTS[(step as usize) % CHECKPOINTS.len()];
        match checkpoint {
            Checkpoint::Hue(hue) => {
                let color = hsv_to_rgb(f32::from(hue) / 65535.0, 1.0, 1.0);
                frame.set_group(GroupCommand::Rgb(color));
            }
            Checkpoint::Ct(ct) => {
                frame.set_group(GroupCommand::ColorTemperature {
                    mireds: ct,
                    brightness: 1.0,
                });
            }
        }
        Progress::Running
    }
}
