//! Effect system with compile-time known effect variants.
//!
//! All effects are stored in an enum to avoid heap allocations. Each effect
//! implements the [`Effect`] trait and renders into a per-tick [`Frame`];
//! effects never touch the device sink directly. Parameters arrive through
//! [`EffectRequest`], a closed catalog keyed by [`EffectId`], and are
//! validated before any scheduler state changes.

mod ambient;
mod bar;
mod burst;
mod chase;
mod countdown;
mod flash;
mod wave;

use embassy_time::Duration;
use heapless::Vec;
use libm::floorf;
use thiserror::Error;

pub use ambient::{AlphaLayers, Candlelight, CheckpointSequence, DayNight, Sunrise, XyRainbow};
pub use bar::fill_level_bar;
pub use burst::{
    DoubleStrike, EnergyBurst, ExplosionFlash, ExplosionRipple, IceShatter, Lightning, PoisonDrip,
    Shockwave, TimeRewind,
};
pub use chase::{Bounce, Chase, DoubleBounce, FadeBounce, Meteor, PulsingBounce};
pub use countdown::{CountdownPulse, SegmentedCountdown};
pub use flash::{AcceleratingPulse, FadeToBlack, Flash, FlashSequence, RandomSequence, Strobe};
pub use wave::{Breathing, BrightnessWave, GradientWave, PulseWave, RainbowWave, Ripple, Spiral};

use crate::color::{self, Color};
use crate::frame::Frame;
use crate::segment::MAX_ZONES;

/// Longest color sequence a stepped flash effect accepts.
pub const MAX_SEQUENCE: usize = 8;

/// A flash-sequence color list.
pub type ColorSequence = Vec<Color, MAX_SEQUENCE>;

/// Per-segment (start, end) color pairs for the segmented countdown.
pub type SegmentColorPairs = Vec<(Color, Color), MAX_ZONES>;

/// Invalid effect parameters, rejected synchronously at start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("duration must be non-zero")]
    ZeroDuration,
    #[error("count must be non-zero")]
    ZeroCount,
    #[error("speed must be positive")]
    NonPositiveSpeed,
    #[error("color sequence is empty")]
    EmptySequence,
}

/// What an effect reports after rendering one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Keep ticking.
    Running,
    /// The effect terminated itself. Anything it staged this tick is still
    /// committed; an optional [`Finale`] is delivered later.
    Finished(Option<Finale>),
}

/// A delayed terminal frame, e.g. "flash white now, settle to the end color
/// 200 ms later". Owned by the scheduler's generation mechanism: superseded
/// or stopped effects never get their finale delivered.
#[derive(Debug, Clone, PartialEq)]
pub struct Finale {
    pub delay: Duration,
    pub frame: Frame,
}

/// A running effect: a function of elapsed time and segment index, plus
/// whatever closure-local state it carries between ticks of one run.
pub trait Effect {
    /// Render one tick into the staging frame.
    fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress;
}

/// Fraction of the current period elapsed, in `[0, 1)`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn phase_of(elapsed: Duration, period: Duration) -> f32 {
    let period = period.as_millis().max(1);
    (elapsed.as_millis() % period) as f32 / period as f32
}

/// Fraction of a bounded duration elapsed; exceeds 1 past the end.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn progress_of(elapsed: Duration, duration: Duration) -> f32 {
    elapsed.as_millis() as f32 / duration.as_millis().max(1) as f32
}

/// Elapsed milliseconds as a float, for the phase math lifted from the
/// reference behavior.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn elapsed_ms(elapsed: Duration) -> f32 {
    elapsed.as_millis() as f32
}

/// Divisor for index-position math, guarded so a single segment never
/// divides by zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn span(count: usize) -> f32 {
    count.saturating_sub(1).max(1) as f32
}

/// True once an optional run-time bound has been exceeded.
pub(crate) fn past_run_time(elapsed: Duration, run_time: Option<Duration>) -> bool {
    run_time.is_some_and(|bound| elapsed > bound)
}

/// Index of the lit segment for a bouncing sweep: forward across the strip
/// in the first half of the cycle, backward in the second.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub(crate) fn bounce_index(cycle: f32, count: usize) -> usize {
    let n = count.max(1);
    let steps = 2.0 * n as f32;
    if cycle < 0.5 {
        floorf(cycle * steps) as usize % n
    } else {
        n - 1 - (floorf((cycle - 0.5) * steps) as usize % n)
    }
}

/// Known effect ids that can be requested by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectId {
    GradientWave,
    Ripple,
    Breathing,
    Chase,
    RainbowWave,
    PulseWave,
    BrightnessWave,
    Spiral,
    Bounce,
    PulsingBounce,
    FadeBounce,
    DoubleBounce,
    Meteor,
    CountdownPulse,
    SegmentedCountdown,
    Flash,
    FlashSequence,
    RandomSequence,
    FadeToBlack,
    AcceleratingPulse,
    Strobe,
    ExplosionFlash,
    ExplosionRipple,
    Shockwave,
    EnergyBurst,
    DoubleStrike,
    TimeRewind,
    Lightning,
    PoisonDrip,
    IceShatter,
    Sunrise,
    DayNight,
    Candlelight,
    XyRainbow,
    AlphaLayers,
    CheckpointSequence,
}

impl EffectId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GradientWave => "gradient_wave",
            Self::Ripple => "ripple",
            Self::Breathing => "breathing",
            Self::Chase => "chase",
            Self::RainbowWave => "rainbow_wave",
            Self::PulseWave => "pulse_wave",
            Self::BrightnessWave => "brightness_wave",
            Self::Spiral => "spiral",
            Self::Bounce => "bounce",
            Self::PulsingBounce => "pulsing_bounce",
            Self::FadeBounce => "fade_bounce",
            Self::DoubleBounce => "double_bounce",
            Self::Meteor => "meteor",
            Self::CountdownPulse => "countdown_pulse",
            Self::SegmentedCountdown => "segmented_countdown",
            Self::Flash => "flash",
            Self::FlashSequence => "flash_sequence",
            Self::RandomSequence => "random_sequence",
            Self::FadeToBlack => "fade_to_black",
            Self::AcceleratingPulse => "accelerating_pulse",
            Self::Strobe => "strobe",
            Self::ExplosionFlash => "explosion_flash",
            Self::ExplosionRipple => "explosion_ripple",
            Self::Shockwave => "shockwave",
            Self::EnergyBurst => "energy_burst",
            Self::DoubleStrike => "double_strike",
            Self::TimeRewind => "time_rewind",
            Self::Lightning => "lightning",
            Self::PoisonDrip => "poison_drip",
            Self::IceShatter => "ice_shatter",
            Self::Sunrise => "sunrise",
            Self::DayNight => "day_night",
            Self::Candlelight => "candlelight",
            Self::XyRainbow => "xy_rainbow",
            Self::AlphaLayers => "alpha_layers",
            Self::CheckpointSequence => "checkpoint_sequence",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        const ALL: [EffectId; 36] = [
            EffectId::GradientWave,
            EffectId::Ripple,
            EffectId::Breathing,
            EffectId::Chase,
            EffectId::RainbowWave,
            EffectId::PulseWave,
            EffectId::BrightnessWave,
            EffectId::Spiral,
            EffectId::Bounce,
            EffectId::PulsingBounce,
            EffectId::FadeBounce,
            EffectId::DoubleBounce,
            EffectId::Meteor,
            EffectId::CountdownPulse,
            EffectId::SegmentedCountdown,
            EffectId::Flash,
            EffectId::FlashSequence,
            EffectId::RandomSequence,
            EffectId::FadeToBlack,
            EffectId::AcceleratingPulse,
            EffectId::Strobe,
            EffectId::ExplosionFlash,
            EffectId::ExplosionRipple,
            EffectId::Shockwave,
            EffectId::EnergyBurst,
            EffectId::DoubleStrike,
            EffectId::TimeRewind,
            EffectId::Lightning,
            EffectId::PoisonDrip,
            EffectId::IceShatter,
            EffectId::Sunrise,
            EffectId::DayNight,
            EffectId::Candlelight,
            EffectId::XyRainbow,
            EffectId::AlphaLayers,
            EffectId::CheckpointSequence,
        ];
        ALL.into_iter().find(|id| id.as_str() == s)
    }
}

/// A named effect plus its parameters.
///
/// Durations and counts carry the reference defaults via
/// [`EffectRequest::named`]; every field can also be set explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectRequest {
    GradientWave {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    Ripple {
        color: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    Breathing {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    Chase {
        color: Color,
        /// Position advance in segments per second.
        speed: f32,
        run_time: Option<Duration>,
    },
    RainbowWave {
        period: Duration,
        run_time: Option<Duration>,
    },
    PulseWave {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    BrightnessWave {
        color: Color,
        duration: Duration,
    },
    Spiral {
        color1: Color,
        color2: Color,
        duration: Duration,
    },
    Bounce {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    PulsingBounce {
        color1: Color,
        color2: Color,
        bounce_period: Duration,
        pulse_period: Duration,
        run_time: Option<Duration>,
    },
    FadeBounce {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    DoubleBounce {
        color1: Color,
        color2: Color,
        period: Duration,
        run_time: Option<Duration>,
    },
    Meteor {
        color1: Color,
        color2: Color,
        duration: Duration,
    },
    CountdownPulse {
        total: Duration,
        start_color: Color,
        end_color: Color,
    },
    SegmentedCountdown {
        total: Duration,
        pairs: SegmentColorPairs,
    },
    Flash {
        color: Color,
        duration: Duration,
    },
    FlashSequence {
        colors: ColorSequence,
        flash_count: u32,
        flash_speed: Duration,
    },
    RandomSequence {
        duration: Duration,
        seed: u64,
    },
    FadeToBlack,
    AcceleratingPulse {
        color: Color,
        pulse_count: u32,
        start_period: Duration,
        end_period: Duration,
    },
    Strobe {
        color: Color,
        duration: Duration,
        period: Duration,
    },
    ExplosionFlash {
        base: Color,
        flash: Color,
        duration: Duration,
    },
    ExplosionRipple {
        base: Color,
        flash: Color,
        duration: Duration,
    },
    Shockwave {
        color: Color,
        duration: Duration,
    },
    EnergyBurst {
        color: Color,
        duration: Duration,
    },
    DoubleStrike {
        color: Color,
        duration: Duration,
    },
    TimeRewind {
        color1: Color,
        color2: Color,
        duration: Duration,
    },
    Lightning {
        duration: Duration,
        seed: u64,
    },
    PoisonDrip {
        duration: Duration,
    },
    IceShatter {
        duration: Duration,
        seed: u64,
    },
    Sunrise {
        duration: Duration,
    },
    DayNight {
        duration: Duration,
    },
    Candlelight {
        duration: Duration,
        seed: u64,
    },
    XyRainbow {
        duration: Duration,
    },
    AlphaLayers {
        base: Color,
        duration: Duration,
    },
    CheckpointSequence {
        duration: Duration,
    },
}

impl EffectRequest {
    /// The reference-default request for an effect id.
    pub fn named(id: EffectId) -> Self {
        let ms = Duration::from_millis;
        match id {
            EffectId::GradientWave => Self::GradientWave {
                color1: color::RED,
                color2: color::BLUE,
                period: ms(2000),
                run_time: None,
            },
            EffectId::Ripple => Self::Ripple {
                color: color::CYAN,
                period: ms(1000),
                run_time: None,
            },
            EffectId::Breathing => Self::Breathing {
                color1: color::BLUE,
                color2: color::PURPLE,
                period: ms(3000),
                run_time: None,
            },
            EffectId::Chase => Self::Chase {
                color: color::WHITE,
                speed: 31.25,
                run_time: None,
            },
            EffectId::RainbowWave => Self::RainbowWave {
                period: ms(2000),
                run_time: None,
            },
            EffectId::PulseWave => Self::PulseWave {
                color1: color::RED,
                color2: color::BLUE,
                period: ms(1000),
                run_time: None,
            },
            EffectId::BrightnessWave => Self::BrightnessWave {
                color: color::PURPLE,
                duration: ms(3000),
            },
            EffectId::Spiral => Self::Spiral {
                color1: color::PURPLE,
                color2: color::CYAN,
                duration: ms(2000),
            },
            EffectId::Bounce => Self::Bounce {
                color1: color::RED,
                color2: color::BLUE,
                period: ms(2000),
                run_time: None,
            },
            EffectId::PulsingBounce => Self::PulsingBounce {
                color1: color::RED,
                color2: color::BLUE,
                bounce_period: ms(2000),
                pulse_period: ms(500),
                run_time: None,
            },
            EffectId::FadeBounce => Self::FadeBounce {
                color1: color::RED,
                color2: color::BLUE,
                period: ms(2000),
                run_time: None,
            },
            EffectId::DoubleBounce => Self::DoubleBounce {
                color1: color::RED,
                color2: color::BLUE,
                period: ms(2000),
                run_time: None,
            },
            EffectId::Meteor => Self::Meteor {
                color1: color::WHITE,
                color2: color::DEEP_BLUE,
                duration: ms(2500),
            },
            EffectId::CountdownPulse => Self::CountdownPulse {
                total: ms(10_000),
                start_color: color::DARK_RED,
                end_color: color::BRIGHT_GREEN,
            },
            EffectId::SegmentedCountdown => Self::SegmentedCountdown {
                total: ms(10_000),
                pairs: SegmentColorPairs::from_slice(&[
                    (color::RED, color::GREEN),
                    (color::PURPLE, color::CYAN),
                    (color::BLUE, color::YELLOW),
                ])
                .unwrap_or_default(),
            },
            EffectId::Flash => Self::Flash {
                color: color::WHITE,
                duration: ms(500),
            },
            EffectId::FlashSequence => Self::police_flash(6, ms(150)),
            EffectId::RandomSequence => Self::RandomSequence {
                duration: ms(3000),
                seed: 0,
            },
            EffectId::FadeToBlack => Self::FadeToBlack,
            EffectId::AcceleratingPulse => Self::AcceleratingPulse {
                color: color::RED,
                pulse_count: 5,
                start_period: ms(800),
                end_period: ms(100),
            },
            EffectId::Strobe => Self::Strobe {
                color: color::WHITE,
                duration: ms(1000),
                period: ms(50),
            },
            EffectId::ExplosionFlash => Self::ExplosionFlash {
                base: color::ORANGE,
                flash: color::WHITE,
                duration: ms(1500),
            },
            EffectId::ExplosionRipple => Self::ExplosionRipple {
                base: color::ORANGE,
                flash: color::WHITE,
                duration: ms(2000),
            },
            EffectId::Shockwave => Self::Shockwave {
                color: color::ORANGE,
                duration: ms(1500),
            },
            EffectId::EnergyBurst => Self::EnergyBurst {
                color: color::WHITE,
                duration: ms(800),
            },
            EffectId::DoubleStrike => Self::DoubleStrike {
                color: color::RED,
                duration: ms(500),
            },
            EffectId::TimeRewind => Self::TimeRewind {
                color1: color::VIOLET,
                color2: color::CYAN,
                duration: ms(3000),
            },
            EffectId::Lightning => Self::Lightning {
                duration: ms(1000),
                seed: 0,
            },
            EffectId::PoisonDrip => Self::PoisonDrip { duration: ms(3000) },
            EffectId::IceShatter => Self::IceShatter {
                duration: ms(1500),
                seed: 0,
            },
            EffectId::Sunrise => Self::Sunrise { duration: ms(3000) },
            EffectId::DayNight => Self::DayNight { duration: ms(3000) },
            EffectId::Candlelight => Self::Candlelight {
                duration: ms(3000),
                seed: 0,
            },
            EffectId::XyRainbow => Self::XyRainbow { duration: ms(3000) },
            EffectId::AlphaLayers => Self::AlphaLayers {
                base: color::ORANGE,
                duration: ms(3000),
            },
            EffectId::CheckpointSequence => Self::CheckpointSequence { duration: ms(3000) },
        }
    }

    /// Red / white / blue / white flash preset.
    pub fn police_flash(flash_count: u32, flash_speed: Duration) -> Self {
        Self::FlashSequence {
            colors: ColorSequence::from_slice(&[
                color::RED,
                color::WHITE,
                color::BLUE,
                color::WHITE,
            ])
            .unwrap_or_default(),
            flash_count,
            flash_speed,
        }
    }

    /// Red / white / emerald / white flash preset.
    pub fn mexican_flag(flash_count: u32, flash_speed: Duration) -> Self {
        Self::FlashSequence {
            colors: ColorSequence::from_slice(&[
                color::RED,
                color::WHITE,
                color::EMERALD,
                color::WHITE,
            ])
            .unwrap_or_default(),
            flash_count,
            flash_speed,
        }
    }

    /// The id this request starts.
    pub fn id(&self) -> EffectId {
        match self {
            Self::GradientWave { .. } => EffectId::GradientWave,
            Self::Ripple { .. } => EffectId::Ripple,
            Self::Breathing { .. } => EffectId::Breathing,
            Self::Chase { .. } => EffectId::Chase,
            Self::RainbowWave { .. } => EffectId::RainbowWave,
            Self::PulseWave { .. } => EffectId::PulseWave,
            Self::BrightnessWave { .. } => EffectId::BrightnessWave,
            Self::Spiral { .. } => EffectId::Spiral,
            Self::Bounce { .. } => EffectId::Bounce,
            Self::PulsingBounce { .. } => EffectId::PulsingBounce,
            Self::FadeBounce { .. } => EffectId::FadeBounce,
            Self::DoubleBounce { .. } => EffectId::DoubleBounce,
            Self::Meteor { .. } => EffectId::Meteor,
            Self::CountdownPulse { .. } => EffectId::CountdownPulse,
            Self::SegmentedCountdown { .. } => EffectId::SegmentedCountdown,
            Self::Flash { .. } => EffectId::Flash,
            Self::FlashSequence { .. } => EffectId::FlashSequence,
            Self::RandomSequence { .. } => EffectId::RandomSequence,
            Self::FadeToBlack => EffectId::FadeToBlack,
            Self::AcceleratingPulse { .. } => EffectId::AcceleratingPulse,
            Self::Strobe { .. } => EffectId::Strobe,
            Self::ExplosionFlash { .. } => EffectId::ExplosionFlash,
            Self::ExplosionRipple { .. } => EffectId::ExplosionRipple,
            Self::Shockwave { .. } => EffectId::Shockwave,
            Self::EnergyBurst { .. } => EffectId::EnergyBurst,
            Self::DoubleStrike { .. } => EffectId::DoubleStrike,
            Self::TimeRewind { .. } => EffectId::TimeRewind,
            Self::Lightning { .. } => EffectId::Lightning,
            Self::PoisonDrip { .. } => EffectId::PoisonDrip,
            Self::IceShatter { .. } => EffectId::IceShatter,
            Self::Sunrise { .. } => EffectId::Sunrise,
            Self::DayNight { .. } => EffectId::DayNight,
            Self::Candlelight { .. } => EffectId::Candlelight,
            Self::XyRainbow { .. } => EffectId::XyRainbow,
            Self::AlphaLayers { .. } => EffectId::AlphaLayers,
            Self::CheckpointSequence { .. } => EffectId::CheckpointSequence,
        }
    }

    /// Validate parameters and build the runnable effect.
    ///
    /// Nothing is armed on failure; the scheduler calls this before touching
    /// any of its own state.
    pub fn build(self) -> Result<EffectSlot, StartError> {
        fn nonzero(d: Duration) -> Result<Duration, StartError> {
            if d.as_millis() == 0 {
                Err(StartError::ZeroDuration)
            } else {
                Ok(d)
            }
        }
        fn bound(run_time: Option<Duration>) -> Result<Option<Duration>, StartError> {
            run_time.map(nonzero).transpose()
        }

        let slot = match self {
            Self::GradientWave {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::GradientWave(GradientWave::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::Ripple {
                color,
                period,
                run_time,
            } => EffectSlot::Ripple(Ripple::new(color, nonzero(period)?, bound(run_time)?)),
            Self::Breathing {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::Breathing(Breathing::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::Chase {
                color,
                speed,
                run_time,
            } => {
                if speed <= 0.0 {
                    return Err(StartError::NonPositiveSpeed);
                }
                EffectSlot::Chase(Chase::new(color, speed, bound(run_time)?))
            }
            Self::RainbowWave { period, run_time } => {
                EffectSlot::RainbowWave(RainbowWave::new(nonzero(period)?, bound(run_time)?))
            }
            Self::PulseWave {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::PulseWave(PulseWave::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::BrightnessWave { color, duration } => {
                EffectSlot::BrightnessWave(BrightnessWave::new(color, nonzero(duration)?))
            }
            Self::Spiral {
                color1,
                color2,
                duration,
            } => EffectSlot::Spiral(Spiral::new(color1, color2, nonzero(duration)?)),
            Self::Bounce {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::Bounce(Bounce::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::PulsingBounce {
                color1,
                color2,
                bounce_period,
                pulse_period,
                run_time,
            } => EffectSlot::PulsingBounce(PulsingBounce::new(
                color1,
                color2,
                nonzero(bounce_period)?,
                nonzero(pulse_period)?,
                bound(run_time)?,
            )),
            Self::FadeBounce {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::FadeBounce(FadeBounce::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::DoubleBounce {
                color1,
                color2,
                period,
                run_time,
            } => EffectSlot::DoubleBounce(DoubleBounce::new(
                color1,
                color2,
                nonzero(period)?,
                bound(run_time)?,
            )),
            Self::Meteor {
                color1,
                color2,
                duration,
            } => EffectSlot::Meteor(Meteor::new(color1, color2, nonzero(duration)?)),
            Self::CountdownPulse {
                total,
                start_color,
                end_color,
            } => EffectSlot::CountdownPulse(CountdownPulse::new(
                nonzero(total)?,
                start_color,
                end_color,
            )),
            Self::SegmentedCountdown { total, pairs } => {
                if pairs.is_empty() {
                    return Err(StartError::EmptySequence);
                }
                EffectSlot::SegmentedCountdown(SegmentedCountdown::new(nonzero(total)?, pairs))
            }
            Self::Flash { color, duration } => {
                EffectSlot::Flash(Flash::new(color, nonzero(duration)?))
            }
            Self::FlashSequence {
                colors,
                flash_count,
                flash_speed,
            } => {
                if colors.is_empty() {
                    return Err(StartError::EmptySequence);
                }
                if flash_count == 0 {
                    return Err(StartError::ZeroCount);
                }
                EffectSlot::FlashSequence(FlashSequence::new(
                    colors,
                    flash_count,
                    nonzero(flash_speed)?,
                ))
            }
            Self::RandomSequence { duration, seed } => {
                EffectSlot::RandomSequence(RandomSequence::new(nonzero(duration)?, seed))
            }
            Self::FadeToBlack => EffectSlot::FadeToBlack(FadeToBlack::new()),
            Self::AcceleratingPulse {
                color,
                pulse_count,
                start_period,
                end_period,
            } => {
                if pulse_count == 0 {
                    return Err(StartError::ZeroCount);
                }
                EffectSlot::AcceleratingPulse(AcceleratingPulse::new(
                    color,
                    pulse_count,
                    nonzero(start_period)?,
                    nonzero(end_period)?,
                ))
            }
            Self::Strobe {
                color,
                duration,
                period,
            } => EffectSlot::Strobe(Strobe::new(color, nonzero(duration)?, nonzero(period)?)),
            Self::ExplosionFlash {
                base,
                flash,
                duration,
            } => EffectSlot::ExplosionFlash(ExplosionFlash::new(base, flash, nonzero(duration)?)),
            Self::ExplosionRipple {
                base,
                flash,
                duration,
            } => EffectSlot::ExplosionRipple(ExplosionRipple::new(base, flash, nonzero(duration)?)),
            Self::Shockwave { color, duration } => {
                EffectSlot::Shockwave(Shockwave::new(color, nonzero(duration)?))
            }
            Self::EnergyBurst { color, duration } => {
                EffectSlot::EnergyBurst(EnergyBurst::new(color, nonzero(duration)?))
            }
            Self::DoubleStrike { color, duration } => {
                EffectSlot::DoubleStrike(DoubleStrike::new(color, nonzero(duration)?))
            }
            Self::TimeRewind {
                color1,
                color2,
                duration,
            } => EffectSlot::TimeRewind(TimeRewind::new(color1, color2, nonzero(duration)?)),
            Self::Lightning { duration, seed } => {
                EffectSlot::Lightning(Lightning::new(nonzero(duration)?, seed))
            }
            Self::PoisonDrip { duration } => {
                EffectSlot::PoisonDrip(PoisonDrip::new(nonzero(duration)?))
            }
            Self::IceShatter { duration, seed } => {
                EffectSlot::IceShatter(IceShatter::new(nonzero(duration)?, seed))
            }
            Self::Sunrise { duration } => EffectSlot::Sunrise(Sunrise::new(nonzero(duration)?)),
            Self::DayNight { duration } => EffectSlot::DayNight(DayNight::new(nonzero(duration)?)),
            Self::Candlelight { duration, seed } => {
                EffectSlot::Candlelight(Candlelight::new(nonzero(duration)?, seed))
            }
            Self::XyRainbow { duration } => {
                EffectSlot::XyRainbow(XyRainbow::new(nonzero(duration)?))
            }
            Self::AlphaLayers { base, duration } => {
                EffectSlot::AlphaLayers(AlphaLayers::new(base, nonzero(duration)?))
            }
            Self::CheckpointSequence { duration } => {
                EffectSlot::CheckpointSequence(CheckpointSequence::new(nonzero(duration)?))
            }
        };
        Ok(slot)
    }
}

/// Slot holding the one live effect, enum-dispatched.
#[derive(Debug, Clone)]
pub enum EffectSlot {
    GradientWave(GradientWave),
    Ripple(Ripple),
    Breathing(Breathing),
    Chase(Chase),
    RainbowWave(RainbowWave),
    PulseWave(PulseWave),
    BrightnessWave(BrightnessWave),
    Spiral(Spiral),
    Bounce(Bounce),
    PulsingBounce(PulsingBounce),
    FadeBounce(FadeBounce),
    DoubleBounce(DoubleBounce),
    Meteor(Meteor),
    CountdownPulse(CountdownPulse),
    SegmentedCountdown(SegmentedCountdown),
    Flash(Flash),
    FlashSequence(FlashSequence),
    RandomSequence(RandomSequence),
    FadeToBlack(FadeToBlack),
    AcceleratingPulse(AcceleratingPulse),
    Strobe(Strobe),
    ExplosionFlash(ExplosionFlash),
    ExplosionRipple(ExplosionRipple),
    Shockwave(Shockwave),
    EnergyBurst(EnergyBurst),
    DoubleStrike(DoubleStrike),
    TimeRewind(TimeRewind),
    Lightning(Lightning),
    PoisonDrip(PoisonDrip),
    IceShatter(IceShatter),
    Sunrise(Sunrise),
    DayNight(DayNight),
    Candlelight(Candlelight),
    XyRainbow(XyRainbow),
    AlphaLayers(AlphaLayers),
    CheckpointSequence(CheckpointSequence),
}

impl EffectSlot {
    /// Render the current effect for one tick.
    pub fn render(&mut self, elapsed: Duration, frame: &mut Frame) -> Progress {
        match self {
            Self::GradientWave(effect) => effect.render(elapsed, frame),
            Self::Ripple(effect) => effect.render(elapsed, frame),
            Self::Breathing(effect) => effect.render(elapsed, frame),
            Self::Chase(effect) => effect.render(elapsed, frame),
            Self::RainbowWave(effect) => effect.render(elapsed, frame),
            Self::PulseWave(effect) => effect.render(elapsed, frame),
            Self::BrightnessWave(effect) => effect.render(elapsed, frame),
            Self::Spiral(effect) => effect.render(elapsed, frame),
            Self::Bounce(effect) => effect.render(elapsed, frame),
            Self::PulsingBounce(effect) => effect.render(elapsed, frame),
            Self::FadeBounce(effect) => effect.render(elapsed, frame),
            Self::DoubleBounce(effect) => effect.render(elapsed, frame),
            Self::Meteor(effect) => effect.render(elapsed, frame),
            Self::CountdownPulse(effect) => effect.render(elapsed, frame),
            Self::SegmentedCountdown(effect) => effect.render(elapsed, frame),
            Self::Flash(effect) => effect.render(elapsed, frame),
            Self::FlashSequence(effect) => effect.render(elapsed, frame),
            Self::RandomSequence(effect) => effect.render(elapsed, frame),
            Self::FadeToBlack(effect) => effect.render(elapsed, frame),
            Self::AcceleratingPulse(effect) => effect.render(elapsed, frame),
            Self::Strobe(effect) => effect.render(elapsed, frame),
            Self::ExplosionFlash(effect) => effect.render(elapsed, frame),
            Self::ExplosionRipple(effect) => effect.render(elapsed, frame),
            Self::Shockwave(effect) => effect.render(elapsed, frame),
            Self::EnergyBurst(effect) => effect.render(elapsed, frame),
            Self::DoubleStrike(effect) => effect.render(elapsed, frame),
            Self::TimeRewind(effect) => effect.render(elapsed, frame),
            Self::Lightning(effect) => effect.render(elapsed, frame),
            Self::PoisonDrip(effect) => effect.render(elapsed, frame),
            Self::IceShatter(effect) => effect.render(elapsed, frame),
            Self::Sunrise(effect) => effect.render(elapsed, frame),
            Self::DayNight(effect) => effect.render(elapsed, frame),
            Self::Candlelight(effect) => effect.render(elapsed, frame),
            Self::XyRainbow(effect) => effect.render(elapsed, frame),
            Self::AlphaLayers(effect) => effect.render(elapsed, frame),
            Self::CheckpointSequence(effect) => effect.render(elapsed, frame),
        }
    }
}
