#![no_std]

pub mod color;
pub mod controller;
pub mod effect;
pub mod frame;
pub mod pacer;
pub mod scheduler;
pub mod segment;
pub mod sink;

pub use controller::LightController;
pub use effect::{
    ColorSequence, Effect, EffectId, EffectRequest, EffectSlot, Finale, Progress,
    SegmentColorPairs, StartError, fill_level_bar,
};
pub use frame::{Frame, GroupCommand, ZoneCommand};
pub use pacer::{FramePacer, FrameResult};
pub use scheduler::EffectScheduler;
pub use segment::{MAX_ZONES, SegmentError, SegmentMap, ZoneId};
pub use sink::{DeviceSink, SinkError, SinkStatus};

pub use color::{Color, hsv_to_rgb, interpolate};
pub use embassy_time::{Duration, Instant};
