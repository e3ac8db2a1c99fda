//! Named colors used by effect defaults and random sampling.

use super::Color;

pub const AMBER: Color = Color::new(255, 191, 0);
pub const BLACK: Color = Color::new(0, 0, 0);
pub const BLOOD_RED: Color = Color::new(100, 0, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const BRIGHT_GREEN: Color = Color::new(0, 255, 50);
pub const CRIMSON: Color = Color::new(220, 20, 60);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const DARK_RED: Color = Color::new(150, 0, 0);
pub const DEEP_BLUE: Color = Color::new(0, 0, 139);
pub const ELECTRIC_BLUE: Color = Color::new(125, 249, 255);
pub const EMERALD: Color = Color::new(80, 200, 120);
pub const GOLD: Color = Color::new(255, 215, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const HOT_PINK: Color = Color::new(255, 105, 180);
pub const ICE_BLUE: Color = Color::new(176, 224, 230);
pub const LIME_GREEN: Color = Color::new(50, 255, 0);
pub const MAGENTA: Color = Color::new(255, 0, 255);
pub const ORANGE: Color = Color::new(255, 165, 0);
pub const PURPLE: Color = Color::new(128, 0, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const VIOLET: Color = Color::new(138, 43, 226);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Sampling pool for the random flash-sequence effect.
///
/// Black is deliberately absent so a random draw never produces a dark flash.
pub const PALETTE: [Color; 22] = [
    AMBER,
    BLOOD_RED,
    BLUE,
    BRIGHT_GREEN,
    CRIMSON,
    CYAN,
    DARK_RED,
    DEEP_BLUE,
    ELECTRIC_BLUE,
    EMERALD,
    GOLD,
    GREEN,
    HOT_PINK,
    ICE_BLUE,
    LIME_GREEN,
    MAGENTA,
    ORANGE,
    PURPLE,
    RED,
    VIOLET,
    WHITE,
    YELLOW,
];
