//! Cosmos Boulders - deterministic core of a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game modes)
//! - `session`: Edge-triggered control handling around the game
//! - `hud`: Read-only display view derived from a game snapshot
//! - `settings`: Configuration for the native driver

pub mod hud;
pub mod session;
pub mod settings;
pub mod sim;

pub use hud::Hud;
pub use session::{Session, SessionAction};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Fixed ruleset constants
pub mod consts {
    /// Playfield dimensions (the plane wraps at both edges)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Per-axis velocity cap for the ship (units/tick)
    pub const MAX_SHIP_SPEED: f32 = 6.0;
    /// Heading change per tick while a turn line is held (degrees)
    pub const TURN_RATE: f32 = 5.0;
    /// Thrust force while the thrust line is held
    pub const THRUST_FORCE: f32 = 0.05;
    pub const SHIP_MASS: f32 = 1.0;
    /// Ship heading after a reset (north; east is 0, south is 90)
    pub const SHIP_START_HEADING: f32 = 270.0;
    pub const STARTING_LIVES: u32 = 2;

    /// Missile muzzle speed (units/tick)
    pub const MISSILE_SPEED: f32 = 2.0;

    /// Boulders per wave
    pub const WAVE_SIZE: usize = 8;

    /// Points awarded per missile hit
    pub const POINTS_PER_HIT: u64 = 10;

    /// Timer lengths (ticks)
    pub const GET_READY_TICKS: i32 = 200;
    pub const EXPLODING_TICKS: i32 = 50;
    pub const MISSILE_LIFETIME_TICKS: i32 = 50;
    pub const BOULDER_APPEAR_TICKS: i32 = 60;
    pub const ATTRACT_TICKS: i32 = 400;
    pub const GAME_OVER_TICKS: i32 = 100;

    /// Collision box half-extents
    pub const HIT_TOLERANCE: f32 = 10.0;
    /// Vertical offset from ship origin to its visual center
    pub const SHIP_CENTER_OFFSET_Y: f32 = 5.0;
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(deg: f32) -> f32 {
    (deg / 360.0) * std::f32::consts::TAU
}

/// Sign of `n` as -1, 0 or 1
#[inline]
pub fn sign(n: f32) -> f32 {
    if n > 0.0 {
        1.0
    } else if n < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Limit the magnitude of `n` to `max`, keeping its sign
#[inline]
pub fn clamp_abs(n: f32, max: f32) -> f32 {
    if n.abs() > max { max * sign(n) } else { n }
}

/// Unit vector for a heading in degrees (screen coordinates, y down)
#[inline]
pub fn heading_vector(heading_deg: f32) -> Vec2 {
    let theta = to_radians(heading_deg);
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_radians() {
        assert!((to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
    }

    #[test]
    fn test_clamp_abs() {
        assert_eq!(clamp_abs(7.0, 6.0), 6.0);
        assert_eq!(clamp_abs(-9.0, 6.0), -6.0);
        assert_eq!(clamp_abs(2.5, 6.0), 2.5);
    }

    #[test]
    fn test_heading_vector_east_and_south() {
        let east = heading_vector(0.0);
        assert!((east.x - 1.0).abs() < 1e-6 && east.y.abs() < 1e-6);
        let south = heading_vector(90.0);
        assert!(south.x.abs() < 1e-6 && (south.y - 1.0).abs() < 1e-6);
    }
}
