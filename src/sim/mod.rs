//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One action in, one new state out
//! - Seeded RNG only (boulder waves)
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod boulder;
pub mod collision;
pub mod controls;
pub mod missile;
pub mod physics;
pub mod player;
pub mod state;
pub mod tick;

pub use boulder::{Boulder, BoulderAction, BoulderMode, spawn_wave};
pub use collision::{CollisionOutcome, boxes_overlap, detect_collisions, ship_hits_boulder};
pub use controls::{ControlChange, ControlLines};
pub use missile::{Missile, MissileAction, MissileMode};
pub use physics::{Body, Countdown, advance_position, wrap_axis, wrap_position};
pub use player::{Player, PlayerAction, PlayerMode};
pub use state::{Game, GameMode};
pub use tick::GameAction;
