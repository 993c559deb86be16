//! Missiles fired by the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::{Body, Countdown, advance_position};
use crate::consts::{EXPLODING_TICKS, MISSILE_LIFETIME_TICKS, MISSILE_SPEED};
use crate::heading_vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissileMode {
    Moving,
    Gone,
}

/// Actions understood by the missile reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissileAction {
    Step,
    Explode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mode: MissileMode,
    /// Remaining lifetime; after an explosion, ticks of explosion flourish
    pub timer: i32,
}

impl Missile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            mode: MissileMode::Moving,
            timer: MISSILE_LIFETIME_TICKS,
        }
    }

    /// Launch from `pos` along a heading in degrees at muzzle speed
    pub fn fired(pos: Vec2, heading: f32) -> Self {
        Self::new(pos, heading_vector(heading) * MISSILE_SPEED)
    }

    pub fn is_moving(&self) -> bool {
        self.mode == MissileMode::Moving
    }

    pub fn apply(self, action: MissileAction) -> Self {
        if !self.is_moving() {
            return self;
        }
        match action {
            MissileAction::Step => advance_position(self).on_timer_expired(|m| Self {
                mode: MissileMode::Gone,
                ..m
            }),
            MissileAction::Explode => Self {
                mode: MissileMode::Gone,
                timer: EXPLODING_TICKS,
                ..self
            },
        }
    }
}

impl Body for Missile {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn vel(&self) -> Vec2 {
        self.vel
    }
    fn with_pos(self, pos: Vec2) -> Self {
        Self { pos, ..self }
    }
}

impl Countdown for Missile {
    fn timer(&self) -> i32 {
        self.timer
    }
    fn with_timer(self, timer: i32) -> Self {
        Self { timer, ..self }
    }
}
