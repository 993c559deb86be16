//! Boulders: the hazards that drift across the field

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::physics::{Body, Countdown, advance_position};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoulderMode {
    /// Materializing; harmless until the timer runs out
    Appearing,
    Moving,
    Exploding,
    Gone,
}

/// Actions understood by the boulder reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoulderAction {
    Step,
    Explode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boulder {
    pub pos: Vec2,
    pub vel: Vec2,
    pub mode: BoulderMode,
    pub timer: i32,
}

impl Boulder {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            mode: BoulderMode::Appearing,
            timer: BOULDER_APPEAR_TICKS,
        }
    }

    /// Random whole-unit position anywhere on screen, drifting up and left
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(0..SCREEN_WIDTH as u32) as f32;
        let y = rng.random_range(0..SCREEN_HEIGHT as u32) as f32;
        let vx = rng.random::<f32>() - 1.0;
        let vy = rng.random::<f32>() - 1.0;
        Self::new(Vec2::new(x, y), Vec2::new(vx, vy))
    }

    pub fn is_moving(&self) -> bool {
        self.mode == BoulderMode::Moving
    }

    pub fn is_gone(&self) -> bool {
        self.mode == BoulderMode::Gone
    }

    pub fn apply(self, action: BoulderAction) -> Self {
        match (action, self.mode) {
            (BoulderAction::Step, BoulderMode::Appearing) => self.on_timer_expired(|b| Self {
                mode: BoulderMode::Moving,
                ..b
            }),
            (BoulderAction::Step, BoulderMode::Moving) => advance_position(self),
            (BoulderAction::Step, BoulderMode::Exploding) => self.on_timer_expired(|b| Self {
                mode: BoulderMode::Gone,
                ..b
            }),
            (BoulderAction::Explode, BoulderMode::Moving) => Self {
                mode: BoulderMode::Exploding,
                timer: EXPLODING_TICKS,
                ..self
            },
            (BoulderAction::Step, BoulderMode::Gone)
            | (BoulderAction::Explode, BoulderMode::Appearing)
            | (BoulderAction::Explode, BoulderMode::Exploding)
            | (BoulderAction::Explode, BoulderMode::Gone) => self,
        }
    }
}

/// A full wave of freshly appearing boulders
pub fn spawn_wave<R: Rng + ?Sized>(rng: &mut R) -> Vec<Boulder> {
    (0..WAVE_SIZE).map(|_| Boulder::spawn(rng)).collect()
}

impl Body for Boulder {
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

impl Countdown for Boulder {
    fn timer(&self) -> i32 {
        self.timer
    }
    fn with_timer(self, timer: i32) -> Self {
        Self { timer, ..self }
    }
}
