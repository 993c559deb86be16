//! The player's ship and its reducer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::controls::ControlChange;
use super::physics::{Body, Countdown, advance_position};
use crate::consts::*;
use crate::{clamp_abs, heading_vector};

/// Ship life cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    /// Waiting to launch; blinks until the timer runs out or fire is pressed
    GetReady,
    /// Under player control
    Playing,
    /// Hit by a boulder, counting down to the next life
    Exploding,
    /// Out of lives (terminal)
    Gone,
}

/// Actions understood by the player reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Step,
    ScorePoints,
    Explode,
    ControlsChanged(ControlChange),
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Degrees; east is 0, south is 90. Never normalized.
    pub heading: f32,
    /// Degrees added to the heading each tick
    pub turn_rate: f32,
    /// Thrust force along the heading
    pub force: f32,
    pub mass: f32,
    pub score: u64,
    pub lives: u32,
    pub mode: PlayerMode,
    /// Ticks left in the current mode
    pub timer: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A fresh ship at the start of a session
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            heading: SHIP_START_HEADING,
            turn_rate: 0.0,
            force: 0.0,
            mass: SHIP_MASS,
            score: 0,
            lives: STARTING_LIVES,
            mode: PlayerMode::GetReady,
            timer: GET_READY_TICKS,
        }
        .reset()
    }

    /// Restore kinematics and mode for a new life; score and lives are kept
    pub fn reset(self) -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            heading: SHIP_START_HEADING,
            turn_rate: 0.0,
            force: 0.0,
            mode: PlayerMode::GetReady,
            timer: GET_READY_TICKS,
            ..self
        }
    }

    pub fn is_playing(&self) -> bool {
        self.mode == PlayerMode::Playing
    }

    /// Apply one action and return the resulting ship
    pub fn apply(self, action: PlayerAction) -> Self {
        match action {
            PlayerAction::Step => self.step(),
            PlayerAction::ScorePoints => Self {
                score: self.score + POINTS_PER_HIT,
                ..self
            },
            PlayerAction::Explode => {
                if self.is_playing() {
                    Self {
                        mode: PlayerMode::Exploding,
                        timer: EXPLODING_TICKS,
                        ..self
                    }
                } else {
                    self
                }
            }
            PlayerAction::ControlsChanged(change) => self.controls_changed(&change),
        }
    }

    fn step(self) -> Self {
        match self.mode {
            PlayerMode::GetReady => self.on_timer_expired(|p| Self {
                mode: PlayerMode::Playing,
                ..p
            }),
            PlayerMode::Playing => self.fly(),
            PlayerMode::Exploding => self.on_timer_expired(|p| {
                if p.lives > 0 {
                    log::info!("Ship lost, {} lives remaining", p.lives - 1);
                    Self {
                        lives: p.lives - 1,
                        ..p
                    }
                    .reset()
                } else {
                    log::info!("Ship lost, no lives remaining");
                    Self {
                        mode: PlayerMode::Gone,
                        ..p
                    }
                }
            }),
            PlayerMode::Gone => panic!("STEP delivered to a ship that is already GONE"),
        }
    }

    /// Integrate one tick of flight.
    ///
    /// Velocity picks up last tick's acceleration; the new acceleration comes
    /// from the heading at the start of the tick and is force * mass.
    fn fly(self) -> Self {
        let moved = advance_position(self);
        let vel = Vec2::new(
            clamp_abs(self.vel.x + self.acc.x, MAX_SHIP_SPEED),
            clamp_abs(self.vel.y + self.acc.y, MAX_SHIP_SPEED),
        );
        let acc = if self.force > 0.0 {
            heading_vector(self.heading) * self.force * self.mass
        } else {
            Vec2::ZERO
        };
        Self {
            vel,
            acc,
            heading: self.heading + self.turn_rate,
            ..moved
        }
    }

    fn controls_changed(self, change: &ControlChange) -> Self {
        match self.mode {
            PlayerMode::Playing => Self {
                turn_rate: change.turn_direction() * TURN_RATE,
                force: if change.now.thrust { THRUST_FORCE } else { 0.0 },
                ..self
            },
            PlayerMode::GetReady if change.fire_went_down() => Self {
                turn_rate: 0.0,
                force: 0.0,
                mode: PlayerMode::Playing,
                ..self
            },
            _ => Self {
                turn_rate: 0.0,
                force: 0.0,
                ..self
            },
        }
    }
}

impl Body for Player {
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

impl Countdown for Player {
    fn timer(&self) -> i32 {
        self.timer
    }
    fn with_timer(self, timer: i32) -> Self {
        Self { timer, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::controls::ControlLines;
    use proptest::prelude::*;

    fn playing() -> Player {
        Player {
            mode: PlayerMode::Playing,
            timer: 0,
            ..Player::new()
        }
    }

    fn change(now: ControlLines, prev: ControlLines) -> PlayerAction {
        PlayerAction::ControlsChanged(ControlChange::new(now, prev))
    }

    #[test]
    fn test_new_player() {
        let p = Player::new();
        assert_eq!(p.pos, Vec2::new(320.0, 200.0));
        assert_eq!(p.heading, 270.0);
        assert_eq!(p.lives, 2);
        assert_eq!(p.score, 0);
        assert_eq!(p.mode, PlayerMode::GetReady);
        assert_eq!(p.timer, 200);
    }

    #[test]
    fn test_get_ready_expires_to_playing() {
        let p = Player {
            timer: 1,
            vel: Vec2::new(0.5, 0.5),
            ..Player::new()
        };
        let next = p.apply(PlayerAction::Step);
        assert_eq!(next.mode, PlayerMode::Playing);
        assert_eq!(next.timer, 0);
        assert_eq!(next.pos, p.pos);
        assert_eq!(next.vel, p.vel);
        assert_eq!(next.heading, p.heading);
    }

    #[test]
    fn test_get_ready_counts_down() {
        let next = Player::new().apply(PlayerAction::Step);
        assert_eq!(next.mode, PlayerMode::GetReady);
        assert_eq!(next.timer, 199);
    }

    #[test]
    fn test_playing_step_integrates() {
        let p = Player {
            vel: Vec2::new(1.0, 0.0),
            acc: Vec2::new(0.5, 0.25),
            turn_rate: 5.0,
            ..playing()
        };
        let next = p.apply(PlayerAction::Step);
        // Position moves by the old velocity
        assert_eq!(next.pos, Vec2::new(321.0, 200.0));
        assert_eq!(next.vel, Vec2::new(1.5, 0.25));
        assert_eq!(next.heading, 275.0);
        // No thrust: acceleration drops to zero
        assert_eq!(next.acc, Vec2::ZERO);
    }

    #[test]
    fn test_thrust_acceleration_uses_force_times_mass() {
        let p = Player {
            heading: 0.0,
            force: 0.05,
            mass: 2.0,
            ..playing()
        };
        let next = p.apply(PlayerAction::Step);
        assert!((next.acc.x - 0.1).abs() < 1e-6);
        assert!(next.acc.y.abs() < 1e-6);
    }

    #[test]
    fn test_heading_is_not_wrapped() {
        let mut p = Player {
            heading: 355.0,
            turn_rate: 5.0,
            ..playing()
        };
        for _ in 0..3 {
            p = p.apply(PlayerAction::Step);
        }
        assert_eq!(p.heading, 370.0);
    }

    #[test]
    fn test_score_points() {
        let p = Player::new().apply(PlayerAction::ScorePoints);
        assert_eq!(p.score, 10);
        assert_eq!(p.mode, PlayerMode::GetReady);
    }

    #[test]
    fn test_explode_only_while_playing() {
        let hit = playing().apply(PlayerAction::Explode);
        assert_eq!(hit.mode, PlayerMode::Exploding);
        assert_eq!(hit.timer, 50);

        let ready = Player::new();
        assert_eq!(ready.apply(PlayerAction::Explode), ready);
    }

    #[test]
    fn test_exploding_with_lives_resets() {
        let p = Player {
            mode: PlayerMode::Exploding,
            timer: 1,
            score: 40,
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(3.0, 3.0),
            ..Player::new()
        };
        let next = p.apply(PlayerAction::Step);
        assert_eq!(next.mode, PlayerMode::GetReady);
        assert_eq!(next.lives, 1);
        assert_eq!(next.score, 40);
        assert_eq!(next.pos, Vec2::new(320.0, 200.0));
        assert_eq!(next.vel, Vec2::ZERO);
        assert_eq!(next.timer, 200);
    }

    #[test]
    fn test_exploding_without_lives_goes_gone() {
        let p = Player {
            mode: PlayerMode::Exploding,
            timer: 1,
            lives: 0,
            ..Player::new()
        };
        let next = p.apply(PlayerAction::Step);
        assert_eq!(next.mode, PlayerMode::Gone);
        assert_eq!(next.lives, 0);
    }

    #[test]
    #[should_panic(expected = "GONE")]
    fn test_step_on_gone_is_fatal() {
        let p = Player {
            mode: PlayerMode::Gone,
            ..Player::new()
        };
        let _ = p.apply(PlayerAction::Step);
    }

    #[test]
    fn test_controls_while_playing() {
        let lines = ControlLines {
            left: true,
            thrust: true,
            ..Default::default()
        };
        let p = playing().apply(change(lines, ControlLines::default()));
        assert_eq!(p.turn_rate, -5.0);
        assert_eq!(p.force, 0.05);

        let lines = ControlLines {
            left: true,
            right: true,
            ..Default::default()
        };
        let p = p.apply(change(lines, ControlLines::default()));
        assert_eq!(p.turn_rate, 5.0);
        assert_eq!(p.force, 0.0);
    }

    #[test]
    fn test_fire_press_launches_from_get_ready() {
        let fire = ControlLines {
            fire: true,
            ..Default::default()
        };
        let p = Player {
            turn_rate: 5.0,
            ..Player::new()
        }
        .apply(change(fire, ControlLines::default()));
        assert_eq!(p.mode, PlayerMode::Playing);
        assert_eq!(p.turn_rate, 0.0);
        assert_eq!(p.force, 0.0);

        // Releasing fire does not launch
        let p = Player::new().apply(change(ControlLines::default(), fire));
        assert_eq!(p.mode, PlayerMode::GetReady);
    }

    #[test]
    fn test_controls_while_exploding_zero_inputs() {
        let p = Player {
            mode: PlayerMode::Exploding,
            timer: 20,
            turn_rate: 5.0,
            force: 0.05,
            vel: Vec2::new(1.0, 1.0),
            ..Player::new()
        };
        let lines = ControlLines {
            right: true,
            thrust: true,
            ..Default::default()
        };
        let next = p.apply(change(lines, ControlLines::default()));
        assert_eq!(next.turn_rate, 0.0);
        assert_eq!(next.force, 0.0);
        assert_eq!(next.vel, p.vel);
        assert_eq!(next.mode, PlayerMode::Exploding);
    }

    proptest! {
        #[test]
        fn prop_velocity_clamped_after_step(
            vx in -6.0f32..=6.0,
            vy in -6.0f32..=6.0,
            heading in -720.0f32..720.0,
            thrust in any::<bool>(),
            steps in 1usize..300,
        ) {
            let mut p = Player {
                vel: Vec2::new(vx, vy),
                heading,
                force: if thrust { THRUST_FORCE } else { 0.0 },
                ..playing()
            };
            for _ in 0..steps {
                p = p.apply(PlayerAction::Step);
                prop_assert!(p.vel.x.abs() <= MAX_SHIP_SPEED);
                prop_assert!(p.vel.y.abs() <= MAX_SHIP_SPEED);
            }
        }
    }
}
