//! Game orchestration: one action in, one new game state out
//!
//! A frame fans out into per-entity steps, then collision resolution, then
//! mode transitions for the cabinet as a whole.

use rand::Rng;

use super::boulder::{BoulderAction, spawn_wave};
use super::collision::detect_collisions;
use super::controls::ControlChange;
use super::missile::{Missile, MissileAction};
use super::physics::Countdown;
use super::player::{PlayerAction, PlayerMode};
use super::state::{Game, GameMode};
use crate::consts::*;

/// Actions understood by the game reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Advance the simulation one tick
    FrameReady,
    /// At least one control line changed since the previous tick
    ControlsChanged(ControlChange),
    CoinInserted,
}

impl<R: Rng> Game<R> {
    /// Apply one action and return the resulting game
    pub fn apply(self, action: GameAction) -> Self {
        match action {
            GameAction::FrameReady => self.frame(),
            GameAction::ControlsChanged(change) => self.controls_changed(&change),
            GameAction::CoinInserted => self.coin_inserted(),
        }
    }

    fn frame(self) -> Self {
        match self.mode {
            GameMode::GameOn => self.play_frame(),
            GameMode::GameOver => self.on_timer_expired(|game| {
                log::info!("Returning to title, high score {}", game.high_score);
                game.reset()
            }),
            GameMode::AttractTitle if self.credits > 0 => self,
            GameMode::AttractTitle => self.on_timer_expired(|mut game| {
                game.mode = GameMode::AttractHiscores;
                game.timer = ATTRACT_TICKS;
                game
            }),
            GameMode::AttractHiscores => self.on_timer_expired(|mut game| {
                game.mode = GameMode::AttractTitle;
                game.timer = ATTRACT_TICKS;
                game
            }),
        }
    }

    fn play_frame(mut self) -> Self {
        // A GONE ship ends the game on the tick it happens, but never step it
        let player = if self.player.mode == PlayerMode::Gone {
            self.player
        } else {
            self.player.apply(PlayerAction::Step)
        };

        let boulders = self
            .boulders
            .into_iter()
            .map(|b| b.apply(BoulderAction::Step))
            .collect();

        let missiles = self
            .missiles
            .into_iter()
            .map(|m| m.apply(MissileAction::Step))
            .filter(Missile::is_moving)
            .collect();

        let outcome = detect_collisions(player, missiles, boulders);

        self.player = outcome.player;
        self.missiles = outcome.missiles;
        self.boulders = outcome.boulders.into_iter().filter(|b| !b.is_gone()).collect();

        if self.boulders.is_empty() {
            log::info!("Wave cleared, spawning {} boulders", WAVE_SIZE);
            self.boulders = spawn_wave(&mut self.rng);
        }

        if self.player.mode == PlayerMode::Gone {
            self.high_score = self.high_score.max(self.player.score);
            self.mode = GameMode::GameOver;
            self.timer = GAME_OVER_TICKS;
            log::info!(
                "Game over, score {} (high score {})",
                self.player.score,
                self.high_score
            );
        }

        self
    }

    fn controls_changed(mut self, change: &ControlChange) -> Self {
        match self.mode {
            GameMode::AttractTitle if change.start_went_up() && self.credits > 0 => {
                self.player = self.player.reset();
                self.credits -= 1;
                self.mode = GameMode::GameOn;
                log::info!("Game started, {} credits left", self.credits);
                self
            }
            GameMode::GameOn if change.fire_went_down() && self.player.is_playing() => {
                let missile = Missile::fired(self.player.pos, self.player.heading);
                log::debug!(
                    "Missile fired from ({:.1}, {:.1}) heading {:.0}",
                    missile.pos.x,
                    missile.pos.y,
                    self.player.heading
                );
                self.missiles.push(missile);
                self
            }
            GameMode::GameOn => {
                self.player = self.player.apply(PlayerAction::ControlsChanged(*change));
                self
            }
            GameMode::AttractTitle | GameMode::AttractHiscores | GameMode::GameOver => self,
        }
    }

    fn coin_inserted(mut self) -> Self {
        self.credits += 1;
        log::info!("Coin inserted, {} credits", self.credits);
        if self.mode == GameMode::AttractHiscores {
            self.mode = GameMode::AttractTitle;
        }
        self
    }
}
