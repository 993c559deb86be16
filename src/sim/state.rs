//! Game state and core simulation types
//!
//! Everything the renderer reads after a dispatch lives here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boulder::{Boulder, spawn_wave};
use super::missile::Missile;
use super::physics::Countdown;
use super::player::Player;
use crate::consts::ATTRACT_TICKS;

/// Top-level cabinet mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen; cycles to the high score screen while no credits are in
    AttractTitle,
    /// "High score for today" screen
    AttractHiscores,
    /// A game in progress
    GameOn,
    /// Brief game over screen before returning to the title
    GameOver,
}

/// Complete game state (deterministic for a given random source and action sequence)
///
/// `R` is the random source boulder waves are drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game<R = Pcg32> {
    #[serde(skip)]
    pub(crate) rng: R,
    pub credits: u32,
    pub high_score: u64,
    pub mode: GameMode,
    /// Ticks left in the current mode
    pub timer: i32,
    pub player: Player,
    /// Live missiles in firing order
    pub missiles: Vec<Missile>,
    /// Current wave in spawn order
    pub boulders: Vec<Boulder>,
}

impl Game {
    /// Create a game on the title screen with a PCG source seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Create a game drawing boulder waves from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let boulders = spawn_wave(&mut rng);
        Self {
            rng,
            credits: 0,
            high_score: 0,
            mode: GameMode::AttractTitle,
            timer: ATTRACT_TICKS,
            player: Player::new(),
            missiles: Vec::new(),
            boulders,
        }
    }

    /// Back to the title screen with a fresh ship and wave.
    /// Credits and high score carry over.
    pub fn reset(mut self) -> Self {
        self.player = Player::new();
        self.boulders = spawn_wave(&mut self.rng);
        self.missiles = Vec::new();
        self.mode = GameMode::AttractTitle;
        self.timer = ATTRACT_TICKS;
        self
    }
}

impl<R> Countdown for Game<R> {
    fn timer(&self) -> i32 {
        self.timer
    }
    fn with_timer(mut self, timer: i32) -> Self {
        self.timer = timer;
        self
    }
}
