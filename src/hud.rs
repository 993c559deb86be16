//! Display-facing view of a game snapshot
//!
//! Everything a renderer needs beyond raw entity positions: counters, the
//! banner text for the current mode, and small animation cues.

use serde::Serialize;

use crate::sim::{Boulder, BoulderMode, Game, GameMode, Player, PlayerMode};

/// Centered banner text for the current screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Banner {
    /// Title with the coin/start prompt underneath
    Title { prompt: &'static str },
    HighScore { score: u64 },
    GetReady,
    GameOver,
}

/// Heads-up display derived from a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u32,
    pub high_score: u64,
    pub credits: u32,
    pub banner: Option<Banner>,
}

impl Hud {
    pub fn from_game<R>(game: &Game<R>) -> Self {
        let banner = match game.mode {
            GameMode::AttractTitle => Some(Banner::Title {
                prompt: if game.credits > 0 {
                    "Press Start"
                } else {
                    "Insert Coin"
                },
            }),
            GameMode::AttractHiscores => Some(Banner::HighScore {
                score: game.high_score,
            }),
            GameMode::GameOn if game.player.mode == PlayerMode::GetReady => Some(Banner::GetReady),
            GameMode::GameOn => None,
            GameMode::GameOver => Some(Banner::GameOver),
        };

        Self {
            score: game.player.score,
            lives: game.player.lives,
            high_score: game.high_score,
            credits: game.credits,
            banner,
        }
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Banner::Title { prompt } => write!(f, "COSMOS BOULDERS - {prompt}"),
            Banner::HighScore { score } => write!(f, "High Score for Today: {score}"),
            Banner::GetReady => write!(f, "Get Ready!"),
            Banner::GameOver => write!(f, "Game Over"),
        }
    }
}

impl std::fmt::Display for Hud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: {} | Lives: {} | High Score: {} | Credits: {}",
            self.score, self.lives, self.high_score, self.credits
        )?;
        if let Some(banner) = &self.banner {
            write!(f, " | {banner}")?;
        }
        Ok(())
    }
}

/// Ship blink phase while waiting to launch (alternates every 10 ticks)
pub fn ship_blink_on(player: &Player) -> bool {
    player.mode == PlayerMode::GetReady && (player.timer / 10) % 2 == 0
}

/// Whether to draw the thrust flame
pub fn thrusting(player: &Player) -> bool {
    player.mode == PlayerMode::Playing && player.force > 0.0
}

/// Radius of the pulsing ring drawn for a materializing boulder
pub fn appear_radius(boulder: &Boulder) -> Option<i32> {
    (boulder.mode == BoulderMode::Appearing).then_some(boulder.timer.rem_euclid(10))
}
