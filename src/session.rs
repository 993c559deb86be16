//! Session wrapper: turns per-frame control levels into edge-triggered actions
//!
//! The input sampler hands over the raw state of every control line once per
//! frame. When anything changed since the previous frame the game first sees a
//! `ControlsChanged` carrying both samples, then always a `FrameReady`.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::{ControlChange, ControlLines, Game, GameAction};

/// Actions accepted from the input sampler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    /// One frame with the current control-line levels
    Frame(ControlLines),
    CoinInserted,
}

/// Owns the game plus the control lines seen on the previous frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Session<R = Pcg32> {
    pub game: Game<R>,
    pub prev: ControlLines,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_game(Game::new(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_game(game: Game<R>) -> Self {
        Self {
            game,
            prev: ControlLines::default(),
        }
    }

    /// Read-only view of the current game for rendering
    pub fn snapshot(&self) -> &Game<R> {
        &self.game
    }

    pub fn apply(self, action: SessionAction) -> Self {
        match action {
            SessionAction::Frame(lines) => self.frame(lines),
            SessionAction::CoinInserted => Self {
                game: self.game.apply(GameAction::CoinInserted),
                ..self
            },
        }
    }

    fn frame(self, lines: ControlLines) -> Self {
        let mut game = self.game;
        if lines != self.prev {
            log::trace!("Controls changed: {:?} -> {:?}", self.prev, lines);
            game = game.apply(GameAction::ControlsChanged(ControlChange::new(
                lines, self.prev,
            )));
        }
        Self {
            game: game.apply(GameAction::FrameReady),
            prev: lines,
        }
    }
}
