//! Toroidal motion and countdown timers shared by every entity

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Anything with a position and a velocity on the playfield
pub trait Body: Sized {
    fn pos(&self) -> Vec2;
    fn vel(&self) -> Vec2;
    fn with_pos(self, pos: Vec2) -> Self;
}

/// Anything driven by a per-mode countdown
pub trait Countdown: Sized {
    fn timer(&self) -> i32;
    fn with_timer(self, timer: i32) -> Self;

    /// Decrement the timer by one tick
    fn tick_timer(self) -> Self {
        let timer = self.timer() - 1;
        self.with_timer(timer)
    }

    /// Tick the timer, then apply `transform` if it ran out
    fn on_timer_expired(self, transform: impl FnOnce(Self) -> Self) -> Self {
        let ticked = self.tick_timer();
        if ticked.timer() <= 0 {
            transform(ticked)
        } else {
            ticked
        }
    }
}

/// Wrap a single coordinate into `[0, span)`.
///
/// Loops rather than taking a modulo so that any velocity magnitude lands in
/// range, including float results that round up onto `span`.
pub fn wrap_axis(mut value: f32, span: f32) -> f32 {
    loop {
        if value >= span {
            value -= span;
        } else if value < 0.0 {
            value += span;
        } else {
            return value;
        }
    }
}

/// Wrap a point onto the playfield torus
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(pos.x, SCREEN_WIDTH),
        wrap_axis(pos.y, SCREEN_HEIGHT),
    )
}

/// Move a body by one tick of its velocity, wrapping at the screen edges
pub fn advance_position<T: Body>(body: T) -> T {
    let next = wrap_position(body.pos() + body.vel());
    body.with_pos(next)
}
