//! Control lines and edge detection between consecutive samples

use serde::{Deserialize, Serialize};

/// Level state of the five cabinet control lines for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLines {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub start: bool,
}

/// A change in control lines: the new levels plus the previous tick's levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlChange {
    pub now: ControlLines,
    pub prev: ControlLines,
}

impl ControlChange {
    pub fn new(now: ControlLines, prev: ControlLines) -> Self {
        Self { now, prev }
    }

    /// Fire was just pressed
    pub fn fire_went_down(&self) -> bool {
        !self.prev.fire && self.now.fire
    }

    /// Fire was just released
    pub fn fire_went_up(&self) -> bool {
        self.prev.fire && !self.now.fire
    }

    /// Start was just released
    pub fn start_went_up(&self) -> bool {
        self.prev.start && !self.now.start
    }

    /// Turn rate implied by the turn lines; right wins when both are held
    pub fn turn_direction(&self) -> f32 {
        if self.now.right {
            1.0
        } else if self.now.left {
            -1.0
        } else {
            0.0
        }
    }
}
