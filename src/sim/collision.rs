//! Collision resolution for a single tick
//!
//! Boulders are visited in order. A boulder that hits the ship is resolved
//! against the ship only; otherwise it is tested against every missile in the
//! collection, including ones already spent earlier in the same tick.
//! A boulder can only explode once, but each overlapping missile still scores.

use glam::Vec2;

use super::boulder::{Boulder, BoulderAction};
use super::missile::{Missile, MissileAction};
use super::player::{Player, PlayerAction};
use crate::consts::{HIT_TOLERANCE, SHIP_CENTER_OFFSET_Y};

/// Entities after collision resolution
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionOutcome {
    pub player: Player,
    pub missiles: Vec<Missile>,
    pub boulders: Vec<Boulder>,
}

/// Axis-aligned box overlap with the shared tolerance on each axis
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < HIT_TOLERANCE && (a.y - b.y).abs() < HIT_TOLERANCE
}

/// Ship hitbox is centered a little below its origin
#[inline]
pub fn ship_hits_boulder(player: &Player, boulder: &Boulder) -> bool {
    boxes_overlap(player.pos + Vec2::new(0.0, SHIP_CENTER_OFFSET_Y), boulder.pos)
}

/// Resolve every collision between the ship, missiles and boulders
pub fn detect_collisions(
    player: Player,
    missiles: Vec<Missile>,
    boulders: Vec<Boulder>,
) -> CollisionOutcome {
    let mut player = player;
    let mut missiles = missiles;
    let mut resolved = Vec::with_capacity(boulders.len());

    for boulder in boulders {
        if !boulder.is_moving() {
            resolved.push(boulder);
            continue;
        }

        if player.is_playing() && ship_hits_boulder(&player, &boulder) {
            log::debug!("Ship hit boulder at ({:.1}, {:.1})", boulder.pos.x, boulder.pos.y);
            player = player.apply(PlayerAction::Explode);
            resolved.push(boulder.apply(BoulderAction::Explode));
            continue;
        }

        let mut boulder = boulder;
        missiles = missiles
            .into_iter()
            .map(|missile| {
                if boxes_overlap(missile.pos, boulder.pos) {
                    log::debug!(
                        "Missile hit boulder at ({:.1}, {:.1})",
                        boulder.pos.x,
                        boulder.pos.y
                    );
                    player = player.apply(PlayerAction::ScorePoints);
                    boulder = boulder.apply(BoulderAction::Explode);
                    missile.apply(MissileAction::Explode)
                } else {
                    missile
                }
            })
            .collect();
        resolved.push(boulder);
    }

    CollisionOutcome {
        player,
        missiles,
        boulders: resolved,
    }
}
