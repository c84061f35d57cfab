use crate::{
    collision::{CollisionLayer, RayCast, RayCaster},
    math::{Direction3, Point3},
    settings::Thresholds,
};

/// Everything one detection cycle needs, resolved once at pipeline entry.
#[derive(Clone, Copy)]
pub struct DetectionContext<'w> {
    pub caster: RayCaster<'w>,
    /// Player's feet at the start of the cycle.
    pub player_position: Point3,
    pub thresholds: Thresholds,
}

impl<'w> DetectionContext<'w> {
    pub fn new(caster: RayCaster<'w>, player_position: Point3, thresholds: Thresholds) -> Self {
        Self {
            caster,
            player_position,
            thresholds,
        }
    }

    /// Line-of-sight ray, the only query layer the detectors use.
    #[inline]
    pub fn cast(&self, origin: Point3, direction: Direction3, max_distance: f32) -> RayCast {
        self.caster
            .cast(origin, direction, max_distance, CollisionLayer::Los)
    }

    /// Height of a point above the player's feet.
    #[inline]
    pub fn height_above_player(&self, point: &Point3) -> f32 {
        point.z - self.player_position.z
    }
}
