/*!
Ray query result types shared by the ray caster and the detectors.

This module intentionally contains no algorithms. It separates:
- the raw hit a physics backend reports (`PickHit`), and
- the classified result the detectors consume (`RayOutcome` / `RayCast`).
*/

use crate::{
    collision::layer::CollisionLayer,
    constants::INVALID_HIT_DISTANCE,
    math::{Direction3, Point3, SurfaceNormal},
};

/// Raw closest hit reported by a physics backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    /// Fraction (0..1) of the ray segment where the hit occurred.
    pub fraction: f32,
    /// World-space surface normal at the hit.
    pub normal: SurfaceNormal,
    /// Collision filter word of the hit collider; the layer lives in the low bits.
    pub filter_info: u32,
}

/// Classified outcome of one ray query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayOutcome {
    /// Nothing in the way; the ray travelled its full length.
    Clear,
    /// Stopped on a usable surface.
    Hit {
        distance: f32,
        normal: SurfaceNormal,
        layer: CollisionLayer,
    },
    /// Stopped on something that is not a usable surface (characters, unknown layers).
    Blocked { layer_index: u32 },
}

/// A finished ray query: where it started, where it pointed, and what it found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCast {
    pub origin: Point3,
    pub direction: Direction3,
    pub max_distance: f32,
    pub outcome: RayOutcome,
}

impl RayCast {
    /// Distance view used by the detectors' threshold checks:
    /// - `max_distance` when nothing was hit,
    /// - the hit distance for usable surfaces,
    /// - [`INVALID_HIT_DISTANCE`] (negative) when blocked by anything else.
    #[inline]
    pub fn distance(&self) -> f32 {
        match self.outcome {
            RayOutcome::Clear => self.max_distance,
            RayOutcome::Hit { distance, .. } => distance,
            RayOutcome::Blocked { .. } => INVALID_HIT_DISTANCE,
        }
    }

    /// Surface normal of a usable hit; zero otherwise.
    #[inline]
    pub fn normal(&self) -> SurfaceNormal {
        match self.outcome {
            RayOutcome::Hit { normal, .. } => normal,
            _ => SurfaceNormal::zeros(),
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self.outcome, RayOutcome::Hit { .. })
    }

    /// The point `distance()` units along the ray.
    ///
    /// For a blocked ray this lies *behind* the origin, matching the sentinel distance.
    #[inline]
    pub fn end_point(&self) -> Point3 {
        self.origin + self.direction * self.distance()
    }
}
