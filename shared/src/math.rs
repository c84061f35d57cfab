//! Math aliases and small helpers in the host's Z-up world frame.

use nalgebra as na;

/// World-space position (game units).
pub type Point3 = na::Point3<f32>;

/// World-space direction. Not necessarily unit length.
pub type Direction3 = na::Vector3<f32>;

/// Surface normal reported by a ray hit. Zero when nothing was hit.
pub type SurfaceNormal = na::Vector3<f32>;

/// Minimum squared planar length a camera direction needs to define a facing.
pub const FLAT_EPS_SQ: f32 = 1.0e-12;

#[inline]
pub fn up() -> Direction3 {
    Direction3::z()
}

#[inline]
pub fn down() -> Direction3 {
    -Direction3::z()
}

/// Length of the XY part of a vector.
#[inline]
pub fn magnitude_xy(v: &Direction3) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Project a direction onto the horizontal plane and normalize it there.
///
/// The result has `z == 0` and unit length in XY. Returns `None` for a
/// (nearly) vertical or zero direction, which has no horizontal facing.
pub fn flatten_direction(dir: &Direction3) -> Option<Direction3> {
    if dir.x * dir.x + dir.y * dir.y <= FLAT_EPS_SQ {
        return None;
    }
    let m = magnitude_xy(dir);
    Some(Direction3::new(dir.x / m, dir.y / m, 0.0))
}

/// Yaw (rotation about +Z) that faces along `dir`, measured from +Y towards +X.
#[inline]
pub fn yaw_from_xy(dir: &Direction3) -> f32 {
    dir.x.atan2(dir.y)
}
