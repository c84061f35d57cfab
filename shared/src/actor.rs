//! Interfaces to the host engine: the player, the marker objects and the engine services
//! the detection pipeline reads from.

use crate::{
    collision::PhysicsWorld,
    math::{Direction3, Point3},
    scene::SceneGraph,
};

/// Identity of the world region (cell) an object belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(pub u32);

/// Which of the actor's models to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModelView {
    ThirdPerson,
    FirstPerson,
}

/// Read-only view of the player character.
pub trait PlayerActor {
    /// Position of the feet in world space.
    fn position(&self) -> Point3;

    /// Region the player is currently in.
    fn region(&self) -> RegionId;

    fn is_swimming(&self) -> bool;

    /// Whether any 3D model is loaded for the actor.
    fn is_3d_loaded(&self) -> bool;

    /// The loaded model graph for a view, if any.
    fn model(&self, view: ModelView) -> Option<&dyn SceneGraph>;
}

/// A placeholder object placed in the world ahead of time.
///
/// The pipeline only moves these; it never creates or destroys them.
pub trait MarkerObject {
    /// Region the marker is currently in, if it has been placed anywhere.
    fn region(&self) -> Option<RegionId>;

    /// Move the marker into `region` at `position`.
    fn move_to(&mut self, region: RegionId, position: Point3);

    fn set_position(&mut self, position: Point3);

    /// Rotation about +Z, in radians.
    fn set_yaw(&mut self, yaw: f32);
}

/// Engine services used by one detection cycle.
pub trait ParkourHost {
    /// The player singleton, if the game has one right now.
    fn player(&self) -> Option<&dyn PlayerActor>;

    /// Forward axis of the world camera, if a camera exists.
    fn camera_forward(&self) -> Option<Direction3>;

    /// Physics world of a region, if it has one loaded.
    fn physics_world(&self, region: RegionId) -> Option<&dyn PhysicsWorld>;

    /// Enable or disable the player's jump control.
    fn set_jumping_enabled(&mut self, enabled: bool);
}

/// The four marker objects one cycle may reposition.
pub struct MarkerSet<'m> {
    pub vault: &'m mut dyn MarkerObject,
    pub mid: &'m mut dyn MarkerObject,
    pub high: &'m mut dyn MarkerObject,
    pub indicator: &'m mut dyn MarkerObject,
}
