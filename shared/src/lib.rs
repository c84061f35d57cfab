pub mod actor;
pub mod bitmask_flags;
pub mod collision;
pub mod constants;
pub mod math;
pub mod parkour;
pub mod rapier_world;
pub mod scale;
pub mod scene;
pub mod settings;

#[cfg(test)]
mod testing;

pub use actor::{MarkerObject, MarkerSet, ModelView, ParkourHost, PlayerActor, RegionId};
pub use collision::{CollisionLayer, PhysicsWorld, PickHit, RayCast, RayCaster, RayOutcome};
pub use parkour::{
    DetectorToggles, Interaction, InteractionType, ParkourController, UpdateRequest,
};
pub use rapier_world::{ColliderShapeDef, RapierQueryWorld, WorldStaticDef};
pub use scale::resolve_scale;
pub use scene::{NodeId, NodeTree, SceneGraph, find_node_by_name};
pub use settings::{ParkourSettings, Thresholds};
