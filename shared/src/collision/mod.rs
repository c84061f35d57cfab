/*!
Collision root module.

- layer:      host collision layers, the query collision matrix and the usable-surface allow-list
- types:      raw backend hits and classified ray results
- ray_caster: the `PhysicsWorld` backend trait and the classifying `RayCaster`
*/

pub mod layer;
pub mod ray_caster;
pub mod types;

pub use layer::{CollisionLayer, LayerMask};
pub use ray_caster::{PhysicsWorld, RayCaster};
pub use types::{PickHit, RayCast, RayOutcome};
