use crate::{
    collision::{
        layer::CollisionLayer,
        types::{PickHit, RayCast, RayOutcome},
    },
    math::{Direction3, Point3},
};

/// Ray-vs-world query backend for one region of the world.
///
/// Implementations work in their own internal units; [`PhysicsWorld::world_scale`]
/// converts game units into them.
pub trait PhysicsWorld {
    /// Multiplier from game units to physics units.
    fn world_scale(&self) -> f32;

    /// Closest hit on the segment `from -> to` (physics units) among colliders the
    /// `query_layer` collides with.
    fn pick(&self, from: Point3, to: Point3, query_layer: CollisionLayer) -> Option<PickHit>;
}

/// Casts single rays against a [`PhysicsWorld`] and classifies what they hit.
///
/// A missing world is not an error: every ray reports [`RayOutcome::Clear`].
#[derive(Clone, Copy)]
pub struct RayCaster<'w> {
    world: Option<&'w dyn PhysicsWorld>,
    log_layers: bool,
}

impl<'w> RayCaster<'w> {
    pub fn new(world: Option<&'w dyn PhysicsWorld>) -> Self {
        Self {
            world,
            log_layers: false,
        }
    }

    /// Log the layer index of every hit at info level.
    pub fn with_layer_logging(mut self, enabled: bool) -> Self {
        self.log_layers = enabled;
        self
    }

    /// Cast from `origin` along `direction` for up to `max_distance` game units.
    pub fn cast(
        &self,
        origin: Point3,
        direction: Direction3,
        max_distance: f32,
        query_layer: CollisionLayer,
    ) -> RayCast {
        let clear = RayCast {
            origin,
            direction,
            max_distance,
            outcome: RayOutcome::Clear,
        };

        let Some(world) = self.world else {
            return clear;
        };

        // A zero-length segment cannot hit anything.
        if max_distance <= 0.0 {
            return clear;
        }

        let end = origin + direction * max_distance;
        let scale = world.world_scale();
        let from = Point3::from(origin.coords * scale);
        let to = Point3::from(end.coords * scale);

        let Some(hit) = world.pick(from, to, query_layer) else {
            if self.log_layers {
                log::info!("nothing hit");
            }
            return clear;
        };

        let layer_index = hit.filter_info & crate::constants::LAYER_INDEX_MASK;
        if self.log_layers {
            log::info!("layer hit: {}", layer_index);
        }

        let outcome = match CollisionLayer::from_index(layer_index) {
            Some(layer) if layer.is_useful_surface() => RayOutcome::Hit {
                distance: max_distance * hit.fraction,
                normal: hit.normal,
                layer,
            },
            _ => RayOutcome::Blocked { layer_index },
        };

        RayCast { outcome, ..clear }
    }
}
