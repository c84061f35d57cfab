//! Rapier-based query world for static level geometry.
//!
//! This is a [`PhysicsWorld`] backend: it owns an in-memory Rapier scene built from a set
//! of static collider definitions, each tagged with a host collision layer, and answers
//! closest-hit ray queries filtered through the layer collision matrix.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-focused: no dynamics, only scene queries.
//! - Immutable world: statics do not move after construction.
//! - Z-up: the world uses the host frame directly, so plane normals derive from `+Z`.

// Re-export Rapier so hosts can build definitions without depending on `rapier3d` directly.
pub use rapier3d;

use rapier3d::prelude::*;

// Rapier math aliases (0.31): keep these explicit so we don't accidentally rely on
// nalgebra names that aren't in scope.
use rapier3d::na::{Translation3, UnitQuaternion};

use crate::{
    collision::{CollisionLayer, PhysicsWorld, PickHit},
    math::Point3,
};

/// Definition of one immutable world collider, in physics units.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
    /// Layer reported to ray queries that hit this collider.
    pub layer: CollisionLayer,
}

impl WorldStaticDef {
    /// Axis-aligned box spanning `min..max`.
    pub fn aabb(id: u32, min: Point3, max: Point3, layer: CollisionLayer) -> Self {
        let center = na_center(min, max);
        let half_extents = (max - min) * 0.5;
        Self {
            id,
            translation: center,
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Cuboid { half_extents },
            layer,
        }
    }

    /// Horizontal ground plane at height `z`.
    pub fn ground(id: u32, z: f32, layer: CollisionLayer) -> Self {
        Self {
            id,
            translation: Vector::new(0.0, 0.0, z),
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
            layer,
        }
    }
}

#[inline]
fn na_center(min: Point3, max: Point3) -> Vector<f32> {
    (min.coords + max.coords) * 0.5
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space).
    ///
    /// The plane normal is derived from the pose as `rotation * +Z`, and the plane is
    /// shifted by `offset_along_normal` along it.
    Plane { offset_along_normal: f32 },

    /// Oriented cuboid with given half-extents.
    Cuboid { half_extents: Vector<f32> },

    /// Sphere/ball.
    Sphere { radius: f32 },

    /// Upright (Z-aligned) capsule.
    CapsuleZ { radius: f32, half_height: f32 },

    /// Rounded cuboid; `border_radius` rounds all edges/corners.
    RoundCuboid {
        half_extents: Vector<f32>,
        border_radius: f32,
    },
}

/// In-memory Rapier structures needed for scene queries against a static world.
pub struct RapierQueryWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    world_scale: f32,
}

impl RapierQueryWorld {
    /// Build a query world from a list of static collider definitions.
    ///
    /// `world_scale` converts game units into the units the definitions use.
    pub fn build(mut defs: Vec<WorldStaticDef>, world_scale: f32) -> Self {
        // Ensure deterministic insertion order.
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for def in defs.into_iter() {
            let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        // Collision-detection only (no dynamics): updates the broad-phase BVH so
        // queries can run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();

        let hooks = ();
        let events = ();

        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &hooks,
            &events,
        );

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
            world_scale,
        }
    }

    /// Borrowed `QueryPipeline` view; use it within the scope of the borrow.
    fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

impl PhysicsWorld for RapierQueryWorld {
    fn world_scale(&self) -> f32 {
        self.world_scale
    }

    fn pick(&self, from: Point3, to: Point3, query_layer: CollisionLayer) -> Option<PickHit> {
        let mask = query_layer.collides_with();
        let predicate = |_: ColliderHandle, collider: &Collider| {
            CollisionLayer::from_filter_info(collider.user_data as u32)
                .is_some_and(|layer| mask.has(layer))
        };
        let filter = QueryFilter::new().predicate(&predicate);

        // Parameterize the ray over the whole segment so time-of-impact is the hit fraction.
        let ray = Ray::new(from, to - from);
        let (handle, hit) = self
            .query_pipeline(filter)
            .cast_ray_and_get_normal(&ray, 1.0, true)?;
        let collider = self.colliders.get(handle)?;

        Some(PickHit {
            fraction: hit.time_of_impact,
            normal: hit.normal,
            filter_info: collider.user_data as u32,
        })
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent rigid-body, so the collider has an identity local
/// transform (except planes, see below). The layer is stored in `user_data` as a
/// filter word.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let builder = match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // Local normal is +Z; the parent pose rotates it. Offset the half-space
            // along the local normal so `offset_along_normal` moves the surface.
            let unit_n = UnitVector::new_normalize(Vector::z());
            let halfspace = HalfSpace::new(unit_n);
            ColliderBuilder::new(SharedShape::new(halfspace))
                .translation(unit_n.into_inner() * *offset_along_normal)
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius),

        ColliderShapeDef::CapsuleZ {
            radius,
            half_height,
        } => ColliderBuilder::capsule_z(*half_height, *radius),

        ColliderShapeDef::RoundCuboid {
            half_extents,
            border_radius,
        } => ColliderBuilder::round_cuboid(
            half_extents.x,
            half_extents.y,
            half_extents.z,
            *border_radius,
        ),
    };

    builder
        .user_data(def.layer.filter_info(0) as u128)
        .build()
}
