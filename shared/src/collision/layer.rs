//! Collision layers as the host engine numbers them.
//!
//! A hit reports its layer in the low bits of the collider's filter word
//! (see [`crate::constants::LAYER_INDEX_MASK`]). Layers decide two things:
//! - which colliders a query layer is allowed to hit (the collision matrix), and
//! - whether a hit counts as a surface the character can use.

use crate::{
    bitmask_flags::{BitmaskFlags, FlagBitmask},
    constants::LAYER_INDEX_MASK,
};

/// Set of collision layers, one bit per layer index.
pub type LayerMask = BitmaskFlags<u64>;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    Unidentified = 0,
    Static = 1,
    AnimStatic = 2,
    Transparent = 3,
    Clutter = 4,
    Weapon = 5,
    Projectile = 6,
    Spell = 7,
    Biped = 8,
    Trees = 9,
    Props = 10,
    Water = 11,
    Trigger = 12,
    Terrain = 13,
    Trap = 14,
    NonCollidable = 15,
    CloudTrap = 16,
    Ground = 17,
    Portal = 18,
    DebrisSmall = 19,
    DebrisLarge = 20,
    AcousticSpace = 21,
    ActorZone = 22,
    ProjectileZone = 23,
    GasTrap = 24,
    ShellCasing = 25,
    TransparentWall = 26,
    InvisibleWall = 27,
    TransparentSmallAnim = 28,
    ClutterLarge = 29,
    CharController = 30,
    StairHelper = 31,
    DeadBip = 32,
    BipedNoCc = 33,
    AvoidBox = 34,
    CollisionBox = 35,
    CameraSphere = 36,
    DoorDetection = 37,
    ConeProjectile = 38,
    Camera = 39,
    ItemPicker = 40,
    Los = 41,
    PathingPick = 42,
    Unused0 = 43,
    Unused1 = 44,
    SpellExplosion = 45,
    DroppingPick = 46,
}

impl FlagBitmask for CollisionLayer {
    type Storage = u64;

    fn bit_index(&self) -> u8 {
        *self as u8
    }
}

/// Surfaces a character can stand on, climb or vault over.
const USEFUL_SURFACES: [CollisionLayer; 6] = [
    CollisionLayer::Static,
    CollisionLayer::CollisionBox,
    CollisionLayer::Terrain,
    CollisionLayer::Ground,
    CollisionLayer::Props,
    CollisionLayer::Clutter,
];

/// Layers that stop a line-of-sight ray.
const LOS_BLOCKERS: [CollisionLayer; 16] = [
    CollisionLayer::Static,
    CollisionLayer::AnimStatic,
    CollisionLayer::Clutter,
    CollisionLayer::Biped,
    CollisionLayer::Trees,
    CollisionLayer::Props,
    CollisionLayer::Terrain,
    CollisionLayer::Ground,
    CollisionLayer::DebrisLarge,
    CollisionLayer::InvisibleWall,
    CollisionLayer::ClutterLarge,
    CollisionLayer::CharController,
    CollisionLayer::StairHelper,
    CollisionLayer::DeadBip,
    CollisionLayer::BipedNoCc,
    CollisionLayer::CollisionBox,
];

impl CollisionLayer {
    /// Decode a layer index. Returns `None` for indices the engine does not define.
    pub fn from_index(index: u32) -> Option<Self> {
        use CollisionLayer::*;
        const ALL: [CollisionLayer; 47] = [
            Unidentified,
            Static,
            AnimStatic,
            Transparent,
            Clutter,
            Weapon,
            Projectile,
            Spell,
            Biped,
            Trees,
            Props,
            Water,
            Trigger,
            Terrain,
            Trap,
            NonCollidable,
            CloudTrap,
            Ground,
            Portal,
            DebrisSmall,
            DebrisLarge,
            AcousticSpace,
            ActorZone,
            ProjectileZone,
            GasTrap,
            ShellCasing,
            TransparentWall,
            InvisibleWall,
            TransparentSmallAnim,
            ClutterLarge,
            CharController,
            StairHelper,
            DeadBip,
            BipedNoCc,
            AvoidBox,
            CollisionBox,
            CameraSphere,
            DoorDetection,
            ConeProjectile,
            Camera,
            ItemPicker,
            Los,
            PathingPick,
            Unused0,
            Unused1,
            SpellExplosion,
            DroppingPick,
        ];
        ALL.get(index as usize).copied()
    }

    /// Decode the layer stored in the low bits of a collision filter word.
    #[inline]
    pub fn from_filter_info(filter_info: u32) -> Option<Self> {
        Self::from_index(filter_info & LAYER_INDEX_MASK)
    }

    /// Filter word for a collider on this layer in the given system group.
    #[inline]
    pub fn filter_info(self, system_group: u16) -> u32 {
        ((system_group as u32) << 16) | self as u32
    }

    /// Whether a hit on this layer is a usable surface.
    pub fn is_useful_surface(self) -> bool {
        USEFUL_SURFACES.contains(&self)
    }

    /// Layers a query on this layer collides with.
    ///
    /// Only [`CollisionLayer::Los`] has a real matrix row; any other query layer
    /// collides with itself alone.
    pub fn collides_with(self) -> LayerMask {
        match self {
            CollisionLayer::Los => LayerMask::of(&LOS_BLOCKERS),
            other => LayerMask::of(&[other]),
        }
    }
}
