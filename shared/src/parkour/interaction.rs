use crate::math::Point3;

/// Kind of interaction found in front of the player.
///
/// "Nothing found" is not a variant; detectors return `Option<Interaction>`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionType {
    /// Step-up onto a ledge below the high-climb boundary.
    LedgeLow,
    /// Climb onto a ledge at or above the high-climb boundary.
    LedgeHigh,
    /// Vault over an obstacle onto roughly level ground.
    VaultOver,
    /// Vault over an obstacle and drop down on the far side.
    VaultWithDrop,
}

/// A detected interaction and the surface point it anchors to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction {
    pub kind: InteractionType,
    pub anchor: Point3,
}
