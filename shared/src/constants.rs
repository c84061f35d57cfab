//! Fixed distances used by the detectors.
//!
//! All distances are in game units and are *not* multiplied by the actor scale.
//! Scale-dependent values live in [`crate::settings::ParkourSettings`].

/// Height above the feet where the ceiling probe starts.
pub const LEDGE_START_Z_OFFSET: f32 = 100.0;

/// Minimum clearance the ceiling probe must report before any ledge is considered.
///
/// A roof lower than this above [`LEDGE_START_Z_OFFSET`] means there is no room to climb.
pub const LEDGE_MIN_UP_CLEARANCE: f32 = 100.0;

/// Distance the forward scan origin is kept below the detected ceiling.
pub const LEDGE_CEILING_BUFFER: f32 = 10.0;

/// Increment of each forward ledge probe. Probe `i` reaches `i * LEDGE_FORWARD_STEP`.
pub const LEDGE_FORWARD_STEP: f32 = 10.0;

/// Number of forward ledge probes.
pub const LEDGE_FORWARD_ITERATIONS: u32 = 15;

/// Minimum vertical component of a ledge normal.
///
/// 1.0 is perfectly flat, 0.0 is a vertical wall.
pub const LEDGE_MIN_FLATNESS: f32 = 0.7;

/// A downward ledge probe that stops sooner than this hit something odd
/// (usually the underside of an overhang) and is ignored.
pub const LEDGE_MIN_DOWN_DISTANCE: f32 = 10.0;

/// Gap between the ledge surface and the start of the standing-headroom probe.
pub const LEDGE_HEADROOM_BUFFER: f32 = 10.0;

/// Spacing of the downward vault samples along the forward path.
pub const VAULT_SAMPLE_SPACING: f32 = 5.0;

/// Extra reach of each downward vault sample below the feet.
pub const VAULT_DOWN_EXTRA: f32 = 100.0;

/// A landing more than this far below the feet turns a vault into a vault-with-drop.
pub const VAULT_DROP_THRESHOLD: f32 = 10.0;

/// Starting value of the tracked vault surface height (below any real sample).
pub const VAULT_HEIGHT_FLOOR: f32 = -10_000.0;

/// The indicator object hovers this far above the anchor point.
pub const INDICATOR_LIFT: f32 = 5.0;

/// Height above the feet where the grounded probe starts.
pub const GROUNDED_PROBE_START: f32 = 128.0;

/// Length of the grounded probe (reaches 20 units below the feet).
pub const GROUNDED_PROBE_LENGTH: f32 = GROUNDED_PROBE_START + 20.0;

/// Conversion from game units to Havok/physics units.
pub const HAVOK_WORLD_SCALE: f32 = 0.014_287_5;

/// Low bits of a collision filter word that hold the layer index.
pub const LAYER_INDEX_MASK: u32 = 0x7F;

/// Upper bound on nodes visited by the fallback bone search.
///
/// Skeletons are trees with a few hundred nodes; the cap only matters for malformed graphs.
pub const MAX_NODE_SEARCH: usize = 4096;

/// Distance returned for a ray that stopped on a surface outside the allow-list.
pub const INVALID_HIT_DISTANCE: f32 = -1.0;
