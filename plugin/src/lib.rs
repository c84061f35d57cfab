//! Script-facing edge of the parkour plugin.
//!
//! The host loads this library, calls [`registry::register_functions`] once with its
//! script VM, and routes each script call to the matching function in [`bridge`].

pub mod bridge;
pub mod error;
pub mod registry;
pub mod wire;

pub use bridge::{AnimationTarget, Bridge, MarkerHandles, force_end_animation, greet, set_jump_enabled};
pub use error::{BridgeError, BridgeResult};
pub use registry::{BridgeFunction, ScriptVm, register_functions};

/// Name used in the greeting.
pub const PLUGIN_DISPLAY_NAME: &str = "Skyclimb";

/// Script class the bridge functions are bound to.
pub const SCRIPT_CLASS: &str = "SkyClimbPapyrus";
