pub mod context;
pub mod controller;
pub mod interaction;
pub mod ledge;
pub mod selector;
pub mod vault;

pub use context::DetectionContext;
pub use controller::{ParkourController, UpdateRequest, is_grounded};
pub use interaction::{Interaction, InteractionType};
pub use ledge::{classify_ledge, detect_ledge};
pub use selector::{DetectorToggles, MarkerPlacement, detect_interaction, select_interaction};
pub use vault::detect_vault;
