//! Integer result codes returned to scripts by `UpdateParkourPoint`.

use shared::InteractionType;

/// Nothing found, or the pipeline could not run.
pub const NO_INTERACTION: i32 = -1;

pub fn interaction_code(found: Option<InteractionType>) -> i32 {
    match found {
        None => NO_INTERACTION,
        Some(InteractionType::LedgeLow) => 1,
        Some(InteractionType::LedgeHigh) => 2,
        Some(InteractionType::VaultOver) => 3,
        Some(InteractionType::VaultWithDrop) => 4,
    }
}
