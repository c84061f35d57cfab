//! Per-tick entry point of the detection pipeline.
//!
//! The host calls [`ParkourController::update`] once per script update:
//! "gate on player state → resolve scale → select interaction → gate jumping".

use crate::{
    actor::{MarkerSet, ParkourHost, PlayerActor},
    collision::{CollisionLayer, RayCaster},
    constants::{GROUNDED_PROBE_LENGTH, GROUNDED_PROBE_START},
    math::{down, up},
    parkour::{
        context::DetectionContext,
        interaction::InteractionType,
        selector::{DetectorToggles, select_interaction},
    },
    scale::resolve_scale,
    settings::ParkourSettings,
};

/// Flags passed in by the script for one update.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Disable the jump control while an interaction is available.
    pub use_jump_key_gate: bool,
    pub toggles: DetectorToggles,
}

/// Whether the player stands on a usable surface.
///
/// A probe from [`GROUNDED_PROBE_START`] above the feet must stop on a usable surface
/// within [`GROUNDED_PROBE_LENGTH`]. Reaching the end, or stopping on a character,
/// counts as airborne.
pub fn is_grounded(caster: &RayCaster<'_>, player: &dyn PlayerActor) -> bool {
    let start = player.position() + up() * GROUNDED_PROBE_START;
    caster
        .cast(start, down(), GROUNDED_PROBE_LENGTH, CollisionLayer::Los)
        .is_hit()
}

#[derive(Clone, Debug, Default)]
pub struct ParkourController {
    settings: ParkourSettings,
}

impl ParkourController {
    pub fn new(settings: ParkourSettings) -> Self {
        Self { settings }
    }

    /// Run one detection cycle and reposition markers on success.
    ///
    /// Returns the interaction type found, or `None`. Never fails: a missing player,
    /// camera or physics world degrades to `None`.
    pub fn update(
        &self,
        host: &mut dyn ParkourHost,
        markers: &mut MarkerSet<'_>,
        request: UpdateRequest,
    ) -> Option<InteractionType> {
        let found = {
            let Some(player) = host.player() else {
                log::debug!("No player, skipping parkour update");
                return None;
            };

            let world = host.physics_world(player.region());
            if world.is_none() {
                log::debug!("No physics world for region {:?}", player.region());
            }
            let caster = RayCaster::new(world).with_layer_logging(self.settings.log_ray_layers);

            // Airborne or swimming: leave everything (including the jump gate) alone.
            if !is_grounded(&caster, player) || player.is_swimming() {
                return None;
            }

            let scale = resolve_scale(player, &self.settings);
            let ctx = DetectionContext::new(
                caster,
                player.position(),
                self.settings.thresholds(scale),
            );

            select_interaction(
                &ctx,
                host.camera_forward(),
                player.region(),
                markers,
                request.toggles,
            )
        };

        if let Some(interaction) = &found {
            log::debug!(
                "Parkour point {:?} at {:?}",
                interaction.kind,
                interaction.anchor
            );
        }

        if request.use_jump_key_gate {
            host.set_jumping_enabled(found.is_none());
        }

        found.map(|interaction| interaction.kind)
    }
}
