//! Picks one interaction for the cycle and places the markers for it.
//!
//! Ledges take priority; vaults are only tried when no ledge qualifies. On success the
//! indicator and the marker for the chosen interaction are moved next to the anchor
//! and turned to face along the camera.

use crate::{
    actor::{MarkerObject, MarkerSet, RegionId},
    constants::INDICATOR_LIFT,
    math::{Direction3, Point3, flatten_direction, yaw_from_xy},
    parkour::{
        context::DetectionContext,
        interaction::{Interaction, InteractionType},
        ledge::detect_ledge,
        vault::detect_vault,
    },
    settings::Thresholds,
};

/// Which detectors a cycle may run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectorToggles {
    pub enable_vaulting: bool,
    pub enable_ledges: bool,
}

/// Position and facing for one marker write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarkerPlacement {
    pub position: Point3,
    pub yaw: f32,
}

/// Run the enabled detectors along `check_dir`, ledge first.
pub fn detect_interaction(
    ctx: &DetectionContext<'_>,
    check_dir: Direction3,
    toggles: DetectorToggles,
) -> Option<Interaction> {
    let t = &ctx.thresholds;

    let ledge = if toggles.enable_ledges {
        detect_ledge(ctx, check_dir, t.min_ledge_height, t.max_ledge_height)
    } else {
        None
    };

    ledge.or_else(|| {
        if !toggles.enable_vaulting {
            return None;
        }
        detect_vault(
            ctx,
            check_dir,
            t.vault_length,
            t.vault_max_elevation_increase,
            t.min_vault_height,
            t.max_vault_height,
        )
    })
}

/// Where the indicator goes for an interaction.
pub fn indicator_placement(interaction: &Interaction, check_dir: &Direction3) -> MarkerPlacement {
    MarkerPlacement {
        position: interaction.anchor + Direction3::z() * INDICATOR_LIFT,
        yaw: yaw_from_xy(check_dir),
    }
}

/// Where the animation marker for the interaction's type goes.
pub fn marker_placement(
    interaction: &Interaction,
    check_dir: &Direction3,
    t: &Thresholds,
) -> MarkerPlacement {
    let (z_adjust, to_camera) = match interaction.kind {
        InteractionType::LedgeLow => (t.low_ledge_z_adjust, t.low_ledge_to_camera),
        InteractionType::LedgeHigh => (t.high_ledge_z_adjust, t.high_ledge_to_camera),
        InteractionType::VaultOver | InteractionType::VaultWithDrop => {
            (t.vault_z_adjust, t.vault_to_camera)
        }
    };

    let anchor = interaction.anchor;
    MarkerPlacement {
        position: Point3::new(
            anchor.x + check_dir.x * to_camera,
            anchor.y + check_dir.y * to_camera,
            anchor.z + z_adjust + t.marker_lift,
        ),
        yaw: yaw_from_xy(check_dir),
    }
}

/// Bring a marker into the player's region (if needed) and write its transform.
///
/// Position writes only take effect for objects in the same region as the player.
fn place(
    marker: &mut dyn MarkerObject,
    region: RegionId,
    player_position: Point3,
    placement: MarkerPlacement,
) {
    if marker.region() != Some(region) {
        marker.move_to(region, player_position);
    }
    marker.set_position(placement.position);
    marker.set_yaw(placement.yaw);
}

/// Full selection step: flatten the camera direction, detect, and place markers.
///
/// Returns `None` without touching any marker when the camera has no horizontal
/// facing or nothing was found.
pub fn select_interaction(
    ctx: &DetectionContext<'_>,
    camera_forward: Option<Direction3>,
    player_region: RegionId,
    markers: &mut MarkerSet<'_>,
    toggles: DetectorToggles,
) -> Option<Interaction> {
    let Some(check_dir) = camera_forward.as_ref().and_then(flatten_direction) else {
        log::debug!("No usable camera direction, skipping parkour detection");
        return None;
    };

    let interaction = detect_interaction(ctx, check_dir, toggles)?;

    place(
        &mut *markers.indicator,
        player_region,
        ctx.player_position,
        indicator_placement(&interaction, &check_dir),
    );

    let marker: &mut dyn MarkerObject = match interaction.kind {
        InteractionType::LedgeLow => &mut *markers.mid,
        InteractionType::LedgeHigh => &mut *markers.high,
        InteractionType::VaultOver | InteractionType::VaultWithDrop => &mut *markers.vault,
    };
    place(
        marker,
        player_region,
        ctx.player_position,
        marker_placement(&interaction, &check_dir, &ctx.thresholds),
    );

    Some(interaction)
}
