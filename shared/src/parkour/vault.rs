//! Vault detection: an obstacle of moderate height in front of the player with a
//! landing behind it.
//!
//! One forward probe at head height must clear the whole vault path, then downward
//! samples every [`VAULT_SAMPLE_SPACING`] units along the path build a height profile.

use crate::{
    constants::{VAULT_DOWN_EXTRA, VAULT_DROP_THRESHOLD, VAULT_HEIGHT_FLOOR, VAULT_SAMPLE_SPACING},
    math::{Direction3, Point3, down, up},
    parkour::{
        context::DetectionContext,
        interaction::{Interaction, InteractionType},
    },
};

/// Running state of the downward sweep.
#[derive(Clone, Copy, Debug)]
struct VaultScan {
    /// Highest in-range sample so far, relative to the feet.
    surface_height: f32,
    /// Hit point of the latest in-range sample.
    anchor: Option<Point3>,
    /// Lowest sample below the vault range seen after the highest surface sample.
    landing: Option<f32>,
}

impl VaultScan {
    fn new() -> Self {
        Self {
            surface_height: VAULT_HEIGHT_FLOOR,
            anchor: None,
            landing: None,
        }
    }

    fn record(&mut self, height: f32, point: Point3, min_height: f32, max_height: f32) {
        if height > min_height && height < max_height {
            if height >= self.surface_height {
                self.surface_height = height;
                // A landing only counts once it is past the top of the obstacle.
                self.landing = None;
            }
            self.anchor = Some(point);
        } else if self.anchor.is_some() && height < min_height {
            self.landing = Some(self.landing.map_or(height, |l| l.min(height)));
        }
    }
}

/// Search for a vaultable obstacle along `check_dir`.
///
/// The obstacle top must lie strictly inside `(min_height, max_height)`, anything taller
/// anywhere on the path rejects the vault, and the landing must be lower than
/// `max_elevation_increase` relative to the feet.
pub fn detect_vault(
    ctx: &DetectionContext<'_>,
    check_dir: Direction3,
    vault_length: f32,
    max_elevation_increase: f32,
    min_height: f32,
    max_height: f32,
) -> Option<Interaction> {
    let player = ctx.player_position;
    let head_height = ctx.thresholds.player_height;
    let fwd_start = player + up() * head_height;

    // Something at head height: a wall, not a vault.
    if ctx.cast(fwd_start, check_dir, vault_length).distance() < vault_length {
        return None;
    }

    let samples = (vault_length / VAULT_SAMPLE_SPACING).floor() as u32;
    let mut scan = VaultScan::new();

    for i in 0..samples {
        let mut start = player + check_dir * (i as f32 * VAULT_SAMPLE_SPACING);
        start.z = fwd_start.z;

        let probe = ctx.cast(start, down(), head_height + VAULT_DOWN_EXTRA);
        let height = (fwd_start.z - probe.distance()) - player.z;

        if height > max_height {
            return None;
        }
        scan.record(height, probe.end_point(), min_height, max_height);
    }

    let (Some(mut anchor), Some(landing)) = (scan.anchor, scan.landing) else {
        return None;
    };
    if landing >= max_elevation_increase {
        return None;
    }

    anchor.z = player.z + scan.surface_height;
    let kind = if landing < -VAULT_DROP_THRESHOLD {
        InteractionType::VaultWithDrop
    } else {
        InteractionType::VaultOver
    };

    Some(Interaction { kind, anchor })
}
