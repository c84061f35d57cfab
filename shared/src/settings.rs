/*!
Parkour tunables and the per-cycle scaled thresholds.

`ParkourSettings` stores the base values for a character of scale 1.0. A detection
cycle turns them into [`Thresholds`] once, right after the actor scale is resolved,
and every detector reads from that value instead of a shared global.

Notes
- Distances are in game units.
- Only values that describe the character's body are scaled. Probe spacing,
  vault length and the allowed elevation change stay fixed.
*/

/// Base tunables for the detectors and marker placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParkourSettings {
    /// Lowest ledge considered, above the feet.
    pub min_ledge_height: f32,
    /// Highest ledge considered, above the feet.
    pub max_ledge_height: f32,
    /// Ledges at or above this height use the high climb.
    pub high_ledge_height: f32,
    /// Standing height of the character; also the head height for vault probes.
    pub player_height: f32,
    /// How far the ceiling probe reaches past the highest ledge.
    pub ceiling_allowance: f32,

    /// Length of the forward vault path.
    pub vault_length: f32,
    /// Landings must be lower than this, relative to the feet.
    pub vault_max_elevation_increase: f32,
    /// Vault surfaces must be strictly above this height.
    pub min_vault_height: f32,
    /// Vault surfaces must be strictly below this height; anything taller aborts.
    pub max_vault_height: f32,

    /// Vertical marker offsets per interaction.
    pub low_ledge_z_adjust: f32,
    pub high_ledge_z_adjust: f32,
    pub vault_z_adjust: f32,
    /// Extra lift applied to every marker on top of its z-adjust.
    pub marker_lift: f32,

    /// Offsets along the flattened camera direction (not scaled).
    pub low_ledge_to_camera: f32,
    pub high_ledge_to_camera: f32,
    pub vault_to_camera: f32,

    /// Clamp range for the resolved actor scale.
    pub min_scale: f32,
    pub max_scale: f32,

    /// Log the collision layer index of every ray hit.
    pub log_ray_layers: bool,
}

impl Default for ParkourSettings {
    fn default() -> Self {
        Self {
            min_ledge_height: 110.0,
            max_ledge_height: 250.0,
            high_ledge_height: 175.0,
            player_height: 120.0,
            ceiling_allowance: 20.0,

            vault_length: 120.0,
            vault_max_elevation_increase: 10.0,
            min_vault_height: 50.0,
            max_vault_height: 100.0,

            low_ledge_z_adjust: -155.0,
            high_ledge_z_adjust: -200.0,
            vault_z_adjust: -60.0,
            marker_lift: 12.0,

            low_ledge_to_camera: -50.0,
            high_ledge_to_camera: -50.0,
            vault_to_camera: -80.0,

            min_scale: 0.15,
            max_scale: 250.0,

            log_ray_layers: false,
        }
    }
}

impl ParkourSettings {
    /// Clamp a raw scale into the supported range.
    #[inline]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Derive the thresholds for one detection cycle.
    pub fn thresholds(&self, scale: f32) -> Thresholds {
        Thresholds {
            scale,
            min_ledge_height: self.min_ledge_height * scale,
            max_ledge_height: self.max_ledge_height * scale,
            high_ledge_height: self.high_ledge_height * scale,
            player_height: self.player_height * scale,
            ceiling_allowance: self.ceiling_allowance * scale,

            vault_length: self.vault_length,
            vault_max_elevation_increase: self.vault_max_elevation_increase,
            min_vault_height: self.min_vault_height * scale,
            max_vault_height: self.max_vault_height * scale,

            low_ledge_z_adjust: self.low_ledge_z_adjust * scale,
            high_ledge_z_adjust: self.high_ledge_z_adjust * scale,
            vault_z_adjust: self.vault_z_adjust * scale,
            marker_lift: self.marker_lift * scale,

            low_ledge_to_camera: self.low_ledge_to_camera,
            high_ledge_to_camera: self.high_ledge_to_camera,
            vault_to_camera: self.vault_to_camera,
        }
    }
}

/// Settings with the actor scale applied. Built once per detection cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub scale: f32,
    pub min_ledge_height: f32,
    pub max_ledge_height: f32,
    pub high_ledge_height: f32,
    pub player_height: f32,
    pub ceiling_allowance: f32,

    pub vault_length: f32,
    pub vault_max_elevation_increase: f32,
    pub min_vault_height: f32,
    pub max_vault_height: f32,

    pub low_ledge_z_adjust: f32,
    pub high_ledge_z_adjust: f32,
    pub vault_z_adjust: f32,
    pub marker_lift: f32,

    pub low_ledge_to_camera: f32,
    pub high_ledge_to_camera: f32,
    pub vault_to_camera: f32,
}
