//! The functions scripts call. Nothing here panics or returns an error to the host:
//! failures are logged and mapped to the neutral result.

use shared::{
    DetectorToggles, InteractionType, MarkerObject, MarkerSet, ParkourController, ParkourHost,
    ParkourSettings, UpdateRequest,
};

use crate::{
    PLUGIN_DISPLAY_NAME,
    error::{BridgeError, BridgeResult},
    wire::interaction_code,
};

/// Animation-graph event that cancels a furniture idle.
pub const FURNITURE_EXIT_EVENT: &str = "IdleFurnitureExit";

/// An object whose animation graph can receive events.
pub trait AnimationTarget {
    fn notify_animation_graph(&mut self, event: &str) -> bool;
}

/// Marker objects as handed over by a script; any of them may be `None`.
#[derive(Default)]
pub struct MarkerHandles<'m> {
    pub vault: Option<&'m mut dyn MarkerObject>,
    pub mid: Option<&'m mut dyn MarkerObject>,
    pub high: Option<&'m mut dyn MarkerObject>,
    pub indicator: Option<&'m mut dyn MarkerObject>,
}

impl<'m> MarkerHandles<'m> {
    fn resolve(self) -> BridgeResult<MarkerSet<'m>> {
        Ok(MarkerSet {
            vault: self.vault.ok_or(BridgeError::MissingMarker("vault"))?,
            mid: self.mid.ok_or(BridgeError::MissingMarker("mid"))?,
            high: self.high.ok_or(BridgeError::MissingMarker("high"))?,
            indicator: self.indicator.ok_or(BridgeError::MissingMarker("indicator"))?,
        })
    }
}

/// `"Skyclimb <major>.<minor>.<patch>"`.
pub fn greet() -> String {
    format!(
        "{} {}.{}.{}",
        PLUGIN_DISPLAY_NAME,
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
    )
}

pub fn set_jump_enabled(host: &mut dyn ParkourHost, enabled: bool) {
    host.set_jumping_enabled(enabled);
}

pub fn force_end_animation(target: Option<&mut dyn AnimationTarget>) {
    let Some(target) = target else {
        log::warn!("EndAnimationEarly called without a target");
        return;
    };
    if !target.notify_animation_graph(FURNITURE_EXIT_EVENT) {
        log::debug!("{} was not accepted by the target", FURNITURE_EXIT_EVENT);
    }
}

/// Holds the detection pipeline for the lifetime of the plugin.
#[derive(Clone, Debug, Default)]
pub struct Bridge {
    controller: ParkourController,
}

impl Bridge {
    pub fn new(settings: ParkourSettings) -> Self {
        Self {
            controller: ParkourController::new(settings),
        }
    }

    /// Run one detection cycle and return its wire code.
    pub fn update_parkour_point(
        &self,
        host: &mut dyn ParkourHost,
        markers: MarkerHandles<'_>,
        use_jump_key_gate: bool,
        enable_vaulting: bool,
        enable_ledges: bool,
    ) -> i32 {
        let request = UpdateRequest {
            use_jump_key_gate,
            toggles: DetectorToggles {
                enable_vaulting,
                enable_ledges,
            },
        };

        match self.try_update(host, markers, request) {
            Ok(found) => interaction_code(found),
            Err(err) => {
                log::log!(err.log_level(), "UpdateParkourPoint: {}", err);
                interaction_code(None)
            }
        }
    }

    fn try_update(
        &self,
        host: &mut dyn ParkourHost,
        markers: MarkerHandles<'_>,
        request: UpdateRequest,
    ) -> BridgeResult<Option<InteractionType>> {
        if host.player().is_none() {
            return Err(BridgeError::NoPlayer);
        }
        let mut markers = markers.resolve()?;
        Ok(self.controller.update(host, &mut markers, request))
    }
}
