//! Effective uniform scale of the player.
//!
//! The game scales the whole model, and skeleton mods scale individual bones instead:
//! RaceMenu scales `NPC`, others scale its child `NPC Root [Root]`. All three factors
//! multiply together.

use crate::{
    actor::{ModelView, PlayerActor},
    scene::find_node_by_name,
    settings::ParkourSettings,
};

pub const NPC_BONE: &str = "NPC";
pub const NPC_ROOT_BONE: &str = "NPC Root [Root]";

/// Uniform scale of the model root, third person first. 1.0 without a loaded model.
pub fn model_scale(actor: &dyn PlayerActor) -> f32 {
    if !actor.is_3d_loaded() {
        return 1.0;
    }

    [ModelView::ThirdPerson, ModelView::FirstPerson]
        .into_iter()
        .find_map(|view| actor.model(view))
        .map_or(1.0, |model| model.local_scale(model.root()))
}

/// Local scale of a named bone, third person first. 1.0 if the bone is absent.
pub fn bone_scale(actor: &dyn PlayerActor, bone: &str) -> f32 {
    if !actor.is_3d_loaded() {
        return 1.0;
    }

    [ModelView::ThirdPerson, ModelView::FirstPerson]
        .into_iter()
        .find_map(|view| {
            let model = actor.model(view)?;
            find_node_by_name(model, bone).map(|id| model.local_scale(id))
        })
        .unwrap_or(1.0)
}

/// Combined scale of the actor, clamped to the settings' scale range.
pub fn resolve_scale(actor: &dyn PlayerActor, settings: &ParkourSettings) -> f32 {
    let scale = model_scale(actor) * bone_scale(actor, NPC_BONE) * bone_scale(actor, NPC_ROOT_BONE);
    settings.clamp_scale(scale)
}
