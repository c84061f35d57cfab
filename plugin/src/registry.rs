//! Registration of the bridge functions with the script VM.

use crate::SCRIPT_CLASS;

/// The native functions exposed to scripts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BridgeFunction {
    /// `greet`
    SayHello,
    /// `set_jump_enabled`
    ToggleJumping,
    /// `force_end_animation`
    EndAnimationEarly,
    /// `Bridge::update_parkour_point`
    UpdateParkourPoint,
}

impl BridgeFunction {
    pub const ALL: [BridgeFunction; 4] = [
        BridgeFunction::SayHello,
        BridgeFunction::ToggleJumping,
        BridgeFunction::EndAnimationEarly,
        BridgeFunction::UpdateParkourPoint,
    ];

    /// Name the scripts call the function by.
    pub fn script_name(self) -> &'static str {
        match self {
            BridgeFunction::SayHello => "SayHello",
            BridgeFunction::ToggleJumping => "ToggleJumping",
            BridgeFunction::EndAnimationEarly => "EndAnimationEarly",
            BridgeFunction::UpdateParkourPoint => "UpdateParkourPoint",
        }
    }
}

/// The host's script virtual machine.
pub trait ScriptVm {
    /// Bind `function` as `class.name`. Returns whether the VM accepted it.
    fn register_function(&mut self, name: &str, class: &str, function: BridgeFunction) -> bool;
}

/// Register every bridge function under [`SCRIPT_CLASS`].
///
/// All functions are attempted even if one is rejected; the result is `true` only if
/// the VM accepted all of them.
pub fn register_functions(vm: &mut dyn ScriptVm) -> bool {
    let mut all_accepted = true;
    for function in BridgeFunction::ALL {
        let accepted = vm.register_function(function.script_name(), SCRIPT_CLASS, function);
        if !accepted {
            log::warn!("{}.{} was rejected", SCRIPT_CLASS, function.script_name());
        }
        all_accepted &= accepted;
    }
    log::info!("Script functions registered: {}", all_accepted);
    all_accepted
}
