//! Events and observers to toggle debug overlays.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource; [`SwitchFpsEvent`] does the same for [`ShowFps`]. Systems that
//! render overlays gate their behavior on these resources.
use crate::resources::debugmode::{DebugMode, ShowFps};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event used to toggle the [`DebugMode`] resource on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Event used to toggle the [`ShowFps`] resource on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFpsEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug mode disabled");
    } else {
        commands.insert_resource(DebugMode {});
        info!("Debug mode enabled");
    }
}

/// Observer that toggles the [`ShowFps`] resource.
pub fn switch_fps_observer(
    _trigger: On<SwitchFpsEvent>,
    mut commands: Commands,
    show_fps: Option<Res<ShowFps>>,
) {
    if show_fps.is_some() {
        commands.remove_resource::<ShowFps>();
    } else {
        commands.insert_resource(ShowFps {});
    }
    info!("FPS counter {}", if show_fps.is_some() { "hidden" } else { "shown" });
}
