//! Input system.
//!
//! [`update_input_state`] reads hardware input from raylib each frame, writes
//! it into [`InputState`] and reacts to the engine's own hotkeys: F11 toggles
//! the hitbox overlay, F1 the FPS counter and P pauses the world clock.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::MouseButton;

use crate::events::switchdebug::{SwitchDebugEvent, SwitchFpsEvent};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Poll raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    input.advance(
        |key| rl.is_key_down(key),
        rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
        rl.get_mouse_position(),
    );

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.toggle_fps.just_pressed {
        commands.trigger(SwitchFpsEvent {});
    }
}

/// Toggle the world clock when the pause key goes down.
pub fn toggle_pause(input: Res<InputState>, mut time: ResMut<WorldTime>) {
    if input.toggle_pause.just_pressed {
        time.paused = !time.paused;
        info!("{}", if time.paused { "Paused" } else { "Resumed" });
    }
}
