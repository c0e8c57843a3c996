//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the engine cares about and
//! exposes it to systems via the [`InputState`] resource. Edges
//! (`just_pressed` / `just_released`) are derived from the previous frame's
//! `active` value, so they hold for exactly one frame.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    pub fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Feed this frame's raw state.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame input state.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub action_advance: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
    pub toggle_fps: BoolState,
    pub toggle_pause: BoolState,
    pub dump_debug: BoolState,
    /// Left mouse button; `key_binding` is unused.
    pub mouse_left: BoolState,
    pub mouse_position: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            action_advance: BoolState::bound(KeyboardKey::KEY_SPACE),
            action_back: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
            toggle_fps: BoolState::bound(KeyboardKey::KEY_F1),
            toggle_pause: BoolState::bound(KeyboardKey::KEY_P),
            dump_debug: BoolState::bound(KeyboardKey::KEY_F2),
            mouse_left: BoolState::default(),
            mouse_position: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl InputState {
    /// Mutable access to every keyboard-bound state.
    pub fn keys_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.action_advance,
            &mut self.action_back,
            &mut self.mode_debug,
            &mut self.toggle_fps,
            &mut self.toggle_pause,
            &mut self.dump_debug,
        ]
    }

    /// Advance every state by one frame.
    ///
    /// `is_down` reports whether a keyboard key is held right now.
    pub fn advance(
        &mut self,
        is_down: impl Fn(KeyboardKey) -> bool,
        mouse_left_down: bool,
        mouse_position: Vector2,
    ) {
        for key in self.keys_mut() {
            let down = is_down(key.key_binding);
            key.update(down);
        }
        self.mouse_left.update(mouse_left_down);
        self.mouse_position = mouse_position;
    }
}
