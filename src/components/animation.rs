//! Sprite animation playback.
//!
//! An [`AnimationManager`] lives on each animated entity. It owns the clips
//! the entity can play and the playback state of the selected one:
//!
//! ```text
//!            play()                update() past last frame (non-looping)
//!  stopped ─────────▶ playing ─────────────────────────────────▶ finished
//!     ▲                 │  ▲                                        │
//!     │      stop()     │  │ resume()                               │
//!     └─────────────────┤  │                                        │
//!                       ▼  │              play(.., restart)         │
//!                      paused            ◀──────────────────────────┘
//! ```
//!
//! The [`animation`](crate::systems::animation::animation) system advances
//! managers each frame and writes the resulting sheet frame into
//! [`Sprite::frame`](crate::components::sprite::Sprite).

use bevy_ecs::prelude::Component;
use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::sprite::Sprite;
use crate::error::{Result, SpriteboxError};

/// One named sequence of sheet frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Sheet frame indices, in playback order.
    pub frames: Vec<usize>,
    pub fps: f32,
    pub looped: bool,
    /// Seconds each frame stays on screen (`1 / fps`).
    pub frame_duration: f32,
    /// Seconds for one full pass over `frames`.
    pub total_duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, frames: Vec<usize>, fps: f32, looped: bool) -> Result<Self> {
        let name = name.into();
        if frames.is_empty() {
            return Err(SpriteboxError::EmptyAnimation { name });
        }
        if fps <= 0.0 || fps.is_nan() {
            return Err(SpriteboxError::InvalidFps { name, fps });
        }
        let frame_duration = 1.0 / fps;
        let total_duration = frames.len() as f32 * frame_duration;
        Ok(Self {
            name,
            frames,
            fps,
            looped,
            frame_duration,
            total_duration,
        })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Serializable snapshot of an [`AnimationManager`], for logs and overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationDebugInfo {
    pub current_animation: Option<String>,
    pub frame_index: usize,
    pub is_playing: bool,
    pub is_paused: bool,
    pub finished: bool,
    pub progress: f32,
    pub time_remaining: f32,
    pub total_animations: usize,
    pub frame_timer: f32,
}

/// Per-entity animation registry and playback state machine.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationManager {
    animations: FxHashMap<String, AnimationClip>,
    current: Option<String>,
    frame_index: usize,
    frame_timer: f32,
    playing: bool,
    paused: bool,
    finished: bool,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip, replacing any clip with the same name.
    pub fn add_clip(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Builder-style [`add_clip`](Self::add_clip).
    pub fn with_clip(mut self, clip: AnimationClip) -> Self {
        self.add_clip(clip);
        self
    }

    /// Register a clip over a sheet holding `sheet_frames` frames.
    ///
    /// Indices outside the sheet are dropped with a warning. Fails when no
    /// valid index remains or `fps` is not positive.
    pub fn add_animation(
        &mut self,
        name: &str,
        frames: &[usize],
        fps: f32,
        looped: bool,
        sheet_frames: usize,
    ) -> Result<()> {
        let (valid, invalid): (Vec<usize>, Vec<usize>) =
            frames.iter().copied().partition(|&f| f < sheet_frames);
        if !invalid.is_empty() {
            warn!(
                "Invalid frame indices {:?} for sprite with {} frames (animation '{}')",
                invalid, sheet_frames, name
            );
        }
        let clip = AnimationClip::new(name, valid, fps, looped)?;
        self.add_clip(clip);
        Ok(())
    }

    /// Start the clip called `name`.
    ///
    /// Returns false when no such clip exists. Asking for the clip that is
    /// already playing is a no-op unless `restart` is set or it finished.
    pub fn play(&mut self, name: &str, restart: bool) -> bool {
        if !self.animations.contains_key(name) {
            return false;
        }

        if self.current.as_deref() == Some(name) && self.playing && !restart && !self.finished {
            return true;
        }

        self.current = Some(name.to_string());
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.paused = false;
        self.finished = false;
        true
    }

    /// Stop playback and rewind. The current clip stays selected.
    pub fn stop(&mut self) {
        self.playing = false;
        self.paused = false;
        self.frame_index = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.playing && self.paused {
            self.paused = false;
        }
    }

    /// Advance the frame timer by `dt` seconds.
    ///
    /// At most one frame is advanced per call and the timer restarts from
    /// zero on every advance.
    pub fn update(&mut self, dt: f32) {
        if !self.playing || self.paused {
            return;
        }
        let Some(clip) = self.current.as_ref().and_then(|n| self.animations.get(n)) else {
            return;
        };
        if self.finished && !clip.looped {
            return;
        }

        self.frame_timer += dt;
        if self.frame_timer >= clip.frame_duration {
            self.frame_timer = 0.0;
            self.frame_index += 1;

            if self.frame_index >= clip.len() {
                if clip.looped {
                    self.frame_index = 0;
                } else {
                    self.frame_index = clip.len() - 1;
                    self.finished = true;
                    self.playing = false;
                }
            }
        }
    }

    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.current.as_ref().and_then(|n| self.animations.get(n))
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Index into the current clip's frame list.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_timer(&self) -> f32 {
        self.frame_timer
    }

    /// Sheet frame shown at the current position of the current clip.
    pub fn current_sprite_frame(&self) -> Option<usize> {
        self.current_clip()
            .and_then(|clip| clip.frames.get(self.frame_index).copied())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Playback progress in `[0, 1]`, including the fraction of the current frame.
    pub fn progress(&self) -> f32 {
        let Some(clip) = self.current_clip() else {
            return 0.0;
        };
        if clip.is_empty() {
            return 0.0;
        }
        let within_frame = self.frame_timer / clip.frame_duration;
        ((self.frame_index as f32 + within_frame) / clip.len() as f32).min(1.0)
    }

    /// Seconds left until a non-looping clip finishes.
    ///
    /// Zero when nothing is selected, the clip loops, or it already finished.
    pub fn time_remaining(&self) -> f32 {
        let Some(clip) = self.current_clip() else {
            return 0.0;
        };
        if clip.looped || self.finished {
            return 0.0;
        }
        let frames_left = clip.len().saturating_sub(self.frame_index + 1);
        frames_left as f32 * clip.frame_duration + (clip.frame_duration - self.frame_timer)
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn animation_names(&self) -> Vec<&str> {
        self.animations.keys().map(String::as_str).collect()
    }

    /// Remove a clip, stopping playback first when it is the current one.
    pub fn remove_animation(&mut self, name: &str) -> bool {
        if !self.animations.contains_key(name) {
            return false;
        }
        if self.current.as_deref() == Some(name) {
            self.stop();
        }
        self.animations.remove(name);
        true
    }

    pub fn clear_animations(&mut self) {
        self.stop();
        self.animations.clear();
    }

    pub fn debug_info(&self) -> AnimationDebugInfo {
        AnimationDebugInfo {
            current_animation: self.current.clone(),
            frame_index: self.frame_index,
            is_playing: self.playing,
            is_paused: self.paused,
            finished: self.finished,
            progress: self.progress(),
            time_remaining: self.time_remaining(),
            total_animations: self.animations.len(),
            frame_timer: self.frame_timer,
        }
    }
}

/// Play `name` on an animated sprite, optionally overriding its mirror flag.
pub fn play_animation(
    manager: &mut AnimationManager,
    sprite: &mut Sprite,
    name: &str,
    restart: bool,
    mirror: Option<bool>,
) -> bool {
    if let Some(mirrored) = mirror {
        sprite.mirrored = mirrored;
    }
    manager.play(name, restart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spritesheet::SpriteSheet;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn manager_with(name: &str, frames: Vec<usize>, fps: f32, looped: bool) -> AnimationManager {
        AnimationManager::new().with_clip(AnimationClip::new(name, frames, fps, looped).unwrap())
    }

    #[test]
    fn test_clip_rejects_empty_frames() {
        let err = AnimationClip::new("idle", vec![], 10.0, true).unwrap_err();
        assert_eq!(
            err,
            SpriteboxError::EmptyAnimation {
                name: "idle".into()
            }
        );
    }

    #[test]
    fn test_clip_rejects_non_positive_fps() {
        assert!(matches!(
            AnimationClip::new("idle", vec![0], 0.0, true),
            Err(SpriteboxError::InvalidFps { .. })
        ));
        assert!(AnimationClip::new("idle", vec![0], -1.0, true).is_err());
    }

    #[test]
    fn test_clip_durations() {
        let clip = AnimationClip::new("walk", vec![0, 1, 2, 3], 8.0, true).unwrap();
        assert!(approx_eq(clip.frame_duration, 0.125));
        assert!(approx_eq(clip.total_duration, 0.5));
    }

    #[test]
    fn test_add_animation_filters_out_of_range_frames() {
        let mut m = AnimationManager::new();
        m.add_animation("walk", &[0, 1, 9, 2], 10.0, true, 4).unwrap();
        assert_eq!(m.animations["walk"].frames, vec![0, 1, 2]);
    }

    #[test]
    fn test_add_animation_with_only_invalid_frames_fails() {
        let mut m = AnimationManager::new();
        let err = m.add_animation("bad", &[7, 8], 10.0, true, 4).unwrap_err();
        assert!(matches!(err, SpriteboxError::EmptyAnimation { .. }));
        assert!(!m.has_animation("bad"));
    }

    #[test]
    fn test_play_unknown_returns_false() {
        let mut m = AnimationManager::new();
        assert!(!m.play("nope", false));
        assert!(!m.is_playing());
    }

    #[test]
    fn test_play_same_clip_without_restart_keeps_position() {
        let mut m = manager_with("walk", vec![0, 1, 2], 10.0, true);
        assert!(m.play("walk", false));
        m.update(0.1);
        assert_eq!(m.frame_index(), 1);
        assert!(m.play("walk", false));
        assert_eq!(m.frame_index(), 1);
        assert!(m.play("walk", true));
        assert_eq!(m.frame_index(), 0);
    }

    #[test]
    fn test_update_advances_one_frame_and_resets_timer() {
        let mut m = manager_with("walk", vec![4, 5, 6], 10.0, true);
        m.play("walk", false);
        m.update(0.05);
        assert_eq!(m.frame_index(), 0);
        // A large step still only advances a single frame.
        m.update(0.5);
        assert_eq!(m.frame_index(), 1);
        assert!(approx_eq(m.frame_timer(), 0.0));
        assert_eq!(m.current_sprite_frame(), Some(5));
    }

    #[test]
    fn test_looping_clip_wraps() {
        let mut m = manager_with("spin", vec![0, 1], 10.0, true);
        m.play("spin", false);
        m.update(0.1);
        m.update(0.1);
        assert_eq!(m.frame_index(), 0);
        assert!(m.is_playing());
        assert!(!m.is_finished());
    }

    #[test]
    fn test_non_looping_clip_finishes_on_last_frame() {
        let mut m = manager_with("jump", vec![3, 4, 5], 10.0, false);
        m.play("jump", false);
        for _ in 0..5 {
            m.update(0.1);
        }
        assert_eq!(m.frame_index(), 2);
        assert!(m.is_finished());
        assert!(!m.is_playing());
        assert_eq!(m.current_sprite_frame(), Some(5));
    }

    #[test]
    fn test_finished_clip_restarts_on_play() {
        let mut m = manager_with("jump", vec![0, 1], 10.0, false);
        m.play("jump", false);
        m.update(0.1);
        m.update(0.1);
        assert!(m.is_finished());
        assert!(m.play("jump", false));
        assert_eq!(m.frame_index(), 0);
        assert!(!m.is_finished());
        assert!(m.is_playing());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut m = manager_with("walk", vec![0, 1, 2], 10.0, true);
        m.pause();
        assert!(!m.is_paused(), "pause is ignored while stopped");
        m.play("walk", false);
        m.pause();
        m.update(1.0);
        assert_eq!(m.frame_index(), 0);
        m.resume();
        m.update(0.1);
        assert_eq!(m.frame_index(), 1);
    }

    #[test]
    fn test_stop_rewinds_but_keeps_selection() {
        let mut m = manager_with("walk", vec![0, 1, 2], 10.0, true);
        m.play("walk", false);
        m.update(0.1);
        m.stop();
        assert_eq!(m.frame_index(), 0);
        assert!(!m.is_playing());
        assert_eq!(m.current_name(), Some("walk"));
        m.update(0.5);
        assert_eq!(m.frame_index(), 0);
    }

    #[test]
    fn test_progress_includes_partial_frame() {
        let mut m = manager_with("walk", vec![0, 1, 2, 3], 10.0, true);
        assert!(approx_eq(m.progress(), 0.0));
        m.play("walk", false);
        m.update(0.1);
        m.update(0.05);
        // (1 + 0.5) / 4
        assert!(approx_eq(m.progress(), 0.375));
    }

    #[test]
    fn test_time_remaining() {
        let mut m = manager_with("jump", vec![0, 1, 2, 3], 10.0, false);
        m.play("jump", false);
        m.update(0.1);
        m.update(0.04);
        // two whole frames left plus 0.06 of the current one
        assert!(approx_eq(m.time_remaining(), 0.26));

        for _ in 0..4 {
            m.update(0.1);
        }
        assert!(m.is_finished());
        assert!(approx_eq(m.time_remaining(), 0.0));

        let mut looping = manager_with("walk", vec![0, 1], 10.0, true);
        looping.play("walk", false);
        assert!(approx_eq(looping.time_remaining(), 0.0));
    }

    #[test]
    fn test_remove_current_animation_stops_playback() {
        let mut m = manager_with("walk", vec![0, 1], 10.0, true);
        m.play("walk", false);
        m.update(0.1);
        assert!(m.remove_animation("walk"));
        assert!(!m.is_playing());
        assert_eq!(m.frame_index(), 0);
        assert!(!m.remove_animation("walk"));
        assert!(m.current_clip().is_none());
    }

    #[test]
    fn test_clear_animations() {
        let mut m = manager_with("walk", vec![0, 1], 10.0, true)
            .with_clip(AnimationClip::new("idle", vec![0], 1.0, true).unwrap());
        let mut names = m.animation_names();
        names.sort_unstable();
        assert_eq!(names, vec!["idle", "walk"]);
        m.play("idle", false);
        m.clear_animations();
        assert!(m.animation_names().is_empty());
        assert!(!m.is_playing());
    }

    #[test]
    fn test_debug_info_serializes() {
        let mut m = manager_with("walk", vec![0, 1], 10.0, true);
        m.play("walk", false);
        let info = m.debug_info();
        assert_eq!(info.current_animation.as_deref(), Some("walk"));
        assert_eq!(info.total_animations, 1);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"current_animation\":\"walk\""));
    }

    #[test]
    fn test_play_animation_sets_mirror() {
        let sheet = SpriteSheet::new(64, 32, 32, 32).unwrap();
        let mut sprite = Sprite::new("hero", sheet);
        let mut m = manager_with("walk", vec![0, 1], 10.0, true);
        assert!(play_animation(&mut m, &mut sprite, "walk", false, Some(true)));
        assert!(sprite.mirrored);
        assert!(play_animation(&mut m, &mut sprite, "walk", false, None));
        assert!(sprite.mirrored);
        assert!(!play_animation(&mut m, &mut sprite, "run", false, Some(false)));
        assert!(!sprite.mirrored);
    }
}
