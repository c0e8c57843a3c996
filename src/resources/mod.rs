//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, camera,
//! effects, scenes and asset handles.
//!
//! Overview
//! - `camera` – follow camera and its conversion to a raylib camera
//! - `debugmode` – presence toggles the hitbox overlay and the FPS counter
//! - `gameconfig` – settings loaded from an INI file
//! - `input` – per-frame keyboard and mouse state with edge detection
//! - `scene` – named scenes and their enter/update/exit hooks
//! - `screenshake` – time-limited camera jitter
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod scene;
pub mod screenshake;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
