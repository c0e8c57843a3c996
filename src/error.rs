//! Library error type.
//!
//! Constructors that validate their input (animation clips, sprite sheets,
//! configuration files) return [`SpriteboxError`]. Lookups that simply miss
//! (unknown animation or scene names) report a `bool` instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpriteboxError {
    #[error("animation '{name}' must have at least one frame")]
    EmptyAnimation { name: String },

    #[error("animation '{name}' fps must be positive (got {fps})")]
    InvalidFps { name: String, fps: f32 },

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SpriteboxError>;
