//! Game configuration resource.
//!
//! Settings loaded from an INI file. Defaults are safe for startup, and keys
//! missing from the file keep their current values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = spritebox
//! target_fps = 60
//!
//! [display]
//! background_r = 50
//! background_g = 50
//! background_b = 50
//!
//! [debug]
//! show_fps = false
//! show_hitboxes = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Color;
use std::path::PathBuf;

use crate::error::{Result, SpriteboxError};

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TITLE: &str = "spritebox";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_BACKGROUND: (u8, u8, u8) = (50, 50, 50);
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    pub target_fps: u32,
    /// Clear color as RGB.
    pub background: (u8, u8, u8),
    pub show_fps: bool,
    pub show_hitboxes: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            background: DEFAULT_BACKGROUND,
            show_fps: false,
            show_hitboxes: false,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file at `config_path`.
    pub fn load_from_file(&mut self) -> Result<()> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            SpriteboxError::Config(format!(
                "failed to load {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} '{}', fps={}, show_fps={}, show_hitboxes={}",
            self.window_width,
            self.window_height,
            self.title,
            self.target_fps,
            self.show_fps,
            self.show_hitboxes
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(SpriteboxError::Config)?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window]
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [display]
        let channel = |key: &str, current: u8| {
            config
                .getuint("display", key)
                .ok()
                .flatten()
                .map(|v| v.min(255) as u8)
                .unwrap_or(current)
        };
        self.background = (
            channel("background_r", self.background.0),
            channel("background_g", self.background.1),
            channel("background_b", self.background.2),
        );

        // [debug]
        if let Some(show) = config.getbool("debug", "show_fps").ok().flatten() {
            self.show_fps = show;
        }
        if let Some(show) = config.getbool("debug", "show_hitboxes").ok().flatten() {
            self.show_hitboxes = show;
        }
    }

    /// Save configuration to the INI file. Creates the file if needed.
    pub fn save_to_file(&self) -> Result<()> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("display", "background_r", Some(self.background.0.to_string()));
        config.set("display", "background_g", Some(self.background.1.to_string()));
        config.set("display", "background_b", Some(self.background.2.to_string()));

        config.set("debug", "show_fps", Some(self.show_fps.to_string()));
        config.set("debug", "show_hitboxes", Some(self.show_hitboxes.to_string()));

        config.write(&self.config_path).map_err(|e| {
            SpriteboxError::Config(format!(
                "failed to save {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b) = self.background;
        Color::new(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.title, "spritebox");
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.background, (50, 50, 50));
        assert!(!config.show_fps);
        assert!(!config.show_hitboxes);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 1024\n\n[debug]\nshow_hitboxes = true\n")
            .unwrap();
        assert_eq!(config.window_size(), (1024, 600));
        assert_eq!(config.target_fps, 60);
        assert!(config.show_hitboxes);
        assert!(!config.show_fps);
    }

    #[test]
    fn test_background_channels() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[display]\nbackground_r = 10\nbackground_b = 300\n")
            .unwrap();
        assert_eq!(config.background, (10, 50, 255));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let mut config = GameConfig::with_path("/nonexistent/spritebox/config.ini");
        let err = config.load_from_file().unwrap_err();
        assert!(matches!(err, SpriteboxError::Config(_)));
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "spritebox_config_test_{}.ini",
            std::process::id()
        ));
        let mut config = GameConfig::with_path(&path);
        config.title = "demo".to_string();
        config.target_fps = 30;
        config.show_fps = true;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.title, "demo");
        assert_eq!(loaded.target_fps, 30);
        assert!(loaded.show_fps);
    }
}
