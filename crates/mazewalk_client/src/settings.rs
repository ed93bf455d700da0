//! Optional tuning overrides from `assets/settings.toml`.
//!
//! All sections use `#[serde(default)]`, so a partial file (say, only
//! `[movement]`) works. A missing or malformed file falls back to the built-in
//! defaults — tuning is never a reason not to start.

use std::fs;

use mazewalk_simulation::{CameraConfig, MovementConfig};
use serde::Deserialize;

pub const SETTINGS_PATH: &str = "assets/settings.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
}

pub fn load_settings() -> Settings {
    let text = match fs::read_to_string(SETTINGS_PATH) {
        Ok(text) => text,
        Err(_) => return Settings::default(), // no file, no overrides
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            // Logging isn't up yet (this runs before App construction)
            eprintln!("ignoring invalid {SETTINGS_PATH}: {err}");
            Settings::default()
        }
    }
}
