//! Demo settings and preferences
//!
//! Persisted in LocalStorage as JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::scene::ScenePreset;

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Which scene to show
    pub preset: ScenePreset,

    // === Motion ===
    /// Distance-to-speed divisor (0.3 - 1.0, higher = slower)
    pub damping: f32,
    /// Milliseconds motion stays suppressed after a resize
    pub resize_debounce_ms: u32,

    // === Visual ===
    /// Spin the sphere every frame
    pub rotate: bool,

    // === Accessibility ===
    /// Reduced motion (no spinning)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: ScenePreset::Tracking,
            damping: DEFAULT_DAMPING,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            rotate: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Damping clamped to the usable range; garbage falls back to the default
    pub fn effective_damping(&self) -> f32 {
        if self.damping.is_finite() {
            self.damping.clamp(MIN_DAMPING, MAX_DAMPING)
        } else {
            DEFAULT_DAMPING
        }
    }

    /// Effective rotation (respects reduced_motion)
    pub fn effective_rotation(&self) -> bool {
        self.rotate && !self.reduced_motion
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "window_sphere_settings";

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            preset: ScenePreset::Basic,
            damping: 0.5,
            resize_debounce_ms: 250,
            rotate: false,
            reduced_motion: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"preset":"Basic"}"#);
        assert_eq!(settings.preset, ScenePreset::Basic);
        assert_eq!(settings.damping, DEFAULT_DAMPING);
        assert!(settings.rotate);
    }

    #[test]
    fn test_malformed_json_uses_defaults() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_damping_is_clamped() {
        let mut settings = Settings::default();
        settings.damping = 5.0;
        assert_eq!(settings.effective_damping(), MAX_DAMPING);
        settings.damping = 0.0;
        assert_eq!(settings.effective_damping(), MIN_DAMPING);
        settings.damping = f32::NAN;
        assert_eq!(settings.effective_damping(), DEFAULT_DAMPING);
    }

    #[test]
    fn test_reduced_motion_disables_rotation() {
        let mut settings = Settings::default();
        assert!(settings.effective_rotation());
        settings.reduced_motion = true;
        assert!(!settings.effective_rotation());
    }
}
