use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::audio::AudioConfig;
use self::ui::UiConfig;

pub mod api;
pub mod audio;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub audio: AudioConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            ui: UiConfig::new(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "ui": { "dark": true } }"#).unwrap();
        assert!(config.ui.dark);
        assert_eq!(config.ui.placeholder, "Soz yozing");
        assert_eq!(config.api.language, "en");
        assert!(config.audio.enabled);
    }

    #[test]
    fn font_is_read_by_label() {
        let config: Config = serde_json::from_str(r#"{ "ui": { "font": "Mono" } }"#).unwrap();
        assert_eq!(config.ui.font, lugat_types::FontPreference::Mono);
    }
}
