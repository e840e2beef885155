use std::env;

use lugat_types::FontPreference;
use serde::{Deserialize, Serialize};

fn default_term() -> String {
    "keyboard".to_string()
}

fn default_placeholder() -> String {
    "Soz yozing".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Term looked up when the window opens
    #[serde(default = "default_term")]
    pub default_term: String,
    pub font: FontPreference,
    pub dark: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl UiConfig {
    pub fn new() -> Self {
        let default_term = env::var("LUGAT_DEFAULT_TERM").unwrap_or_else(|_| default_term());

        Self {
            default_term,
            ..Self::default()
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_term: default_term(),
            font: FontPreference::default(),
            dark: false,
            placeholder: default_placeholder(),
        }
    }
}
