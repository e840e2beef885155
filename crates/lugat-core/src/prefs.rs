use lugat_types::{FontPreference, Theme};

/// Local presentation preferences, never persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub font: FontPreference,
}

impl Preferences {
    pub fn new(dark: bool, font: FontPreference) -> Self {
        Self {
            theme: Theme::from_dark(dark),
            font,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme switched to {}", self.theme.class());
    }

    pub fn select_font(&mut self, font: FontPreference) {
        self.font = font;
        tracing::debug!("Font switched to {}", font.label());
    }
}
