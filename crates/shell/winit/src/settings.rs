//! Configure the menu window.
use rmenu_tiny_skia::Font;

use std::path::PathBuf;

/// The settings of a menu window.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The [`Font`] of the labels.
    pub font: Font,

    /// The integer device scale to draw at.
    ///
    /// By default, the scale factor of the window rounded up.
    pub scale: Option<u32>,

    /// An image stretched over every item instead of the gradient.
    pub texture: Option<PathBuf>,

    /// The title of the window.
    pub title: String,

    /// The application id used by the compositor to match the window.
    pub app_id: String,
}

impl Settings {
    /// Returns the integer device scale for a window with the given scale
    /// factor.
    pub fn scale_for(&self, scale_factor: f64) -> u32 {
        self.scale
            .unwrap_or_else(|| scale_factor.ceil() as u32)
            .max(1)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font: Font::default(),
            scale: None,
            texture: None,
            title: String::from("rmenu"),
            app_id: String::from("rmenu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for() {
        let settings = Settings::default();

        assert_eq!(settings.scale_for(1.0), 1);
        assert_eq!(settings.scale_for(1.25), 2);
        assert_eq!(settings.scale_for(0.0), 1);

        let forced = Settings {
            scale: Some(3),
            ..Settings::default()
        };

        assert_eq!(forced.scale_for(1.0), 3);

        let zero = Settings {
            scale: Some(0),
            ..Settings::default()
        };

        assert_eq!(zero.scale_for(2.0), 1);
    }
}
