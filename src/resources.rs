//! Resource-table defaults for the step line.
//!
//! These play the part of the platform resources a widget reads once at
//! construction: default extent, bar geometry, label size and the palette.
//! Hosts with their own theme can deserialize a [`Resources`] from any serde
//! format; missing fields keep their defaults.
//!
//! ```rust
//! use bubbletea_stepline::resources::Resources;
//!
//! let res: Resources = serde_json::from_str(r#"{ "viewWidth": 60 }"#).unwrap();
//! assert_eq!(res.view_width, 60);
//! assert_eq!(res.view_height, Resources::default().view_height);
//! ```

use crate::color::Color;
use serde::Deserialize;

/// Default extent, geometry and colors for a step line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resources {
    /// Width used when the layout pass does not impose one.
    pub view_width: u32,
    /// Height used when the layout pass does not impose one.
    pub view_height: u32,
    /// Bar thickness.
    pub progress_height: f32,
    /// Label size.
    pub text_size: f32,
    /// Label baseline offset from the top.
    pub text_margin: f32,
    /// Bar offset from the top.
    pub progress_margin: f32,
    /// Completed bar segment.
    pub enabled_progress_color: Color,
    /// Remaining bar segment.
    pub disabled_progress_color: Color,
    /// Completed step labels.
    pub enabled_text_color: Color,
    /// Remaining step labels.
    pub disabled_text_color: Color,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            view_width: 40,
            view_height: 2,
            progress_height: 1.0,
            text_size: 1.0,
            text_margin: 0.0,
            progress_margin: 1.0,
            enabled_progress_color: Color::ACCENT,
            disabled_progress_color: Color::TRACK,
            enabled_text_color: Color::ACCENT,
            disabled_text_color: Color::MUTED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let res = Resources::default();
        assert_eq!((res.view_width, res.view_height), (40, 2));
        assert_eq!(res.enabled_progress_color, Color::ACCENT);
        assert_eq!(res.disabled_progress_color, Color::TRACK);
        assert_eq!(res.disabled_text_color, Color::MUTED);
    }

    #[test]
    fn test_partial_theme() {
        let res: Resources = serde_json::from_str(
            r##"{ "progressHeight": 2.0, "disabledTextColor": "#101010" }"##,
        )
        .unwrap();
        assert_eq!(res.progress_height, 2.0);
        assert_eq!(res.disabled_text_color, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(res.text_margin, 0.0);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let res = serde_json::from_str::<Resources>(r#"{ "enabledTextColor": "nope" }"#);
        assert!(res.is_err());
    }
}
