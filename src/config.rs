//! Widget configuration.

use crate::color::Color;
use crate::position::Position;

/// Default widget diameter in pixels.
pub const DEFAULT_SIZE: f32 = 50.0;
/// Default scroll offset above which the widget becomes visible.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 300.0;
/// Default opacity transition duration in milliseconds.
pub const DEFAULT_TRANSITION_MS: f32 = 300.0;
/// Default up-arrow glyph shown inside the button.
pub const DEFAULT_ICON: &str = "\u{2b06}\u{fe0f}";

/// Configuration for a [`BackToTop`] widget. Every field has a
/// documented default; out-of-domain numeric inputs are sanitized by
/// the builder setters, never at use sites.
///
/// [`BackToTop`]: crate::widget::BackToTop
#[derive(Debug, Clone, PartialEq)]
pub struct BackToTopConfig {
    /// Diameter of the circular button in pixels (default 50).
    pub size: f32,
    /// Viewport corner the button is pinned to (default bottom-right).
    pub position: Position,
    /// Fill color (default `#000`).
    pub background_color: Color,
    /// Icon/text color (default `#fff`).
    pub text_color: Color,
    /// Content rendered centered inside the button (default "⬆️").
    pub icon: String,
    /// Scroll offset above which the button shows (default 300).
    pub scroll_threshold: f32,
    /// Opacity transition duration in milliseconds (default 300).
    pub transition_duration_ms: f32,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            position: Position::default(),
            background_color: Color::BLACK,
            text_color: Color::WHITE,
            icon: DEFAULT_ICON.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl BackToTopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button diameter. Non-finite or non-positive values fall
    /// back to the default.
    pub fn size(mut self, size: f32) -> Self {
        self.size = sanitize_positive(size, DEFAULT_SIZE);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the show/hide trigger offset. Negative values clamp to 0;
    /// non-finite values fall back to the default.
    pub fn scroll_threshold(mut self, threshold: f32) -> Self {
        self.scroll_threshold = sanitize_non_negative(threshold, DEFAULT_SCROLL_THRESHOLD);
        self
    }

    /// Set the opacity transition duration in milliseconds. Negative
    /// values clamp to 0; non-finite values fall back to the default.
    pub fn transition_duration(mut self, duration_ms: f32) -> Self {
        self.transition_duration_ms = sanitize_non_negative(duration_ms, DEFAULT_TRANSITION_MS);
        self
    }
}

fn sanitize_positive(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

pub(crate) fn sanitize_non_negative(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackToTopConfig::default();
        assert_eq!(config.size, 50.0);
        assert_eq!(config.position, Position::BottomRight);
        assert_eq!(config.background_color, Color::BLACK);
        assert_eq!(config.text_color, Color::WHITE);
        assert_eq!(config.icon, DEFAULT_ICON);
        assert_eq!(config.scroll_threshold, 300.0);
        assert_eq!(config.transition_duration_ms, 300.0);
    }

    #[test]
    fn test_builder_setters() {
        let config = BackToTopConfig::new()
            .size(80.0)
            .position(Position::TopLeft)
            .background_color(Color::from_hex(0x336699))
            .text_color(Color::BLACK)
            .icon("^")
            .scroll_threshold(100.0)
            .transition_duration(150.0);
        assert_eq!(config.size, 80.0);
        assert_eq!(config.position, Position::TopLeft);
        assert_eq!(config.background_color, Color::from_hex(0x336699));
        assert_eq!(config.icon, "^");
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.transition_duration_ms, 150.0);
    }

    #[test]
    fn test_size_sanitization() {
        assert_eq!(BackToTopConfig::new().size(0.0).size, DEFAULT_SIZE);
        assert_eq!(BackToTopConfig::new().size(-10.0).size, DEFAULT_SIZE);
        assert_eq!(BackToTopConfig::new().size(f32::NAN).size, DEFAULT_SIZE);
        assert_eq!(BackToTopConfig::new().size(1.0).size, 1.0);
    }

    #[test]
    fn test_threshold_sanitization() {
        assert_eq!(BackToTopConfig::new().scroll_threshold(-5.0).scroll_threshold, 0.0);
        assert_eq!(
            BackToTopConfig::new().scroll_threshold(f32::INFINITY).scroll_threshold,
            DEFAULT_SCROLL_THRESHOLD
        );
        assert_eq!(BackToTopConfig::new().scroll_threshold(0.0).scroll_threshold, 0.0);
    }

    #[test]
    fn test_duration_sanitization() {
        assert_eq!(
            BackToTopConfig::new().transition_duration(-1.0).transition_duration_ms,
            0.0
        );
        assert_eq!(
            BackToTopConfig::new().transition_duration(f32::NAN).transition_duration_ms,
            DEFAULT_TRANSITION_MS
        );
    }
}
