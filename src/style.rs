//! Resolved visual description of the button.
//!
//! The widget is presentational: rather than painting pixels, it
//! resolves its configuration and visibility into a [`ButtonStyle`]
//! the host render tree consumes.

use crate::animation::{TimingFunction, Transition};
use crate::color::Color;
use crate::config::BackToTopConfig;
use crate::position::Placement;

/// Accessible name announced for the control.
pub const ACCESSIBLE_LABEL: &str = "Back to top";

/// Icon font size in points, independent of the configured diameter.
pub const FONT_SIZE: f32 = 20.0;

/// Role the control reports to assistive technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// An interactive button.
    #[default]
    Button,
}

/// Cursor shown while hovering the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// The default arrow cursor.
    #[default]
    Default,
    /// Pointer/hand cursor for clickable elements.
    Pointer,
}

/// The single renderable unit the widget exposes to the host: a
/// circular, borderless control with the icon centered on both axes.
///
/// `interactive` governs both hit-testing and assistive-technology
/// traversal; when false the element is present in the tree but
/// transparent and inert. The host animates `opacity` changes
/// according to `transition`.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonStyle {
    /// Fixed corner placement within the viewport.
    pub placement: Placement,
    pub width: f32,
    pub height: f32,
    /// Half the diameter, making the control circular.
    pub corner_radius: f32,
    pub background: Color,
    pub foreground: Color,
    pub icon: String,
    pub font_size: f32,
    pub cursor: CursorIcon,
    /// 1.0 when visible, 0.0 when hidden.
    pub opacity: f32,
    /// Hit-testable and exposed to assistive technology.
    pub interactive: bool,
    /// Opacity animation the host should apply: the configured
    /// duration with an ease-in-out curve.
    pub transition: Transition,
    /// Accessible name for the control.
    pub label: &'static str,
    /// Assistive-technology role; the widget is always a button.
    pub role: Role,
}

impl ButtonStyle {
    /// Compose the resolved style for a configuration and visibility
    /// state. Pure; all sanitization already happened in the config.
    pub fn resolve(config: &BackToTopConfig, visible: bool) -> Self {
        Self {
            placement: config.position.resolve(),
            width: config.size,
            height: config.size,
            corner_radius: config.size / 2.0,
            background: config.background_color,
            foreground: config.text_color,
            icon: config.icon.clone(),
            font_size: FONT_SIZE,
            cursor: CursorIcon::Pointer,
            opacity: if visible { 1.0 } else { 0.0 },
            interactive: visible,
            transition: Transition::new(config.transition_duration_ms, TimingFunction::EaseInOut),
            label: ACCESSIBLE_LABEL,
            role: Role::Button,
        }
    }
}
