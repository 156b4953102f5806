//! Corner placement resolution.

/// Margin kept between the widget and the viewport edges, in pixels.
pub const EDGE_MARGIN: f32 = 20.0;

/// Viewport corner the widget is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

/// Fixed placement resolved from a [`Position`]: offsets for the two
/// pinned edges, `None` for the free ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    /// Margin applied on all sides.
    pub margin: f32,
}

impl Position {
    /// Parses a kebab-case corner name. Any unrecognized name silently
    /// resolves to the default corner, `bottom-right`.
    pub fn parse(name: &str) -> Self {
        match name {
            "top-left" => Position::TopLeft,
            "top-right" => Position::TopRight,
            "bottom-left" => Position::BottomLeft,
            "bottom-right" => Position::BottomRight,
            _ => Position::BottomRight,
        }
    }

    /// Resolves this corner to concrete edge offsets with the standard
    /// [`EDGE_MARGIN`].
    pub fn resolve(self) -> Placement {
        let base = Placement {
            margin: EDGE_MARGIN,
            ..Placement::default()
        };
        match self {
            Position::TopLeft => Placement {
                top: Some(0.0),
                left: Some(0.0),
                ..base
            },
            Position::TopRight => Placement {
                top: Some(0.0),
                right: Some(0.0),
                ..base
            },
            Position::BottomLeft => Placement {
                bottom: Some(0.0),
                left: Some(0.0),
                ..base
            },
            Position::BottomRight => Placement {
                bottom: Some(0.0),
                right: Some(0.0),
                ..base
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bottom_right() {
        assert_eq!(Position::default(), Position::BottomRight);
    }

    #[test]
    fn test_resolve_pins_exactly_two_edges() {
        let cases = [
            (Position::TopLeft, (Some(0.0), None, None, Some(0.0))),
            (Position::TopRight, (Some(0.0), Some(0.0), None, None)),
            (Position::BottomLeft, (None, None, Some(0.0), Some(0.0))),
            (Position::BottomRight, (None, Some(0.0), Some(0.0), None)),
        ];
        for (position, (top, right, bottom, left)) in cases {
            let placement = position.resolve();
            assert_eq!(placement.top, top, "{position:?}");
            assert_eq!(placement.right, right, "{position:?}");
            assert_eq!(placement.bottom, bottom, "{position:?}");
            assert_eq!(placement.left, left, "{position:?}");
            assert_eq!(placement.margin, EDGE_MARGIN, "{position:?}");
        }
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Position::parse("top-left"), Position::TopLeft);
        assert_eq!(Position::parse("top-right"), Position::TopRight);
        assert_eq!(Position::parse("bottom-left"), Position::BottomLeft);
        assert_eq!(Position::parse("bottom-right"), Position::BottomRight);
    }

    #[test]
    fn test_parse_unrecognized_falls_back_to_bottom_right() {
        let fallback = Position::parse("invalid-value");
        assert_eq!(fallback, Position::BottomRight);
        assert_eq!(fallback.resolve(), Position::BottomRight.resolve());
    }
}
