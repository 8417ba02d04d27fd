use crate::color::{self, Color};
use crate::raster::{LineCap, StrokeStyle};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 5;
pub const DEFAULT_ERASER_WIDTH: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Brush,
    Eraser,
    Rectangle,
    Square,
    Circle,
}

impl ToolKind {
    /// Shapes redraw from a fixed anchor over the pre-gesture backup; brush and
    /// eraser accumulate segments.
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Rectangle | Self::Square | Self::Circle)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Brush => "brush",
            Self::Eraser => "eraser",
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
        }
    }

    fn cap(self) -> LineCap {
        match self {
            Self::Brush | Self::Circle => LineCap::Round,
            Self::Eraser | Self::Rectangle | Self::Square => LineCap::Square,
        }
    }
}

/// Current tool, color and width. Only the UI changes it; rendering reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSelection {
    pub kind: ToolKind,
    pub color: Color,
    pub width: u32,
    pub eraser_width: u32,
}

impl Default for ToolSelection {
    fn default() -> Self {
        Self {
            kind: ToolKind::Brush,
            color: color::BLACK,
            width: DEFAULT_WIDTH,
            eraser_width: DEFAULT_ERASER_WIDTH,
        }
    }
}

impl ToolSelection {
    /// Style for the given tool. The eraser ignores the chosen color and width.
    pub fn style_for(&self, kind: ToolKind, background: Color) -> StrokeStyle {
        match kind {
            ToolKind::Eraser => StrokeStyle {
                color: background,
                width: self.eraser_width,
                cap: kind.cap(),
            },
            _ => StrokeStyle {
                color: self.color,
                width: self.width,
                cap: kind.cap(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::WHITE;
    use image::Rgb;

    #[test]
    fn eraser_overrides_color_and_width() {
        let tools = ToolSelection { color: Rgb([200, 10, 10]), width: 3, ..Default::default() };
        let style = tools.style_for(ToolKind::Eraser, WHITE);
        assert_eq!(style.color, WHITE);
        assert_eq!(style.width, DEFAULT_ERASER_WIDTH);
        assert_eq!(style.cap, LineCap::Square);

        let brush = tools.style_for(ToolKind::Brush, WHITE);
        assert_eq!(brush.color, Rgb([200, 10, 10]));
        assert_eq!(brush.width, 3);
        assert_eq!(brush.cap, LineCap::Round);
    }

    #[test]
    fn only_shapes_preview_from_an_anchor() {
        assert!(ToolKind::Rectangle.is_shape());
        assert!(ToolKind::Circle.is_shape());
        assert!(!ToolKind::Brush.is_shape());
        assert!(!ToolKind::Eraser.is_shape());
    }
}
