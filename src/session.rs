//! The drawing session: surface, history, tool selection and the gesture
//! state machine (`Idle -> Gesturing -> Idle`) behind the entry points the UI
//! calls.

use crate::color::Color;
use crate::history::History;
use crate::raster::Stroke;
use crate::shapes;
use crate::surface::RasterSurface;
use crate::tool::{ToolKind, ToolSelection};
use crate::types::{Point, Snapshot};
use tracing::debug;

/// In-progress gesture. Lives from pointer-down to pointer-up.
#[derive(Debug)]
pub struct StrokeSession {
    pub tool: ToolKind,
    pub anchor: Point,
    pub last: Point,
    backup: Snapshot,
}

#[derive(Debug)]
enum Gesture {
    Idle,
    Gesturing(StrokeSession),
}

pub struct Sketchpad<S: RasterSurface> {
    surface: S,
    history: History,
    tools: ToolSelection,
    gesture: Gesture,
}

impl<S: RasterSurface> Sketchpad<S> {
    pub fn new(surface: S, history: History, tools: ToolSelection) -> Self {
        Self {
            surface,
            history,
            tools,
            gesture: Gesture::Idle,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolSelection {
        &self.tools
    }

    pub fn is_gesturing(&self) -> bool {
        matches!(self.gesture, Gesture::Gesturing(_))
    }

    pub fn active_session(&self) -> Option<&StrokeSession> {
        match &self.gesture {
            Gesture::Gesturing(session) => Some(session),
            Gesture::Idle => None,
        }
    }

    /* ---------- gesture entry points ---------- */

    /// Pointer-down: remember the anchor and back up the surface for previews.
    ///
    /// # Panics
    /// If a gesture is already in progress.
    pub fn on_gesture_start(&mut self, point: Point) {
        assert!(!self.is_gesturing(), "gesture started while another is active");
        let tool = self.tools.kind;
        self.gesture = Gesture::Gesturing(StrokeSession {
            tool,
            anchor: point,
            last: point,
            backup: self.surface.snapshot(),
        });
        debug!(tool = tool.label(), x = point.x, y = point.y, "gesture start");
    }

    /// Pointer-move: shapes restore the backup and redraw from the anchor,
    /// brush and eraser add a segment from the previous point.
    ///
    /// # Panics
    /// If no gesture is in progress.
    pub fn on_gesture_move(&mut self, point: Point) {
        let Gesture::Gesturing(session) = &mut self.gesture else {
            panic!("gesture move without an active gesture");
        };
        let style = self.tools.style_for(session.tool, self.surface.background());
        let stroke = match session.tool {
            ToolKind::Brush | ToolKind::Eraser => Stroke::Segment { from: session.last, to: point },
            ToolKind::Rectangle => Stroke::Rect {
                origin: session.anchor,
                size: shapes::rect_size(session.anchor, point),
            },
            ToolKind::Square => Stroke::Rect {
                origin: session.anchor,
                size: shapes::square_size(session.anchor, point),
            },
            ToolKind::Circle => Stroke::Circle {
                center: session.anchor,
                radius: shapes::circle_radius(session.anchor, point),
            },
        };
        if session.tool.is_shape() {
            self.surface.restore(&session.backup);
        }
        self.surface.render_stroke(&stroke, &style);
        session.last = point;
    }

    /// Pointer-up: the surface already holds the finished stroke; commit it.
    ///
    /// # Panics
    /// If no gesture is in progress.
    pub fn on_gesture_end(&mut self) {
        let Gesture::Gesturing(session) = std::mem::replace(&mut self.gesture, Gesture::Idle) else {
            panic!("gesture end without an active gesture");
        };
        self.history.commit(&self.surface);
        debug!(tool = session.tool.label(), "gesture end");
    }

    /// Abandon the current gesture and put back the pre-gesture pixels.
    /// Returns false when nothing was in progress.
    pub fn cancel_gesture(&mut self) -> bool {
        let Gesture::Gesturing(session) = std::mem::replace(&mut self.gesture, Gesture::Idle) else {
            return false;
        };
        self.surface.restore(&session.backup);
        debug!(tool = session.tool.label(), "gesture cancelled");
        true
    }

    /* ---------- tool selection ---------- */

    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tools.kind = kind;
        debug!(tool = kind.label(), "tool selected");
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
    }

    /// Width is at least one pixel.
    pub fn set_width(&mut self, width: u32) {
        self.tools.width = width.max(1);
    }

    /* ---------- history ---------- */

    pub fn undo(&mut self) -> bool {
        self.assert_idle("undo");
        self.history.undo(&mut self.surface)
    }

    pub fn redo(&mut self) -> bool {
        self.assert_idle("redo");
        self.history.redo(&mut self.surface)
    }

    pub fn clear_all(&mut self) {
        self.assert_idle("clear");
        self.history.reset(&mut self.surface);
    }

    fn assert_idle(&self, op: &str) {
        assert!(!self.is_gesturing(), "{op} during an active gesture");
    }
}
