//! Per-frame input handling: turns polled pointer state and shortcut commands
//! into `Sketchpad` calls. Kept free of the window so it can be driven in tests.

use crate::color::Color;
use crate::config::Config;
use crate::error::Error;
use crate::history::History;
use crate::keymap::Command;
use crate::session::Sketchpad;
use crate::surface::RasterSurface;
use crate::types::Point;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App<S: RasterSurface> {
    pub pad: Sketchpad<S>,
    palette: Vec<Color>,
    palette_index: usize,
    min_width: u32,
    max_width: u32,
    was_down: bool,
}

impl<S: RasterSurface> App<S> {
    pub fn new(surface: S, config: &Config) -> Result<Self, Error> {
        let tools = config.tool_selection()?;
        let palette = config.palette_colors()?;
        // Off-palette start color: sit on the last slot so the first step lands on palette[0].
        let palette_index = palette
            .iter()
            .position(|&c| c == tools.color)
            .unwrap_or(palette.len().saturating_sub(1));
        Ok(Self {
            pad: Sketchpad::new(surface, History::with_limit(config.history_limit), tools),
            palette,
            palette_index,
            min_width: config.min_line_width,
            max_width: config.max_line_width,
            was_down: false,
        })
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        match command {
            Command::Escape => {
                if !self.pad.cancel_gesture() {
                    return Flow::Quit;
                }
            }
            Command::Undo | Command::Redo | Command::ClearAll if self.pad.is_gesturing() => {
                debug!(?command, "ignored while drawing");
            }
            Command::Undo => {
                self.pad.undo();
            }
            Command::Redo => {
                self.pad.redo();
            }
            Command::ClearAll => self.pad.clear_all(),
            Command::SelectTool(kind) => self.pad.set_tool(kind),
            Command::NarrowerStroke => self.step_width(-1),
            Command::WiderStroke => self.step_width(1),
            Command::NextColor => {
                if !self.palette.is_empty() {
                    self.palette_index = (self.palette_index + 1) % self.palette.len();
                    self.pad.set_color(self.palette[self.palette_index]);
                }
            }
        }
        Flow::Continue
    }

    fn step_width(&mut self, delta: i32) {
        let width = self.pad.tools().width.saturating_add_signed(delta);
        self.pad.set_width(width.clamp(self.min_width, self.max_width));
    }

    /// Drive the gesture state machine from this frame's pointer state.
    /// A gesture starts only on the press edge inside the window; releasing the
    /// button or leaving the window ends it.
    pub fn handle_pointer(&mut self, pointer: Option<Point>, down: bool) {
        let pressed = down && !self.was_down;
        self.was_down = down;

        if !self.pad.is_gesturing() {
            if let (true, Some(p)) = (pressed, pointer) {
                self.pad.on_gesture_start(p);
            }
            return;
        }

        match (down, pointer) {
            (true, Some(p)) => {
                if self.pad.active_session().map(|s| s.last) != Some(p) {
                    self.pad.on_gesture_move(p);
                }
            }
            (true, None) => {
                debug!("pointer left the window, ending gesture");
                self.pad.on_gesture_end();
            }
            (false, _) => self.pad.on_gesture_end(),
        }
    }
}
