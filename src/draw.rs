// Window + cursor overlay for the front-end.
// The window only ever shows a presentation copy: surface pixels plus the tool cursor.
// Nothing drawn here reaches the surface or the history.

use crate::error::Error;
use crate::keymap::Modifiers;
use crate::raster::{draw_line, put_pixel};
use crate::tool::ToolKind;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Pointer in buffer coordinates, or None while it is outside the window.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x as i32, y as i32))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    pub fn modifiers(&self) -> Modifiers {
        let down = |keys: &[Key]| keys.iter().any(|&k| self.window.is_key_down(k));
        Modifiers {
            command: down(&[Key::LeftCtrl, Key::RightCtrl, Key::LeftSuper, Key::RightSuper]),
            shift: down(&[Key::LeftShift, Key::RightShift]),
        }
    }

    /// Keys that went down since the last frame (no auto-repeat).
    pub fn pressed_keys(&self) -> Vec<Key> {
        self.window.get_keys_pressed(KeyRepeat::No)
    }
}

/* ---------- Cursor overlay ---------- */

/// Draw a small crosshair centered at (cx,cy), with a gap at the center.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}

/// Outline of the eraser tip so the user can see what it will cover.
pub fn draw_box_outline(fb: &mut FrameBuffer, cx: i32, cy: i32, width: u32, color: u32) {
    let lo = -(width as i32 / 2);
    let hi = lo + width as i32 - 1;
    let (x0, y0, x1, y1) = (cx + lo, cy + lo, cx + hi, cy + hi);
    draw_line(fb, x0, y0, x1, y0, color);
    draw_line(fb, x1, y0, x1, y1, color);
    draw_line(fb, x1, y1, x0, y1, color);
    draw_line(fb, x0, y1, x0, y0, color);
}

/// Copy `surface` into `screen` and draw the cursor for `tool` on top.
pub fn compose(
    screen: &mut FrameBuffer,
    surface: &FrameBuffer,
    pointer: Option<Point>,
    tool: ToolKind,
    eraser_width: u32,
    cursor_color: u32,
) {
    screen.pixels.copy_from_slice(&surface.pixels);
    let Some(p) = pointer else {
        return;
    };
    match tool {
        ToolKind::Eraser => draw_box_outline(screen, p.x, p.y, eraser_width, cursor_color),
        ToolKind::Rectangle | ToolKind::Square | ToolKind::Circle => {
            draw_crosshair(screen, p.x, p.y, 8, cursor_color)
        }
        ToolKind::Brush => {}
    }
}
