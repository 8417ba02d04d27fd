//! The raster surface: a fixed-size pixel buffer that history and gestures draw
//! into. `RasterSurface` is the seam; `Canvas` is the software backend.

use crate::color::{self, Color};
use crate::raster::{self, Stroke, StrokeStyle};
use crate::types::{FrameBuffer, Snapshot};

/// Capabilities the history engine and stroke sessions need from a backend.
pub trait RasterSurface {
    fn dimensions(&self) -> (usize, usize);

    /// Full copy of the current pixels. Never fails.
    fn snapshot(&self) -> Snapshot;

    /// Overwrite every pixel with `snapshot`.
    ///
    /// # Panics
    /// If `snapshot` was taken from a surface with different dimensions.
    fn restore(&mut self, snapshot: &Snapshot);

    /// Fill the whole surface with the background color.
    fn clear(&mut self);

    fn background(&self) -> Color;

    fn render_stroke(&mut self, stroke: &Stroke, style: &StrokeStyle);
}

#[derive(Clone, Debug)]
pub struct Canvas {
    fb: FrameBuffer,
    background: Color,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            fb: FrameBuffer::filled(width, height, color::pack(background)),
            background,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.fb.get(x, y).map(color::unpack)
    }

    /// True when every pixel equals the background color.
    pub fn is_blank(&self) -> bool {
        let bg = color::pack(self.background);
        self.fb.pixels.iter().all(|&p| p == bg)
    }
}

impl RasterSurface for Canvas {
    fn dimensions(&self) -> (usize, usize) {
        (self.fb.width, self.fb.height)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.fb)
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        assert_eq!(
            snapshot.dimensions(),
            self.dimensions(),
            "snapshot dimensions do not match the surface"
        );
        self.fb.pixels.copy_from_slice(snapshot.pixels());
    }

    fn clear(&mut self) {
        self.fb.pixels.fill(color::pack(self.background));
    }

    fn background(&self) -> Color {
        self.background
    }

    fn render_stroke(&mut self, stroke: &Stroke, style: &StrokeStyle) {
        raster::render(&mut self.fb, stroke, style);
    }
}
