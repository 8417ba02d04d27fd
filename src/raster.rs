// Software stroke rasterizer over a FrameBuffer.
// Every primitive clips per pixel, so shapes may extend past the buffer edges.

use crate::color::{self, Color};
use crate::types::{FrameBuffer, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u32,
    pub cap: LineCap,
}

/// One drawable stroke, already resolved to buffer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    /// Freehand piece from the previous pointer position to the current one.
    Segment { from: Point, to: Point },
    /// Outline from `origin` to `origin + size`; either side may be negative.
    Rect { origin: Point, size: (i32, i32) },
    Circle { center: Point, radius: f32 },
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Walk the Bresenham line from (x0,y0) to (x1,y1), both ends included.
fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        visit(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Thin 1-pixel line.
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    walk_line(x0, y0, x1, y1, |x, y| put_pixel(fb, x, y, color));
}

/// Paint the pen tip centered at (cx,cy): a disc for round caps, a box for square ones.
fn stamp(fb: &mut FrameBuffer, cx: i32, cy: i32, width: u32, cap: LineCap, color: u32) {
    if width <= 1 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let w = width as i32;
    let lo = -(w / 2);
    let hi = lo + w - 1;
    match cap {
        LineCap::Square => {
            for y in lo..=hi {
                for x in lo..=hi {
                    put_pixel(fb, cx + x, cy + y, color);
                }
            }
        }
        LineCap::Round => {
            let r = width as f32 / 2.0;
            let r2 = r * r;
            // even widths have no center pixel; measure from the pixel corner
            let off = if w % 2 == 0 { 0.5 } else { 0.0 };
            for y in lo..=hi {
                for x in lo..=hi {
                    let (fx, fy) = (x as f32 + off, y as f32 + off);
                    if fx * fx + fy * fy <= r2 {
                        put_pixel(fb, cx + x, cy + y, color);
                    }
                }
            }
        }
    }
}

fn stroke_segment(fb: &mut FrameBuffer, from: Point, to: Point, style: &StrokeStyle) {
    let px = color::pack(style.color);
    walk_line(from.x, from.y, to.x, to.y, |x, y| stamp(fb, x, y, style.width, style.cap, px));
}

fn stroke_rect(fb: &mut FrameBuffer, origin: Point, size: (i32, i32), style: &StrokeStyle) {
    let far = Point::new(origin.x + size.0, origin.y + size.1);
    let corners = [
        origin,
        Point::new(far.x, origin.y),
        far,
        Point::new(origin.x, far.y),
    ];
    for i in 0..corners.len() {
        stroke_segment(fb, corners[i], corners[(i + 1) % corners.len()], style);
    }
}

/// Midpoint circle; each of the eight mirrored points gets a pen stamp.
fn stroke_circle(fb: &mut FrameBuffer, center: Point, radius: f32, style: &StrokeStyle) {
    let px = color::pack(style.color);
    let r = radius.round() as i32;
    if r <= 0 {
        stamp(fb, center.x, center.y, style.width, style.cap, px);
        return;
    }
    let (mut x, mut y) = (r, 0);
    let mut err = 1 - r;
    while x >= y {
        for (dx, dy) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            stamp(fb, center.x + dx, center.y + dy, style.width, style.cap, px);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

pub fn render(fb: &mut FrameBuffer, stroke: &Stroke, style: &StrokeStyle) {
    match *stroke {
        Stroke::Segment { from, to } => stroke_segment(fb, from, to, style),
        Stroke::Rect { origin, size } => stroke_rect(fb, origin, size, style),
        Stroke::Circle { center, radius } => stroke_circle(fb, center, radius, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    const BG: u32 = 0x00FF_FFFF;
    const INK: u32 = 0x0000_0000;

    fn style(width: u32, cap: LineCap) -> StrokeStyle {
        StrokeStyle { color: BLACK, width, cap }
    }

    fn inked(fb: &FrameBuffer) -> usize {
        fb.pixels.iter().filter(|&&p| p == INK).count()
    }

    #[test]
    fn thin_segment_covers_both_endpoints() {
        let mut fb = FrameBuffer::filled(20, 20, BG);
        render(
            &mut fb,
            &Stroke::Segment { from: Point::new(2, 3), to: Point::new(12, 7) },
            &style(1, LineCap::Round),
        );
        assert_eq!(fb.get(2, 3), Some(INK));
        assert_eq!(fb.get(12, 7), Some(INK));
        assert_eq!(inked(&fb), 11);
    }

    #[test]
    fn square_cap_stamp_is_width_by_width() {
        let mut fb = FrameBuffer::filled(20, 20, BG);
        let p = Point::new(10, 10);
        render(&mut fb, &Stroke::Segment { from: p, to: p }, &style(4, LineCap::Square));
        assert_eq!(inked(&fb), 16);
    }

    #[test]
    fn round_cap_is_smaller_than_square_cap() {
        let p = Point::new(10, 10);
        let mut round = FrameBuffer::filled(20, 20, BG);
        let mut square = FrameBuffer::filled(20, 20, BG);
        render(&mut round, &Stroke::Segment { from: p, to: p }, &style(7, LineCap::Round));
        render(&mut square, &Stroke::Segment { from: p, to: p }, &style(7, LineCap::Square));
        assert!(inked(&round) < inked(&square));
        assert_eq!(round.get(10, 10), Some(INK));
        assert_eq!(round.get(7, 7), Some(BG));
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut fb = FrameBuffer::filled(80, 60, BG);
        render(
            &mut fb,
            &Stroke::Rect { origin: Point::new(10, 10), size: (40, 20) },
            &style(1, LineCap::Square),
        );
        for (x, y) in [(10, 10), (50, 10), (50, 30), (10, 30), (30, 10), (10, 20)] {
            assert_eq!(fb.get(x, y), Some(INK), "corner/edge ({x},{y})");
        }
        assert_eq!(fb.get(30, 20), Some(BG));
        assert_eq!(fb.get(51, 31), Some(BG));
    }

    #[test]
    fn negative_rect_grows_toward_the_pointer_quadrant() {
        let mut fb = FrameBuffer::filled(80, 60, BG);
        render(
            &mut fb,
            &Stroke::Rect { origin: Point::new(40, 40), size: (-20, -10) },
            &style(1, LineCap::Square),
        );
        assert_eq!(fb.get(20, 30), Some(INK));
        assert_eq!(fb.get(40, 40), Some(INK));
        assert_eq!(fb.get(45, 45), Some(BG));
    }

    #[test]
    fn circle_hits_the_cardinal_points() {
        let mut fb = FrameBuffer::filled(60, 60, BG);
        render(
            &mut fb,
            &Stroke::Circle { center: Point::new(30, 30), radius: 10.0 },
            &style(1, LineCap::Round),
        );
        for (x, y) in [(40, 30), (20, 30), (30, 40), (30, 20)] {
            assert_eq!(fb.get(x, y), Some(INK));
        }
        assert_eq!(fb.get(30, 30), Some(BG));
    }

    #[test]
    fn strokes_off_the_edge_are_clipped() {
        let mut fb = FrameBuffer::filled(10, 10, BG);
        render(
            &mut fb,
            &Stroke::Segment { from: Point::new(-30, -30), to: Point::new(40, 40) },
            &StrokeStyle { color: WHITE, width: 9, cap: LineCap::Square },
        );
        render(
            &mut fb,
            &Stroke::Circle { center: Point::new(5, 5), radius: 50.0 },
            &style(3, LineCap::Round),
        );
        assert_eq!(fb.pixels.len(), 100);
    }
}
