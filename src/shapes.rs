// Shape geometry for anchor-based previews: plain formulas, no state.

use crate::types::Point;

/// Signed (width, height) from the anchor to the pointer.
pub fn rect_size(anchor: Point, pointer: Point) -> (i32, i32) {
    (pointer.x - anchor.x, pointer.y - anchor.y)
}

/// Both sides become `max(|w|, |h|)`, each keeping the sign of its own delta,
/// so the square grows from the anchor toward the pointer's quadrant.
pub fn square_size(anchor: Point, pointer: Point) -> (i32, i32) {
    let (w, h) = rect_size(anchor, pointer);
    let side = w.abs().max(h.abs());
    (side * w.signum(), side * h.signum())
}

pub fn circle_radius(anchor: Point, pointer: Point) -> f32 {
    let (w, h) = rect_size(anchor, pointer);
    ((w as f32).powi(2) + (h as f32).powi(2)).sqrt()
}
