use super::Rect;

/// Padding applied to each side of a dimension larger than [`PAD_THRESHOLD`].
pub const PAD: f64 = 1.0;
/// Dimensions at or below this are left untouched.
pub const PAD_THRESHOLD: f64 = 2.0 * PAD;

/// Shrink `rect` by one unit on each side, independently per axis.
pub fn pad_rectangle(rect: &mut Rect) {
    if rect.dx > PAD_THRESHOLD {
        rect.x += PAD;
        rect.dx -= 2.0 * PAD;
    }
    if rect.dy > PAD_THRESHOLD {
        rect.y += PAD;
        rect.dy -= 2.0 * PAD;
    }
}
