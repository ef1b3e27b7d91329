//! Squarified treemap layout (Bruls, Huizing, van Wijk, "Squarified Treemaps").
//!
//! All functions here take sizes already normalized to the region they fill
//! (`sum(sizes) == region.dx * region.dy`). Nothing is validated: degenerate
//! regions and non-positive sizes produce NaN, infinite or negative-area
//! rectangles following IEEE-754 division, never a panic. Use
//! [`compute_layout`](super::compute_layout) for a validating entry point.

use super::pad::pad_rectangle;
use super::{Rect, StripMode};

/// Compute treemap rectangles for `sizes` inside `region`.
///
/// Sizes should be positive, sorted in descending order and normalized so
/// that `region.dx * region.dy == sum(sizes)`. The returned rectangles are in
/// input order.
pub fn squarify(sizes: &[f64], region: Rect) -> Vec<Rect> {
    let mut result = Vec::with_capacity(sizes.len());
    let mut remaining = sizes;
    let mut region = region;

    while !remaining.is_empty() {
        let split = split_point(remaining, &region);
        let (current, rest) = remaining.split_at(split);

        tracing::trace!(
            "Strip of {} ({:?}) in {:.3}x{:.3} at ({:.3}, {:.3}), {} left",
            current.len(),
            region.strip_mode(),
            region.dx,
            region.dy,
            region.x,
            region.y,
            rest.len()
        );

        result.extend(layout(current, &region));
        region = leftover(current, &region);
        remaining = rest;
    }

    result
}

/// [`squarify`] followed by [`pad_rectangle`] on every output rectangle.
pub fn padded_squarify(sizes: &[f64], region: Rect) -> Vec<Rect> {
    let mut rects = squarify(sizes, region);
    for rect in &mut rects {
        pad_rectangle(rect);
    }
    rects
}

/// Length of the prefix of `sizes` that forms the next strip in `region`.
///
/// Starting from one element, the strip keeps growing while adding the next
/// size does not make its worst aspect ratio strictly worse. Both candidates
/// are measured against the same, unshrunk region.
pub fn split_point(sizes: &[f64], region: &Rect) -> usize {
    let mut i = 1;
    while i < sizes.len() && worst_ratio(&sizes[..i], region) >= worst_ratio(&sizes[..=i], region) {
        i += 1;
    }
    i.min(sizes.len())
}

/// Lay `sizes` out as a single strip, picking row or column mode from the
/// region's shape.
pub fn layout(sizes: &[f64], region: &Rect) -> Vec<Rect> {
    match StripMode::for_region(region) {
        StripMode::Row => layout_row(sizes, region),
        StripMode::Column => layout_col(sizes, region),
    }
}

/// Strip spanning the full height: shared width, heights stacked downward.
pub fn layout_row(sizes: &[f64], region: &Rect) -> Vec<Rect> {
    let covered_area: f64 = sizes.iter().sum();
    let width = covered_area / region.dy;
    let mut y = region.y;
    sizes
        .iter()
        .map(|&size| {
            let rect = Rect::new(region.x, y, width, size / width);
            y += size / width;
            rect
        })
        .collect()
}

/// Strip spanning the full width: shared height, widths stacked rightward.
pub fn layout_col(sizes: &[f64], region: &Rect) -> Vec<Rect> {
    let covered_area: f64 = sizes.iter().sum();
    let height = covered_area / region.dx;
    let mut x = region.x;
    sizes
        .iter()
        .map(|&size| {
            let rect = Rect::new(x, region.y, size / height, height);
            x += size / height;
            rect
        })
        .collect()
}

/// Region still uncovered after `sizes` were laid out as a strip in `region`.
pub fn leftover(sizes: &[f64], region: &Rect) -> Rect {
    match StripMode::for_region(region) {
        StripMode::Row => leftover_row(sizes, region),
        StripMode::Column => leftover_col(sizes, region),
    }
}

/// Leftover to the right of a row strip.
pub fn leftover_row(sizes: &[f64], region: &Rect) -> Rect {
    let covered_area: f64 = sizes.iter().sum();
    let width = covered_area / region.dy;
    Rect::new(region.x + width, region.y, region.dx - width, region.dy)
}

/// Leftover below a column strip.
pub fn leftover_col(sizes: &[f64], region: &Rect) -> Rect {
    let covered_area: f64 = sizes.iter().sum();
    let height = covered_area / region.dx;
    Rect::new(region.x, region.y + height, region.dx, region.dy - height)
}

/// Worst (largest) aspect ratio among the rectangles of `sizes` laid out as
/// one strip in `region`. Returns 0.0 for an empty strip.
pub fn worst_ratio(sizes: &[f64], region: &Rect) -> f64 {
    // First-wins maximum: a NaN ratio never displaces an earlier value, and a
    // leading NaN sticks.
    let first_wins_max = |acc: f64, r: f64| if r > acc { r } else { acc };

    let mut ratios = layout(sizes, region).into_iter().map(|rect| {
        let wide = rect.dx / rect.dy;
        first_wins_max(wide, rect.dy / rect.dx)
    });

    match ratios.next() {
        Some(first) => ratios.fold(first, first_wins_max),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn single_item_fills_region_without_axis_swap() {
        let region = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let rects = squarify(&[1920.0 * 1080.0], region);
        assert_eq!(rects.len(), 1);
        let r = rects[0];
        assert!(close(r.dx, 1920.0));
        assert!(close(r.dy, 1080.0));
        assert_eq!((r.x, r.y), (0.0, 0.0));
    }

    #[test]
    fn empty_input_gives_no_rects() {
        assert!(squarify(&[], Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
        assert!(padded_squarify(&[], Rect::new(0.0, 0.0, 10.0, 10.0)).is_empty());
    }

    #[test]
    fn layout_preserves_area_for_simple_case() {
        let areas = [400.0, 300.0, 200.0, 100.0];
        let rects = squarify(&areas, Rect::new(0.0, 0.0, 50.0, 20.0));
        let total_in: f64 = areas.iter().sum();
        let total_out: f64 = rects.iter().map(Rect::area).sum();
        assert!((total_in - total_out).abs() < 1e-6);
        for (rect, area) in rects.iter().zip(areas) {
            assert!(close(rect.area(), area));
        }
    }

    #[test]
    fn row_mode_stacks_downward() {
        let region = Rect::new(2.0, 3.0, 10.0, 5.0);
        let rects = layout(&[10.0, 15.0], &region);
        assert_eq!(rects[0], Rect::new(2.0, 3.0, 5.0, 2.0));
        assert_eq!(rects[1], Rect::new(2.0, 5.0, 5.0, 3.0));
        assert_eq!(leftover(&[10.0, 15.0], &region), Rect::new(7.0, 3.0, 5.0, 5.0));
    }

    #[test]
    fn column_mode_stacks_rightward() {
        let region = Rect::new(0.0, 0.0, 4.0, 10.0);
        let rects = layout(&[4.0, 12.0], &region);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 1.0, 4.0));
        assert_eq!(rects[1], Rect::new(1.0, 0.0, 3.0, 4.0));
        assert_eq!(leftover(&[4.0, 12.0], &region), Rect::new(0.0, 4.0, 4.0, 6.0));
    }

    #[test]
    fn worst_ratio_of_square_strip_is_one() {
        let region = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(worst_ratio(&[16.0], &region), 1.0);
        assert_eq!(worst_ratio(&[8.0], &region), 2.0);
        assert_eq!(worst_ratio(&[], &region), 0.0);
    }

    #[test]
    fn split_stops_at_first_worsening_step() {
        // 6x4 region, sizes from the paper's running example.
        let region = Rect::new(0.0, 0.0, 6.0, 4.0);
        let sizes = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        assert!(worst_ratio(&sizes[..2], &region) <= worst_ratio(&sizes[..1], &region));
        assert!(worst_ratio(&sizes[..3], &region) > worst_ratio(&sizes[..2], &region));
        assert_eq!(split_point(&sizes, &region), 2);
    }

    #[test]
    fn split_extends_through_ties() {
        // Adding the second half leaves the worst ratio unchanged.
        let region = Rect::new(0.0, 0.0, 2.0, 2.0);
        let sizes = [2.0, 2.0];
        assert_eq!(worst_ratio(&sizes[..1], &region), 2.0);
        assert_eq!(worst_ratio(&sizes, &region), 2.0);
        assert_eq!(split_point(&sizes, &region), 2);
    }

    #[test]
    fn degenerate_region_does_not_panic() {
        let rects = squarify(&[5.0, 3.0, 1.0], Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(rects.len(), 3);
        assert!(rects.iter().all(|r| r.area().is_nan() || r.area() == 0.0));
    }

    #[test]
    fn padded_squarify_pads_every_rect() {
        let region = Rect::new(0.0, 0.0, 100.0, 50.0);
        let sizes = [2500.0, 1500.0, 1000.0];
        let plain = squarify(&sizes, region);
        let padded = padded_squarify(&sizes, region);
        assert_eq!(plain.len(), padded.len());
        for (p, q) in plain.iter().zip(&padded) {
            assert!(close(q.x, p.x + 1.0));
            assert!(close(q.dx, p.dx - 2.0));
            assert!(close(q.y, p.y + 1.0));
            assert!(close(q.dy, p.dy - 2.0));
        }
    }
}
