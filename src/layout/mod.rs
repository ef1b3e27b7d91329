pub mod normalize;
pub mod pad;
pub mod strip;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

pub use self::normalize::normalize_sizes;
pub use self::pad::pad_rectangle;
pub use self::strip::{padded_squarify, squarify};

/// An axis-aligned rectangle: origin (`x`, `y`) plus width `dx` and height `dy`.
///
/// Used both for the rectangles a layout produces and for the region a layout
/// must fill. The y axis grows downward (strips stack with increasing y).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    pub fn area(&self) -> f64 {
        self.dx * self.dy
    }

    /// `max(dx/dy, dy/dx)`: 1.0 for a square, larger the more elongated.
    pub fn aspect_ratio(&self) -> f64 {
        (self.dx / self.dy).max(self.dy / self.dx)
    }

    /// Midpoint of the rectangle, used to place centered labels.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.dx / 2.0, self.y + self.dy / 2.0)
    }

    /// Copy of this rectangle with the one-unit border removed (see [`pad_rectangle`]).
    pub fn padded(mut self) -> Self {
        pad_rectangle(&mut self);
        self
    }

    /// Strip orientation used when this rectangle is the region being filled.
    pub fn strip_mode(&self) -> StripMode {
        StripMode::for_region(self)
    }
}

/// How a strip fills its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMode {
    /// Region is at least as wide as tall: strip spans the full height and
    /// its rectangles stack top to bottom.
    Row,
    /// Region is taller than wide: strip spans the full width and its
    /// rectangles stack left to right.
    Column,
}

impl StripMode {
    pub fn for_region(region: &Rect) -> Self {
        if region.dx >= region.dy {
            StripMode::Row
        } else {
            StripMode::Column
        }
    }
}

/// Configuration for the layout pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Shrink every rectangle by one unit per side to leave a visible gap
    pub pad: bool,
    /// Rescale the weights so they sum to the region area
    pub normalize: bool,
    /// Reject non-positive / non-finite weights and degenerate regions up front
    pub validate: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pad: false,
            normalize: true,
            validate: true,
        }
    }
}

/// Lay raw weights out over `region`: validate, normalize, squarify and
/// optionally pad, according to `config`.
///
/// Weights should be sorted in descending order for good aspect ratios; the
/// pipeline never reorders them, output order equals input order.
pub fn compute_layout(
    weights: &[f64],
    region: Rect,
    config: &LayoutConfig,
) -> Result<Vec<Rect>, LayoutError> {
    if config.validate {
        validate(weights, &region)?;
    }

    if weights.is_empty() {
        return Ok(Vec::new());
    }

    if weights.windows(2).any(|w| w[0] < w[1]) {
        tracing::warn!(
            "Weights are not sorted in descending order, aspect ratios may be poor ({} weights)",
            weights.len()
        );
    }

    let sizes = if config.normalize {
        normalize_sizes(weights, region.dx, region.dy)?
    } else {
        weights.to_vec()
    };

    let rects = if config.pad {
        padded_squarify(&sizes, region)
    } else {
        squarify(&sizes, region)
    };

    tracing::debug!(
        "Laid out {} weights in {:.1}x{:.1} region at ({:.1}, {:.1}), pad={}",
        rects.len(),
        region.dx,
        region.dy,
        region.x,
        region.y,
        config.pad
    );

    Ok(rects)
}

/// Fail fast on input the squarify heuristic cannot handle meaningfully.
pub fn validate(weights: &[f64], region: &Rect) -> Result<(), LayoutError> {
    let usable = |v: f64| v.is_finite() && v > 0.0;

    if !usable(region.dx) || !usable(region.dy) || !region.x.is_finite() || !region.y.is_finite()
    {
        return Err(LayoutError::DegenerateRegion {
            dx: region.dx,
            dy: region.dy,
        });
    }

    match weights.iter().position(|&w| !usable(w)) {
        Some(index) => Err(LayoutError::InvalidWeight {
            index,
            value: weights[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_mode_prefers_row_for_squares() {
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 10.0).strip_mode(), StripMode::Row);
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 4.0).strip_mode(), StripMode::Row);
        assert_eq!(Rect::new(0.0, 0.0, 4.0, 10.0).strip_mode(), StripMode::Column);
    }

    #[test]
    fn aspect_ratio_is_symmetric() {
        assert_eq!(Rect::new(0.0, 0.0, 2.0, 8.0).aspect_ratio(), 4.0);
        assert_eq!(Rect::new(0.0, 0.0, 8.0, 2.0).aspect_ratio(), 4.0);
        assert_eq!(Rect::new(0.0, 0.0, 3.0, 3.0).aspect_ratio(), 1.0);
    }

    #[test]
    fn center_is_the_midpoint() {
        assert_eq!(Rect::new(10.0, 20.0, 100.0, 50.0).center(), (60.0, 45.0));
        assert_eq!(Rect::new(-4.0, 0.0, 4.0, 3.0).center(), (-2.0, 1.5));
    }

    #[test]
    fn compute_layout_normalizes_raw_weights() {
        let region = Rect::new(0.0, 0.0, 60.0, 40.0);
        let rects = compute_layout(&[6.0, 3.0, 2.0, 1.0], region, &LayoutConfig::default()).unwrap();
        assert_eq!(rects.len(), 4);
        let total: f64 = rects.iter().map(Rect::area).sum();
        assert!((total - region.area()).abs() < 1e-9);
        assert!((rects[0].area() - region.area() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn compute_layout_skips_normalization_when_disabled() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        let config = LayoutConfig {
            normalize: false,
            ..Default::default()
        };
        let rects = compute_layout(&[50.0, 30.0, 20.0], region, &config).unwrap();
        let areas: Vec<f64> = rects.iter().map(Rect::area).collect();
        for (area, expected) in areas.iter().zip([50.0, 30.0, 20.0]) {
            assert!((area - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn compute_layout_pads_when_requested() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let config = LayoutConfig {
            pad: true,
            ..Default::default()
        };
        let plain = compute_layout(&[1.0], region, &LayoutConfig::default()).unwrap();
        let padded = compute_layout(&[1.0], region, &config).unwrap();
        assert_eq!(plain[0], region);
        assert_eq!(padded[0], Rect::new(1.0, 1.0, 98.0, 98.0));
    }

    #[test]
    fn compute_layout_empty_weights_is_empty() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(compute_layout(&[], region, &LayoutConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn validation_rejects_bad_weights() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        let config = LayoutConfig::default();
        assert_eq!(
            compute_layout(&[3.0, 0.0, 1.0], region, &config),
            Err(LayoutError::InvalidWeight {
                index: 1,
                value: 0.0
            })
        );
        assert_eq!(
            compute_layout(&[3.0, -2.0], region, &config),
            Err(LayoutError::InvalidWeight {
                index: 1,
                value: -2.0
            })
        );
        assert!(matches!(
            compute_layout(&[f64::NAN], region, &config),
            Err(LayoutError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn validation_rejects_degenerate_region() {
        let config = LayoutConfig::default();
        assert_eq!(
            compute_layout(&[1.0], Rect::new(0.0, 0.0, 0.0, 5.0), &config),
            Err(LayoutError::DegenerateRegion { dx: 0.0, dy: 5.0 })
        );
    }

    #[test]
    fn permissive_mode_keeps_negative_areas() {
        let region = Rect::new(0.0, 0.0, 10.0, 10.0);
        let config = LayoutConfig {
            normalize: false,
            validate: false,
            ..Default::default()
        };
        let rects = compute_layout(&[150.0, -50.0], region, &config).unwrap();
        assert_eq!(rects.len(), 2);
        assert!(rects[1].area() < 0.0);
    }
}
