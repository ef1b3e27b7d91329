use thiserror::Error;

/// Errors reported by the validating layout pipeline and the normalizer.
///
/// The low-level strip functions never return these: they follow IEEE-754
/// semantics and hand back NaN or infinite rectangles for bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Normalization was asked to rescale an empty weight list.
    #[error("cannot normalize an empty list of weights")]
    EmptyWeights,
    /// Weights sum to zero (or to a non-finite value), so no scale factor exists.
    #[error("weights sum to {total}, cannot scale them to the target area")]
    ZeroTotal { total: f64 },
    /// A weight is zero, negative, NaN or infinite.
    #[error("weight #{index} is {value}, expected a finite positive number")]
    InvalidWeight { index: usize, value: f64 },
    /// The target region has no usable area.
    #[error("degenerate region {dx}x{dy}, width and height must be finite and positive")]
    DegenerateRegion { dx: f64, dy: f64 },
}

/// Unrecognized label anchor location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    #[error(
        "unknown anchor location '{0}', expected 'center' or '<top|center|bottom> <left|center|right>'"
    )]
    UnknownLocation(String),
}
