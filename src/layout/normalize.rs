use crate::error::LayoutError;

/// Rescale `sizes` so they sum to `dx * dy`, keeping length and order.
///
/// An empty list or a zero / non-finite total has no meaningful scale factor
/// and is reported as an error instead of yielding NaN or infinite sizes.
pub fn normalize_sizes(sizes: &[f64], dx: f64, dy: f64) -> Result<Vec<f64>, LayoutError> {
    if sizes.is_empty() {
        return Err(LayoutError::EmptyWeights);
    }

    let total_size: f64 = sizes.iter().sum();
    if total_size == 0.0 || !total_size.is_finite() {
        return Err(LayoutError::ZeroTotal { total: total_size });
    }

    let total_area = dx * dy;
    Ok(sizes
        .iter()
        .map(|&size| size * total_area / total_size)
        .collect())
}
