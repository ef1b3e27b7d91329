// Public library interface for squarify-rs
// The `squarify` binary is a thin CLI over these modules

pub mod error;
pub mod layout;
pub mod render;

pub use error::{AnchorError, LayoutError};
pub use layout::{compute_layout, normalize_sizes, padded_squarify, squarify, LayoutConfig, Rect};
