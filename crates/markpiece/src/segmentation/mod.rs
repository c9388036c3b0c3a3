//! # Text Segmentation
//!
//! * [`boundary`] - the boundary-marker space substitution.
//! * [`TextSegmentor`] - literal special-token segmentation.

pub mod boundary;
mod text_segmentor;

pub use boundary::{BOUNDARY_MARKER, mark_boundaries, unmark_boundaries};
pub use text_segmentor::{SpanRef, TextSegmentor};
