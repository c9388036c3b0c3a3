//! # Text Encoding

mod text_encoder;

pub use text_encoder::TextEncoder;
