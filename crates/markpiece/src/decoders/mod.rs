//! # Text Decoding

mod text_decoder;

pub use text_decoder::TextDecoder;
