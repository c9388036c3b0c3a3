//! # Tokenizer Snapshot IO
//!
//! JSON save/load for trained tokenizers, so a vocabulary and merge table
//! can be reused without retraining.
//!
//! ```rust,no_run
//! use markpiece::{MarkTokenizer, vocab::io::load_tokenizer_json_path};
//!
//! fn example() -> markpiece::MpResult<MarkTokenizer<u32>> {
//!     load_tokenizer_json_path("tokenizer.json")
//! }
//! ```

mod json_snapshot;

pub use json_snapshot::*;
