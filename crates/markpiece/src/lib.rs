//! # `markpiece` Boundary-Marker BPE Tokenizer
//!
//! A byte-pair-encoding subword tokenizer that learns a vocabulary and an
//! ordered merge table from a training corpus, then reversibly maps text to
//! token ids and back.
//!
//! Word boundaries are preserved through merging by rewriting every
//! non-leading space as the reserved marker character
//! [`BOUNDARY_MARKER`] (`'Ġ'`) before character-level encoding.
//!
//! See:
//! * [`tokenizer::MarkTokenizer`] to train, encode, and decode.
//! * [`training`] for the merge-learning primitives.
//! * [`encoders`] / [`decoders`] for the read-only text transforms.
//! * [`vocab`] for the vocabulary store, special tokens, and snapshot io.
//!
//! ```rust
//! use markpiece::{MarkTokenizer, TrainOptions};
//!
//! # fn main() -> markpiece::MpResult<()> {
//! let mut tokenizer: MarkTokenizer<u32> = MarkTokenizer::new();
//! tokenizer.train(
//!     "the quick brown fox jumps over the lazy dog",
//!     &TrainOptions::new(300),
//! )?;
//!
//! let tokens = tokenizer.encode("the lazy dog", &[] as &[&str])?;
//! assert_eq!(tokenizer.decode(&tokens)?, "the lazy dog");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! Enabled by default; swaps all HashMap/HashSet implementations for
//! ``ahash``. This is done by the ``types::MpHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

pub use errors::{MarkpieceError, MpResult};
pub use segmentation::BOUNDARY_MARKER;
pub use tokenizer::MarkTokenizer;
pub use training::{TrainOptions, apply_merges, find_most_frequent_pair, replace_pair};
pub use types::{Pair, TokenType};
