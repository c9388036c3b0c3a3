//! # Vocabulary Management
//!
//! * [`VocabStore`] - the bijective ``{ T <-> text }`` token store.
//! * [`SpecialTokens`] - the registry of whole-string special tokens.
//! * [`io`] - snapshot save/load for trained tokenizers.

pub mod io;
mod specials;
mod validators;
mod vocab_store;

pub use specials::SpecialTokens;
pub use validators::{BASE_ALPHABET_SIZE, try_vocab_size};
pub use vocab_store::VocabStore;
