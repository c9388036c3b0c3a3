//! # Text Decoder

use crate::{
    errors::{MarkpieceError, MpResult},
    segmentation::boundary::unmark_boundaries,
    types::TokenType,
    vocab::VocabStore,
};

/// Read-only decoding view over a trained tokenizer.
#[derive(Debug, Clone, Copy)]
pub struct TextDecoder<'a, T: TokenType> {
    vocab: &'a VocabStore<T>,
}

impl<'a, T: TokenType> TextDecoder<'a, T> {
    /// Build a decoder over a vocabulary store.
    pub(crate) fn new(vocab: &'a VocabStore<T>) -> Self {
        Self { vocab }
    }

    /// Decode token ids back into text.
    ///
    /// Concatenates each id's vocabulary text in order, then rewrites every
    /// boundary marker back to a literal space.
    ///
    /// ## Arguments
    /// * `tokens` - The id sequence to decode.
    ///
    /// ## Returns
    /// The decoded text, or [`MarkpieceError::UnknownTokenId`] for any id
    /// absent from the vocabulary.
    pub fn try_decode(
        &self,
        tokens: &[T],
    ) -> MpResult<String> {
        if tokens.is_empty() {
            return Ok(String::new());
        }

        let mut text = String::with_capacity(tokens.len() * 2);
        for &token in tokens {
            text.push_str(self.vocab.lookup_text(token).ok_or(
                MarkpieceError::UnknownTokenId {
                    token: token.to_u64().unwrap_or(u64::MAX),
                },
            )?);
        }

        Ok(unmark_boundaries(&text))
    }
}
