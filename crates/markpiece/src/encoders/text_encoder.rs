//! # Text Encoder

use crate::{
    errors::{MarkpieceError, MpResult},
    segmentation::{SpanRef, TextSegmentor, boundary::mark_boundaries},
    training::apply_merges,
    types::{MpHashSet, PairTokenMap, TokenType},
    vocab::{SpecialTokens, VocabStore},
};

/// Read-only encoding view over a trained tokenizer.
///
/// Borrows the frozen vocabulary, merge table, and special-token registry;
/// encoding never mutates them, so any number of encoders may be in flight
/// at once.
#[derive(Debug, Clone, Copy)]
pub struct TextEncoder<'a, T: TokenType> {
    vocab: &'a VocabStore<T>,
    merges: &'a PairTokenMap<T>,
    specials: &'a SpecialTokens,
}

impl<'a, T: TokenType> TextEncoder<'a, T> {
    /// Build an encoder over tokenizer parts.
    pub(crate) fn new(
        vocab: &'a VocabStore<T>,
        merges: &'a PairTokenMap<T>,
        specials: &'a SpecialTokens,
    ) -> Self {
        Self {
            vocab,
            merges,
            specials,
        }
    }

    /// Encode text into token ids.
    ///
    /// The text is split around literal `allowed_specials` matches; each
    /// special segment contributes its single reserved id, and each ordinary
    /// segment goes through boundary marking, character mapping, and one
    /// greedy merge sweep.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `allowed_specials` - Special tokens permitted to appear in `text`.
    ///
    /// ## Returns
    /// The encoded id sequence, or:
    /// * [`MarkpieceError::NotTrained`] when the vocabulary is empty,
    /// * [`MarkpieceError::UnknownSpecialToken`] when an allowed special is
    ///   not in the vocabulary,
    /// * [`MarkpieceError::DisallowedSpecialToken`] when a registered special
    ///   occurs outside the allowed set,
    /// * [`MarkpieceError::UnknownCharacter`] when an ordinary-segment
    ///   character has no vocabulary entry.
    pub fn try_encode<S: AsRef<str>>(
        &self,
        text: &str,
        allowed_specials: &[S],
    ) -> MpResult<Vec<T>> {
        if self.vocab.is_empty() {
            return Err(MarkpieceError::NotTrained);
        }
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let allowed: MpHashSet<&str> =
            allowed_specials.iter().map(AsRef::as_ref).collect();
        for &special in &allowed {
            if !self.vocab.contains_text(special) {
                return Err(MarkpieceError::UnknownSpecialToken(special.to_string()));
            }
        }

        let segmentor = TextSegmentor::from_specials(&allowed)?;

        let mut tokens = Vec::with_capacity(text.len() / 2);
        for span in segmentor.split_spans(text) {
            match span {
                SpanRef::Special(special) => {
                    // Membership was validated above.
                    tokens.push(
                        self.vocab
                            .lookup_token(special)
                            .expect("allowed specials are vocabulary entries"),
                    );
                }
                SpanRef::Ordinary {
                    text: segment,
                    at_text_start,
                } => {
                    if let Some(word) = self.specials.find_disallowed(segment, &allowed) {
                        return Err(MarkpieceError::DisallowedSpecialToken(word.to_string()));
                    }
                    self.encode_append_segment(segment, at_text_start, &mut tokens)?;
                }
            }
        }

        Ok(tokens)
    }

    /// Encode one ordinary segment, appending to a target buffer.
    fn encode_append_segment(
        &self,
        segment: &str,
        at_text_start: bool,
        tokens: &mut Vec<T>,
    ) -> MpResult<()> {
        let processed = mark_boundaries(segment, at_text_start);

        let mut ids = Vec::with_capacity(processed.len());
        for ch in processed.chars() {
            ids.push(
                self.vocab
                    .lookup_char(ch)
                    .ok_or(MarkpieceError::UnknownCharacter { ch })?,
            );
        }

        tokens.extend(apply_merges(&ids, self.merges));
        Ok(())
    }
}
