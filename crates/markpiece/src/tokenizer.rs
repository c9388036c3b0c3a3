//! # Tokenizer Bundle

use crate::{
    decoders::TextDecoder,
    encoders::TextEncoder,
    errors::MpResult,
    training::{TrainOptions, train_into},
    types::{PairTokenMap, TokenType},
    vocab::{SpecialTokens, VocabStore},
};

/// A boundary-marker BPE tokenizer.
///
/// Bundles the vocabulary store, the learned merge table, and the registry
/// of special tokens behind a single mutation entry point: [`Self::train`].
/// Once trained, instances are read-only; [`Self::encode`] and
/// [`Self::decode`] take `&self` and are safe for concurrent use.
#[derive(Debug, Clone, Default)]
pub struct MarkTokenizer<T: TokenType> {
    vocab: VocabStore<T>,
    merges: PairTokenMap<T>,
    specials: SpecialTokens,
}

impl<T: TokenType> MarkTokenizer<T> {
    /// Creates an empty, untrained tokenizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a tokenizer from deserialized parts.
    pub(crate) fn from_parts(
        vocab: VocabStore<T>,
        merges: PairTokenMap<T>,
        specials: SpecialTokens,
    ) -> Self {
        Self {
            vocab,
            merges,
            specials,
        }
    }

    /// Train on a corpus in one pass.
    ///
    /// Any previous state is discarded first, so training is always a fresh
    /// one-shot pass; the instance is frozen once this returns.
    ///
    /// ## Arguments
    /// * `corpus` - The training text.
    /// * `options` - Target vocab size and special tokens.
    ///
    /// ## Returns
    /// `Ok(())`, or an error if the target size does not fit `T` or the
    /// corpus contains characters outside the base alphabet and marker.
    pub fn train(
        &mut self,
        corpus: &str,
        options: &TrainOptions,
    ) -> MpResult<()> {
        let mut vocab = VocabStore::new();
        let mut merges = PairTokenMap::default();
        let mut specials = SpecialTokens::new();

        train_into(&mut vocab, &mut merges, &mut specials, corpus, options)?;

        self.vocab = vocab;
        self.merges = merges;
        self.specials = specials;
        Ok(())
    }

    /// Encode text into token ids.
    ///
    /// See [`TextEncoder::try_encode`].
    pub fn encode<S: AsRef<str>>(
        &self,
        text: &str,
        allowed_specials: &[S],
    ) -> MpResult<Vec<T>> {
        self.encoder().try_encode(text, allowed_specials)
    }

    /// Decode token ids back into text.
    ///
    /// See [`TextDecoder::try_decode`].
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> MpResult<String> {
        self.decoder().try_decode(tokens)
    }

    /// A read-only encoding view over this tokenizer.
    pub fn encoder(&self) -> TextEncoder<'_, T> {
        TextEncoder::new(&self.vocab, &self.merges, &self.specials)
    }

    /// A read-only decoding view over this tokenizer.
    pub fn decoder(&self) -> TextDecoder<'_, T> {
        TextDecoder::new(&self.vocab)
    }

    /// The vocabulary store.
    pub fn vocab(&self) -> &VocabStore<T> {
        &self.vocab
    }

    /// The learned merge table.
    pub fn merges(&self) -> &PairTokenMap<T> {
        &self.merges
    }

    /// The registered special tokens.
    pub fn specials(&self) -> &SpecialTokens {
        &self.specials
    }

    /// The vocabulary size, counting specials.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}
