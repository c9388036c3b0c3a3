//! # Merge Learning Driver

use compact_str::CompactString;

use crate::{
    errors::{MarkpieceError, MpResult},
    segmentation::boundary::{BOUNDARY_MARKER, mark_boundaries},
    training::{merges::replace_pair, pair_counter::find_most_frequent_pair},
    types::{PairTokenMap, TokenType},
    vocab::{SpecialTokens, VocabStore, try_vocab_size},
};

/// Options for training a tokenizer.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    /// The target vocabulary size, counting the base alphabet, the boundary
    /// marker, specials, and learned merges.
    pub target_vocab_size: usize,

    /// Special tokens to register before merge learning.
    pub special_tokens: Vec<String>,
}

impl TrainOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `target_vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `TrainOptions` instance with no special tokens.
    pub fn new(target_vocab_size: usize) -> Self {
        Self {
            target_vocab_size,
            special_tokens: Vec::new(),
        }
    }

    /// Sets the special tokens.
    ///
    /// ## Arguments
    /// * `special_tokens` - The special-token strings to register.
    ///
    /// ## Returns
    /// The updated `TrainOptions` instance.
    pub fn with_special_tokens<I, S>(
        self,
        special_tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            special_tokens: special_tokens
                .into_iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
            ..self
        }
    }
}

/// Run the one-shot training pass into the given (empty) tokenizer parts.
///
/// Seeds the base alphabet, inserts the boundary marker and any specials
/// (idempotently, in that order, so their ids are contiguous with the base
/// range), then grows the vocabulary with frequency-based merges until the
/// target size is reached or no pair repeats.
pub(crate) fn train_into<T: TokenType>(
    vocab: &mut VocabStore<T>,
    merges: &mut PairTokenMap<T>,
    specials: &mut SpecialTokens,
    corpus: &str,
    options: &TrainOptions,
) -> MpResult<()> {
    try_vocab_size::<T>(options.target_vocab_size)?;

    let processed = mark_boundaries(corpus, true);

    vocab.seed_base_alphabet()?;
    let mut marker_buf = [0u8; 4];
    vocab.add_entry(BOUNDARY_MARKER.encode_utf8(&mut marker_buf))?;

    for special in &options.special_tokens {
        vocab.add_entry(special)?;
        specials.insert(special);
    }

    let mut work: Vec<T> = Vec::with_capacity(processed.chars().count());
    for ch in processed.chars() {
        work.push(
            vocab
                .lookup_char(ch)
                .ok_or(MarkpieceError::UnknownCharacter { ch })?,
        );
    }

    let initial_size = vocab.len();
    log::info!(
        "Starting BPE training: vocab {} -> {}",
        initial_size,
        options.target_vocab_size
    );

    let mut merges_done = 0;
    while vocab.len() < options.target_vocab_size {
        let Some(pair) = find_most_frequent_pair(&work) else {
            // Corpus exhausted of repeating pairs.
            break;
        };

        let mut merged_text = CompactString::from(
            vocab
                .lookup_text(pair.0)
                .expect("merge pair tokens come from the working sequence"),
        );
        merged_text.push_str(
            vocab
                .lookup_text(pair.1)
                .expect("merge pair tokens come from the working sequence"),
        );

        let merged = vocab.add_entry(&merged_text)?;
        merges.insert(pair, merged);
        work = replace_pair(&work, pair, merged);

        merges_done += 1;
        log::debug!("merge {merges_done}: {pair:?} -> {merged} ({merged_text:?})");
    }

    log::info!("Finished training: {merges_done} merges completed");
    Ok(())
}
