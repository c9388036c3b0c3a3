//! # JSON Tokenizer Snapshots

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{MarkpieceError, MpResult},
    tokenizer::MarkTokenizer,
    types::{PairTokenMap, TokenType},
    vocab::{SpecialTokens, VocabStore},
};

/// Serializable snapshot of a trained tokenizer.
///
/// Entries are sorted by id so snapshots of equal tokenizers are
/// byte-identical. Token values travel as `u64` and are converted back
/// through the target token type on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerSnapshot {
    /// ``(token, text)`` vocabulary entries, sorted by token.
    pub vocab: Vec<(u64, String)>,

    /// ``(left, right, merged)`` merge rules, sorted by merged token.
    pub merges: Vec<(u64, u64, u64)>,

    /// Registered special-token strings, sorted.
    pub specials: Vec<String>,
}

impl TokenizerSnapshot {
    /// Capture a snapshot of a tokenizer.
    pub fn from_tokenizer<T: TokenType>(tokenizer: &MarkTokenizer<T>) -> Self {
        let mut vocab: Vec<(u64, String)> = tokenizer
            .vocab()
            .entries()
            .map(|(token, text)| (token.to_u64().unwrap_or(u64::MAX), text.to_string()))
            .collect();
        vocab.sort_unstable();

        let mut merges: Vec<(u64, u64, u64)> = tokenizer
            .merges()
            .iter()
            .map(|(&(left, right), &merged)| {
                (
                    left.to_u64().unwrap_or(u64::MAX),
                    right.to_u64().unwrap_or(u64::MAX),
                    merged.to_u64().unwrap_or(u64::MAX),
                )
            })
            .collect();
        merges.sort_unstable_by_key(|&(_, _, merged)| merged);

        let mut specials: Vec<String> = tokenizer
            .specials()
            .iter()
            .map(str::to_string)
            .collect();
        specials.sort_unstable();

        Self {
            vocab,
            merges,
            specials,
        }
    }

    /// Rebuild a tokenizer from this snapshot.
    ///
    /// ## Returns
    /// The reconstructed tokenizer, or:
    /// * [`MarkpieceError::TokenOutOfRange`] when a token does not fit `T`,
    /// * [`MarkpieceError::Parse`] when ids are not contiguous from zero or
    ///   a merge/special references a missing entry.
    pub fn into_tokenizer<T: TokenType>(self) -> MpResult<MarkTokenizer<T>> {
        let mut vocab = VocabStore::<T>::new();
        for (token, text) in &self.vocab {
            let assigned = vocab.add_entry(text)?;
            if assigned.to_u64() != Some(*token) {
                return Err(MarkpieceError::Parse(format!(
                    "vocab entry {token} out of order (expected {assigned})"
                )));
            }
        }

        let mut merges = PairTokenMap::default();
        for &(left, right, merged) in &self.merges {
            let left = from_u64::<T>(left)?;
            let right = from_u64::<T>(right)?;
            let merged = from_u64::<T>(merged)?;
            for token in [left, right, merged] {
                if !vocab.contains_token(token) {
                    return Err(MarkpieceError::Parse(format!(
                        "merge rule references missing token {token}"
                    )));
                }
            }
            merges.insert((left, right), merged);
        }

        let mut specials = SpecialTokens::new();
        for word in &self.specials {
            if !vocab.contains_text(word) {
                return Err(MarkpieceError::Parse(format!(
                    "special token {word:?} missing from vocab"
                )));
            }
            specials.insert(word);
        }

        Ok(MarkTokenizer::from_parts(vocab, merges, specials))
    }
}

fn from_u64<T: TokenType>(value: u64) -> MpResult<T> {
    T::from_u64(value).ok_or(MarkpieceError::TokenOutOfRange)
}

/// Write a tokenizer snapshot as JSON.
///
/// ## Arguments
/// * `tokenizer` - The tokenizer to snapshot.
/// * `writer` - The output sink.
pub fn write_tokenizer_json<T: TokenType, W: Write>(
    tokenizer: &MarkTokenizer<T>,
    writer: &mut W,
) -> MpResult<()> {
    let snapshot = TokenizerSnapshot::from_tokenizer(tokenizer);
    serde_json::to_writer_pretty(writer, &snapshot)?;
    Ok(())
}

/// Read a tokenizer snapshot from JSON.
///
/// ## Arguments
/// * `reader` - The input source.
pub fn read_tokenizer_json<T: TokenType, R: Read>(reader: R) -> MpResult<MarkTokenizer<T>> {
    let snapshot: TokenizerSnapshot = serde_json::from_reader(reader)?;
    snapshot.into_tokenizer()
}

/// Save a tokenizer snapshot to a JSON file.
///
/// ## Arguments
/// * `tokenizer` - The tokenizer to save.
/// * `path` - The target file path.
pub fn save_tokenizer_json_path<T: TokenType, P: AsRef<Path>>(
    tokenizer: &MarkTokenizer<T>,
    path: P,
) -> MpResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_tokenizer_json(tokenizer, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Load a tokenizer snapshot from a JSON file.
///
/// ## Arguments
/// * `path` - The snapshot file path.
pub fn load_tokenizer_json_path<T: TokenType, P: AsRef<Path>>(
    path: P,
) -> MpResult<MarkTokenizer<T>> {
    let reader = BufReader::new(File::open(path)?);
    read_tokenizer_json(reader)
}
