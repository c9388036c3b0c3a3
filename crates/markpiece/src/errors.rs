//! # Error Types

/// Errors from markpiece operations.
#[derive(Debug, thiserror::Error)]
pub enum MarkpieceError {
    /// Encode called on a tokenizer with an empty vocabulary.
    #[error("tokenizer not trained")]
    NotTrained,

    /// An ordinary-segment character has no vocabulary entry.
    #[error("character {ch:?} not in vocabulary")]
    UnknownCharacter {
        /// The character that was missing.
        ch: char,
    },

    /// Decode was given a token id absent from the vocabulary.
    #[error("unknown token id {token}")]
    UnknownTokenId {
        /// The missing token id.
        token: u64,
    },

    /// An allowed special token is not registered in the vocabulary.
    #[error("special token {0:?} not found in vocabulary")]
    UnknownSpecialToken(String),

    /// A registered special token appears in text outside the allowed set.
    #[error("disallowed special token {0:?} found in text")]
    DisallowedSpecialToken(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (snapshot json, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for MarkpieceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type for markpiece operations.
pub type MpResult<T> = core::result::Result<T, MarkpieceError>;
