//! # Vocab Size Validators

use crate::{
    errors::{MarkpieceError, MpResult},
    types::TokenType,
};

/// The number of single-byte code point entries in the base alphabet.
pub const BASE_ALPHABET_SIZE: usize = 256;

/// Check that a vocab of `size` entries fits the token type `T`.
///
/// ## Arguments
/// * `size` - The requested vocab size.
///
/// ## Returns
/// `Ok(())` when the largest id (`size - 1`) is representable in `T`;
/// [`MarkpieceError::VocabSizeOverflow`] otherwise.
pub fn try_vocab_size<T: TokenType>(size: usize) -> MpResult<()> {
    match T::from_usize(size.saturating_sub(1)) {
        Some(_) => Ok(()),
        None => Err(MarkpieceError::VocabSizeOverflow { size }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_vocab_size() {
        assert!(try_vocab_size::<u8>(256).is_ok());
        assert!(matches!(
            try_vocab_size::<u8>(257),
            Err(MarkpieceError::VocabSizeOverflow { size: 257 })
        ));

        assert!(try_vocab_size::<u16>(65536).is_ok());
        assert!(try_vocab_size::<u16>(65537).is_err());

        assert!(try_vocab_size::<u32>(1 << 20).is_ok());
    }
}
