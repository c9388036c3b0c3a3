//! # Bijective ``{ T <-> text }`` Token Store

use compact_str::CompactString;

use crate::{
    errors::{MarkpieceError, MpResult},
    types::{MpHashMap, TokenType},
    vocab::validators::BASE_ALPHABET_SIZE,
};

/// Bijective mapping between token ids and token strings.
///
/// Ids are allocated monotonically from zero and never reused; the two
/// internal maps are only ever updated together, so the store is a
/// bijection at every observable point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VocabStore<T: TokenType> {
    /// Map from token id to token text.
    token_text: MpHashMap<T, CompactString>,

    /// Map from token text to token id.
    text_token: MpHashMap<CompactString, T>,

    /// The next id to allocate; tracked explicitly instead of
    /// rescanning for `max + 1`.
    next_token: usize,
}

impl<T: TokenType> VocabStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds ids ``0..=255`` with their single-character texts.
    ///
    /// One entry per single-byte code point, independent of any input text.
    /// Idempotent; safe to call on a store that already holds the alphabet.
    pub fn seed_base_alphabet(&mut self) -> MpResult<()> {
        let mut buf = [0u8; 4];
        for b in 0..BASE_ALPHABET_SIZE {
            let ch = char::from(b as u8);
            self.add_entry(ch.encode_utf8(&mut buf))?;
        }
        Ok(())
    }

    /// Inserts `text`, returning its id.
    ///
    /// Idempotent: an existing entry keeps its id. A new entry is allocated
    /// the next monotonic id and both maps are updated together.
    ///
    /// ## Arguments
    /// * `text` - The token text to insert.
    ///
    /// ## Returns
    /// The id of the (possibly pre-existing) entry, or
    /// [`MarkpieceError::VocabSizeOverflow`] if the id space of `T` is
    /// exhausted.
    pub fn add_entry(
        &mut self,
        text: &str,
    ) -> MpResult<T> {
        if let Some(&token) = self.text_token.get(text) {
            return Ok(token);
        }

        let token = T::from_usize(self.next_token).ok_or(MarkpieceError::VocabSizeOverflow {
            size: self.next_token + 1,
        })?;
        self.next_token += 1;

        self.token_text.insert(token, CompactString::from(text));
        self.text_token.insert(CompactString::from(text), token);
        Ok(token)
    }

    /// Looks up the id for a token text.
    pub fn lookup_token(
        &self,
        text: &str,
    ) -> Option<T> {
        self.text_token.get(text).copied()
    }

    /// Looks up the id for a single character.
    pub fn lookup_char(
        &self,
        ch: char,
    ) -> Option<T> {
        let mut buf = [0u8; 4];
        self.lookup_token(ch.encode_utf8(&mut buf))
    }

    /// Looks up the text for a token id.
    pub fn lookup_text(
        &self,
        token: T,
    ) -> Option<&str> {
        self.token_text.get(&token).map(CompactString::as_str)
    }

    /// Check whether the id has an entry.
    pub fn contains_token(
        &self,
        token: T,
    ) -> bool {
        self.token_text.contains_key(&token)
    }

    /// Check whether the text has an entry.
    pub fn contains_text(
        &self,
        text: &str,
    ) -> bool {
        self.text_token.contains_key(text)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.token_text.len()
    }

    /// Check whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.token_text.is_empty()
    }

    /// The largest allocated id, if any.
    pub fn max_token(&self) -> Option<T> {
        match self.next_token {
            0 => None,
            n => T::from_usize(n - 1),
        }
    }

    /// Iterate over ``(token, text)`` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (T, &str)> {
        self.token_text.iter().map(|(&t, s)| (t, s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_base_alphabet() {
        type T = u32;
        let mut store: VocabStore<T> = VocabStore::new();
        store.seed_base_alphabet().unwrap();

        assert_eq!(store.len(), 256);
        assert_eq!(store.max_token(), Some(255));

        assert_eq!(store.lookup_char('a'), Some('a' as u32));
        assert_eq!(store.lookup_text(65), Some("A"));
        assert_eq!(store.lookup_char('\u{ff}'), Some(255));
        assert_eq!(store.lookup_char('Ġ'), None);

        // Re-seeding allocates nothing.
        store.seed_base_alphabet().unwrap();
        assert_eq!(store.len(), 256);
    }

    #[test]
    fn test_add_entry_idempotent() {
        type T = u32;
        let mut store: VocabStore<T> = VocabStore::new();

        let a = store.add_entry("ab").unwrap();
        let b = store.add_entry("cd").unwrap();
        assert_eq!((a, b), (0, 1));

        assert_eq!(store.add_entry("ab").unwrap(), a);
        assert_eq!(store.len(), 2);
        assert_eq!(store.max_token(), Some(1));

        assert!(store.contains_token(0));
        assert!(store.contains_text("cd"));
        assert!(!store.contains_token(2));
        assert!(!store.contains_text("ef"));
    }

    #[test]
    fn test_token_type_exhaustion() {
        let mut store: VocabStore<u8> = VocabStore::new();
        store.seed_base_alphabet().unwrap();

        assert!(matches!(
            store.add_entry("Ġ"),
            Err(MarkpieceError::VocabSizeOverflow { size: 257 })
        ));
        // The failed insert left no partial state.
        assert_eq!(store.len(), 256);
        assert!(!store.contains_text("Ġ"));
    }

    #[test]
    fn test_bijection_invariant() {
        type T = u16;
        let mut store: VocabStore<T> = VocabStore::new();
        store.seed_base_alphabet().unwrap();
        store.add_entry("th").unwrap();
        store.add_entry("the").unwrap();

        for (token, text) in store.entries() {
            assert_eq!(store.lookup_token(text), Some(token));
            assert_eq!(store.lookup_text(token), Some(text));
        }
        assert_eq!(store.entries().count(), store.len());
    }
}
