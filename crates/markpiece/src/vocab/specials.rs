//! # Special Token Registry

use compact_str::CompactString;

use crate::types::MpHashSet;

/// Registry of whole-string special tokens known to a tokenizer.
///
/// This records which vocabulary entries are specials; the id mapping itself
/// lives in the [`VocabStore`](crate::vocab::VocabStore).
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialTokens {
    words: MpHashSet<CompactString>,
}

impl SpecialTokens {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a special token string.
    pub fn insert(
        &mut self,
        word: &str,
    ) {
        self.words.insert(CompactString::from(word));
    }

    /// Check whether the string is a registered special.
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains(word)
    }

    /// The number of registered specials.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the registered special strings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(CompactString::as_str)
    }

    /// Find a registered special occurring literally in `segment` without
    /// being a member of `allowed`.
    ///
    /// When several disallowed specials occur, the one starting earliest is
    /// returned; position ties go to the longer, then lexicographically
    /// smaller string, so the result does not depend on hash order.
    ///
    /// ## Arguments
    /// * `segment` - An ordinary text segment to scan.
    /// * `allowed` - The specials permitted for this encode call.
    ///
    /// ## Returns
    /// The offending special string, if any.
    pub fn find_disallowed<'a>(
        &'a self,
        segment: &str,
        allowed: &MpHashSet<&str>,
    ) -> Option<&'a str> {
        let mut found: Option<(usize, &str)> = None;
        for word in self.iter() {
            if allowed.contains(word) {
                continue;
            }
            if let Some(pos) = segment.find(word) {
                let better = match found {
                    None => true,
                    Some((best_pos, best)) => {
                        (pos, core::cmp::Reverse(word.len()), word)
                            < (best_pos, core::cmp::Reverse(best.len()), best)
                    }
                };
                if better {
                    found = Some((pos, word));
                }
            }
        }
        found.map(|(_, word)| word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let mut specials = SpecialTokens::new();
        assert!(specials.is_empty());

        specials.insert("<|endoftext|>");
        specials.insert("<|pad|>");
        specials.insert("<|endoftext|>");

        assert_eq!(specials.len(), 2);
        assert!(specials.contains("<|pad|>"));
        assert!(!specials.contains("<|bos|>"));
    }

    #[test]
    fn test_find_disallowed() {
        let mut specials = SpecialTokens::new();
        specials.insert("<|endoftext|>");
        specials.insert("<|pad|>");

        let allowed: MpHashSet<&str> = ["<|pad|>"].into_iter().collect();

        assert_eq!(
            specials.find_disallowed("abc <|endoftext|> def", &allowed),
            Some("<|endoftext|>")
        );
        assert_eq!(specials.find_disallowed("abc <|pad|> def", &allowed), None);
        assert_eq!(specials.find_disallowed("plain text", &allowed), None);
    }

    #[test]
    fn test_find_disallowed_earliest_wins() {
        let mut specials = SpecialTokens::new();
        specials.insert("<|a|>");
        specials.insert("<|b|>");

        let allowed: MpHashSet<&str> = MpHashSet::default();

        assert_eq!(
            specials.find_disallowed("x <|b|> y <|a|>", &allowed),
            Some("<|b|>")
        );
    }
}
