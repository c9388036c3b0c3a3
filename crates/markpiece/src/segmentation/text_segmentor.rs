//! # Special Token Segmentor

use aho_corasick::{AhoCorasick, MatchKind};

use crate::errors::{MarkpieceError, MpResult};

/// One segment of a split text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpanRef<'a> {
    /// Ordinary text between special tokens.
    Ordinary {
        /// The segment text.
        text: &'a str,
        /// Whether the segment begins at position 0 of the full text.
        at_text_start: bool,
    },

    /// A literal special-token match.
    Special(&'a str),
}

/// Splits text into ordered ordinary / special-token segments.
///
/// Matching is literal and leftmost-longest, so overlapping special tokens
/// resolve deterministically regardless of registration order.
#[derive(Debug, Clone)]
pub struct TextSegmentor {
    specials: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl TextSegmentor {
    /// Build a segmentor for the given special-token strings.
    ///
    /// ## Arguments
    /// * `specials` - The literal special tokens to split on; may be empty.
    ///
    /// ## Returns
    /// A new `TextSegmentor`, or a parse error if the match automaton
    /// cannot be built.
    pub fn from_specials<I, S>(specials: I) -> MpResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specials: Vec<String> = specials
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let automaton = if specials.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostLongest)
                    .build(&specials)
                    .map_err(|err| MarkpieceError::Parse(err.to_string()))?,
            )
        };

        Ok(Self { specials, automaton })
    }

    /// Split `text` into ordered segments.
    ///
    /// Ordinary and special segments alternate (empty ordinary segments are
    /// not emitted); concatenating the segment texts reproduces `text`.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The ordered segment list; empty for empty input.
    pub fn split_spans<'a>(
        &'a self,
        text: &'a str,
    ) -> Vec<SpanRef<'a>> {
        let Some(automaton) = &self.automaton else {
            if text.is_empty() {
                return Vec::new();
            }
            return vec![SpanRef::Ordinary {
                text,
                at_text_start: true,
            }];
        };

        let mut spans = Vec::new();
        let mut last = 0;
        for m in automaton.find_iter(text) {
            if m.start() > last {
                spans.push(SpanRef::Ordinary {
                    text: &text[last..m.start()],
                    at_text_start: last == 0,
                });
            }
            spans.push(SpanRef::Special(&self.specials[m.pattern().as_usize()]));
            last = m.end();
        }
        if last < text.len() {
            spans.push(SpanRef::Ordinary {
                text: &text[last..],
                at_text_start: last == 0,
            });
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_specials() {
        let segmentor = TextSegmentor::from_specials(Vec::<&str>::new()).unwrap();

        assert!(segmentor.split_spans("").is_empty());
        assert_eq!(
            segmentor.split_spans("hello"),
            [SpanRef::Ordinary {
                text: "hello",
                at_text_start: true
            }]
        );
    }

    #[test]
    fn test_split_spans() {
        let segmentor =
            TextSegmentor::from_specials(["<|eot|>", "<|pad|>"]).unwrap();

        assert_eq!(
            segmentor.split_spans("ab<|eot|>cd<|pad|><|eot|>"),
            [
                SpanRef::Ordinary {
                    text: "ab",
                    at_text_start: true
                },
                SpanRef::Special("<|eot|>"),
                SpanRef::Ordinary {
                    text: "cd",
                    at_text_start: false
                },
                SpanRef::Special("<|pad|>"),
                SpanRef::Special("<|eot|>"),
            ]
        );
    }

    #[test]
    fn test_split_leading_special() {
        let segmentor = TextSegmentor::from_specials(["<|eot|>"]).unwrap();

        assert_eq!(
            segmentor.split_spans("<|eot|>tail"),
            [
                SpanRef::Special("<|eot|>"),
                SpanRef::Ordinary {
                    text: "tail",
                    at_text_start: false
                },
            ]
        );
    }

    #[test]
    fn test_leftmost_longest() {
        let segmentor = TextSegmentor::from_specials(["<|e|>", "<|e|><|e|>"]).unwrap();

        assert_eq!(
            segmentor.split_spans("<|e|><|e|>"),
            [SpanRef::Special("<|e|><|e|>")]
        );
    }
}
