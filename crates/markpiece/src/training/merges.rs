//! # Greedy Pair Rewriting

use crate::types::{Pair, PairTokenMap, TokenType};

/// Replace every occurrence of `pair` with `merged` in one greedy pass.
///
/// Scans left to right: when ``(current, next)`` equals `pair`, `merged` is
/// emitted and both positions are consumed; otherwise the current token is
/// emitted unchanged. The emitted `merged` token is not re-examined against
/// what follows within the same pass.
///
/// ## Arguments
/// * `tokens` - The input token sequence (untouched).
/// * `pair` - The adjacent pair to replace.
/// * `merged` - The replacement token.
///
/// ## Returns
/// A new token sequence with the replacements applied.
pub fn replace_pair<T: TokenType>(
    tokens: &[T],
    pair: Pair<T>,
    merged: T,
) -> Vec<T> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut idx = 0;

    while idx < tokens.len() {
        if idx + 1 < tokens.len() && (tokens[idx], tokens[idx + 1]) == pair {
            out.push(merged);
            idx += 2;
        } else {
            out.push(tokens[idx]);
            idx += 1;
        }
    }

    out
}

/// Apply a whole merge table in one greedy left-to-right sweep.
///
/// Identical mechanics to [`replace_pair`], but each ``(current, next)``
/// position is checked against the entire table. This is a single linear
/// sweep, not a fixed-point iteration: a merge whose operands only become
/// adjacent through an earlier merge in the same sweep is not recovered.
/// Training never hits this case because it rescans from scratch after
/// every learned rule.
///
/// ## Arguments
/// * `tokens` - The input token sequence (untouched).
/// * `merges` - The learned merge table.
///
/// ## Returns
/// A new token sequence with the merges applied.
pub fn apply_merges<T: TokenType>(
    tokens: &[T],
    merges: &PairTokenMap<T>,
) -> Vec<T> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut idx = 0;

    while idx < tokens.len() {
        if idx + 1 < tokens.len()
            && let Some(&merged) = merges.get(&(tokens[idx], tokens[idx + 1]))
        {
            out.push(merged);
            idx += 2;
        } else {
            out.push(tokens[idx]);
            idx += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_pair() {
        type T = u32;
        assert_eq!(replace_pair::<T>(&[1, 2, 3, 1, 2], (1, 2), 4), [4, 3, 4]);
        assert_eq!(replace_pair::<T>(&[1, 2, 1, 2], (1, 2), 3), [3, 3]);
        assert!(replace_pair::<T>(&[], (1, 2), 3).is_empty());
        assert_eq!(replace_pair::<T>(&[1], (1, 2), 3), [1]);
    }

    #[test]
    fn test_replace_pair_no_rechain() {
        type T = u32;
        // Emitting 1 for (1, 1) does not pair with the following 1.
        assert_eq!(replace_pair::<T>(&[1, 1, 1], (1, 1), 9), [9, 1]);
    }

    #[test]
    fn test_apply_merges() {
        type T = u32;
        let merges: PairTokenMap<T> =
            [((1, 2), 4), ((4, 3), 5)].into_iter().collect();

        assert_eq!(apply_merges(&[1, 2, 3], &merges), [4, 3]);
        assert_eq!(apply_merges(&[4, 3, 1, 2], &merges), [5, 4]);
        assert_eq!(apply_merges(&[9], &merges), [9]);
        assert!(apply_merges(&[], &merges).is_empty());
    }

    #[test]
    fn test_apply_merges_single_sweep() {
        type T = u32;
        let merges: PairTokenMap<T> =
            [((1, 2), 4), ((4, 3), 5)].into_iter().collect();

        // (1, 2) -> 4 happens first, but the resulting (4, 3) is only
        // reachable by rescanning; one sweep leaves it unreduced.
        assert_eq!(apply_merges(&[1, 2, 3], &merges), [4, 3]);
        // A second sweep would finish the job.
        assert_eq!(apply_merges(&[4, 3], &merges), [5]);
    }
}
