//! # Adjacent Pair Frequency Counting

use crate::types::{MpHashMap, Pair, TokenType};

/// Find the most frequent adjacent pair in a token sequence.
///
/// Counts every adjacent pair while recording first-seen order; ties on the
/// maximum count are broken by earliest first occurrence in the scan. This
/// tie-break is load-bearing: it makes training reproducible across runs
/// and implementations.
///
/// ## Arguments
/// * `tokens` - The token sequence to scan.
///
/// ## Returns
/// * `None` when the sequence has fewer than 2 elements,
/// * `None` when no pair occurs more than once,
/// * the strictly-most-frequent pair otherwise.
pub fn find_most_frequent_pair<T: TokenType>(tokens: &[T]) -> Option<Pair<T>> {
    if tokens.len() < 2 {
        return None;
    }

    let mut counts: MpHashMap<Pair<T>, usize> = MpHashMap::with_capacity(tokens.len());
    let mut first_seen: Vec<Pair<T>> = Vec::new();

    for window in tokens.windows(2) {
        let pair = (window[0], window[1]);
        let count = counts.entry(pair).or_insert(0);
        if *count == 0 {
            first_seen.push(pair);
        }
        *count += 1;
    }

    // Stable argmax over first-seen order; strict `>` keeps the earliest.
    let mut best: Option<(Pair<T>, usize)> = None;
    for &pair in &first_seen {
        let count = counts[&pair];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((pair, count));
        }
    }

    match best {
        // A singleton pair does not warrant a merge.
        Some((pair, count)) if count > 1 => Some(pair),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sequences() {
        type T = u32;
        assert_eq!(find_most_frequent_pair::<T>(&[]), None);
        assert_eq!(find_most_frequent_pair::<T>(&[1]), None);
    }

    #[test]
    fn test_no_repeating_pair() {
        type T = u32;
        assert_eq!(find_most_frequent_pair::<T>(&[1, 2]), None);
        assert_eq!(find_most_frequent_pair::<T>(&[1, 2, 3, 4]), None);
    }

    #[test]
    fn test_most_frequent() {
        type T = u32;
        assert_eq!(find_most_frequent_pair::<T>(&[1, 2, 3, 1, 2]), Some((1, 2)));
        assert_eq!(
            find_most_frequent_pair::<T>(&[7, 7, 7, 7]),
            // (7, 7) occurs three times via overlap counting.
            Some((7, 7))
        );
    }

    #[test]
    fn test_tie_break_first_seen() {
        type T = u32;
        // (1, 2) and (3, 4) both occur twice; (1, 2) was seen first.
        assert_eq!(
            find_most_frequent_pair::<T>(&[1, 2, 0, 3, 4, 0, 1, 2, 0, 3, 4]),
            Some((1, 2))
        );
        // Reversing the layout flips the winner.
        assert_eq!(
            find_most_frequent_pair::<T>(&[3, 4, 0, 1, 2, 0, 3, 4, 0, 1, 2]),
            Some((3, 4))
        );
    }
}
