//! Permutation mutation operators.
//!
//! Each operator is gated by a single probability draw: either the whole
//! operator fires, or the genes are left untouched. All operators pick two
//! distinct positions `i < j` and only rearrange genes, so a permutation
//! stays a permutation.

use super::distinct_pair;
use crate::error::{GaError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Mutation strategy.
///
/// ```
/// use u_roompath::ga::Mutation;
/// use u_roompath::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut genes = vec![0usize, 1, 2, 3, 4, 5, 6];
/// assert!(Mutation::Swap.apply(&mut genes, 1.0, &mut rng));
/// assert_ne!(genes, vec![0, 1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Exchange the genes at `i` and `j` ("twors").
    #[default]
    Swap,

    /// Reverse the segment `[i, j]`.
    ReverseSequence,

    /// Reverse the segment `[i, j]`, then swap one random gene from inside
    /// the reversed segment with one random gene outside it.
    InvertedExchange,

    /// Shuffle the segment `[i, j]` in place.
    PartialShuffle,
}

impl Mutation {
    /// All mutation strategies.
    pub const ALL: [Mutation; 4] = [
        Mutation::Swap,
        Mutation::ReverseSequence,
        Mutation::InvertedExchange,
        Mutation::PartialShuffle,
    ];

    /// Short operator name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Mutation::Swap => "swap",
            Mutation::ReverseSequence => "reverse-sequence",
            Mutation::InvertedExchange => "inverted-exchange",
            Mutation::PartialShuffle => "partial-shuffle",
        }
    }

    /// Applies the operator with probability `rate`.
    ///
    /// Returns `true` if the gate opened. Slices shorter than two genes are
    /// never changed, though the gate is still drawn so the random stream
    /// advances the same way.
    pub fn apply<T: Copy + PartialEq, R: Rng>(self, genes: &mut [T], rate: f64, rng: &mut R) -> bool {
        if rng.random::<f64>() >= rate {
            return false;
        }
        if genes.len() < 2 {
            return true;
        }

        let (i, j) = distinct_pair(genes.len(), rng);
        match self {
            Mutation::Swap => genes.swap(i, j),
            Mutation::ReverseSequence => genes[i..=j].reverse(),
            Mutation::InvertedExchange => inverted_exchange(genes, i, j, rng),
            Mutation::PartialShuffle => genes[i..=j].shuffle(rng),
        }
        true
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mutation {
    type Err = GaError;

    /// Parses an operator name as printed by [`name`](Mutation::name),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Mutation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GaError::Configuration(format!("unknown mutation operator {s:?}")))
    }
}

/// Reverse `[i, j]` and trade one gene across the segment boundary.
fn inverted_exchange<T: Copy + PartialEq, R: Rng>(genes: &mut [T], i: usize, j: usize, rng: &mut R) {
    let mut segment: Vec<T> = genes[i..=j].iter().rev().copied().collect();
    let inside = rng.random_range(0..segment.len());
    let selected = segment[inside];

    let outside: Vec<usize> = (0..genes.len())
        .filter(|&k| !segment.contains(&genes[k]))
        .collect();

    if !outside.is_empty() {
        let k = outside[rng.random_range(0..outside.len())];
        segment[inside] = genes[k];
        genes[k] = selected;
    }

    genes[i..=j].copy_from_slice(&segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        let set: HashSet<usize> = perm.iter().copied().collect();
        perm.len() == n && set.len() == n && perm.iter().all(|&v| v < n)
    }

    #[test]
    fn test_closed_gate_leaves_genes_untouched() {
        let mut rng = create_rng(42);
        for op in Mutation::ALL {
            for _ in 0..100 {
                let mut genes: Vec<usize> = (0..7).collect();
                assert!(!op.apply(&mut genes, 0.0, &mut rng));
                assert_eq!(genes, (0..7).collect::<Vec<_>>(), "{op}");
            }
        }
    }

    #[test]
    fn test_all_operators_preserve_permutation() {
        let mut rng = create_rng(42);
        for op in Mutation::ALL {
            for _ in 0..200 {
                let mut genes: Vec<usize> = (0..7).collect();
                assert!(op.apply(&mut genes, 1.0, &mut rng));
                assert!(is_valid_permutation(&genes, 7), "{op}: {genes:?}");
            }
        }
    }

    #[test]
    fn test_swap_always_changes_distinct_genes() {
        let mut rng = create_rng(3);
        for _ in 0..100 {
            let mut genes: Vec<usize> = (0..7).collect();
            Mutation::Swap.apply(&mut genes, 1.0, &mut rng);
            let moved = genes.iter().enumerate().filter(|&(i, &g)| i != g).count();
            assert_eq!(moved, 2, "{genes:?}");
        }
    }

    #[test]
    fn test_reverse_sequence_reverses_one_segment() {
        let mut rng = create_rng(5);
        for _ in 0..100 {
            let mut genes: Vec<usize> = (0..7).collect();
            Mutation::ReverseSequence.apply(&mut genes, 1.0, &mut rng);
            let first = genes.iter().enumerate().position(|(i, &g)| i != g).unwrap();
            let last = genes.iter().enumerate().rposition(|(i, &g)| i != g).unwrap();
            let expected: Vec<usize> = (first..=last).rev().collect();
            assert_eq!(&genes[first..=last], expected.as_slice(), "{genes:?}");
        }
    }

    #[test]
    fn test_inverted_exchange_full_segment_is_plain_reversal() {
        // With nothing outside the segment no exchange can happen.
        let mut rng = create_rng(11);
        let mut genes = vec![0usize, 1];
        Mutation::InvertedExchange.apply(&mut genes, 1.0, &mut rng);
        assert_eq!(genes, vec![1, 0]);
    }

    #[test]
    fn test_inverted_exchange_moves_gene_outside() {
        let mut rng = create_rng(13);
        let mut genes = vec![0usize, 1, 2, 3, 4, 5, 6];
        inverted_exchange(&mut genes, 1, 3, &mut rng);
        assert!(is_valid_permutation(&genes, 7));
        // Exactly one of the segment genes {1, 2, 3} left positions 1..=3.
        let inside: HashSet<usize> = genes[1..=3].iter().copied().collect();
        let kept = [1usize, 2, 3].iter().filter(|g| inside.contains(g)).count();
        assert_eq!(kept, 2, "{genes:?}");
    }

    #[test]
    fn test_partial_shuffle_stays_within_segment() {
        let mut rng = create_rng(17);
        for _ in 0..100 {
            let mut genes: Vec<usize> = (0..7).collect();
            Mutation::PartialShuffle.apply(&mut genes, 1.0, &mut rng);
            let changed: Vec<usize> = (0..7).filter(|&i| genes[i] != i).collect();
            if let (Some(&lo), Some(&hi)) = (changed.first(), changed.last()) {
                let mut seg: Vec<usize> = genes[lo..=hi].to_vec();
                seg.sort_unstable();
                assert_eq!(seg, (lo..=hi).collect::<Vec<_>>(), "{genes:?}");
            }
        }
    }

    #[test]
    fn test_short_slices() {
        let mut rng = create_rng(42);
        for op in Mutation::ALL {
            let mut one = vec![7usize];
            assert!(op.apply(&mut one, 1.0, &mut rng));
            assert_eq!(one, vec![7]);
        }
    }

    #[test]
    fn test_parse_names() {
        for op in Mutation::ALL {
            assert_eq!(op.name().parse::<Mutation>().unwrap(), op);
        }
        assert_eq!("Swap".parse::<Mutation>().unwrap(), Mutation::Swap);
        assert!("scramble".parse::<Mutation>().is_err());
    }
}
