//! Permutation-based genetic operators.
//!
//! Crossover and mutation operators for permutation-encoded chromosomes.
//! They work on plain gene slices and know nothing about rooms or costs;
//! the only domain hook is [`PermutationGene::align_to`], which lets a gene
//! type reconcile two parents drawn from slightly different alphabets
//! before positions are mapped between them.
//!
//! # Crossover Operators ([`Crossover`])
//!
//! - `PartiallyMapped` (PMX): Goldberg & Lingle (1985)
//! - `ImprovedCycle`: cycle crossover variant after Hussain et al. (2017)
//! - `Ordered` (OX): Davis (1985)
//! - `Fog`: shift a tail of parent 1 one slot right, fill from parent 2
//! - `Slide`: move a head of parent 1 to the tail, fill from parent 2
//!
//! # Mutation Operators ([`Mutation`])
//!
//! - `Swap`, `ReverseSequence`, `InvertedExchange`, `PartialShuffle`
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Hussain et al. (2017), "Genetic Algorithm for Traveling Salesman Problem
//!   with Modified Cycle Crossover Operator"

pub mod crossover;
pub mod mutation;

pub use crossover::Crossover;
pub use mutation::Mutation;

use rand::Rng;

/// A gene that permutation operators can move around.
///
/// Values are compared with `==`; a chromosome is expected to hold each
/// value at most once.
pub trait PermutationGene: Copy + PartialEq + Send + Sync + std::fmt::Debug {
    /// Rewrites `template` in place so that it draws from the same alphabet
    /// as `donor`.
    ///
    /// Crossover calls this on a copy of the template parent before mapping
    /// positions between the two parents. The default leaves the template
    /// untouched.
    fn align_to(_template: &mut [Self], _donor: &[Self]) {}
}

impl PermutationGene for usize {}

/// Two distinct positions `(a, b)` with `a < b`, drawn uniformly from
/// `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
