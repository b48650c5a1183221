//! Permutation crossover operators.
//!
//! Every operator builds two children from the same random draw: child 1
//! takes parent 1 as template and parent 2 as donor, child 2 swaps the
//! roles. The template copy is passed through
//! [`PermutationGene::align_to`] first so both parents share one alphabet.

use super::{distinct_pair, PermutationGene};
use crate::error::{GaError, Result};
use log::debug;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Crossover strategy.
///
/// ```
/// use u_roompath::ga::Crossover;
/// use u_roompath::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let p1 = vec![0usize, 1, 2, 3, 4, 5, 6];
/// let p2 = vec![6usize, 5, 4, 3, 2, 1, 0];
/// let (c1, c2) = Crossover::Ordered.apply(&p1, &p2, &mut rng).unwrap();
/// assert_eq!(c1.len(), 7);
/// assert_eq!(c2.len(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Partially Mapped Crossover (PMX).
    ///
    /// Copies the template slice `[start, end)`. Every donor value not yet
    /// placed, in donor order, starts at the donor position of the template
    /// gene found where the donor holds it, and follows
    /// `idx = donor.index(template[idx])` until it lands on a free slot.
    PartiallyMapped,

    /// Improved cycle crossover.
    ///
    /// Starts from the donor's first gene and walks
    /// `next = donor[position of previous in template]`, writing left to
    /// right until a value repeats. Unfilled slots are completed with the
    /// donor's unused genes in donor order.
    #[default]
    ImprovedCycle,

    /// Order Crossover (OX).
    ///
    /// Copies the template slice `[start, end)` and fills the remaining
    /// slots circularly from `end` with donor genes read circularly from
    /// `end`, skipping genes already placed.
    Ordered,

    /// Fog crossover.
    ///
    /// Picks a break index `b` and shifts the template's genes from `b`
    /// one slot to the right, dropping its last gene. The open head is
    /// filled with donor genes in donor order.
    Fog,

    /// Slide crossover.
    ///
    /// Picks a break index `b` and moves the template's first `b` genes to
    /// the tail of the child. The open head is filled with donor genes in
    /// donor order.
    Slide,
}

impl Crossover {
    /// All crossover strategies.
    pub const ALL: [Crossover; 5] = [
        Crossover::PartiallyMapped,
        Crossover::ImprovedCycle,
        Crossover::Ordered,
        Crossover::Fog,
        Crossover::Slide,
    ];

    /// Short operator name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Crossover::PartiallyMapped => "PMX",
            Crossover::ImprovedCycle => "improved-cycle",
            Crossover::Ordered => "ordered",
            Crossover::Fog => "fog",
            Crossover::Slide => "slide",
        }
    }

    /// Produces two children from two parents.
    ///
    /// Parents of length 0 or 1 are returned unchanged.
    ///
    /// # Errors
    /// [`GaError::RepairFailure`] if a child slot cannot be filled, which
    /// only happens when the parents are not permutations of one alphabet
    /// after alignment.
    ///
    /// # Panics
    /// Panics if parents have different lengths.
    pub fn apply<T: PermutationGene, R: Rng>(
        self,
        parent1: &[T],
        parent2: &[T],
        rng: &mut R,
    ) -> Result<(Vec<T>, Vec<T>)> {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");

        if n < 2 {
            return Ok((parent1.to_vec(), parent2.to_vec()));
        }

        match self {
            Crossover::PartiallyMapped => {
                let (start, end) = distinct_pair(n, rng);
                Ok((
                    pmx_child(parent1, parent2, start, end)?,
                    pmx_child(parent2, parent1, start, end)?,
                ))
            }
            Crossover::ImprovedCycle => Ok((
                cycle_child(parent1, parent2)?,
                cycle_child(parent2, parent1)?,
            )),
            Crossover::Ordered => {
                let (start, end) = distinct_pair(n, rng);
                Ok((
                    ox_child(parent1, parent2, start, end)?,
                    ox_child(parent2, parent1, start, end)?,
                ))
            }
            Crossover::Fog => {
                let brk = rng.random_range(0..n);
                Ok((
                    fog_child(parent1, parent2, brk)?,
                    fog_child(parent2, parent1, brk)?,
                ))
            }
            Crossover::Slide => {
                let brk = rng.random_range(0..n);
                Ok((
                    slide_child(parent1, parent2, brk)?,
                    slide_child(parent2, parent1, brk)?,
                ))
            }
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crossover {
    type Err = GaError;

    /// Parses an operator name as printed by [`name`](Crossover::name),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Crossover::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GaError::Configuration(format!("unknown crossover operator {s:?}")))
    }
}

/// Copy of `template` rewritten into the donor's alphabet.
fn aligned<T: PermutationGene>(template: &[T], donor: &[T]) -> Vec<T> {
    let mut out = template.to_vec();
    T::align_to(&mut out, donor);
    out
}

/// Writes the donor's not-yet-placed genes, in donor order, into the empty
/// slots from left to right.
fn fill_from_donor<T: PermutationGene>(child: &mut [Option<T>], donor: &[T]) {
    let remaining: Vec<T> = donor
        .iter()
        .copied()
        .filter(|v| !child.contains(&Some(*v)))
        .collect();
    let mut remaining = remaining.into_iter();

    for slot in child.iter_mut().filter(|s| s.is_none()) {
        match remaining.next() {
            Some(v) => *slot = Some(v),
            None => break,
        }
    }
}

fn finish<T: PermutationGene>(child: Vec<Option<T>>, operator: &'static str) -> Result<Vec<T>> {
    child
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            slot.ok_or_else(|| GaError::RepairFailure {
                operator,
                reason: format!("slot {i} left empty"),
            })
        })
        .collect()
}

fn pmx_child<T: PermutationGene>(
    template: &[T],
    donor: &[T],
    start: usize,
    end: usize,
) -> Result<Vec<T>> {
    let template = aligned(template, donor);
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];

    for i in start..end {
        child[i] = Some(template[i]);
    }

    let donor_index = |value: T| {
        donor
            .iter()
            .position(|&v| v == value)
            .ok_or_else(|| GaError::RepairFailure {
                operator: "PMX",
                reason: format!("{value:?} has no counterpart in the donor"),
            })
    };

    let remaining: Vec<T> = donor
        .iter()
        .copied()
        .filter(|v| !child.contains(&Some(*v)))
        .collect();

    for value in remaining {
        let mut idx = donor_index(template[donor_index(value)?])?;
        let mut steps = 0usize;
        while child[idx].is_some() {
            idx = donor_index(template[idx])?;
            steps += 1;
            if steps > n {
                return Err(GaError::RepairFailure {
                    operator: "PMX",
                    reason: format!("mapping chain for {value:?} found no free slot"),
                });
            }
        }
        child[idx] = Some(value);
    }

    for (slot, &d) in child.iter_mut().zip(donor) {
        if slot.is_none() {
            *slot = Some(d);
        }
    }

    finish(child, "PMX")
}

fn cycle_child<T: PermutationGene>(template: &[T], donor: &[T]) -> Result<Vec<T>> {
    let template = aligned(template, donor);
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];

    child[0] = Some(donor[0]);
    let mut prev = donor[0];
    for idx in 1..n {
        let Some(pos) = template.iter().position(|&v| v == prev) else {
            break;
        };
        let next = donor[pos];
        if child.contains(&Some(next)) {
            break;
        }
        child[idx] = Some(next);
        prev = next;
    }

    if child.iter().any(Option::is_none) {
        if !child.contains(&Some(template[0])) {
            debug!(
                "improved-cycle walk did not close on {:?}; completing from donor order",
                template[0]
            );
        }
        fill_from_donor(&mut child, donor);
    }

    finish(child, "improved-cycle")
}

fn ox_child<T: PermutationGene>(
    template: &[T],
    donor: &[T],
    start: usize,
    end: usize,
) -> Result<Vec<T>> {
    let template = aligned(template, donor);
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];

    for i in start..end {
        child[i] = Some(template[i]);
    }

    let remaining: Vec<T> = (0..n)
        .map(|k| donor[(end + k) % n])
        .filter(|v| !child.contains(&Some(*v)))
        .collect();
    let mut remaining = remaining.into_iter();

    for k in 0..n {
        let pos = (end + k) % n;
        if child[pos].is_none() {
            match remaining.next() {
                Some(v) => child[pos] = Some(v),
                None => break,
            }
        }
    }

    finish(child, "ordered")
}

fn fog_child<T: PermutationGene>(template: &[T], donor: &[T], brk: usize) -> Result<Vec<T>> {
    let template = aligned(template, donor);
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];

    for i in brk..n - 1 {
        child[i + 1] = Some(template[i]);
    }
    fill_from_donor(&mut child, donor);

    finish(child, "fog")
}

fn slide_child<T: PermutationGene>(template: &[T], donor: &[T], brk: usize) -> Result<Vec<T>> {
    let template = aligned(template, donor);
    let n = template.len();
    let mut child: Vec<Option<T>> = vec![None; n];

    for (i, &gene) in template[..brk].iter().enumerate() {
        child[n - brk + i] = Some(gene);
    }
    fill_from_donor(&mut child, donor);

    finish(child, "slide")
}
