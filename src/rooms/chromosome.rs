//! Fixed-length room chromosome, its validity rules, and its random factory.
//!
//! # Encoding
//!
//! Eight genes. The first seven are a permutation of rooms `A..=G`, except
//! that room `C` may be replaced by [`Gene::Omitted`]; the eighth is always
//! room `H`. Operators only ever see the seven-gene prefix, so the terminal
//! room never moves.
//!
//! # Validity
//!
//! 1. every room other than `C` appears, and no gene value repeats
//! 2. the last gene is `H`
//! 3. `A` comes before `F`
//! 4. if `C` is omitted, `B` comes right after `F`

use super::gene::{Gene, Room};
use super::{OPTIONAL_ROOM, TERMINAL_ROOM};
use crate::error::{GaError, Result};
use crate::ga::Individual;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Number of genes in a chromosome.
pub const CHROMOSOME_LEN: usize = 8;

/// Number of genes operators work on (everything but the terminal room).
pub const PREFIX_LEN: usize = CHROMOSOME_LEN - 1;

/// A candidate room ordering.
///
/// Lower fitness = better path (minimization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: [Gene; CHROMOSOME_LEN],
    fitness: f64,
}

impl Individual for Chromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl Chromosome {
    /// Wraps eight genes as an unevaluated chromosome. No validity check.
    pub fn new(genes: [Gene; CHROMOSOME_LEN]) -> Self {
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Builds a chromosome from eight rooms.
    pub fn from_rooms(rooms: [Room; CHROMOSOME_LEN]) -> Self {
        Self::new(rooms.map(Gene::Room))
    }

    /// Builds a chromosome from a seven-gene prefix and the terminal room.
    ///
    /// # Errors
    /// [`GaError::PrefixLength`] if `prefix` does not hold exactly
    /// [`PREFIX_LEN`] genes.
    pub fn from_prefix(prefix: &[Gene]) -> Result<Self> {
        if prefix.len() != PREFIX_LEN {
            return Err(GaError::PrefixLength {
                expected: PREFIX_LEN,
                actual: prefix.len(),
            });
        }
        let mut genes = [Gene::Room(TERMINAL_ROOM); CHROMOSOME_LEN];
        genes[..PREFIX_LEN].copy_from_slice(prefix);
        Ok(Self::new(genes))
    }

    /// Creates a random chromosome.
    ///
    /// Shuffles rooms `A..=G`, appends `H`, and, when `B` lands right after
    /// `F`, omits `C` with probability 1/2. The result can still break the
    /// `A`-before-`F` rule; callers filter with [`is_valid`](Self::is_valid).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut prefix: Vec<Gene> = Room::ALL[..PREFIX_LEN]
            .iter()
            .copied()
            .map(Gene::Room)
            .collect();
        prefix.shuffle(rng);

        let b = position_in(&prefix, Room::B);
        let f = position_in(&prefix, Room::F);
        if let (Some(b), Some(f)) = (b, f) {
            if b == f + 1 && rng.random_bool(0.5) {
                if let Some(c) = position_in(&prefix, OPTIONAL_ROOM) {
                    prefix[c] = Gene::Omitted;
                }
            }
        }

        let mut genes = [Gene::Room(TERMINAL_ROOM); CHROMOSOME_LEN];
        genes[..PREFIX_LEN].copy_from_slice(&prefix);
        Self::new(genes)
    }

    /// All eight genes.
    pub fn genes(&self) -> &[Gene; CHROMOSOME_LEN] {
        &self.genes
    }

    /// The seven genes before the terminal room.
    pub fn prefix(&self) -> &[Gene] {
        &self.genes[..PREFIX_LEN]
    }

    /// Mutable access to the prefix; the terminal gene stays out of reach.
    pub(crate) fn prefix_mut(&mut self) -> &mut [Gene] {
        &mut self.genes[..PREFIX_LEN]
    }

    /// Position of `room`, if present.
    pub fn position(&self, room: Room) -> Option<usize> {
        position_in(&self.genes, room)
    }

    /// Whether the optional room is left out.
    pub fn omits_optional(&self) -> bool {
        self.genes.iter().any(|g| g.is_omitted())
    }

    /// Rooms actually visited, in order.
    pub fn path(&self) -> impl Iterator<Item = Room> + '_ {
        self.genes.iter().filter_map(|g| g.room())
    }

    /// Checks every validity rule listed in the module docs.
    pub fn is_valid(&self) -> bool {
        for (i, gene) in self.genes.iter().enumerate() {
            if self.genes[i + 1..].contains(gene) {
                return false;
            }
        }

        let required = Room::ALL.iter().filter(|&&r| r != OPTIONAL_ROOM);
        for &room in required {
            if self.position(room).is_none() {
                return false;
            }
        }

        if self.genes[CHROMOSOME_LEN - 1] != Gene::Room(TERMINAL_ROOM) {
            return false;
        }

        let (Some(a), Some(b), Some(f)) = (
            self.position(Room::A),
            self.position(Room::B),
            self.position(Room::F),
        ) else {
            return false;
        };

        if a > f {
            return false;
        }

        if self.omits_optional() && b != f + 1 {
            return false;
        }

        true
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}

fn position_in(genes: &[Gene], room: Room) -> Option<usize> {
    genes.iter().position(|&g| g == Gene::Room(room))
}
