//! Core trait definitions for the GA framework.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic GA engine and domain-specific problem
//! implementations. [`Objective`] tells the engine which direction of the
//! fitness scale is better.

use crate::error::{GaError, Result};
use rand::Rng;

/// Attempt budget per requested individual for [`GaProblem::populate`].
pub const SEEDING_ATTEMPTS_PER_INDIVIDUAL: usize = 1_000;

/// Direction of optimization.
///
/// ```
/// use u_roompath::ga::Objective;
///
/// assert!(Objective::Minimize.is_better(1.0, 2.0));
/// assert!(Objective::Maximize.is_better(2.0, 1.0));
/// assert_eq!(Objective::Minimize.best_index(&[3.0, 1.0, 1.0]), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Lower fitness is better.
    #[default]
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl Objective {
    /// Returns `true` if `a` is strictly better than `b`.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Minimize => a < b,
            Objective::Maximize => a > b,
        }
    }

    /// Index of the first best value, or `None` for an empty slice.
    pub fn best_index(self, fitness: &[f64]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &f) in fitness.iter().enumerate() {
            match best {
                Some(b) if !self.is_better(f, fitness[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// The best value, or `None` for an empty slice.
    pub fn best_of(self, fitness: &[f64]) -> Option<f64> {
        self.best_index(fitness).map(|i| fitness[i])
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The GA framework calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync + std::fmt::Debug {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;

    /// Sets the fitness of this individual.
    ///
    /// Called by the GA framework after evaluation.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// Implementors supply:
///
/// 1. **Initialization**: how to create random individuals and which of
///    them are feasible enough to seed the population
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into two children
/// 4. **Mutation**: how to perturb an individual, gated by the mutation rate
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the GA runner evaluates
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual. It need not be feasible.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Whether an individual may enter the initial population.
    ///
    /// The default accepts everything.
    fn is_feasible(&self, _individual: &Self::Individual) -> bool {
        true
    }

    /// Builds the initial population by rejection sampling.
    ///
    /// Draws [`create_individual`](Self::create_individual) until `size`
    /// feasible individuals are collected. Gives up with
    /// [`GaError::SeedingExhausted`] after
    /// `size * SEEDING_ATTEMPTS_PER_INDIVIDUAL` draws.
    fn populate<R: Rng>(&self, size: usize, rng: &mut R) -> Result<Vec<Self::Individual>> {
        let max_attempts = size
            .saturating_mul(SEEDING_ATTEMPTS_PER_INDIVIDUAL)
            .max(SEEDING_ATTEMPTS_PER_INDIVIDUAL);
        let mut population = Vec::with_capacity(size);
        let mut attempts = 0usize;

        while population.len() < size {
            if attempts >= max_attempts {
                return Err(GaError::SeedingExhausted {
                    attempts,
                    accepted: population.len(),
                    requested: size,
                });
            }
            attempts += 1;

            let individual = self.create_individual(rng);
            if self.is_feasible(&individual) {
                population.push(individual);
            }
        }

        Ok(population)
    }

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be pure: the runner may call it concurrently.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Recombines two parents into two children.
    ///
    /// The default returns clones of both parents (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Result<(Self::Individual, Self::Individual)> {
        Ok((parent1.clone(), parent2.clone()))
    }

    /// Mutates an individual in place with probability `mutation_rate`.
    ///
    /// The probability draw belongs to the implementation so that each
    /// operator decides how the gate interacts with its own draws.
    /// The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _mutation_rate: f64, _rng: &mut R) {
    }

    /// Called at the end of each generation with that generation's best
    /// fitness. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}

    /// Human-readable form of a solution, used in the run summary log.
    ///
    /// The default uses the individual's `Debug` output.
    fn describe(&self, individual: &Self::Individual) -> String {
        format!("{individual:?}")
    }
}
