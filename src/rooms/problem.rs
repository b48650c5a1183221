//! The room-ordering problem plugged into the GA engine.

use super::chromosome::Chromosome;
use super::costs::CostMatrix;
use crate::error::Result;
use crate::ga::{Crossover, GaProblem, Individual, Mutation};
use rand::Rng;

/// Fitness given to any chromosome that breaks a validity rule.
///
/// Exceeds the cost of every real path over the expected data range, so
/// invalid individuals lose every comparison under minimization.
pub const INVALID_PENALTY: f64 = 150.0;

/// Room ordering with a fixed cost matrix and chosen operators.
///
/// # Examples
///
/// ```
/// use u_roompath::ga::{Crossover, Mutation};
/// use u_roompath::rooms::{Chromosome, CostMatrix, Room, RoomProblem};
///
/// let problem = RoomProblem::new(CostMatrix::classroom())
///     .with_crossover(Crossover::Ordered)
///     .with_mutation(Mutation::InvertedExchange);
///
/// use Room::*;
/// let path = Chromosome::from_rooms([A, B, C, D, E, F, G, H]);
/// assert!((problem.fitness(&path) - 62.4).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct RoomProblem {
    costs: CostMatrix,
    crossover: Crossover,
    mutation: Mutation,
}

impl RoomProblem {
    /// Improved-cycle crossover and swap mutation by default.
    pub fn new(costs: CostMatrix) -> Self {
        Self {
            costs,
            crossover: Crossover::default(),
            mutation: Mutation::default(),
        }
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn crossover_strategy(&self) -> Crossover {
        self.crossover
    }

    pub fn mutation_strategy(&self) -> Mutation {
        self.mutation
    }

    /// Total focus loss along the visited rooms, rounded to one decimal.
    ///
    /// An omitted gene is skipped: its neighbours are joined directly.
    /// Invalid chromosomes score exactly [`INVALID_PENALTY`].
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        if !chromosome.is_valid() {
            return INVALID_PENALTY;
        }
        let total = self.costs.path_cost(chromosome.path());
        (total * 10.0).round() / 10.0
    }
}

impl GaProblem for RoomProblem {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(rng)
    }

    fn is_feasible(&self, chromosome: &Chromosome) -> bool {
        chromosome.is_valid()
    }

    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        self.fitness(chromosome)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome)> {
        let (c1, c2) = self.crossover.apply(parent1.prefix(), parent2.prefix(), rng)?;
        Ok((Chromosome::from_prefix(&c1)?, Chromosome::from_prefix(&c2)?))
    }

    fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, mutation_rate: f64, rng: &mut R) {
        if self.mutation.apply(chromosome.prefix_mut(), mutation_rate, rng) {
            chromosome.set_fitness(f64::INFINITY);
        }
    }

    fn describe(&self, chromosome: &Chromosome) -> String {
        chromosome.to_string()
    }
}
