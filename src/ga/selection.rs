//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Parents are drawn one at a time, with replacement, so the
//! two parents of a pair may be the same individual.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Individual, Objective};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_roompath::ga::Selection;
///
/// // Fitness-proportionate (the default)
/// let sel = Selection::Roulette;
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Under minimization each individual gets weight `1 - f / Σf`, so
    /// lower scores weigh more. Under maximization the weight is `f / Σf`.
    /// Equal scores give equal weights and the draw becomes uniform.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Roulette,

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        objective: Objective,
        rng: &mut R,
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => roulette(population, objective, rng),
            Selection::Tournament(k) => tournament(population, *k, objective, rng),
        }
    }
}

/// Roulette wheel over the proportional weights described on
/// [`Selection::Roulette`].
fn roulette<I: Individual, R: Rng>(population: &[I], objective: Objective, rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = population.iter().map(|ind| ind.fitness()).collect();
    let sum: f64 = fitnesses.iter().sum();

    if sum == 0.0 || !sum.is_finite() {
        return rng.random_range(0..n);
    }

    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            let w = match objective {
                Objective::Minimize => 1.0 - f / sum,
                Objective::Maximize => f / sum,
            };
            w.max(0.0)
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<I: Individual, R: Rng>(
    population: &[I],
    k: usize,
    objective: Objective,
    rng: &mut R,
) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if objective.is_better(population[idx].fitness(), population[best_idx].fitness()) {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone, Debug)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    fn draw_counts(sel: Selection, pop: &[TestInd], objective: Objective, n: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..n {
            counts[sel.select(pop, objective, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_roulette_favors_lowest_when_minimizing() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let counts = draw_counts(Selection::Roulette, &pop, Objective::Minimize, 10000);
        // weights: 0.565, 0.782, 0.996, 0.652
        assert!(
            counts[2] > counts[0],
            "best should be selected more often: {counts:?}"
        );
        assert!(counts[2] > counts[3], "{counts:?}");
    }

    #[test]
    fn test_roulette_favors_highest_when_maximizing() {
        let pop = make_population(&[100.0, 50.0, 1.0, 80.0]);
        let counts = draw_counts(Selection::Roulette, &pop, Objective::Maximize, 10000);
        assert!(counts[0] > counts[2], "{counts:?}");
        assert!(counts[2] < 200, "near-zero weight drawn too often: {counts:?}");
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let pop = make_population(&[5.0, 5.0, 5.0, 5.0]);
        let counts = draw_counts(Selection::Roulette, &pop, Objective::Minimize, 20000);
        for &c in &counts {
            assert!(
                (4400..=5600).contains(&c),
                "expected roughly 5000 each, got {counts:?}"
            );
        }
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0]);
        let counts = draw_counts(Selection::Roulette, &pop, Objective::Minimize, 9000);
        for &c in &counts {
            assert!(c > 2500, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let counts = draw_counts(Selection::Tournament(4), &pop, Objective::Minimize, 10000);
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_respects_maximize() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let counts = draw_counts(Selection::Tournament(4), &pop, Objective::Maximize, 10000);
        assert!(counts[0] > 6000, "{counts:?}");
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Roulette.select(&pop, Objective::Minimize, &mut rng), 0);
        assert_eq!(
            Selection::Tournament(3).select(&pop, Objective::Minimize, &mut rng),
            0
        );
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        Selection::Roulette.select(&pop, Objective::Minimize, &mut rng);
    }
}
