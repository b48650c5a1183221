//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use super::types::Objective;
use crate::error::{GaError, Result};
use std::path::{Path, PathBuf};

/// Configuration for the Genetic Algorithm.
///
/// Built once before a run and never changed while the run is in
/// progress.
///
/// # Defaults
///
/// ```
/// use u_roompath::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 200);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_roompath::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Roulette)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.35)
///     .with_convergence(true)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Odd sizes are allowed; the last offspring of the final pair is
    /// dropped.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Whether lower or higher fitness is better.
    pub objective: Objective,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, clones of both parents are used.
    pub crossover_rate: f64,

    /// Probability handed to the problem's mutation gate (0.0–1.0).
    pub mutation_rate: f64,

    /// Copy the previous generation's best individual into the last slot
    /// of each new population.
    pub elitism: bool,

    /// Report every generation's best fitness at `info` level instead of
    /// `debug`, plus a final summary.
    pub verbose: bool,

    /// Append `generation,best_fitness` rows to [`log_path`](Self::log_path).
    pub log_generations: bool,

    /// Destination of the generation log. Required when
    /// [`log_generations`](Self::log_generations) is set.
    pub log_path: Option<PathBuf>,

    /// Return the per-generation best fitness in
    /// [`GaResult::convergence`](super::GaResult::convergence).
    pub record_convergence: bool,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect when the `parallel` feature is disabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            objective: Objective::Minimize,
            selection: Selection::default(),
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            elitism: true,
            verbose: false,
            log_generations: false,
            log_path: None,
            record_convergence: false,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the optimization direction.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables per-generation `info` reporting.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables or disables the generation log without touching its
    /// destination.
    pub fn with_generation_log(mut self, enabled: bool) -> Self {
        self.log_generations = enabled;
        self
    }

    /// Enables the generation log and sets its destination.
    pub fn with_log_path(mut self, path: impl AsRef<Path>) -> Self {
        self.log_generations = true;
        self.log_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enables or disables the convergence trace.
    pub fn with_convergence(mut self, record: bool) -> Self {
        self.record_convergence = record;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::Configuration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::Configuration(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GaError::Configuration(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GaError::Configuration(
                "crossover_rate must lie in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::Configuration(
                "mutation_rate must lie in [0, 1]".into(),
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(GaError::Configuration(
                "tournament size must be at least 1".into(),
            ));
        }
        if self.log_generations && self.log_path.is_none() {
            return Err(GaError::Configuration(
                "generation log enabled but no log_path given".into(),
            ));
        }
        Ok(())
    }
}
