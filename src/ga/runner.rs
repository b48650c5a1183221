//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! elitism → evaluation → repeat, for a fixed number of generations.

use super::config::GaConfig;
use super::journal::GenerationJournal;
use super::types::{GaProblem, Individual};
use crate::error::{GaError, Result};
use crate::random::create_rng;
use log::{debug, info};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The final population.
    pub population: Vec<I>,

    /// Fitness of each member of [`population`](Self::population), in order.
    pub fitness: Vec<f64>,

    /// The best individual of the final population.
    pub best: I,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each generation, when
    /// [`GaConfig::record_convergence`] is set.
    pub convergence: Option<Vec<f64>>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_roompath::ga::{GaConfig, GaRunner};
/// use u_roompath::rooms::{CostMatrix, RoomProblem};
///
/// let problem = RoomProblem::new(CostMatrix::classroom());
/// let config = GaConfig::default()
///     .with_max_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.population.len(), 50);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// - [`GaError::Configuration`] if `config` is invalid; nothing runs.
    /// - [`GaError::SeedingExhausted`] if the initial population cannot be
    ///   filled.
    /// - [`GaError::RepairFailure`] if a crossover cannot complete a child.
    /// - [`GaError::GenerationLog`] if the generation log cannot be written.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let mut journal = match &config.log_path {
            Some(path) if config.log_generations => Some(GenerationJournal::open(path)?),
            _ => None,
        };

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let objective = config.objective;
        let size = config.population_size;

        // 1. Initialize and evaluate
        let mut population = problem.populate(size, &mut rng)?;
        evaluate_population(problem, &mut population, config.parallel);
        debug!(
            "initial population of {} evaluated, best {:?}",
            size,
            objective.best_of(&fitness_of(&population))
        );

        let mut convergence = config
            .record_convergence
            .then(|| Vec::with_capacity(config.max_generations));

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            let mut offspring: Vec<P::Individual> = Vec::with_capacity(size + 1);

            while offspring.len() < size {
                let p1 = &population[config.selection.select(&population, objective, &mut rng)];
                let p2 = &population[config.selection.select(&population, objective, &mut rng)];

                let (mut o1, mut o2) = if rng.random::<f64>() < config.crossover_rate {
                    problem.crossover(p1, p2, &mut rng)?
                } else {
                    (p1.clone(), p2.clone())
                };

                problem.mutate(&mut o1, config.mutation_rate, &mut rng);
                problem.mutate(&mut o2, config.mutation_rate, &mut rng);

                offspring.push(o1);
                offspring.push(o2);
            }
            offspring.truncate(size);

            if config.elitism {
                let elite = best_index(&population, config)?;
                if let Some(last) = offspring.last_mut() {
                    *last = population[elite].clone();
                }
            }

            population = offspring;
            evaluate_population(problem, &mut population, config.parallel);

            let gen_best = population[best_index(&population, config)?].fitness();

            if config.verbose {
                info!("generation {gen:>4} | best {gen_best}");
            } else {
                debug!("generation {gen:>4} | best {gen_best}");
            }
            if let Some(journal) = journal.as_mut() {
                journal.record(gen, gen_best)?;
            }
            if let Some(trace) = convergence.as_mut() {
                trace.push(gen_best);
            }
            problem.on_generation(gen, gen_best);
        }

        let fitness = fitness_of(&population);
        let best_idx = best_index(&population, config)?;
        let best = population[best_idx].clone();
        let best_fitness = fitness[best_idx];

        if config.verbose {
            info!("{}", summary(problem, &best, best_fitness, config.max_generations));
        }

        Ok(GaResult {
            population,
            fitness,
            best,
            best_fitness,
            generations: config.max_generations,
            convergence,
        })
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], _parallel: bool) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Final log line: generation count, best fitness and the best solution.
fn summary<P: GaProblem>(
    problem: &P,
    best: &P::Individual,
    best_fitness: f64,
    generations: usize,
) -> String {
    format!(
        "finished {generations} generations, best fitness {best_fitness}: {}",
        problem.describe(best)
    )
}

fn fitness_of<I: Individual>(population: &[I]) -> Vec<f64> {
    population.iter().map(Individual::fitness).collect()
}

/// Index of the best individual under the configured objective.
fn best_index<I: Individual>(population: &[I], config: &GaConfig) -> Result<usize> {
    config
        .objective
        .best_index(&fitness_of(population))
        .ok_or_else(|| GaError::Configuration("population is empty".into()))
}

// ============================================================================
// Tests
// ============================================================================
