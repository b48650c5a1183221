//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. Users define
//! their problem by implementing [`GaProblem`], which specifies how to
//! create, evaluate, crossover, and mutate individuals; the engine owns the
//! generational loop, selection, elitism, and run bookkeeping.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its fitness
//! - [`GaProblem`]: Problem definition and operators
//! - [`PermutationGene`]: Gene type usable by the permutation operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population, rates, elitism, logging)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population, scores, and convergence trace
//! - [`Selection`], [`Crossover`], [`Mutation`]: Closed strategy sets
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod journal;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{Crossover, Mutation, PermutationGene};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{GaProblem, Individual, Objective, SEEDING_ATTEMPTS_PER_INDIVIDUAL};
