//! Genetic algorithm engine for ordering rooms into a minimum focus-loss
//! path.
//!
//! - **GA engine** ([`ga`]): generational loop with pluggable selection,
//!   five permutation crossovers, four permutation mutations, elitism,
//!   convergence trace, and an append-only generation log.
//! - **Room domain** ([`rooms`]): eight-gene chromosomes whose optional
//!   room can be marked omitted, validity rules, the random factory, the
//!   cost matrix, and the fitness evaluator.
//!
//! # Example
//!
//! ```
//! use u_roompath::ga::{Crossover, GaConfig, GaRunner, Mutation};
//! use u_roompath::rooms::{CostMatrix, RoomProblem};
//!
//! let problem = RoomProblem::new(CostMatrix::classroom())
//!     .with_crossover(Crossover::ImprovedCycle)
//!     .with_mutation(Mutation::Swap);
//! let config = GaConfig::default()
//!     .with_max_generations(30)
//!     .with_convergence(true)
//!     .with_seed(1);
//!
//! let result = GaRunner::run(&problem, &config).unwrap();
//! assert!(result.best.is_valid());
//! assert_eq!(result.convergence.unwrap().len(), 30);
//! ```
//!
//! Runs with the same configuration and seed are reproducible: one seeded
//! generator feeds every random draw, and parallel evaluation never
//! touches it.

pub mod error;
pub mod ga;
pub mod random;
pub mod rooms;

pub use error::{GaError, Result};
