//! Error types shared by the GA engine and the room domain.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the GA engine, its operators, and the room domain.
#[derive(Error, Debug)]
pub enum GaError {
    /// Invalid combination of run parameters. Raised before any work starts.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The population seeder hit its attempt cap before collecting enough
    /// feasible individuals.
    #[error(
        "population seeding gave up after {attempts} attempts \
         ({accepted}/{requested} feasible individuals)"
    )]
    SeedingExhausted {
        attempts: usize,
        accepted: usize,
        requested: usize,
    },

    /// A crossover operator could not fill every slot of an offspring.
    #[error("{operator} crossover left an incomplete offspring: {reason}")]
    RepairFailure {
        operator: &'static str,
        reason: String,
    },

    /// The cost matrix is not symmetric, has a non-zero diagonal, or holds
    /// negative or non-finite entries.
    #[error("invalid cost matrix: {0}")]
    InvalidCostMatrix(String),

    /// A gene prefix had the wrong number of genes.
    #[error("chromosome prefix must hold {expected} genes, got {actual}")]
    PrefixLength { expected: usize, actual: usize },

    /// Writing the per-generation log failed.
    #[error("generation log {}: {source}", .path.display())]
    GenerationLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GaError>;
