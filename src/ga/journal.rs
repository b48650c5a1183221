//! Per-generation CSV log.
//!
//! One `generation,best_fitness` row per generation, appended and flushed
//! as the run progresses so a partial log survives an aborted run.

use crate::error::{GaError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Append-only writer for the generation log.
pub(crate) struct GenerationJournal {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl GenerationJournal {
    /// Opens `path` for appending, creating the file if needed.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| GaError::GenerationLog {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Appends one row and flushes it.
    pub(crate) fn record(&mut self, generation: usize, best_fitness: f64) -> Result<()> {
        writeln!(self.writer, "{generation},{best_fitness}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| GaError::GenerationLog {
                path: self.path.clone(),
                source,
            })
    }
}
