//! Pairwise focus-loss costs between rooms.

use super::gene::Room;
use crate::error::{GaError, Result};

/// Tolerance used when checking symmetry.
const SYMMETRY_EPS: f64 = 1e-9;

/// 8×8 transition cost matrix.
///
/// Guaranteed symmetric, with a zero diagonal and finite non-negative
/// entries. Shared read-only for the whole run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    values: [[f64; 8]; 8],
}

impl CostMatrix {
    /// Validates and wraps a matrix indexed by [`Room::index`].
    ///
    /// # Errors
    /// [`GaError::InvalidCostMatrix`] naming the first offending entry.
    pub fn new(values: [[f64; 8]; 8]) -> Result<Self> {
        for (i, row) in values.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if !v.is_finite() || v < 0.0 {
                    return Err(GaError::InvalidCostMatrix(format!(
                        "entry ({i}, {j}) = {v} must be finite and non-negative"
                    )));
                }
                if i == j && v != 0.0 {
                    return Err(GaError::InvalidCostMatrix(format!(
                        "diagonal entry ({i}, {i}) = {v} must be zero"
                    )));
                }
                if (v - values[j][i]).abs() > SYMMETRY_EPS {
                    return Err(GaError::InvalidCostMatrix(format!(
                        "entries ({i}, {j}) = {v} and ({j}, {i}) = {} differ",
                        values[j][i]
                    )));
                }
            }
        }
        Ok(Self { values })
    }

    /// The reference focus-loss dataset used for tuning the operators.
    pub fn classroom() -> Self {
        Self {
            values: [
                [0.0, 10.2, 16.0, 4.0, 6.0, 12.0, 7.5, 9.0],
                [10.2, 0.0, 4.3, 8.0, 11.0, 2.2, 3.0, 11.5],
                [16.0, 4.3, 0.0, 9.0, 3.0, 6.0, 7.0, 5.0],
                [4.0, 8.0, 9.0, 0.0, 11.0, 10.5, 5.0, 2.0],
                [6.0, 11.0, 3.0, 11.0, 0.0, 9.8, 4.0, 10.0],
                [12.0, 2.2, 6.0, 10.5, 9.8, 0.0, 8.0, 8.0],
                [7.5, 3.0, 7.0, 5.0, 4.0, 8.0, 0.0, 10.1],
                [9.0, 11.5, 5.0, 2.0, 10.0, 8.0, 10.1, 0.0],
            ],
        }
    }

    /// Cost of moving from `from` to `to`.
    pub fn cost(&self, from: Room, to: Room) -> f64 {
        self.values[from.index()][to.index()]
    }

    /// Sum of consecutive transition costs along `path`.
    pub fn path_cost(&self, path: impl IntoIterator<Item = Room>) -> f64 {
        let mut iter = path.into_iter();
        let Some(mut prev) = iter.next() else {
            return 0.0;
        };
        let mut total = 0.0;
        for room in iter {
            total += self.cost(prev, room);
            prev = room;
        }
        total
    }

    /// Raw matrix rows.
    pub fn values(&self) -> &[[f64; 8]; 8] {
        &self.values
    }
}
