//! Room-ordering domain.
//!
//! Orders eight rooms into a path that minimizes accumulated focus loss.
//! Room `H` always closes the path, `A` must be visited before `F`, and room
//! `C` may be skipped, but only when `B` is visited right after `F`.
//!
//! # Key Types
//!
//! - [`Room`], [`Gene`]: the alphabet, with [`Gene::Omitted`] marking a
//!   skipped optional room
//! - [`Chromosome`]: eight genes plus fitness; validity rules and random
//!   factory
//! - [`CostMatrix`]: validated symmetric transition costs
//! - [`RoomProblem`]: the [`GaProblem`](crate::ga::GaProblem) implementation

mod chromosome;
mod costs;
mod gene;
mod problem;

pub use chromosome::{Chromosome, CHROMOSOME_LEN, PREFIX_LEN};
pub use costs::CostMatrix;
pub use gene::{Gene, Room};
pub use problem::{RoomProblem, INVALID_PENALTY};

/// Room that always ends the path.
pub const TERMINAL_ROOM: Room = Room::H;

/// Room that may be left out of the path.
pub const OPTIONAL_ROOM: Room = Room::C;
