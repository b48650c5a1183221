//! Rooms and genes.

use crate::ga::PermutationGene;
use std::fmt;

/// One of the eight rooms, `A` through `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Room {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Room {
    /// All rooms in index order.
    pub const ALL: [Room; 8] = [
        Room::A,
        Room::B,
        Room::C,
        Room::D,
        Room::E,
        Room::F,
        Room::G,
        Room::H,
    ];

    /// Row/column of this room in a [`CostMatrix`](super::CostMatrix).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Room at `index`, if any.
    pub fn from_index(index: usize) -> Option<Room> {
        Room::ALL.get(index).copied()
    }

    /// Single-letter label.
    pub fn label(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One chromosome position: a room, or the marker for the optional room
/// being left out of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gene {
    Room(Room),
    Omitted,
}

impl Gene {
    /// The room held by this gene, `None` when omitted.
    pub fn room(self) -> Option<Room> {
        match self {
            Gene::Room(r) => Some(r),
            Gene::Omitted => None,
        }
    }

    pub fn is_omitted(self) -> bool {
        matches!(self, Gene::Omitted)
    }
}

impl From<Room> for Gene {
    fn from(room: Room) -> Self {
        Gene::Room(room)
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gene::Room(r) => write!(f, "{r}"),
            Gene::Omitted => f.write_str("-"),
        }
    }
}

impl PermutationGene for Gene {
    /// Swaps the optional room and [`Gene::Omitted`] in `template` when the
    /// two parents disagree on whether the optional room is visited.
    fn align_to(template: &mut [Gene], donor: &[Gene]) {
        let optional = Gene::Room(super::OPTIONAL_ROOM);
        let template_has = template.contains(&optional);
        let template_omits = template.contains(&Gene::Omitted);
        let donor_has = donor.contains(&optional);
        let donor_omits = donor.contains(&Gene::Omitted);

        if (template_has && donor_omits) || (template_omits && donor_has) {
            for gene in template.iter_mut() {
                *gene = match *gene {
                    Gene::Omitted => optional,
                    g if g == optional => Gene::Omitted,
                    g => g,
                };
            }
        }
    }
}
