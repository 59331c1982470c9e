//! The three-slot hand of pieces waiting to be placed.

use crate::Bitset81;
use serde::{Deserialize, Serialize};

/// Ordered triple of pieces. A consumed slot holds `Bitset81::EMPTY`; the
/// hand is only refilled once every slot is empty.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    slots: [Bitset81; 3],
}

impl Hand {
    pub const EMPTY: Self = Self {
        slots: [Bitset81::EMPTY; 3],
    };

    pub fn new(slots: [Bitset81; 3]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> [Bitset81; 3] {
        self.slots
    }

    pub fn is_exhausted(&self) -> bool {
        self.slots.iter().all(|p| p.is_empty())
    }

    /// Pieces not yet played.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|p| p.any()).count()
    }

    /// Empty the first slot holding `piece`. Returns the slot index, or
    /// `None` if no slot matches (an empty piece never matches).
    pub fn consume(&mut self, piece: Bitset81) -> Option<usize> {
        if piece.is_empty() {
            return None;
        }
        let index = self.slots.iter().position(|&p| p == piece)?;
        self.slots[index] = Bitset81::EMPTY;
        Some(index)
    }
}

impl From<[Bitset81; 3]> for Hand {
    fn from(slots: [Bitset81; 3]) -> Self {
        Self::new(slots)
    }
}
