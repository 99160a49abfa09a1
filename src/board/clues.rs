//! Bounded, insertion-ordered clue collection

use crate::core::{BoardError, Clue, Direction};

/// Ordered sequence of clues with a capacity limit
///
/// Lookups and deletion are by clue number, first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueList {
    entries: Vec<Clue>,
    capacity: usize,
}

impl ClueList {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Append a clue
    ///
    /// # Errors
    /// Returns `BoardError::CapacityExceeded` when the list is full; the list is unchanged.
    pub fn push(&mut self, clue: Clue) -> Result<&Clue, BoardError> {
        if self.is_full() {
            return Err(BoardError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(clue);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove the first clue numbered `number`, keeping the others in order
    ///
    /// # Errors
    /// Returns `BoardError::NotFound` when no clue has that number.
    pub fn remove(&mut self, number: u32) -> Result<Clue, BoardError> {
        let index = self
            .position(number)
            .ok_or(BoardError::NotFound(number))?;
        Ok(self.entries.remove(index))
    }

    fn position(&self, number: u32) -> Option<usize> {
        self.entries.iter().position(|c| c.number() == number)
    }

    #[must_use]
    pub fn find(&self, number: u32) -> Option<&Clue> {
        self.entries.iter().find(|c| c.number() == number)
    }

    pub fn find_mut(&mut self, number: u32) -> Option<&mut Clue> {
        self.entries.iter_mut().find(|c| c.number() == number)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Clue] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clue> {
        self.entries.iter()
    }

    /// Clues running in `direction`, in insertion order
    pub fn in_direction(&self, direction: Direction) -> impl Iterator<Item = &Clue> {
        self.entries
            .iter()
            .filter(move |c| c.direction() == direction)
    }
}

impl<'a> IntoIterator for &'a ClueList {
    type Item = &'a Clue;
    type IntoIter = std::slice::Iter<'a, Clue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
