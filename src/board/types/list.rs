//! Destination square list.

use std::ops::Index;

use super::square::Square;

// A queen in an open center reaches 27 squares, the most any single
// piece can; a king with both castling options reaches 10.
pub(crate) const MAX_DESTINATIONS: usize = 28;

/// List of destination squares with fixed-size backing array.
///
/// Returned by move generation; restartable (iterate it as often as
/// needed) and independent of the board it was generated from.
#[derive(Clone, Debug)]
pub struct SquareList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl SquareList {
    pub(crate) fn new() -> Self {
        SquareList {
            squares: [Square(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        debug_assert!(self.len < MAX_DESTINATIONS);
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    /// Membership test against the generated set
    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Square> {
        if idx < self.len {
            Some(self.squares[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Square> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        SquareList::new()
    }
}

/// Owning iterator over squares in a `SquareList`
pub struct SquareListIntoIter {
    list: SquareList,
    idx: usize,
}

impl Iterator for SquareListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let sq = self.list.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SquareListIntoIter {}

impl IntoIterator for SquareList {
    type Item = Square;
    type IntoIter = SquareListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        SquareListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "SquareList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}
