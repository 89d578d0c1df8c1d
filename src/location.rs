use ndarray::Ix;

/// One coordinate of a [`Location`].
pub type Coord = isize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
/// A location `(x, y)` on an unbounded grid. `y` grows downward, so north is negative `y`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The location as a `(row, column)` index into an [`ndarray::Array2`], if it is not negative.
    pub(crate) fn as_index(&self) -> Option<(Ix, Ix)> {
        Some((Ix::try_from(self.1).ok()?, Ix::try_from(self.0).ok()?))
    }

    /// The location moved by `(dx, dy)`.
    pub fn offset_by(self, rhs: (Coord, Coord)) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }

    /// Taxicab distance from the origin.
    pub fn distance(&self) -> usize {
        self.0.unsigned_abs() + self.1.unsigned_abs()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        // arrays this large cannot be allocated in the first place
        Self(value.1 as Coord, value.0 as Coord)
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn index_round_trip() {
        let location = Location::from((2, 5));
        assert_eq!(location, Location(5, 2));
        assert_eq!(location.as_index(), Some((2, 5)));
    }

    #[test]
    fn negative_has_no_index() {
        assert_eq!(Location(-1, 0).as_index(), None);
        assert_eq!(Location(0, -1).as_index(), None);
    }

    #[test]
    fn taxicab_distance() {
        assert_eq!(Location(2, -3).distance(), 5);
        assert_eq!(Location::default().distance(), 0);
    }
}
