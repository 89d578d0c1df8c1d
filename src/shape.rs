use strum::VariantArray;

use crate::location::Location;

/// A single step in one of the four cardinal directions.
///
/// On a keypad these are the `U`, `D`, `L` and `R` instructions.
/// On the street grid walked by [`Walk`](crate::walk::Walk), [`Up`](Step::Up) is north.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
    // switch it up like nintendo
}

/// A quarter turn, as found at the start of every taxicab instruction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Turn {
    Left,
    Right,
}

impl Step {
    /// Parse a keypad instruction character. Anything but `U`, `D`, `L` and `R` is not an instruction.
    pub fn from_instruction(instruction: char) -> Option<Self> {
        match instruction {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Attempt the step from `location` and return the resultant [`Location`].
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The heading after making `turn` while facing `self`.
    pub fn turn(&self, turn: Turn) -> Self {
        match (self, turn) {
            (Self::Up, Turn::Left) | (Self::Down, Turn::Right) => Self::Left,
            (Self::Up, Turn::Right) | (Self::Down, Turn::Left) => Self::Right,
            (Self::Left, Turn::Left) | (Self::Right, Turn::Right) => Self::Down,
            (Self::Left, Turn::Right) | (Self::Right, Turn::Left) => Self::Up,
        }
    }

    /// Determine the direction from `a` to `b`, if they are adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::{Step, Turn};
    use crate::location::Location;

    #[test]
    fn instructions() {
        assert_eq!(Step::from_instruction('U'), Some(Step::Up));
        assert_eq!(Step::from_instruction('R'), Some(Step::Right));
        assert_eq!(Step::from_instruction('u'), None);
        assert_eq!(Step::from_instruction('5'), None);
        assert_eq!(Step::from_instruction(' '), None);
    }

    #[test]
    fn invert_undoes_step() {
        let origin = Location(3, -2);
        for step in Step::VARIANTS {
            assert_eq!(step.invert().attempt_from(step.attempt_from(origin)), origin);
            assert_eq!(step.invert().invert(), *step);
        }
    }

    #[test]
    fn four_turns_come_full_circle() {
        for step in Step::VARIANTS {
            for turn in [Turn::Left, Turn::Right] {
                let heading = (0..4).fold(*step, |heading, _| heading.turn(turn));
                assert_eq!(heading, *step);
            }
            assert_eq!(step.turn(Turn::Left).turn(Turn::Right), *step);
            assert_eq!(step.turn(Turn::Right).turn(Turn::Right), step.invert());
        }
    }

    #[test]
    fn right_from_north_is_east() {
        assert_eq!(Step::Up.turn(Turn::Right), Step::Right);
        assert_eq!(Step::Up.turn(Turn::Left), Step::Left);
    }

    #[test]
    fn direction_between_locations() {
        assert_eq!(Step::direction_to(Location(0, 0), Location(0, 1)), Some(Step::Down));
        assert_eq!(Step::direction_to(Location(0, 0), Location(-1, 0)), Some(Step::Left));
        assert_eq!(Step::direction_to(Location(0, 0), Location(1, 1)), None);
    }
}
