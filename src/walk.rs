//! Walking the street grid from a list of turns and block counts.

use std::collections::HashSet;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::location::Location;
use crate::shape::{Step, Turn};

/// Reasons a walk instruction cannot be read.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum WalkError {
    /// The instruction does not start with `L` or `R`.
    #[error("instruction `{0}` does not start with a turn (L or R)")]
    BadTurn(String),
    /// The turn is not followed by a plain number of blocks.
    #[error("instruction `{0}` does not end with a number of blocks")]
    BadBlocks(String),
}

/// Turn, then walk `blocks` blocks straight ahead.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instruction {
    /// Which way to turn before walking.
    pub turn: Turn,
    /// How many blocks to walk after turning.
    pub blocks: usize,
}

impl FromStr for Instruction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let turn = match chars.next() {
            Some('L') => Turn::Left,
            Some('R') => Turn::Right,
            _ => return Err(WalkError::BadTurn(s.to_owned())),
        };
        let count = chars.as_str();
        // `usize` parsing would also take a leading `+`
        if !count.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(WalkError::BadBlocks(s.to_owned()));
        }
        let blocks = count.parse().map_err(|_| WalkError::BadBlocks(s.to_owned()))?;

        Ok(Self { turn, blocks })
    }
}

/// A walker on the street grid, starting at the origin and facing north.
#[derive(Clone, Debug)]
pub struct Walk {
    location: Location,
    heading: Step,
    visited: HashSet<Location>,
    first_revisited: Option<Location>,
}

impl Default for Walk {
    fn default() -> Self {
        Self {
            location: Location::default(),
            heading: Step::Up,
            visited: HashSet::new(),
            first_revisited: None,
        }
    }
}

impl Walk {
    /// Follow a comma separated list of instructions such as `R2, L3` from the origin.
    pub fn parse(input: &str) -> Result<Self, WalkError> {
        let mut walk = Self::default();

        for instruction in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            walk.follow(instruction.parse()?);
        }

        Ok(walk)
    }

    /// Turn, then walk block by block, remembering every intersection passed.
    pub fn follow(&mut self, instruction: Instruction) -> &mut Self {
        self.heading = self.heading.turn(instruction.turn);

        for _ in 0..instruction.blocks {
            self.location = self.heading.attempt_from(self.location);

            // the origin is not visited until the walk comes back to it
            if !self.visited.insert(self.location) && self.first_revisited.is_none() {
                debug!("first revisit at {:?}", self.location);
                self.first_revisited = Some(self.location);
            }
        }

        self
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn heading(&self) -> Step {
        self.heading
    }

    /// Taxicab distance from the origin to where the walk ended.
    pub fn distance(&self) -> usize {
        self.location.distance()
    }

    /// The first intersection entered twice, if any.
    pub fn first_revisited(&self) -> Option<Location> {
        self.first_revisited
    }
}

#[cfg(test)]
mod tests {
    use super::{Instruction, Walk, WalkError};
    use crate::location::Location;
    use crate::shape::{Step, Turn};

    #[test]
    fn parse_instruction() {
        assert_eq!("R2".parse(), Ok(Instruction { turn: Turn::Right, blocks: 2 }));
        assert_eq!("L190".parse(), Ok(Instruction { turn: Turn::Left, blocks: 190 }));
        assert_eq!("X2".parse::<Instruction>(), Err(WalkError::BadTurn("X2".to_owned())));
        assert_eq!("".parse::<Instruction>(), Err(WalkError::BadTurn("".to_owned())));
        assert_eq!("R".parse::<Instruction>(), Err(WalkError::BadBlocks("R".to_owned())));
        assert_eq!("R-2".parse::<Instruction>(), Err(WalkError::BadBlocks("R-2".to_owned())));
        assert_eq!("R+2".parse::<Instruction>(), Err(WalkError::BadBlocks("R+2".to_owned())));
    }

    #[test]
    fn distances() {
        assert_eq!(Walk::parse("R2, L3").unwrap().distance(), 5);
        assert_eq!(Walk::parse("R2, R2, R2").unwrap().distance(), 2);
        assert_eq!(Walk::parse("R5, L5, R5, R3").unwrap().distance(), 12);
    }

    #[test]
    fn ends_due_south() {
        let walk = Walk::parse("R2, R2, R2").unwrap();
        assert_eq!(walk.location(), Location(0, 2));
        assert_eq!(walk.heading(), Step::Left);
    }

    #[test]
    fn first_revisit() {
        let walk = Walk::parse("R8, R4, R4, R8").unwrap();
        assert_eq!(walk.first_revisited(), Some(Location(4, 0)));
        assert_eq!(walk.first_revisited().unwrap().distance(), 4);

        let walk = Walk::parse("R2, R5, R2, R3, R5").unwrap();
        assert_eq!(walk.distance(), 7);
        assert_eq!(walk.first_revisited().unwrap().distance(), 4);
    }

    #[test]
    fn no_revisit() {
        assert_eq!(Walk::parse("R5, L5, R5, R3").unwrap().first_revisited(), None);
    }

    #[test]
    fn coming_home_is_not_a_revisit() {
        let walk = Walk::parse("L5, L5, L5, L5").unwrap();
        assert_eq!(walk.distance(), 0);
        assert_eq!(walk.first_revisited(), None);
    }

    #[test]
    fn bad_instruction_in_list() {
        assert_eq!(Walk::parse("R2, Q3").unwrap_err(), WalkError::BadTurn("Q3".to_owned()));
    }

    #[test]
    fn empty_walk() {
        let walk = Walk::parse("\n").unwrap();
        assert_eq!(walk.location(), Location(0, 0));
        assert_eq!(walk.heading(), Step::Up);
    }
}
