#![warn(missing_docs)]

//! # `bunnyhq`
//!
//! Solvers for the puzzles found on the way into Easter Bunny Headquarters.
//!
//! The centerpiece is the bathroom keypad decoder. A [`Keypad`] is a directed graph of [`Button`]s whose edges are
//! weighted with the [`Step`]s leading from one button to the next, so any layout can be described, rectangular or not.
//! Build one with a [`KeypadBuilder`] or [`Keypad::from_table`], or take a built-in [`KeypadShape`],
//! then call [`decode()`](Keypad::decode) on the instructions to get the [`Code`].
//!
//! ```
//! use bunnyhq::KeypadShape;
//!
//! let instructions = "ULL\nRRDDD\nLURDL\nUUUUD";
//! assert_eq!(KeypadShape::Square.keypad().decode(instructions).to_string(), "1985");
//! assert_eq!(KeypadShape::Diamond.keypad().decode(instructions).to_string(), "5DB3");
//! ```
//!
//! Decoding follows the puzzle's rules to the letter:
//! 1. The [`Cursor`] starts on the keypad's start button and is carried over from each line to the next.
//! A step leading off the keypad is ignored, as is any character other than `U`, `D`, `L` or `R`.
//! 2. The button under the cursor is pressed at the end of every line. Empty lines press nothing.
//!
//! The remaining modules solve the smaller puzzles: [`walk`] follows taxicab directions across the street grid,
//! [`triangle`] counts possible triangles, and [`room`] tells real rooms from decoys.

pub use builder::{BuilderInvalidReason, KeypadBuilder};
pub use button::Button;
pub use cursor::Cursor;
pub use decoder::{Code, Decoder};
pub use keypad::{Keypad, KeypadShape, NeighborRow};
pub use location::Location;
pub use shape::{Step, Turn};

pub mod builder;
pub(crate) mod button;
pub(crate) mod cursor;
pub(crate) mod decoder;
pub(crate) mod keypad;
pub(crate) mod location;
pub mod room;
pub(crate) mod shape;
pub mod triangle;
pub mod walk;
