use std::fmt::{Display, Formatter};

use log::debug;

use crate::button::Button;
use crate::cursor::Cursor;
use crate::keypad::Keypad;
use crate::shape::Step;

/// The buttons pressed for a document, one per non-empty line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Code(Vec<Button>);

impl Code {
    /// The pressed buttons, in order.
    pub fn buttons(&self) -> &[Button] {
        &self.0
    }

    /// Number of buttons pressed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no button was pressed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Button> for Code {
    fn from_iter<T: IntoIterator<Item = Button>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for button in &self.0 {
            write!(f, "{}", button)?;
        }

        Ok(())
    }
}

/// Follows instruction lines across one keypad, carrying the cursor over from one line to the next.
pub struct Decoder<'k> {
    keypad: &'k Keypad,
    cursor: Cursor,
}

impl<'k> Decoder<'k> {
    /// A decoder with its cursor on the start button of `keypad`.
    pub fn new(keypad: &'k Keypad) -> Self {
        Self {
            keypad,
            cursor: Cursor::new(keypad),
        }
    }

    /// Where the cursor currently rests.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Follow every instruction on `line` and return the button pressed at its end.
    ///
    /// Characters other than `U`, `D`, `L` and `R` are skipped.
    /// An empty line presses nothing and returns [`None`]; a line with no instructions presses the current button again.
    pub fn follow_line(&mut self, line: &str) -> Option<Button> {
        if line.is_empty() {
            return None;
        }

        for step in line.chars().filter_map(Step::from_instruction) {
            self.cursor.step(step, self.keypad);
        }

        debug!("pressed {} after `{}`", self.cursor.button(), line);
        Some(self.cursor.button())
    }

    /// Follow every line of `document` in order.
    pub fn decode(mut self, document: &str) -> Code {
        document.lines()
            .filter_map(|line| self.follow_line(line))
            .collect()
    }
}
