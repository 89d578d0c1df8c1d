use log::trace;

use crate::button::Button;
use crate::keypad::Keypad;
use crate::shape::Step;

/// The button a finger currently rests on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cursor {
    button: Button,
}

impl Cursor {
    /// A cursor on the start button of `keypad`.
    pub fn new(keypad: &Keypad) -> Self {
        Self { button: keypad.start() }
    }

    /// A cursor on `button`, which should be on whichever keypad it is later moved across.
    pub fn at(button: Button) -> Self {
        Self { button }
    }

    /// The button under the cursor.
    pub fn button(&self) -> Button {
        self.button
    }

    /// Move one `step` across `keypad`. A step off the edge of the keypad leaves the cursor where it is.
    ///
    /// # Panics
    /// If the cursor is not on a button of `keypad`.
    pub fn step(&mut self, step: Step, keypad: &Keypad) -> &mut Self {
        match keypad.neighbor(self.button, step) {
            Some(next) => {
                trace!("{:?} from {} to {}", step, self.button, next);
                self.button = next;
            }
            None => trace!("{:?} from {} is blocked", step, self.button),
        }

        self
    }

    /// Shorthand for [`step`](Self::step) with [`Step::Up`].
    pub fn up(&mut self, keypad: &Keypad) -> &mut Self {
        self.step(Step::Up, keypad)
    }

    /// Shorthand for [`step`](Self::step) with [`Step::Down`].
    pub fn down(&mut self, keypad: &Keypad) -> &mut Self {
        self.step(Step::Down, keypad)
    }

    /// Shorthand for [`step`](Self::step) with [`Step::Left`].
    pub fn left(&mut self, keypad: &Keypad) -> &mut Self {
        self.step(Step::Left, keypad)
    }

    /// Shorthand for [`step`](Self::step) with [`Step::Right`].
    pub fn right(&mut self, keypad: &Keypad) -> &mut Self {
        self.step(Step::Right, keypad)
    }
}
