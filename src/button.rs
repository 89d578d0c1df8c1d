use std::fmt::{Display, Formatter};

/// A single button on a keypad, identified by the symbol printed on it.
#[derive(Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd, Debug)]
pub struct Button(pub char);

impl From<char> for Button {
    fn from(value: char) -> Self {
        Self(value)
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
