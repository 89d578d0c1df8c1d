use std::sync::OnceLock;

use petgraph::graphmap::DiGraphMap;
use strum::{Display, EnumString, VariantArray};

use crate::builder::{BuilderInvalidReason, KeypadBuilder};
use crate::button::Button;
use crate::decoder::{Code, Decoder};
use crate::shape::Step;

/// The neighbors of one button, in [`Step::VARIANTS`] order: up, down, left, right.
pub type NeighborRow = [Option<char>; 4];

/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
const SQUARE_TABLE: &[(char, NeighborRow)] = &[
    // up, down, left, right
    ('1', [None, Some('4'), None, Some('2')]),
    ('2', [None, Some('5'), Some('1'), Some('3')]),
    ('3', [None, Some('6'), Some('2'), None]),
    ('4', [Some('1'), Some('7'), None, Some('5')]),
    ('5', [Some('2'), Some('8'), Some('4'), Some('6')]),
    ('6', [Some('3'), Some('9'), Some('5'), None]),
    ('7', [Some('4'), None, None, Some('8')]),
    ('8', [Some('5'), None, Some('7'), Some('9')]),
    ('9', [Some('6'), None, Some('8'), None]),
];

/// ```text
///     1
///   2 3 4
/// 5 6 7 8 9
///   A B C
///     D
/// ```
const DIAMOND_TABLE: &[(char, NeighborRow)] = &[
    // up, down, left, right
    ('1', [None, Some('3'), None, None]),
    ('2', [None, Some('6'), None, Some('3')]),
    ('3', [Some('1'), Some('7'), Some('2'), Some('4')]),
    ('4', [None, Some('8'), Some('3'), None]),
    ('5', [None, None, None, Some('6')]),
    ('6', [Some('2'), Some('A'), Some('5'), Some('7')]),
    ('7', [Some('3'), Some('B'), Some('6'), Some('8')]),
    ('8', [Some('4'), Some('C'), Some('7'), Some('9')]),
    ('9', [None, None, Some('8'), None]),
    ('A', [Some('6'), None, None, Some('B')]),
    ('B', [Some('7'), Some('D'), Some('A'), Some('C')]),
    ('C', [Some('8'), None, Some('B'), None]),
    ('D', [Some('B'), None, None, None]),
];

/// An immutable keypad: every button and, per [`Step`], the button it leads to.
///
/// Keypads are built with a [`KeypadBuilder`], from an explicit neighbor table with [`Keypad::from_table`],
/// or taken ready-made from a [`KeypadShape`].
#[derive(Clone, Debug)]
pub struct Keypad {
    // an edge a -> b weighted with steps s means stepping any of s from a lands on b
    pub(crate) graph: DiGraphMap<Button, Vec<Step>>,
    pub(crate) start: Button,
}

impl Keypad {
    /// Build a keypad from a table of buttons and their neighbors.
    /// Every button must have a row of its own, even one without any neighbors.
    pub fn from_table(start: char, table: &[(char, NeighborRow)]) -> Result<Self, Vec<BuilderInvalidReason>> {
        let mut builder = KeypadBuilder::default();

        for (button, _) in table {
            builder.add_button(Button(*button));
        }

        for (button, row) in table {
            for (step, neighbor) in Step::VARIANTS.iter().zip(row) {
                if let Some(neighbor) = neighbor {
                    builder.connect(Button(*button), *step, Button(*neighbor));
                }
            }
        }

        builder.start(Button(start)).build()
    }

    /// The 3x3 keypad with buttons `1` through `9`, starting on `5`.
    pub fn square() -> Self {
        Self::from_table('5', SQUARE_TABLE).expect("square keypad table is well formed")
    }

    /// The 13 button diamond keypad, starting on `5`.
    pub fn diamond() -> Self {
        Self::from_table('5', DIAMOND_TABLE).expect("diamond keypad table is well formed")
    }

    /// The button every decode starts on.
    pub fn start(&self) -> Button {
        self.start
    }

    /// Whether `button` is on this keypad.
    pub fn contains(&self, button: Button) -> bool {
        self.graph.contains_node(button)
    }

    /// All buttons in the order they were added.
    pub fn buttons(&self) -> impl Iterator<Item = Button> + '_ {
        self.graph.nodes()
    }

    /// The button reached by stepping `step` from `button`, or [`None`] at an edge of the keypad.
    ///
    /// # Panics
    /// If `button` is not on this keypad.
    pub fn neighbor(&self, button: Button, step: Step) -> Option<Button> {
        assert!(self.contains(button), "button {button} is not on this keypad");

        self.graph.edges(button)
            .find(|(_, _, steps)| steps.contains(&step))
            .map(|(_, to, _)| to)
    }

    /// Every step leading away from `button`, with the button it lands on.
    ///
    /// # Panics
    /// If `button` is not on this keypad.
    pub fn neighbors(&self, button: Button) -> impl Iterator<Item = (Step, Button)> + '_ {
        assert!(self.contains(button), "button {button} is not on this keypad");

        self.graph.edges(button)
            .flat_map(|(_, to, steps)| steps.iter().map(move |step| (*step, to)))
    }

    /// Whether stepping back in the inverse direction always returns to the button a step started from.
    pub fn is_reversible(&self) -> bool {
        self.graph.all_edges()
            .all(|(from, to, steps)| steps.iter().all(|step| self.neighbor(to, step.invert()) == Some(from)))
    }

    /// Decode a whole instruction document on this keypad.
    pub fn decode(&self, document: &str) -> Code {
        Decoder::new(self).decode(document)
    }
}

/// The built-in keypads.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum KeypadShape {
    /// See [`Keypad::square`].
    #[default]
    Square,
    /// See [`Keypad::diamond`].
    Diamond,
}

impl KeypadShape {
    /// The keypad of this shape, built on first use and shared afterwards.
    pub fn keypad(&self) -> &'static Keypad {
        static SQUARE: OnceLock<Keypad> = OnceLock::new();
        static DIAMOND: OnceLock<Keypad> = OnceLock::new();

        match self {
            Self::Square => SQUARE.get_or_init(Keypad::square),
            Self::Diamond => DIAMOND.get_or_init(Keypad::diamond),
        }
    }
}
