use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;
use strum::VariantArray;
use thiserror::Error;
use unordered_pair::UnorderedPair;

use crate::button::Button;
use crate::keypad::Keypad;
use crate::location::Location;
use crate::shape::Step;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum BuilderInvalidReason {
    /// The same button was added twice, e.g. because its symbol appears twice in a layout.
    #[error("button {0} appears more than once")]
    DuplicateButton(Button),
    /// A neighbor, wall, hole or start button names a button which was never added.
    #[error("button {0} is not on the keypad")]
    UnknownButton(Button),
    /// A button was given two different neighbors in the same direction.
    #[error("button {button} already has a different neighbor in direction {step:?}")]
    ConflictingNeighbor {
        /// The button stepped from.
        button: Button,
        /// The direction given two neighbors.
        step: Step,
    },
    /// No start button was chosen, or the start button was dropped.
    #[error("the keypad has no start button")]
    MissingStart,
}

/// Accumulates buttons and their neighbors, then freezes them into a [`Keypad`].
///
/// Every mutator records a [`BuilderInvalidReason`] instead of failing outright.
/// Once the builder is invalid, further calls do nothing and [`build`](Self::build) reports every reason collected.
/// Builders can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug, Default)]
pub struct KeypadBuilder {
    buttons: Vec<Button>,
    neighbors: HashMap<(Button, Step), Button>,
    start: Option<Button>,
    invalid_reasons: Vec<BuilderInvalidReason>,
    // walls
    edge_blacklist: HashSet<UnorderedPair<Button>>,
    // holes
    button_blacklist: HashSet<Button>,
}

impl KeypadBuilder {
    /// Start a builder from a picture of the keypad, one character per button.
    ///
    /// Whitespace is a gap in the keypad, everything else is a button.
    /// Buttons next to each other in the picture, horizontally or vertically, are connected both ways.
    /// Leading and trailing empty lines are ignored; a start button must still be chosen with [`start`](Self::start).
    ///
    /// ```
    /// use bunnyhq::{Button, KeypadBuilder, Step};
    ///
    /// let keypad = KeypadBuilder::from_layout("
    ///   1
    ///  234
    /// 56789
    ///  ABC
    ///   D
    /// ").start(Button('5')).build().unwrap();
    ///
    /// assert_eq!(keypad.neighbor(Button('1'), Step::Down), Some(Button('3')));
    /// assert_eq!(keypad.neighbor(Button('5'), Step::Up), None);
    /// ```
    pub fn from_layout(layout: &str) -> Self {
        let rows = layout.trim_matches(|c| c == '\n' || c == '\r')
            .lines()
            .map(|line| line.chars()
                .map(|c| if c.is_whitespace() { None } else { Some(Button(c)) })
                .collect_vec())
            .collect_vec();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let grid = Array2::from_shape_fn((rows.len(), width), |(row, col)| rows[row].get(col).copied().flatten());

        let mut builder = Self::default();

        for button in grid.iter().flatten() {
            builder.add_button(*button);
        }

        for (index, cell) in grid.indexed_iter() {
            let Some(button) = cell else { continue };
            let location = Location::from(index);

            for step in Step::VARIANTS {
                let neighbor = step.attempt_from(location)
                    .as_index()
                    .and_then(|index| grid.get(index))
                    .copied()
                    .flatten();

                if let Some(neighbor) = neighbor {
                    builder.connect(*button, *step, neighbor);
                }
            }
        }

        builder
    }

    #[inline]
    fn knows(&mut self, button: Button) -> bool {
        if self.buttons.contains(&button) {
            true
        } else {
            self.invalid_reasons.push(BuilderInvalidReason::UnknownButton(button));
            false
        }
    }

    /// Add a button with no neighbors yet.
    ///
    /// May cause the builder to enter a [`DuplicateButton`](BuilderInvalidReason::DuplicateButton) invalid state.
    pub fn add_button(&mut self, button: Button) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if self.buttons.contains(&button) {
            self.invalid_reasons.push(BuilderInvalidReason::DuplicateButton(button));
            return self;
        }

        self.buttons.push(button);
        self
    }

    /// Make stepping `step` from `from` land on `to`. The reverse step is not implied; see [`connect_both`](Self::connect_both).
    ///
    /// Repeating an existing connection does nothing.
    /// May cause the builder to enter an [`UnknownButton`](BuilderInvalidReason::UnknownButton) or
    /// [`ConflictingNeighbor`](BuilderInvalidReason::ConflictingNeighbor) invalid state.
    pub fn connect(&mut self, from: Button, step: Step, to: Button) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.knows(from) || !self.knows(to) {
            return self;
        }

        match self.neighbors.get(&(from, step)) {
            Some(existing) if *existing != to => {
                self.invalid_reasons.push(BuilderInvalidReason::ConflictingNeighbor { button: from, step });
            }
            _ => {
                self.neighbors.insert((from, step), to);
            }
        }

        self
    }

    /// Shorthand for connecting `from` to `to` by `step`, and `to` back to `from` by the inverse step.
    pub fn connect_both(&mut self, from: Button, step: Step, to: Button) -> &mut Self {
        self.connect(from, step, to).connect(to, step.invert(), from)
    }

    /// Choose the button every decode starts on. A later call replaces an earlier choice.
    ///
    /// May cause the builder to enter an [`UnknownButton`](BuilderInvalidReason::UnknownButton) invalid state.
    pub fn start(&mut self, button: Button) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.knows(button) {
            return self;
        }

        self.start = Some(button);
        self
    }

    /// Disconnect the two `buttons`, i.e. place a wall between them, in both directions.
    /// If the two buttons are not neighbors, this does nothing but still requires both to be known.
    ///
    /// May cause the builder to enter an [`UnknownButton`](BuilderInvalidReason::UnknownButton) invalid state.
    pub fn disconnect(&mut self, buttons: UnorderedPair<Button>) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.knows(buttons.0) || !self.knows(buttons.1) {
            return self;
        }

        self.edge_blacklist.insert(buttons);
        self
    }

    /// Drop a button from the keypad, along with every step leading to or from it.
    /// Dropping the start button leaves the keypad without one.
    ///
    /// May cause the builder to enter an [`UnknownButton`](BuilderInvalidReason::UnknownButton) invalid state.
    pub fn drop_button(&mut self, button: Button) -> &mut Self {
        if !self.invalid_reasons.is_empty() || !self.knows(button) {
            return self;
        }

        self.button_blacklist.insert(button);
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid so far, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// A valid builder may still fail to [`build`](Self::build) if no start button is chosen.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Freeze the state of this builder into a [`Keypad`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Keypad, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        let start = match self.start {
            Some(start) if !self.button_blacklist.contains(&start) => start,
            _ => return Err(vec![BuilderInvalidReason::MissingStart]),
        };

        let mut graph: DiGraphMap<Button, Vec<Step>> = DiGraphMap::with_capacity(self.buttons.len(), self.neighbors.len());

        for button in self.buttons.iter().filter(|b| !self.button_blacklist.contains(b)) {
            graph.add_node(*button);
        }

        // sorted so the edge order does not depend on hashing
        for (&(from, step), &to) in self.neighbors.iter().sorted() {
            if self.button_blacklist.contains(&from)
                || self.button_blacklist.contains(&to)
                || self.edge_blacklist.contains(&UnorderedPair(from, to)) {
                continue;
            }

            // a graphmap holds one edge per ordered pair of nodes, so every step between the pair shares it
            match graph.edge_weight_mut(from, to) {
                Some(steps) => steps.push(step),
                None => {
                    graph.add_edge(from, to, vec![step]);
                }
            }
        }

        debug!(
            "built keypad with {} buttons and {} steps, starting on {}",
            graph.node_count(),
            graph.all_edges().map(|(_, _, steps)| steps.len()).sum::<usize>(),
            start,
        );

        Ok(Keypad { graph, start })
    }
}
