#![forbid(unsafe_code)]

//! Algorithm-agnostic read access to a visualization step.

use crate::element::Element;

/// How a renderer should mark one position of a step's array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    None,
    Comparing,
    Swapping,
    /// Element currently being inserted.
    Current,
    Sorted,
}

impl Highlight {
    /// Single-character marker for plain-text output.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::None => ' ',
            Self::Comparing => '?',
            Self::Swapping => '~',
            Self::Current => '*',
            Self::Sorted => '=',
        }
    }
}

/// Common view over the step types of every algorithm.
pub trait StepView {
    /// Array snapshot at this instant.
    fn array(&self) -> &[Element];

    fn explanation(&self) -> &str;

    /// Tag correlating the step with a pseudocode region.
    fn code_highlight(&self) -> u8;

    /// 1-based pass counter (0 for the start step).
    fn current_pass(&self) -> usize;

    fn total_passes(&self) -> usize;

    /// Marker for the element at `position`.
    ///
    /// When an element belongs to several sets the most transient one wins:
    /// swapping, then comparing, then current, then sorted.
    fn highlight_at(&self, position: usize) -> Highlight;

    /// Values of the snapshot, in order.
    fn values(&self) -> Vec<i32> {
        self.array().iter().map(|el| el.value).collect()
    }

    fn len(&self) -> usize {
        self.array().len()
    }

    fn is_empty(&self) -> bool {
        self.array().is_empty()
    }
}

/// Number of outer passes for an array of length `n`.
#[must_use]
pub const fn total_passes(n: usize) -> usize {
    n.saturating_sub(1)
}
