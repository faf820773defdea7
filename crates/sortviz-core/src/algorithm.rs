#![forbid(unsafe_code)]

//! The generator seam shared by every sorting algorithm.

use std::fmt;

use crate::element::Element;
use crate::order::SortOrder;
use crate::pseudocode::{self, CodeLine, Complexity};
use crate::step::StepView;

/// A family of step generators.
///
/// # Contract
///
/// - [`steps`](Self::steps) never mutates `initial`; it copies it into the
///   iterator's working array.
/// - The iterator is finite and yields exactly one start step first and one
///   complete step last.
/// - Two calls with equal inputs yield equal sequences.
/// - The first item of [`steps`](Self::steps) equals
///   [`start_step`](Self::start_step) for the same inputs.
pub trait SortAlgorithm {
    type Step: StepView + Clone + fmt::Debug + PartialEq;
    type Steps: Iterator<Item = Self::Step>;

    const KIND: AlgorithmKind;

    /// Fresh, independent trace over a copy of `initial`.
    fn steps(initial: &[Element], order: SortOrder) -> Self::Steps;

    /// The start step `steps(initial, order)` yields first.
    fn start_step(initial: &[Element], order: SortOrder) -> Self::Step;
}

/// Names the supported algorithms for front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
}

impl AlgorithmKind {
    pub const ALL: [Self; 2] = [Self::Bubble, Self::Insertion];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
        }
    }

    /// Reference pseudocode shown next to the animation.
    #[must_use]
    pub const fn listing(self) -> &'static [CodeLine] {
        match self {
            Self::Bubble => pseudocode::BUBBLE_LISTING,
            Self::Insertion => pseudocode::INSERTION_LISTING,
        }
    }

    /// Listing line for a step's code-highlight tag.
    #[must_use]
    pub const fn listing_line(self, code_highlight: u8) -> usize {
        match self {
            Self::Bubble => pseudocode::bubble_line(code_highlight),
            Self::Insertion => pseudocode::insertion_line(code_highlight),
        }
    }

    #[must_use]
    pub const fn complexity(self) -> Complexity {
        match self {
            Self::Bubble => pseudocode::BUBBLE_COMPLEXITY,
            Self::Insertion => pseudocode::INSERTION_COMPLEXITY,
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::BubbleSort;
    use crate::element::ElementIds;
    use crate::insertion::InsertionSort;

    fn first_equals_start<A: SortAlgorithm>(values: &[i32], order: SortOrder) {
        let arr = ElementIds::new().build(values);
        let first = A::steps(&arr, order).next();
        assert_eq!(first, Some(A::start_step(&arr, order)));
    }

    #[test]
    fn first_step_is_start_step() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            for values in [&[][..], &[7][..], &[3, 1, 2][..]] {
                first_equals_start::<BubbleSort>(values, order);
                first_equals_start::<InsertionSort>(values, order);
            }
        }
    }

    #[test]
    fn kinds_match_impls() {
        assert_eq!(BubbleSort::KIND, AlgorithmKind::Bubble);
        assert_eq!(InsertionSort::KIND, AlgorithmKind::Insertion);
        assert_eq!(AlgorithmKind::Insertion.to_string(), "Insertion Sort");
        assert_eq!(AlgorithmKind::Bubble.slug(), "bubble");
    }
}
