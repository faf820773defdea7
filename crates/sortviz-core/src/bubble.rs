#![forbid(unsafe_code)]

//! Bubble sort step generator.
//!
//! [`BubbleSortSteps`] is an explicit state machine: the outer pass `i`, the
//! inner index `j` and the sorted-position list live in fields, and each call
//! to `next()` emits exactly one [`BubbleStep`].
//!
//! ```text
//! Start ─► Compare ─┬─► Swap ─► AfterSwap ─┐
//!            ▲      └──────────────────────┤
//!            └──────── (j < n-i-1) ◄───────┤
//!                                          ▼
//!                   (i < n-1) ◄── PassComplete ──► Complete ─► Done
//! ```
//!
//! # Invariants
//!
//! 1. Highlights are positional: `comparing` and `swapping` hold `[j, j+1]`.
//! 2. `sorted` only grows within a trace; the complete step lists `0..n`.
//! 3. Equal neighbours never swap.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::algorithm::{AlgorithmKind, SortAlgorithm};
use crate::element::Element;
use crate::order::SortOrder;
use crate::step::{Highlight, StepView, total_passes};

/// Code-highlight tags emitted by the bubble generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum BubblePhase {
    Start = 0,
    Compare = 1,
    Swap = 2,
    PassComplete = 3,
    Complete = 4,
}

impl BubblePhase {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// One bubble-sort visualization state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BubbleStep {
    pub array: Vec<Element>,
    /// Positions being compared.
    pub comparing: Vec<usize>,
    /// Positions about to be swapped (pre-swap arrangement).
    pub swapping: Vec<usize>,
    /// Positions in their final place, in the order they were settled.
    pub sorted: Vec<usize>,
    pub explanation: String,
    pub phase: BubblePhase,
    pub current_pass: usize,
    pub total_passes: usize,
}

impl StepView for BubbleStep {
    fn array(&self) -> &[Element] {
        &self.array
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }

    fn code_highlight(&self) -> u8 {
        self.phase.tag()
    }

    fn current_pass(&self) -> usize {
        self.current_pass
    }

    fn total_passes(&self) -> usize {
        self.total_passes
    }

    fn highlight_at(&self, position: usize) -> Highlight {
        if self.swapping.contains(&position) {
            Highlight::Swapping
        } else if self.comparing.contains(&position) {
            Highlight::Comparing
        } else if self.sorted.contains(&position) {
            Highlight::Sorted
        } else {
            Highlight::None
        }
    }
}

/// Marker type implementing [`SortAlgorithm`] for bubble sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    type Step = BubbleStep;
    type Steps = BubbleSortSteps;

    const KIND: AlgorithmKind = AlgorithmKind::Bubble;

    fn steps(initial: &[Element], order: SortOrder) -> Self::Steps {
        BubbleSortSteps::new(initial, order)
    }

    fn start_step(initial: &[Element], order: SortOrder) -> Self::Step {
        BubbleStep {
            array: initial.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            explanation: format!(
                "Starting Bubble Sort algorithm in {} order. We'll compare adjacent elements \
                 and swap them if they're in the wrong order.",
                order.describe()
            ),
            phase: BubblePhase::Start,
            current_pass: 0,
            total_passes: total_passes(initial.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Compare,
    Swap,
    AfterSwap,
    PassComplete,
    Complete,
    Done,
}

/// Lazy bubble-sort trace over a private copy of the input.
#[derive(Debug, Clone)]
pub struct BubbleSortSteps {
    arr: Vec<Element>,
    order: SortOrder,
    sorted: Vec<usize>,
    /// Outer pass, 0-based.
    i: usize,
    /// Inner index; compares `j` and `j + 1`.
    j: usize,
    stage: Stage,
}

impl BubbleSortSteps {
    #[must_use]
    pub fn new(initial: &[Element], order: SortOrder) -> Self {
        Self {
            arr: initial.to_vec(),
            order,
            sorted: Vec::new(),
            i: 0,
            j: 0,
            stage: Stage::Start,
        }
    }

    fn n(&self) -> usize {
        self.arr.len()
    }

    fn total_passes(&self) -> usize {
        total_passes(self.n())
    }

    fn should_swap(&self) -> bool {
        self.order
            .out_of_order(self.arr[self.j].value, self.arr[self.j + 1].value)
    }

    fn step(
        &self,
        comparing: Vec<usize>,
        swapping: Vec<usize>,
        explanation: String,
        phase: BubblePhase,
    ) -> BubbleStep {
        BubbleStep {
            array: self.arr.clone(),
            comparing,
            swapping,
            sorted: self.sorted.clone(),
            explanation,
            phase,
            current_pass: self.i + 1,
            total_passes: self.total_passes(),
        }
    }

    /// Stage after finishing the comparison at `j`.
    fn advance_inner(&mut self) -> Stage {
        self.j += 1;
        if self.j < self.n() - self.i - 1 {
            Stage::Compare
        } else {
            Stage::PassComplete
        }
    }

    fn joined_values(&self) -> String {
        self.arr
            .iter()
            .map(|el| el.value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Iterator for BubbleSortSteps {
    type Item = BubbleStep;

    fn next(&mut self) -> Option<BubbleStep> {
        match self.stage {
            Stage::Start => {
                self.stage = if self.n() >= 2 {
                    Stage::Compare
                } else {
                    Stage::Complete
                };
                Some(BubbleSort::start_step(&self.arr, self.order))
            }
            Stage::Compare => {
                let (j, k) = (self.j, self.j + 1);
                let swap = self.should_swap();
                let verdict = if swap {
                    "They are out of order, will swap."
                } else {
                    "They are in correct order."
                };
                let explanation = format!(
                    "Comparing {} and {}. {verdict}",
                    self.arr[j].value, self.arr[k].value
                );
                let step = self.step(vec![j, k], Vec::new(), explanation, BubblePhase::Compare);
                self.stage = if swap {
                    Stage::Swap
                } else {
                    self.advance_inner()
                };
                Some(step)
            }
            Stage::Swap => {
                let (j, k) = (self.j, self.j + 1);
                let explanation = format!(
                    "Swapping {} and {}",
                    self.arr[j].value, self.arr[k].value
                );
                let step = self.step(Vec::new(), vec![j, k], explanation, BubblePhase::Swap);
                self.arr.swap(j, k);
                self.stage = Stage::AfterSwap;
                Some(step)
            }
            Stage::AfterSwap => {
                let explanation = format!("Swapped! New order: {}", self.joined_values());
                let step = self.step(Vec::new(), Vec::new(), explanation, BubblePhase::Swap);
                self.stage = self.advance_inner();
                Some(step)
            }
            Stage::PassComplete => {
                let settled = self.n() - self.i - 1;
                self.sorted.push(settled);
                let explanation = format!(
                    "Pass {} complete. Element at position {settled} (value: {}) is now in its \
                     final position.",
                    self.i + 1,
                    self.arr[settled].value
                );
                let step = self.step(Vec::new(), Vec::new(), explanation, BubblePhase::PassComplete);
                self.i += 1;
                self.j = 0;
                self.stage = if self.i < self.n() - 1 {
                    Stage::Compare
                } else {
                    Stage::Complete
                };
                Some(step)
            }
            Stage::Complete => {
                self.stage = Stage::Done;
                Some(BubbleStep {
                    array: self.arr.clone(),
                    comparing: Vec::new(),
                    swapping: Vec::new(),
                    sorted: (0..self.n()).collect(),
                    explanation: "Bubble Sort complete! All elements are now sorted.".to_string(),
                    phase: BubblePhase::Complete,
                    current_pass: self.total_passes(),
                    total_passes: self.total_passes(),
                })
            }
            Stage::Done => None,
        }
    }
}

impl std::iter::FusedIterator for BubbleSortSteps {}
