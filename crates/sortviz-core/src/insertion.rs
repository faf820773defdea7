#![forbid(unsafe_code)]

//! Insertion sort step generator.
//!
//! The backward scan never touches the working array. Once the scan stops,
//! the picked element is moved with a single remove + reinsert, so the trace
//! shows one "inserted" step per pass rather than a sequence of pairwise
//! shifts.
//!
//! Highlights are keyed by [`ElementId`] because the move changes positions
//! within a pass.
//!
//! # Invariants
//!
//! 1. `sorted` is a set of ids; after pass `i` it covers positions `0..=i`.
//! 2. The scan stops at the first element that does not need to shift.
//! 3. Equal values never shift, so equal elements keep their relative order.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::algorithm::{AlgorithmKind, SortAlgorithm};
use crate::element::{Element, ElementId};
use crate::order::SortOrder;
use crate::step::{Highlight, StepView, total_passes};

/// Code-highlight tags emitted by the insertion generator.
///
/// Tag 3 belongs to the shift line of the reference listing and is never
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum InsertionPhase {
    Start = 0,
    Pick = 1,
    Compare = 2,
    Insert = 4,
    PassComplete = 5,
    Complete = 6,
}

impl InsertionPhase {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

/// One insertion-sort visualization state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InsertionStep {
    pub array: Vec<Element>,
    /// Element being compared against the picked one.
    pub comparing: Vec<ElementId>,
    /// Element being inserted.
    pub current: Option<ElementId>,
    pub sorted: Vec<ElementId>,
    pub explanation: String,
    pub phase: InsertionPhase,
    pub current_pass: usize,
    pub total_passes: usize,
    /// Outer-loop position `i`, for index pointers.
    pub current_index: Option<usize>,
    /// Inner-loop position `j`, for index pointers.
    pub comparing_index: Option<usize>,
}

impl StepView for InsertionStep {
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
        let Some(el) = self.array.get(position) else {
            return Highlight::None;
        };
        if self.comparing.contains(&el.id) {
            Highlight::Comparing
        } else if self.current == Some(el.id) {
            Highlight::Current
        } else if self.sorted.contains(&el.id) {
            Highlight::Sorted
        } else {
            Highlight::None
        }
    }
}

/// Marker type implementing [`SortAlgorithm`] for insertion sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    type Step = InsertionStep;
    type Steps = InsertionSortSteps;

    const KIND: AlgorithmKind = AlgorithmKind::Insertion;

    fn steps(initial: &[Element], order: SortOrder) -> Self::Steps {
        InsertionSortSteps::new(initial, order)
    }

    fn start_step(initial: &[Element], order: SortOrder) -> Self::Step {
        InsertionStep {
            array: initial.to_vec(),
            comparing: Vec::new(),
            current: None,
            sorted: initial.first().map(|el| el.id).into_iter().collect(),
            explanation: format!(
                "Starting Insertion Sort algorithm in {} order. The first element is already \
                 considered sorted.",
                order.describe()
            ),
            phase: InsertionPhase::Start,
            current_pass: 0,
            total_passes: total_passes(initial.len()),
            current_index: None,
            comparing_index: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    Pick,
    /// Compare `picked` with position `j`.
    Compare { j: usize, picked: Element },
    Insert { picked: Element },
    PassComplete,
    Complete,
    Done,
}

/// Lazy insertion-sort trace over a private copy of the input.
#[derive(Debug, Clone)]
pub struct InsertionSortSteps {
    arr: Vec<Element>,
    order: SortOrder,
    sorted: Vec<ElementId>,
    /// Outer index; also the pass number.
    i: usize,
    insert_pos: usize,
    stage: Stage,
}

impl InsertionSortSteps {
    #[must_use]
    pub fn new(initial: &[Element], order: SortOrder) -> Self {
        Self {
            arr: initial.to_vec(),
            order,
            sorted: Vec::new(),
            i: 1,
            insert_pos: 1,
            stage: Stage::Start,
        }
    }

    fn n(&self) -> usize {
        self.arr.len()
    }

    fn step(
        &self,
        comparing: Vec<ElementId>,
        current: Option<ElementId>,
        explanation: String,
        phase: InsertionPhase,
        current_index: Option<usize>,
        comparing_index: Option<usize>,
    ) -> InsertionStep {
        InsertionStep {
            array: self.arr.clone(),
            comparing,
            current,
            sorted: self.sorted.clone(),
            explanation,
            phase,
            current_pass: self.i,
            total_passes: total_passes(self.n()),
            current_index,
            comparing_index,
        }
    }

    fn prefix_values(&self) -> String {
        self.arr[..=self.i]
            .iter()
            .map(|el| el.value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Iterator for InsertionSortSteps {
    type Item = InsertionStep;

    fn next(&mut self) -> Option<InsertionStep> {
        match self.stage {
            Stage::Start => {
                let start = InsertionSort::start_step(&self.arr, self.order);
                self.sorted = start.sorted.clone();
                self.stage = if self.n() >= 2 {
                    Stage::Pick
                } else {
                    Stage::Complete
                };
                Some(start)
            }
            Stage::Pick => {
                let picked = self.arr[self.i];
                self.insert_pos = self.i;
                let explanation = format!(
                    "Picking element at position {} (value: {}) to insert into the sorted portion.",
                    self.i, picked.value
                );
                let step = self.step(
                    Vec::new(),
                    Some(picked.id),
                    explanation,
                    InsertionPhase::Pick,
                    Some(self.i),
                    None,
                );
                self.stage = Stage::Compare {
                    j: self.i - 1,
                    picked,
                };
                Some(step)
            }
            Stage::Compare { j, picked } => {
                let other = self.arr[j];
                let shift = self.order.out_of_order(other.value, picked.value);
                let verdict = if shift {
                    format!(
                        "{} {} {}, need to shift.",
                        other.value,
                        self.order.operator(),
                        picked.value
                    )
                } else {
                    "Found correct position.".to_string()
                };
                let explanation =
                    format!("Comparing {} with {}. {verdict}", picked.value, other.value);
                let step = self.step(
                    vec![other.id],
                    Some(picked.id),
                    explanation,
                    InsertionPhase::Compare,
                    Some(self.i),
                    Some(j),
                );
                self.stage = if shift {
                    self.insert_pos = j;
                    match j.checked_sub(1) {
                        Some(next) => Stage::Compare { j: next, picked },
                        None => Stage::Insert { picked },
                    }
                } else {
                    Stage::Insert { picked }
                };
                Some(step)
            }
            Stage::Insert { picked } => {
                if self.insert_pos < self.i {
                    let moved = self.arr.remove(self.i);
                    self.arr.insert(self.insert_pos, moved);
                }
                let explanation =
                    format!("Inserted {} at position {}.", picked.value, self.insert_pos);
                let step = self.step(
                    Vec::new(),
                    None,
                    explanation,
                    InsertionPhase::Insert,
                    None,
                    None,
                );
                self.stage = Stage::PassComplete;
                Some(step)
            }
            Stage::PassComplete => {
                for k in 0..=self.i {
                    let id = self.arr[k].id;
                    if !self.sorted.contains(&id) {
                        self.sorted.push(id);
                    }
                }
                let explanation = format!(
                    "Pass {} complete. First {} elements are now sorted: {}",
                    self.i,
                    self.i + 1,
                    self.prefix_values()
                );
                let step = self.step(
                    Vec::new(),
                    None,
                    explanation,
                    InsertionPhase::PassComplete,
                    None,
                    None,
                );
                self.i += 1;
                self.stage = if self.i < self.n() {
                    Stage::Pick
                } else {
                    Stage::Complete
                };
                Some(step)
            }
            Stage::Complete => {
                self.stage = Stage::Done;
                let passes = total_passes(self.n());
                Some(InsertionStep {
                    array: self.arr.clone(),
                    comparing: Vec::new(),
                    current: None,
                    sorted: self.arr.iter().map(|el| el.id).collect(),
                    explanation: "Insertion Sort complete! All elements are now sorted."
                        .to_string(),
                    phase: InsertionPhase::Complete,
                    current_pass: passes,
                    total_passes: passes,
                    current_index: None,
                    comparing_index: None,
                })
            }
            Stage::Done => None,
        }
    }
}

impl std::iter::FusedIterator for InsertionSortSteps {}
