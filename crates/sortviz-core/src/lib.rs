#![forbid(unsafe_code)]

//! sortviz core
//!
//! Step generators that turn an array and a sort direction into a finite,
//! deterministic sequence of visualization states.
//!
//! # Key Components
//!
//! - [`Element`] / [`ElementId`] - identity-tracked array entries
//! - [`ElementIds`] - explicit id counter used when building arrays
//! - [`SortOrder`] - ascending or descending target ordering
//! - [`SortAlgorithm`] - trait implemented by each generator family
//! - [`BubbleSort`] / [`InsertionSort`] - the two supported algorithms
//! - [`StepView`] - algorithm-agnostic read access for renderers
//!
//! # How it fits in the system
//! `sortviz-runtime` wraps a [`SortAlgorithm`] in a playback controller with
//! history and auto-play. Front-ends only ever read steps through
//! [`StepView`] and the concrete step types.

pub mod algorithm;
pub mod bubble;
pub mod element;
pub mod input;
pub mod insertion;
pub mod order;
pub mod pseudocode;
pub mod step;

pub use algorithm::{AlgorithmKind, SortAlgorithm};
pub use bubble::{BubblePhase, BubbleSort, BubbleSortSteps, BubbleStep};
pub use element::{
    CUSTOM_VALUE_RANGE, Element, ElementId, ElementIds, RANDOM_VALUE_RANGE, ValueRange,
    random_values, shuffled_values, values_of,
};
pub use input::{CustomInputError, MAX_CUSTOM_VALUES, parse_custom_values};
pub use insertion::{InsertionPhase, InsertionSort, InsertionSortSteps, InsertionStep};
pub use order::SortOrder;
pub use pseudocode::{CodeLine, Complexity};
pub use step::{Highlight, StepView, total_passes};
