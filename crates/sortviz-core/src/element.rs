#![forbid(unsafe_code)]

//! Identity-tracked array elements.
//!
//! Every [`Element`] carries an opaque [`ElementId`] minted by an
//! [`ElementIds`] counter. Renderers key animations by id, never by value or
//! position, so two equal values are still two distinct elements.
//!
//! # Invariants
//!
//! 1. An [`ElementIds`] counter never hands out the same id twice.
//! 2. Array construction never reads hidden global state: both the id counter
//!    and the random source are passed in by the caller.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Opaque identity token for one element instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct ElementId(u64);

impl ElementId {
    /// Raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// One entry of the array being sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Element {
    pub id: ElementId,
    pub value: i32,
}

/// Monotonic id counter.
///
/// Owned by whoever builds arrays (normally the playback controller), so ids
/// are unique for the owner's lifetime and reproducible under test.
#[derive(Debug, Clone, Default)]
pub struct ElementIds {
    next: u64,
}

impl ElementIds {
    /// Counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Hand out a fresh id.
    pub fn mint(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }

    /// Build elements for `values`, minting a new id for each.
    pub fn build(&mut self, values: &[i32]) -> Vec<Element> {
        values
            .iter()
            .map(|&value| Element {
                id: self.mint(),
                value,
            })
            .collect()
    }

    /// Number of ids handed out so far (when started at zero).
    #[must_use]
    pub const fn minted(&self) -> u64 {
        self.next
    }
}

/// Inclusive value range for generated or user-supplied arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i32,
    pub max: i32,
}

/// Range used for randomly generated arrays.
pub const RANDOM_VALUE_RANGE: ValueRange = ValueRange { min: 10, max: 99 };

/// Range accepted for user-supplied arrays.
pub const CUSTOM_VALUE_RANGE: ValueRange = ValueRange { min: 1, max: 999 };

impl ValueRange {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Ordered form of the range; an inverted range collapses to `min..=min`.
    #[must_use]
    pub fn as_inclusive(self) -> RangeInclusive<i32> {
        self.min..=self.max.max(self.min)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        RANDOM_VALUE_RANGE
    }
}

/// Draw `size` values uniformly from `range`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, size: usize, range: ValueRange) -> Vec<i32> {
    (0..size)
        .map(|_| rng.random_range(range.as_inclusive()))
        .collect()
}

/// Fisher–Yates shuffle of `values`, returned as a new vector.
pub fn shuffled_values<R: Rng + ?Sized>(rng: &mut R, values: &[i32]) -> Vec<i32> {
    let mut out = values.to_vec();
    out.shuffle(rng);
    out
}

/// Values of a snapshot, in order.
#[must_use]
pub fn values_of(array: &[Element]) -> Vec<i32> {
    array.iter().map(|el| el.value).collect()
}
