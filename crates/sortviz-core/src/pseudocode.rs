#![forbid(unsafe_code)]

//! Reference listings and complexity facts shown beside the animation.
//!
//! The insertion listing shows the textbook shift loop while the generator
//! moves the picked element with one remove + reinsert. Both reach the same
//! arrangement after each pass; only the intermediate steps differ.

/// One line of a reference listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine {
    pub code: &'static str,
    pub indent: u8,
}

const fn line(indent: u8, code: &'static str) -> CodeLine {
    CodeLine { code, indent }
}

pub const BUBBLE_LISTING: &[CodeLine] = &[
    line(0, "function bubbleSort(arr) {"),
    line(1, "for (let i = 0; i < arr.length - 1; i++) {"),
    line(2, "for (let j = 0; j < arr.length - i - 1; j++) {"),
    line(3, "if (arr[j] > arr[j + 1]) {"),
    line(4, "// Swap elements"),
    line(4, "[arr[j], arr[j + 1]] = [arr[j + 1], arr[j]]"),
    line(3, "}"),
    line(2, "}"),
    line(1, "}"),
    line(1, "return arr"),
    line(0, "}"),
];

pub const INSERTION_LISTING: &[CodeLine] = &[
    line(0, "function insertionSort(arr) {"),
    line(1, "for (let i = 1; i < arr.length; i++) {"),
    line(2, "let current = arr[i];"),
    line(2, "let j = i - 1;"),
    line(2, "// Shift elements to the right"),
    line(2, "while (j >= 0 && arr[j] > current) {"),
    line(3, "arr[j + 1] = arr[j];"),
    line(3, "j--;"),
    line(2, "}"),
    line(2, "// Insert current element"),
    line(2, "arr[j + 1] = current;"),
    line(1, "}"),
    line(1, "return arr;"),
    line(0, "}"),
];

/// Listing line for a bubble code-highlight tag; unknown tags map to line 0.
#[must_use]
pub const fn bubble_line(tag: u8) -> usize {
    match tag {
        1 => 3,
        2 => 5,
        3 => 8,
        4 => 10,
        _ => 0,
    }
}

/// Listing line for an insertion code-highlight tag; unknown tags map to line 0.
#[must_use]
pub const fn insertion_line(tag: u8) -> usize {
    match tag {
        1 => 2,
        2 => 5,
        3 => 6,
        4 => 10,
        5 => 11,
        6 => 12,
        _ => 0,
    }
}

/// Asymptotic cost and properties of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
    pub in_place: bool,
}

pub const BUBBLE_COMPLEXITY: Complexity = Complexity {
    best: "O(n)",
    average: "O(n²)",
    worst: "O(n²)",
    space: "O(1)",
    stable: true,
    in_place: true,
};

pub const INSERTION_COMPLEXITY: Complexity = Complexity {
    best: "O(n)",
    average: "O(n²)",
    worst: "O(n²)",
    space: "O(1)",
    stable: true,
    in_place: true,
};
