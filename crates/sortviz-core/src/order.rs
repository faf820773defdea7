#![forbid(unsafe_code)]

//! Target ordering for a sort.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Ascending or descending target ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// True when `left` must move past `right`.
    ///
    /// Strict comparison: equal values are never out of order, which is what
    /// keeps both generators stable.
    #[must_use]
    pub const fn out_of_order(self, left: i32, right: i32) -> bool {
        match self {
            Self::Ascending => left > right,
            Self::Descending => left < right,
        }
    }

    /// Operator tested by [`out_of_order`](Self::out_of_order).
    #[must_use]
    pub const fn operator(self) -> &'static str {
        match self {
            Self::Ascending => ">",
            Self::Descending => "<",
        }
    }

    /// Phrase used in start-step explanations.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Ascending => "ascending (smallest to largest)",
            Self::Descending => "descending (largest to smallest)",
        }
    }

    /// Short label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// True when `values` already satisfies this ordering.
    #[must_use]
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}
