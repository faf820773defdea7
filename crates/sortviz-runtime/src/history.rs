#![forbid(unsafe_code)]

//! Append-only step log with a cursor.
//!
//! # Invariants
//!
//! 1. The log is never empty: it always holds at least the start step.
//! 2. `cursor < len()` after any operation.
//! 3. Between two [`restart`](StepHistory::restart) calls entries are only
//!    appended; an entry once stored is never changed or removed.
//! 4. Moving the cursor backward never discards entries ahead of it.
//!
//! ```text
//! restart(s0)        [s0]              cursor 0
//! push(s1), push(s2) [s0, s1, s2]      cursor 2
//! back(), back()     [s0, s1, s2]      cursor 0
//! forward()          [s0, s1, s2]      cursor 1   (replay, no generation)
//! ```

/// Append-only history of produced steps.
#[derive(Debug, Clone)]
pub struct StepHistory<S> {
    steps: Vec<S>,
    cursor: usize,
}

impl<S> StepHistory<S> {
    /// History holding only `start`.
    #[must_use]
    pub fn new(start: S) -> Self {
        Self {
            steps: vec![start],
            cursor: 0,
        }
    }

    /// Drop everything and begin again from `start`.
    pub fn restart(&mut self, start: S) {
        self.steps.clear();
        self.steps.push(start);
        self.cursor = 0;
    }

    /// Append a freshly generated step and move the cursor onto it.
    ///
    /// The cursor must already sit on the last entry; generation only
    /// happens at the head of the log.
    pub fn push(&mut self, step: S) {
        debug_assert!(self.at_head(), "push while replaying history");
        self.steps.push(step);
        self.cursor = self.steps.len() - 1;
    }

    /// Replay the next cached step. Returns `false` at the head.
    pub fn forward(&mut self) -> bool {
        if self.at_head() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Step back one entry. Returns `false` at the start.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    #[must_use]
    pub fn current(&self) -> &S {
        &self.steps[self.cursor]
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True when the cursor sits on the newest entry.
    #[must_use]
    pub fn at_head(&self) -> bool {
        self.cursor + 1 == self.steps.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[S] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_single_entry() {
        let history = StepHistory::new("s0");
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(history.at_head());
        assert_eq!(*history.current(), "s0");
    }

    #[test]
    fn back_keeps_future_entries() {
        let mut history = StepHistory::new(0);
        history.push(1);
        history.push(2);
        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        assert_eq!(history.len(), 3);
        assert!(history.forward());
        assert_eq!(*history.current(), 1);
        assert!(history.forward());
        assert!(!history.forward());
        assert_eq!(history.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn restart_clears_everything() {
        let mut history = StepHistory::new(0);
        history.push(1);
        history.restart(10);
        assert_eq!(history.as_slice(), &[10]);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.len(), 1);
    }
}
