#![forbid(unsafe_code)]

//! sortviz runtime
//!
//! Turns a pull-based step generator into something a front-end can scrub
//! and auto-play.
//!
//! # Key Components
//!
//! - [`PlaybackController`] - history, cursor, play/pause and speed
//! - [`StepHistory`] - append-only step log with a cursor
//! - [`AutoPlayTimer`] - the single pending auto-advance timer
//! - [`PlaybackClock`] - host-supplied monotonic time
//! - [`PlaybackConfig`] - tunables, loadable from TOML/JSON
//!
//! # How it fits in the system
//! The controller owns no thread. The host loop calls
//! [`PlaybackController::tick`] and sleeps until
//! [`PlaybackController::next_deadline`], so every state change happens on
//! the caller's thread in a well-defined order.

pub mod clock;
pub mod config;
pub mod controller;
pub mod history;
pub mod speed;
pub mod timer;

pub use clock::{ManualClock, PlaybackClock, SystemClock};
pub use config::{ConfigError, ConfigIssue, PlaybackConfig};
pub use controller::{PlaybackController, TickOutcome};
pub use history::StepHistory;
pub use speed::Speed;
pub use timer::{AutoPlayTimer, TimerToken};
