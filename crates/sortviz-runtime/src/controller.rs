#![forbid(unsafe_code)]

//! Playback controller: history, navigation and auto-play over a generator.
//!
//! [`PlaybackController`] pulls steps lazily from a [`SortAlgorithm`]
//! iterator and caches them in a [`StepHistory`], so scrubbing backward and
//! forward replays cached steps and never re-runs the algorithm.
//!
//! # Invariants
//!
//! 1. **History monotonicity**: between resets the history only grows, and a
//!    stored step never changes.
//! 2. **Single timer**: at most one auto-play timer is pending. Reset,
//!    play/pause and speed changes cancel the pending timer before arming.
//! 3. **Paused means quiet**: when `is_playing()` is false no timer is
//!    pending, so [`tick`](PlaybackController::tick) cannot advance.
//! 4. **Fresh identities**: every array built by the controller gets newly
//!    minted ids, even for values seen before.
//!
//! # Lifecycle
//!
//! ```text
//!            reset / initialize
//!   ┌──────────────────────────────────┐
//!   ▼                                  │
//! [start] ──step_forward──► generator created (start step discarded)
//!                               │
//!                               ├─ Some(step) ─► history.push
//!                               └─ None ───────► exhausted, playback stops
//! ```

use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sortviz_core::{
    Element, ElementIds, SortAlgorithm, SortOrder, StepView, random_values, shuffled_values,
};

use crate::clock::{PlaybackClock, SystemClock};
use crate::config::PlaybackConfig;
use crate::history::StepHistory;
use crate::speed::Speed;
use crate::timer::AutoPlayTimer;

/// Result of one [`PlaybackController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing is scheduled.
    Idle,
    /// Playing, but the pending timer has not reached its deadline.
    Pending,
    /// The timer fired and the cursor moved forward.
    Advanced,
    /// The timer fired on an exhausted sequence; playback stopped.
    Finished,
}

/// Interactive playback over one algorithm's step sequence.
pub struct PlaybackController<A: SortAlgorithm, C: PlaybackClock = SystemClock> {
    config: PlaybackConfig,
    order: SortOrder,
    ids: ElementIds,
    rng: SmallRng,
    /// Array the current history was built from.
    initial: Vec<Element>,
    history: StepHistory<A::Step>,
    /// Live generator, created on the first pull past the start step.
    generator: Option<A::Steps>,
    exhausted: bool,
    playing: bool,
    speed: Speed,
    timer: AutoPlayTimer,
    clock: C,
}

impl<A: SortAlgorithm, C: PlaybackClock> fmt::Debug for PlaybackController<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("algorithm", &A::KIND)
            .field("order", &self.order)
            .field("len", &self.initial.len())
            .field("cursor", &self.history.cursor())
            .field("history_len", &self.history.len())
            .field("generator_live", &self.generator.is_some())
            .field("exhausted", &self.exhausted)
            .field("playing", &self.playing)
            .field("speed", &self.speed)
            .field("deadline", &self.timer.deadline())
            .finish()
    }
}

impl<A: SortAlgorithm> PlaybackController<A, SystemClock> {
    /// Controller on the wall clock.
    #[must_use]
    pub fn with_system_clock(config: PlaybackConfig) -> Self {
        Self::new(config, SystemClock::new())
    }
}

impl<A: SortAlgorithm, C: PlaybackClock> PlaybackController<A, C> {
    /// Create a controller showing a random array of `config.default_size`.
    #[must_use]
    pub fn new(config: PlaybackConfig, clock: C) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let order = config.order();
        let speed = config.speed();
        let mut ids = ElementIds::new();
        let values = random_values(&mut rng, config.default_size, config.value_range());
        let initial = ids.build(&values);
        let history = StepHistory::new(A::start_step(&initial, order));
        Self {
            config,
            order,
            ids,
            rng,
            initial,
            history,
            generator: None,
            exhausted: false,
            playing: false,
            speed,
            timer: AutoPlayTimer::new(),
            clock,
        }
    }

    // ========================================================================
    // Array lifecycle
    // ========================================================================

    /// Replace the array with `size` fresh random values.
    pub fn initialize(&mut self, size: usize) {
        self.stop("initialize");
        let values = random_values(&mut self.rng, size, self.config.value_range());
        self.load(&values);
        tracing::debug!(
            algorithm = A::KIND.slug(),
            size,
            "initialized random array"
        );
    }

    /// Start over.
    ///
    /// A non-empty `custom` becomes the new array. Otherwise the values on
    /// screen are shuffled; if nothing is on screen a random array of the
    /// configured size is drawn. `order`, when given, replaces the stored
    /// direction. Every element gets a newly minted id.
    pub fn reset(&mut self, custom: Option<&[i32]>, order: Option<SortOrder>) {
        self.stop("reset");
        let values = match custom {
            Some(values) if !values.is_empty() => values.to_vec(),
            _ => {
                let on_screen = self.history.current().values();
                if on_screen.is_empty() {
                    random_values(
                        &mut self.rng,
                        self.config.default_size,
                        self.config.value_range(),
                    )
                } else {
                    shuffled_values(&mut self.rng, &on_screen)
                }
            }
        };
        if let Some(order) = order {
            self.order = order;
        }
        self.load(&values);
        tracing::debug!(
            algorithm = A::KIND.slug(),
            custom = custom.is_some_and(|v| !v.is_empty()),
            order = self.order.label(),
            size = values.len(),
            "reset"
        );
    }

    fn load(&mut self, values: &[i32]) {
        self.initial = self.ids.build(values);
        self.generator = None;
        self.exhausted = false;
        self.history
            .restart(A::start_step(&self.initial, self.order));
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Move to the next step, replaying history or generating a new step.
    ///
    /// Returns `false` once the sequence is exhausted; playback stops and
    /// the displayed step is left unchanged.
    pub fn step_forward(&mut self) -> bool {
        if self.history.forward() {
            tracing::trace!(cursor = self.history.cursor(), "replayed cached step");
            self.rearm_if_playing();
            return true;
        }
        if self.exhausted {
            self.stop("exhausted");
            return false;
        }

        let initial = &self.initial;
        let order = self.order;
        let generator = self.generator.get_or_insert_with(|| {
            let mut steps = A::steps(initial, order);
            // History already holds the equivalent start step.
            let _ = steps.next();
            steps
        });

        match generator.next() {
            Some(step) => {
                self.history.push(step);
                tracing::trace!(
                    cursor = self.history.cursor(),
                    history_len = self.history.len(),
                    "generated step"
                );
                self.rearm_if_playing();
                true
            }
            None => {
                self.generator = None;
                self.exhausted = true;
                tracing::debug!(history_len = self.history.len(), "sequence exhausted");
                self.stop("exhausted");
                false
            }
        }
    }

    /// Move to the previous cached step. No-op at the first step.
    pub fn step_backward(&mut self) -> bool {
        if !self.history.back() {
            return false;
        }
        tracing::trace!(cursor = self.history.cursor(), "stepped back");
        self.rearm_if_playing();
        true
    }

    // ========================================================================
    // Auto-play
    // ========================================================================

    pub fn play_pause(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Start auto-play; the first advance happens one delay from now.
    pub fn play(&mut self) {
        if self.playing {
            return;
        }
        self.playing = true;
        let token = self.arm();
        tracing::debug!(token = token.get(), speed = self.speed.get(), "playback started");
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.stop("pause");
        }
    }

    /// Set the speed (clamped to 1–10). A pending timer is re-armed with the
    /// new delay.
    pub fn set_speed(&mut self, speed: u8) {
        self.speed = Speed::new(speed);
        tracing::debug!(speed = self.speed.get(), "speed changed");
        self.rearm_if_playing();
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        let now = self.clock.now_mono();
        if self.timer.fire_due(now).is_none() {
            return TickOutcome::Pending;
        }
        if self.step_forward() {
            TickOutcome::Advanced
        } else {
            TickOutcome::Finished
        }
    }

    /// Clock reading at which the pending timer fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// Time left until the pending timer fires.
    #[must_use]
    pub fn time_until_due(&self) -> Option<Duration> {
        let now = self.clock.now_mono();
        self.timer.deadline().map(|d| d.saturating_sub(now))
    }

    fn arm(&mut self) -> crate::timer::TimerToken {
        let now = self.clock.now_mono();
        self.timer.arm(now, self.speed.delay())
    }

    fn rearm_if_playing(&mut self) {
        if self.playing {
            self.arm();
        }
    }

    /// Stop playback and cancel any pending timer.
    fn stop(&mut self, reason: &'static str) {
        let cancelled = self.timer.cancel();
        if self.playing || cancelled.is_some() {
            tracing::debug!(reason, cancelled = cancelled.map(|t| t.get()), "playback stopped");
        }
        self.playing = false;
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// The step to display: `history[cursor]`.
    #[must_use]
    pub fn current_step(&self) -> &A::Step {
        self.history.current()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Auto-advance delay at the current speed.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.speed.delay()
    }

    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.history.cursor() > 0
    }

    /// Always `true`: forward either replays history or generates, and a
    /// call past the end is a harmless no-op.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        true
    }

    /// True when the final step is displayed and nothing more can be generated.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted && self.history.at_head()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    #[must_use]
    pub fn history(&self) -> &[A::Step] {
        self.history.as_slice()
    }

    /// Array the current sequence started from.
    #[must_use]
    pub fn initial_array(&self) -> &[Element] {
        &self.initial
    }

    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use sortviz_core::{
        BubblePhase, BubbleSort, ElementId, InsertionPhase, InsertionSort, values_of,
    };
    use std::collections::HashSet;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn bubble() -> (PlaybackController<BubbleSort, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let ctrl = PlaybackController::new(PlaybackConfig::seeded(11), clock.clone());
        (ctrl, clock)
    }

    fn ids_of(arr: &[Element]) -> HashSet<ElementId> {
        arr.iter().map(|el| el.id).collect()
    }

    fn run_to_end<A: SortAlgorithm, C: PlaybackClock>(ctrl: &mut PlaybackController<A, C>) {
        let mut guard = 0;
        while ctrl.step_forward() {
            guard += 1;
            assert!(guard < 10_000, "sequence did not terminate");
        }
    }

    #[test]
    fn starts_with_random_start_step() {
        let (ctrl, _) = bubble();
        assert_eq!(ctrl.history().len(), 1);
        assert_eq!(ctrl.cursor(), 0);
        assert_eq!(ctrl.current_step().phase, BubblePhase::Start);
        let values = ctrl.current_step().values();
        assert_eq!(values.len(), 8);
        assert!(values.iter().all(|v| (10..=99).contains(v)));
        assert!(!ctrl.can_go_previous());
        assert!(ctrl.can_go_next());
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.speed(), Speed::DEFAULT);
    }

    #[test]
    fn same_seed_same_array() {
        let (a, _) = bubble();
        let (b, _) = bubble();
        assert_eq!(a.current_step(), b.current_step());
    }

    #[test]
    fn first_forward_skips_generator_start() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[3, 1, 2]), None);
        assert!(ctrl.step_forward());
        assert_eq!(ctrl.current_step().phase, BubblePhase::Compare);
        assert_eq!(ctrl.current_step().comparing, vec![0, 1]);
        assert_eq!(ctrl.history().len(), 2);
    }

    #[test]
    fn backward_then_forward_replays() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[3, 1, 2]), None);
        for _ in 0..4 {
            assert!(ctrl.step_forward());
        }
        let snapshot = ctrl.history().to_vec();
        assert!(ctrl.step_backward());
        assert!(ctrl.step_backward());
        assert_eq!(ctrl.cursor(), 2);
        assert!(ctrl.can_go_previous());
        assert!(ctrl.step_forward());
        assert_eq!(ctrl.current_step(), &snapshot[3]);
        assert_eq!(ctrl.history(), snapshot.as_slice());
    }

    #[test]
    fn backward_at_start_is_noop() {
        let (mut ctrl, _) = bubble();
        let before = ctrl.current_step().clone();
        assert!(!ctrl.step_backward());
        assert_eq!(ctrl.cursor(), 0);
        assert_eq!(ctrl.current_step(), &before);
    }

    #[test]
    fn full_run_matches_generator_trace() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[3, 1, 2]), None);
        run_to_end(&mut ctrl);
        let expected: Vec<_> = BubbleSort::steps(ctrl.initial_array(), SortOrder::Ascending).collect();
        assert_eq!(ctrl.history(), expected.as_slice());
        assert_eq!(values_of(&ctrl.current_step().array), vec![1, 2, 3]);
        assert!(ctrl.is_exhausted());
    }

    #[test]
    fn forward_past_end_leaves_state_unchanged() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[2, 1]), None);
        run_to_end(&mut ctrl);
        let len = ctrl.history().len();
        let cursor = ctrl.cursor();
        assert!(!ctrl.step_forward());
        assert!(!ctrl.step_forward());
        assert_eq!(ctrl.history().len(), len);
        assert_eq!(ctrl.cursor(), cursor);
        assert!(ctrl.can_go_next());
    }

    #[test]
    fn exhausted_history_still_replays() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[2, 1]), None);
        run_to_end(&mut ctrl);
        assert!(ctrl.step_backward());
        assert!(!ctrl.is_exhausted());
        assert!(ctrl.step_forward());
        assert!(ctrl.is_exhausted());
    }

    #[test]
    fn single_element_has_only_complete_after_start() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[7]), None);
        assert_eq!(ctrl.current_step().total_passes, 0);
        assert!(ctrl.step_forward());
        assert_eq!(ctrl.current_step().phase, BubblePhase::Complete);
        assert!(!ctrl.step_forward());
    }

    #[test]
    fn reset_with_custom_mints_fresh_ids() {
        let (mut ctrl, _) = bubble();
        let before = ids_of(ctrl.initial_array());
        ctrl.reset(Some(&[5, 5, 5]), None);
        let first = ids_of(ctrl.initial_array());
        ctrl.reset(Some(&[5, 5, 5]), None);
        let second = ids_of(ctrl.initial_array());
        assert_eq!(first.len(), 3);
        assert!(first.is_disjoint(&second));
        assert!(before.is_disjoint(&first));
    }

    #[test]
    fn reset_without_custom_shuffles_displayed_values() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[4, 8, 15, 16, 23, 42]), None);
        ctrl.step_forward();
        let old_ids = ids_of(ctrl.initial_array());
        ctrl.reset(None, None);
        let mut values = ctrl.current_step().values();
        values.sort_unstable();
        assert_eq!(values, vec![4, 8, 15, 16, 23, 42]);
        assert!(old_ids.is_disjoint(&ids_of(ctrl.initial_array())));
        assert_eq!(ctrl.history().len(), 1);
        assert_eq!(ctrl.cursor(), 0);
    }

    #[test]
    fn empty_custom_falls_back_to_shuffle() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[1, 2, 3]), None);
        ctrl.reset(Some(&[]), None);
        assert_eq!(ctrl.current_step().len(), 3);
    }

    #[test]
    fn reset_order_sticks_until_changed() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[1, 3, 2]), Some(SortOrder::Descending));
        assert_eq!(ctrl.order(), SortOrder::Descending);
        run_to_end(&mut ctrl);
        assert_eq!(ctrl.current_step().values(), vec![3, 2, 1]);

        ctrl.reset(Some(&[1, 3, 2]), None);
        assert_eq!(ctrl.order(), SortOrder::Descending);
        ctrl.reset(None, Some(SortOrder::Ascending));
        run_to_end(&mut ctrl);
        assert_eq!(ctrl.current_step().values(), vec![1, 2, 3]);
    }

    #[test]
    fn initialize_draws_requested_size() {
        let (mut ctrl, _) = bubble();
        ctrl.initialize(12);
        assert_eq!(ctrl.current_step().len(), 12);
        assert_eq!(ctrl.current_step().total_passes, 11);
        ctrl.initialize(0);
        assert!(ctrl.current_step().is_empty());
        assert!(ctrl.step_forward());
        assert!(!ctrl.step_forward());
    }

    #[test]
    fn autoplay_advances_once_per_delay() {
        let (mut ctrl, clock) = bubble();
        ctrl.reset(Some(&[3, 1, 2]), None);
        ctrl.play();
        assert!(ctrl.is_playing());
        assert_eq!(ctrl.next_deadline(), Some(ms(200)));

        clock.advance(ms(199));
        assert_eq!(ctrl.tick(), TickOutcome::Pending);
        assert_eq!(ctrl.cursor(), 0);

        clock.advance(ms(1));
        assert_eq!(ctrl.tick(), TickOutcome::Advanced);
        assert_eq!(ctrl.cursor(), 1);
        assert_eq!(ctrl.next_deadline(), Some(ms(400)));
        assert_eq!(ctrl.tick(), TickOutcome::Pending);
    }

    #[test]
    fn late_tick_advances_only_once() {
        let (mut ctrl, clock) = bubble();
        ctrl.reset(Some(&[3, 1, 2]), None);
        ctrl.play();
        clock.advance(ms(5_000));
        assert_eq!(ctrl.tick(), TickOutcome::Advanced);
        assert_eq!(ctrl.tick(), TickOutcome::Pending);
        assert_eq!(ctrl.cursor(), 1);
    }

    #[test]
    fn speed_change_rearms_pending_timer() {
        let (mut ctrl, clock) = bubble();
        ctrl.play();
        clock.advance(ms(50));
        ctrl.set_speed(10);
        assert_eq!(ctrl.next_deadline(), Some(ms(150)));
        clock.advance(ms(100));
        assert_eq!(ctrl.tick(), TickOutcome::Advanced);
        assert_eq!(ctrl.next_deadline(), Some(ms(250)));
    }

    #[test]
    fn speed_change_while_paused_arms_nothing() {
        let (mut ctrl, _) = bubble();
        ctrl.set_speed(0);
        assert_eq!(ctrl.speed(), Speed::MIN);
        assert_eq!(ctrl.delay(), ms(1000));
        assert_eq!(ctrl.next_deadline(), None);
    }

    #[test]
    fn pause_cancels_pending_timer() {
        let (mut ctrl, clock) = bubble();
        ctrl.play_pause();
        assert!(ctrl.is_playing());
        ctrl.play_pause();
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.next_deadline(), None);
        clock.advance(ms(10_000));
        assert_eq!(ctrl.tick(), TickOutcome::Idle);
        assert_eq!(ctrl.cursor(), 0);
    }

    #[test]
    fn reset_while_playing_cancels_timer() {
        let (mut ctrl, clock) = bubble();
        ctrl.play();
        clock.advance(ms(150));
        ctrl.reset(Some(&[9, 8, 7]), None);
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.next_deadline(), None);
        clock.advance(ms(1_000));
        assert_eq!(ctrl.tick(), TickOutcome::Idle);
        assert_eq!(ctrl.cursor(), 0);
        assert_eq!(ctrl.current_step().values(), vec![9, 8, 7]);
    }

    #[test]
    fn autoplay_stops_at_exhaustion() {
        let (mut ctrl, clock) = bubble();
        ctrl.reset(Some(&[4, 3, 2, 1]), None);
        ctrl.set_speed(10);
        ctrl.play();
        let mut outcomes = Vec::new();
        for _ in 0..200 {
            clock.advance(ms(100));
            let outcome = ctrl.tick();
            outcomes.push(outcome);
            if outcome == TickOutcome::Finished {
                break;
            }
        }
        assert_eq!(outcomes.last(), Some(&TickOutcome::Finished));
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.next_deadline(), None);
        assert_eq!(ctrl.current_step().values(), vec![1, 2, 3, 4]);
        assert_eq!(ctrl.current_step().phase, BubblePhase::Complete);
        clock.advance(ms(100));
        assert_eq!(ctrl.tick(), TickOutcome::Idle);
    }

    #[test]
    fn manual_step_while_playing_rearms() {
        let (mut ctrl, clock) = bubble();
        ctrl.play();
        clock.advance(ms(150));
        assert!(ctrl.step_forward());
        assert_eq!(ctrl.next_deadline(), Some(ms(350)));
        clock.advance(ms(100));
        assert_eq!(ctrl.tick(), TickOutcome::Pending);
    }

    #[test]
    fn manual_step_past_end_stops_playback() {
        let (mut ctrl, _) = bubble();
        ctrl.reset(Some(&[1]), None);
        ctrl.step_forward();
        ctrl.play();
        assert!(!ctrl.step_forward());
        assert!(!ctrl.is_playing());
        assert_eq!(ctrl.next_deadline(), None);
    }

    #[test]
    fn insertion_controller_descending_scenario() {
        let clock = ManualClock::new();
        let mut ctrl: PlaybackController<InsertionSort, _> =
            PlaybackController::new(PlaybackConfig::seeded(5), clock);
        ctrl.reset(Some(&[5, 1, 4]), Some(SortOrder::Descending));
        assert_eq!(ctrl.current_step().sorted.len(), 1);
        assert!(ctrl.step_forward());
        assert_eq!(ctrl.current_step().phase, InsertionPhase::Pick);
        assert_eq!(ctrl.current_step().current_index, Some(1));
        run_to_end(&mut ctrl);
        assert_eq!(ctrl.current_step().values(), vec![5, 4, 1]);
        assert_eq!(ctrl.history().len(), 11);
    }

    #[test]
    fn config_order_and_speed_apply_at_construction() {
        let config = PlaybackConfig::seeded(1)
            .with_order(SortOrder::Descending)
            .with_speed(8)
            .with_size(3);
        let ctrl: PlaybackController<BubbleSort, _> =
            PlaybackController::new(config, ManualClock::new());
        assert_eq!(ctrl.order(), SortOrder::Descending);
        assert_eq!(ctrl.speed().get(), 8);
        assert_eq!(ctrl.current_step().len(), 3);
        assert!(ctrl.current_step().explanation.contains("descending"));
    }
}
