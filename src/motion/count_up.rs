//! Count a displayed number from zero up to a target.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use super::frame::FrameScheduler;

/// `floor(target * min(elapsed / duration, 1))`, exact at and after `duration`.
pub fn count_at(target: u64, duration_ms: f64, elapsed_ms: f64) -> u64 {
    if elapsed_ms >= duration_ms {
        return target;
    }
    let fraction = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    ((target as f64 * fraction).floor() as u64).min(target)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CounterState {
    pub current: u64,
    pub target: u64,
    pub started_at: Option<f64>,
    pub finished: bool,
}

#[derive(Clone, Debug, Default)]
pub struct CountUpAnimator {
    state: CounterState,
    duration_ms: f64,
    latched: bool,
    cancelled: bool,
}

impl CountUpAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn current(&self) -> u64 {
        self.state.current
    }

    pub fn is_running(&self) -> bool {
        self.latched && !self.state.finished && !self.cancelled
    }

    /// Arm the counter. The start time is taken from the first tick.
    ///
    /// Only the first call does anything; later calls return false.
    pub fn start(&mut self, target: u64, duration_ms: u32) -> bool {
        if self.latched || self.cancelled {
            return false;
        }
        self.latched = true;
        self.duration_ms = f64::from(duration_ms.max(1));
        self.state.target = target;
        true
    }

    /// Advance to `now`. Returns the displayed value when it changed.
    pub fn tick(&mut self, now: f64) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        let started_at = *self.state.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        let next = count_at(self.state.target, self.duration_ms, elapsed).max(self.state.current);
        let changed = next != self.state.current;
        self.state.current = next;
        if elapsed >= self.duration_ms {
            self.state.current = self.state.target;
            self.state.finished = true;
        }
        changed.then_some(self.state.current)
    }

    /// Jump straight to the target, for hosts without animation frames.
    pub fn complete(&mut self) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        let changed = self.state.current != self.state.target;
        self.state.current = self.state.target;
        self.state.finished = true;
        changed.then_some(self.state.current)
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

struct RunInner<S: FrameScheduler> {
    animator: CountUpAnimator,
    scheduler: S,
    pending: Option<S::Handle>,
    on_update: Box<dyn Fn(u64)>,
}

/// A [`CountUpAnimator`] driven by a [`FrameScheduler`].
///
/// [`CountUpRun::dispose`] cancels the outstanding frame, so nothing reaches
/// `on_update` after the owner is gone.
pub struct CountUpRun<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    inner: Rc<RefCell<RunInner<S>>>,
}

impl<S> CountUpRun<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    pub fn new(scheduler: S, on_update: impl Fn(u64) + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RunInner {
                animator: CountUpAnimator::new(),
                scheduler,
                pending: None,
                on_update: Box::new(on_update),
            })),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> CounterState {
        self.inner.borrow().animator.state()
    }

    pub fn start(&self, target: u64, duration_ms: u32) -> bool {
        let started = self.inner.borrow_mut().animator.start(target, duration_ms);
        if started {
            info!(count = target, duration_ms, "count-up started");
            Self::schedule(&self.inner);
        }
        started
    }

    pub fn dispose(&self) {
        let mut guard = self.inner.borrow_mut();
        let run = &mut *guard;
        if run.animator.is_running() {
            debug!(current = run.animator.current(), "count-up cancelled");
        }
        run.animator.cancel();
        if let Some(handle) = run.pending.take() {
            run.scheduler.cancel(handle);
        }
    }

    fn schedule(inner: &Rc<RefCell<RunInner<S>>>) {
        let weak: Weak<RefCell<RunInner<S>>> = Rc::downgrade(inner);
        let callback = Box::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                Self::on_frame(&inner, timestamp);
            }
        });
        let handle = inner.borrow().scheduler.request(callback);
        match handle {
            Some(handle) => inner.borrow_mut().pending = Some(handle),
            None => {
                debug!("no animation frames, jumping to target");
                let value = inner.borrow_mut().animator.complete();
                if let Some(value) = value {
                    (inner.borrow().on_update)(value);
                }
            }
        }
    }

    fn on_frame(inner: &Rc<RefCell<RunInner<S>>>, timestamp: f64) {
        let (value, running) = {
            let mut run = inner.borrow_mut();
            run.pending = None;
            let value = run.animator.tick(timestamp);
            (value, run.animator.is_running())
        };
        if let Some(value) = value {
            (inner.borrow().on_update)(value);
        }
        if running {
            Self::schedule(inner);
        } else {
            debug!(value = inner.borrow().animator.current(), "count-up finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::frame::manual::ManualFrames;
    use proptest::prelude::*;

    #[test]
    fn halfway_and_exact_finish() {
        let mut animator = CountUpAnimator::new();
        assert!(animator.start(206, 2000));
        assert_eq!(animator.tick(0.0), None);
        assert_eq!(animator.tick(1000.0), Some(103));
        assert_eq!(animator.tick(2000.0), Some(206));
        assert!(animator.state().finished);
        assert_eq!(animator.tick(5000.0), None);
        assert_eq!(animator.current(), 206);
    }

    #[test]
    fn start_time_comes_from_first_tick() {
        let mut animator = CountUpAnimator::new();
        animator.start(100, 1000);
        animator.tick(5000.0);
        assert_eq!(animator.state().started_at, Some(5000.0));
        assert_eq!(animator.tick(5500.0), Some(50));
    }

    #[test]
    fn late_final_frame_forces_target() {
        let mut animator = CountUpAnimator::new();
        animator.start(7, 1000);
        animator.tick(0.0);
        assert_eq!(animator.tick(999.0), Some(6));
        assert_eq!(animator.tick(1016.0), Some(7));
    }

    #[test]
    fn second_start_is_ignored() {
        let mut animator = CountUpAnimator::new();
        assert!(animator.start(206, 2000));
        animator.tick(0.0);
        animator.tick(1000.0);
        assert!(!animator.start(999, 10));
        assert_eq!(animator.state().target, 206);
        assert_eq!(animator.tick(2000.0), Some(206));
    }

    #[test]
    fn zero_target_stays_at_zero() {
        let mut animator = CountUpAnimator::new();
        animator.start(0, 500);
        assert_eq!(animator.tick(0.0), None);
        assert_eq!(animator.tick(600.0), None);
        assert!(animator.state().finished);
        assert_eq!(animator.current(), 0);
    }

    #[test]
    fn run_stops_scheduling_when_finished() {
        let frames = ManualFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            CountUpRun::new(frames.clone(), move |v| seen.borrow_mut().push(v))
        };

        assert!(run.start(206, 2000));
        assert!(!run.start(206, 2000));
        assert_eq!(frames.pending(), 1);

        let mut t = 0.0;
        while frames.pending() > 0 {
            frames.fire(t);
            t += 16.0;
        }

        let seen = seen.borrow();
        assert_eq!(seen.last(), Some(&206));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(run.state().finished);
    }

    #[test]
    fn dispose_mid_run_stops_all_updates() {
        let frames = ManualFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            CountUpRun::new(frames.clone(), move |v| seen.borrow_mut().push(v))
        };
        run.start(206, 2000);

        let mut t = 0.0;
        while t <= 500.0 {
            frames.fire(t);
            t += 16.0;
        }
        let before = seen.borrow().len();
        let state = run.state();
        assert!(state.current > 0 && state.current < 206);

        run.dispose();
        assert_eq!(frames.pending(), 0);

        frames.fire(1000.0);
        frames.fire(3000.0);
        assert_eq!(seen.borrow().len(), before);
        assert_eq!(run.state(), state);
    }

    struct NoFrames;

    impl FrameScheduler for NoFrames {
        type Handle = ();

        fn request(&self, _callback: Box<dyn FnOnce(f64)>) -> Option<()> {
            None
        }

        fn cancel(&self, _handle: ()) {}
    }

    #[test]
    fn host_without_frames_shows_target() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            CountUpRun::new(NoFrames, move |v| seen.borrow_mut().push(v))
        };
        run.start(870, 2000);
        assert_eq!(*seen.borrow(), vec![870]);
    }

    proptest! {
        #[test]
        fn sequence_is_monotone_bounded_and_exact(
            target in 0u64..100_000,
            duration in 1u32..5_000,
            steps in proptest::collection::vec(0.0f64..120.0, 1..200),
        ) {
            let mut animator = CountUpAnimator::new();
            animator.start(target, duration);
            let mut now = 0.0;
            let mut last = 0;
            animator.tick(now);
            for step in steps {
                now += step;
                animator.tick(now);
                let current = animator.current();
                prop_assert!(current >= last);
                prop_assert!(current <= target);
                last = current;
            }
            animator.tick(now + f64::from(duration));
            prop_assert_eq!(animator.current(), target);
            prop_assert!(animator.state().finished);
        }
    }
}
