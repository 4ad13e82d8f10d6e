//! Staggered enter animations.
//!
//! A [`RevealController`] owns one group of children. It is triggered at most
//! once; after that every child runs its own transition, offset by
//! `base_delay + index * stagger`, and the group settles into
//! [`RevealPhase::Visible`] for good.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::easing::Easing;
use super::frame::FrameScheduler;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl RevealStyle {
    pub const RESTING: RevealStyle = RevealStyle {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn fade_up(distance: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y: distance,
            ..Self::RESTING
        }
    }

    pub fn fade_side(distance: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_x: distance,
            ..Self::RESTING
        }
    }

    pub fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub from: RevealStyle,
    pub to: RevealStyle,
    pub duration_ms: f64,
    pub easing: Easing,
    pub base_delay_ms: f64,
    pub stagger_ms: f64,
}

impl RevealConfig {
    /// `{opacity 0, translateY +20}` to resting, 600 ms, no stagger.
    pub fn fade_up() -> Self {
        Self {
            from: RevealStyle::fade_up(20.0),
            to: RevealStyle::RESTING,
            duration_ms: 600.0,
            easing: Easing::EaseOut,
            base_delay_ms: 0.0,
            stagger_ms: 0.0,
        }
    }

    pub fn from(mut self, from: RevealStyle) -> Self {
        self.from = from;
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.duration_ms = ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn base_delay(mut self, ms: f64) -> Self {
        self.base_delay_ms = ms.max(0.0);
        self
    }

    pub fn stagger(mut self, ms: f64) -> Self {
        self.stagger_ms = ms.max(0.0);
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::fade_up()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Entering,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealEvent {
    Trigger { at: f64 },
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    pub phase: RevealPhase,
    pub applied_at: Option<f64>,
}

impl RevealState {
    pub const HIDDEN: RevealState = RevealState {
        phase: RevealPhase::Hidden,
        applied_at: None,
    };

    pub fn step(self, event: RevealEvent) -> RevealState {
        match (self.phase, event) {
            (RevealPhase::Hidden, RevealEvent::Trigger { at }) => RevealState {
                phase: RevealPhase::Entering,
                applied_at: Some(at),
            },
            (RevealPhase::Entering, RevealEvent::Settle) => RevealState {
                phase: RevealPhase::Visible,
                ..self
            },
            _ => self,
        }
    }
}

/// Transition parameters for one child of a group.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildReveal {
    pub delay_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
    pub to: RevealStyle,
}

impl ChildReveal {
    pub fn finishes_at(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    /// Inline style with a CSS transition carrying this child's delay.
    pub fn transition_css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "{} transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            self.to.css(),
            d = self.duration_ms,
            e = easing,
            delay = self.delay_ms,
        )
    }
}

#[derive(Clone, Debug)]
pub struct RevealController {
    config: RevealConfig,
    count: usize,
    state: RevealState,
}

impl RevealController {
    pub fn new(count: usize, config: RevealConfig) -> Self {
        Self {
            config,
            count,
            state: RevealState::HIDDEN,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.phase
    }

    pub fn child(&self, index: usize) -> ChildReveal {
        ChildReveal {
            delay_ms: self.config.base_delay_ms + index as f64 * self.config.stagger_ms,
            duration_ms: self.config.duration_ms,
            easing: self.config.easing,
            to: self.config.to,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = ChildReveal> + '_ {
        (0..self.count).map(|i| self.child(i))
    }

    /// Time from trigger until the last child comes to rest.
    pub fn total_ms(&self) -> f64 {
        let last = self.count.saturating_sub(1);
        self.child(last).finishes_at()
    }

    /// Start the sequence. Returns false when it already started, so the
    /// caller never schedules a second set of timers for the same children.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.state.phase != RevealPhase::Hidden {
            return false;
        }
        self.state = self.state.step(RevealEvent::Trigger { at: now });
        true
    }

    /// Move to `Visible` once every child has finished.
    pub fn settle(&mut self, now: f64) -> bool {
        match self.state.applied_at {
            Some(at) if self.state.phase == RevealPhase::Entering && now - at >= self.total_ms() => {
                self.state = self.state.step(RevealEvent::Settle);
                true
            }
            _ => false,
        }
    }

    /// Inline styles for each child in the current phase.
    pub fn styles(&self) -> Vec<String> {
        match self.state.phase {
            RevealPhase::Hidden => vec![self.config.from.css(); self.count],
            RevealPhase::Entering => self.children().map(|c| c.transition_css()).collect(),
            RevealPhase::Visible => vec![self.config.to.css(); self.count],
        }
    }
}

struct RunInner<S: FrameScheduler> {
    controller: RevealController,
    scheduler: S,
    pending: Option<S::Handle>,
    on_phase: Box<dyn Fn(RevealPhase)>,
}

/// A [`RevealController`] whose trigger lands on the next animation frame.
///
/// The children keep their `from` style for at least one painted frame, so
/// the transitions run even when the group is triggered during mount.
pub struct RevealRun<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    inner: Rc<RefCell<RunInner<S>>>,
}

impl<S> RevealRun<S>
where
    S: FrameScheduler + 'static,
    S::Handle: 'static,
{
    pub fn new(
        controller: RevealController,
        scheduler: S,
        on_phase: impl Fn(RevealPhase) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RunInner {
                controller,
                scheduler,
                pending: None,
                on_phase: Box::new(on_phase),
            })),
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.inner.borrow().controller.phase()
    }

    pub fn total_ms(&self) -> f64 {
        self.inner.borrow().controller.total_ms()
    }

    pub fn styles(&self) -> Vec<String> {
        self.inner.borrow().controller.styles()
    }

    /// Ask for the trigger frame. `now` stands in for the frame time when
    /// the host has no animation frames.
    ///
    /// Returns false when the group already started or a frame is pending.
    pub fn arm(&self, now: f64) -> bool {
        {
            let run = self.inner.borrow();
            if run.controller.phase() != RevealPhase::Hidden || run.pending.is_some() {
                return false;
            }
        }
        let weak: Weak<RefCell<RunInner<S>>> = Rc::downgrade(&self.inner);
        let callback = Box::new(move |timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().pending = None;
                Self::enter(&inner, timestamp);
            }
        });
        let handle = self.inner.borrow().scheduler.request(callback);
        match handle {
            Some(handle) => self.inner.borrow_mut().pending = Some(handle),
            None => {
                debug!("no animation frames, revealing at once");
                Self::enter(&self.inner, now);
            }
        }
        true
    }

    pub fn settle(&self, now: f64) -> bool {
        let settled = self.inner.borrow_mut().controller.settle(now);
        if settled {
            (self.inner.borrow().on_phase)(RevealPhase::Visible);
        }
        settled
    }

    /// Cancel a trigger frame that has not fired yet.
    pub fn dispose(&self) {
        let mut guard = self.inner.borrow_mut();
        let run = &mut *guard;
        if let Some(handle) = run.pending.take() {
            debug!("reveal cancelled before its first frame");
            run.scheduler.cancel(handle);
        }
    }

    fn enter(inner: &Rc<RefCell<RunInner<S>>>, at: f64) {
        let started = inner.borrow_mut().controller.trigger(at);
        if started {
            debug!(at, total_ms = inner.borrow().controller.total_ms(), "reveal started");
            (inner.borrow().on_phase)(RevealPhase::Entering);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::frame::manual::ManualFrames;

    fn recording_run(
        controller: RevealController,
        frames: &ManualFrames,
    ) -> (RevealRun<ManualFrames>, Rc<RefCell<Vec<RevealPhase>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            RevealRun::new(controller, frames.clone(), move |p| seen.borrow_mut().push(p))
        };
        (run, seen)
    }

    #[test]
    fn stagger_applies_transitions_in_index_order() {
        let config = RevealConfig::fade_up()
            .stagger(100.0)
            .duration(0.0)
            .easing(Easing::Linear);
        let mut controller = RevealController::new(4, config);
        assert!(controller.trigger(0.0));

        let styles = controller.styles();
        assert_eq!(styles.len(), 4);
        assert_eq!(
            styles[2],
            "opacity: 1; transform: translate(0px, 0px) scale(1); \
             transition: opacity 0ms linear 200ms, transform 0ms linear 200ms;"
        );
        for (i, style) in styles.iter().enumerate() {
            let delay = format!("0ms linear {}ms;", i * 100);
            assert!(style.ends_with(&delay), "{} should end with {}", style, delay);
        }

        let finishes: Vec<f64> = controller.children().map(|c| c.finishes_at()).collect();
        assert_eq!(finishes, vec![0.0, 100.0, 200.0, 300.0]);
        assert_eq!(controller.total_ms(), 300.0);
    }

    #[test]
    fn each_child_finishes_one_duration_after_its_delay() {
        let config = RevealConfig::fade_up().stagger(100.0).easing(Easing::Linear);
        let controller = RevealController::new(4, config);
        let delays: Vec<f64> = controller.children().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0, 300.0]);

        let child = controller.child(2);
        assert_eq!(child.finishes_at(), 800.0);
        assert!(child
            .transition_css()
            .ends_with("transition: opacity 600ms linear 200ms, transform 600ms linear 200ms;"));
        assert_eq!(controller.total_ms(), 900.0);
    }

    #[test]
    fn base_delay_offsets_every_child() {
        let config = RevealConfig::fade_up().base_delay(600.0).stagger(100.0);
        let controller = RevealController::new(2, config);
        assert_eq!(controller.child(0).delay_ms, 600.0);
        assert_eq!(controller.child(1).delay_ms, 700.0);
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut controller = RevealController::new(3, RevealConfig::fade_up().stagger(100.0));
        assert!(controller.trigger(1000.0));
        assert!(!controller.trigger(1200.0));
        // Settling is measured from the first trigger.
        assert!(!controller.settle(1799.0));
        assert!(controller.settle(1800.0));
    }

    #[test]
    fn settles_once_the_last_child_finishes() {
        let mut controller = RevealController::new(3, RevealConfig::fade_up().stagger(100.0));
        assert!(!controller.settle(0.0));
        controller.trigger(0.0);
        assert!(!controller.settle(799.0));
        assert!(controller.settle(800.0));
        assert_eq!(controller.phase(), RevealPhase::Visible);

        assert!(!controller.trigger(900.0));
        assert_eq!(controller.styles(), vec![RevealStyle::RESTING.css(); 3]);
    }

    #[test]
    fn hidden_group_renders_from_style() {
        let controller = RevealController::new(2, RevealConfig::fade_up());
        assert_eq!(controller.styles(), vec![RevealStyle::fade_up(20.0).css(); 2]);
        assert!(controller.styles()[0].starts_with("opacity: 0;"));
    }

    #[test]
    fn state_step_is_one_way() {
        let state = RevealState::HIDDEN.step(RevealEvent::Settle);
        assert_eq!(state, RevealState::HIDDEN);

        let entering = state.step(RevealEvent::Trigger { at: 5.0 });
        assert_eq!(entering.phase, RevealPhase::Entering);
        let visible = entering.step(RevealEvent::Settle);
        assert_eq!(visible.phase, RevealPhase::Visible);
        assert_eq!(visible.step(RevealEvent::Trigger { at: 9.0 }), visible);
        assert_eq!(visible.applied_at, Some(5.0));
    }

    #[test]
    fn entering_styles_carry_delays() {
        let mut controller = RevealController::new(2, RevealConfig::fade_up().stagger(200.0));
        controller.trigger(0.0);
        let styles = controller.styles();
        assert!(styles[0].contains("600ms"));
        assert!(styles[1].contains(" 200ms"));
    }

    #[test]
    fn armed_group_stays_hidden_until_the_next_frame() {
        let frames = ManualFrames::default();
        let controller = RevealController::new(2, RevealConfig::fade_up().stagger(100.0));
        let (run, seen) = recording_run(controller, &frames);

        assert!(run.arm(0.0));
        assert!(!run.arm(5.0));
        assert_eq!(frames.pending(), 1);
        assert_eq!(run.phase(), RevealPhase::Hidden);
        assert!(run.styles().iter().all(|s| s.starts_with("opacity: 0;")));
        assert!(seen.borrow().is_empty());

        frames.fire(16.0);
        assert_eq!(run.phase(), RevealPhase::Entering);
        assert_eq!(*seen.borrow(), vec![RevealPhase::Entering]);
        assert!(run.styles()[1].contains(" 100ms"));
        assert!(!run.arm(32.0));
        assert_eq!(frames.pending(), 0);

        assert!(!run.settle(16.0 + run.total_ms() - 1.0));
        assert!(run.settle(16.0 + run.total_ms()));
        assert_eq!(*seen.borrow(), vec![RevealPhase::Entering, RevealPhase::Visible]);
    }

    #[test]
    fn dispose_before_the_frame_keeps_the_group_hidden() {
        let frames = ManualFrames::default();
        let (run, seen) = recording_run(RevealController::new(3, RevealConfig::fade_up()), &frames);

        run.arm(0.0);
        run.dispose();
        assert_eq!(frames.pending(), 0);

        frames.fire(16.0);
        assert_eq!(run.phase(), RevealPhase::Hidden);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropped_run_ignores_a_late_frame() {
        let frames = ManualFrames::default();
        let (run, seen) = recording_run(RevealController::new(1, RevealConfig::fade_up()), &frames);

        run.arm(0.0);
        drop(run);
        frames.fire(16.0);
        assert!(seen.borrow().is_empty());
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
    fn without_frames_the_group_enters_at_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let run = {
            let seen = seen.clone();
            RevealRun::new(
                RevealController::new(2, RevealConfig::fade_up()),
                NoFrames,
                move |p| seen.borrow_mut().push(p),
            )
        };

        assert!(run.arm(250.0));
        assert_eq!(run.phase(), RevealPhase::Entering);
        assert_eq!(*seen.borrow(), vec![RevealPhase::Entering]);
        assert!(run.settle(250.0 + run.total_ms()));
    }
}
