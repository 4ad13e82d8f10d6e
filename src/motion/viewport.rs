//! Viewport visibility and scroll progress for one observed region.
//!
//! [`ViewportWatcher`] is the DOM-free half of `use_viewport`: the hook feeds
//! it intersection and scroll events, the watcher decides what the section
//! gets to see.

use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the region that must intersect to count as visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"-100px"`.
    pub root_margin: String,
    /// Stop at the first visible report.
    pub once: bool,
}

impl WatchOptions {
    pub fn once() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
            once: true,
        }
    }

    pub fn continuous() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
            once: false,
        }
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn margin(mut self, margin: &str) -> Self {
        self.root_margin = margin.to_string();
        self
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::once()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSignal {
    pub is_visible: bool,
    pub progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatcherPhase {
    Idle,
    Armed,
    /// Terminal for `once` watchers.
    Triggered,
    Active,
    Inactive,
    /// Detached; every later event is ignored.
    Released,
}

impl WatcherPhase {
    pub fn is_observing(self) -> bool {
        matches!(
            self,
            WatcherPhase::Armed | WatcherPhase::Active | WatcherPhase::Inactive
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    Attached,
    Intersection { visible: bool },
    Scrolled { progress: f64 },
    /// The host cannot observe intersections.
    Unsupported,
    Detached,
}

/// The phase transition function shared by both watcher flavours.
pub fn transition(phase: WatcherPhase, once: bool, event: ViewportEvent) -> WatcherPhase {
    use ViewportEvent::*;
    use WatcherPhase::*;

    match (phase, event) {
        (Released, _) => Released,
        (_, Detached) => Released,
        (Idle, Attached) => Armed,
        (Idle, _) => Idle,
        (Triggered, _) => Triggered,
        (_, Unsupported) if once => Triggered,
        (_, Unsupported) => Active,
        (Armed | Active | Inactive, Intersection { visible: true }) if once => Triggered,
        (Armed | Active | Inactive, Intersection { visible: true }) => Active,
        (Armed, Intersection { visible: false }) => Armed,
        (Active | Inactive, Intersection { visible: false }) => Inactive,
        (phase, Attached | Scrolled { .. }) => phase,
    }
}

/// Progress of a region through the viewport.
///
/// 0.0 when the region's top edge sits on the viewport's bottom edge, 1.0 when
/// its bottom edge leaves through the top.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Linear map of `value` from `input` onto `output`, clamped at both ends.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if (in_hi - in_lo).abs() < f64::EPSILON {
        return if value < in_lo { out_lo } else { out_hi };
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

#[derive(Clone, Debug)]
pub struct ViewportWatcher {
    options: WatchOptions,
    phase: WatcherPhase,
    signal: ViewportSignal,
}

impl ViewportWatcher {
    pub fn new(options: WatchOptions) -> Self {
        Self {
            options,
            phase: WatcherPhase::Idle,
            signal: ViewportSignal::default(),
        }
    }

    pub fn phase(&self) -> WatcherPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn signal(&self) -> ViewportSignal {
        self.signal
    }

    /// Whether scroll progress is still worth computing.
    pub fn wants_progress(&self) -> bool {
        !self.options.once && matches!(self.phase, WatcherPhase::Armed | WatcherPhase::Active)
    }

    /// Arm the watcher. Returns false if it was already attached or released.
    pub fn attach(&mut self) -> bool {
        if self.phase != WatcherPhase::Idle {
            return false;
        }
        self.handle(ViewportEvent::Attached);
        true
    }

    pub fn detach(&mut self) {
        self.handle(ViewportEvent::Detached);
    }

    /// Apply an event; returns the new signal when it changed.
    pub fn handle(&mut self, event: ViewportEvent) -> Option<ViewportSignal> {
        let before = self.phase;
        let wanted_progress = self.wants_progress();
        let after = transition(before, self.options.once, event);
        if before != after {
            debug!(from = ?before, to = ?after, once = self.options.once, "viewport phase");
        }
        self.phase = after;
        if !before.is_observing() {
            return None;
        }

        let previous = self.signal;
        match event {
            ViewportEvent::Intersection { .. } | ViewportEvent::Unsupported => {
                self.signal.is_visible = matches!(after, WatcherPhase::Triggered | WatcherPhase::Active);
                if event == ViewportEvent::Unsupported {
                    self.signal.progress = 1.0;
                }
            }
            ViewportEvent::Scrolled { progress } if wanted_progress => {
                self.signal.progress = progress.clamp(0.0, 1.0);
            }
            _ => {}
        }

        (self.signal != previous).then_some(self.signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn once_watcher_latches_on_first_visible() {
        let mut watcher = ViewportWatcher::new(WatchOptions::once());
        assert!(watcher.attach());
        assert_eq!(watcher.phase(), WatcherPhase::Armed);

        assert_eq!(watcher.handle(ViewportEvent::Intersection { visible: false }), None);
        let signal = watcher.handle(ViewportEvent::Intersection { visible: true });
        assert_eq!(signal.map(|s| s.is_visible), Some(true));
        assert_eq!(watcher.phase(), WatcherPhase::Triggered);

        assert_eq!(watcher.handle(ViewportEvent::Intersection { visible: false }), None);
        assert!(watcher.signal().is_visible);
    }

    #[test]
    fn observer_init_values_stay_valid() {
        let options = WatchOptions::once().threshold(1.5).margin("-100px");
        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.root_margin, "-100px");
        assert_eq!(WatchOptions::continuous().threshold(-0.2).threshold, 0.0);
        assert_eq!(WatchOptions::default().root_margin, "0px");
    }

    #[test]
    fn continuous_watcher_toggles() {
        let mut watcher = ViewportWatcher::new(WatchOptions::continuous());
        watcher.attach();
        watcher.handle(ViewportEvent::Intersection { visible: true });
        assert_eq!(watcher.phase(), WatcherPhase::Active);
        watcher.handle(ViewportEvent::Intersection { visible: false });
        assert_eq!(watcher.phase(), WatcherPhase::Inactive);
        assert!(!watcher.signal().is_visible);
        watcher.handle(ViewportEvent::Intersection { visible: true });
        assert_eq!(watcher.phase(), WatcherPhase::Active);
        assert!(watcher.signal().is_visible);
    }

    #[test]
    fn progress_tracks_scroll_only_while_near() {
        let mut watcher = ViewportWatcher::new(WatchOptions::continuous());
        watcher.attach();
        assert!(watcher.wants_progress());
        watcher.handle(ViewportEvent::Scrolled { progress: 0.1 });
        watcher.handle(ViewportEvent::Intersection { visible: true });
        watcher.handle(ViewportEvent::Scrolled { progress: 0.4 });
        assert_eq!(watcher.signal().progress, 0.4);

        watcher.handle(ViewportEvent::Intersection { visible: false });
        assert!(!watcher.wants_progress());
        assert_eq!(watcher.handle(ViewportEvent::Scrolled { progress: 0.9 }), None);
        assert_eq!(watcher.signal().progress, 0.4);
    }

    #[test]
    fn once_watcher_ignores_progress() {
        let mut watcher = ViewportWatcher::new(WatchOptions::once());
        watcher.attach();
        assert_eq!(watcher.handle(ViewportEvent::Scrolled { progress: 0.5 }), None);
    }

    #[test]
    fn events_before_attach_are_ignored() {
        let mut watcher = ViewportWatcher::new(WatchOptions::once());
        assert_eq!(watcher.handle(ViewportEvent::Intersection { visible: true }), None);
        assert_eq!(watcher.phase(), WatcherPhase::Idle);
    }

    #[test]
    fn released_watcher_stays_released() {
        let mut watcher = ViewportWatcher::new(WatchOptions::continuous());
        watcher.attach();
        watcher.detach();
        assert_eq!(watcher.phase(), WatcherPhase::Released);
        assert!(!watcher.attach());
        assert_eq!(watcher.handle(ViewportEvent::Intersection { visible: true }), None);
        assert_eq!(watcher.phase(), WatcherPhase::Released);
    }

    #[test]
    fn unsupported_host_degrades_to_visible() {
        let mut once = ViewportWatcher::new(WatchOptions::once());
        once.attach();
        let signal = once.handle(ViewportEvent::Unsupported);
        assert_eq!(signal, Some(ViewportSignal { is_visible: true, progress: 1.0 }));
        assert_eq!(once.phase(), WatcherPhase::Triggered);

        let mut continuous = ViewportWatcher::new(WatchOptions::continuous());
        continuous.attach();
        continuous.handle(ViewportEvent::Unsupported);
        assert_eq!(continuous.phase(), WatcherPhase::Active);
        assert!(continuous.signal().is_visible);
    }

    #[test]
    fn progress_spans_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn map_range_clamps() {
        assert_eq!(map_range(0.1, (0.0, 0.2), (0.0, 1.0)), 0.5);
        assert_eq!(map_range(0.5, (0.0, 0.2), (0.8, 1.0)), 1.0);
        assert_eq!(map_range(-1.0, (0.0, 0.2), (0.8, 1.0)), 0.8);
        assert_eq!(map_range(150.0, (0.0, 300.0), (0.3, 0.5)), 0.4);
    }

    proptest! {
        #[test]
        fn once_watcher_reports_visible_exactly_once(
            events in proptest::collection::vec(any::<bool>(), 0..64),
            threshold in 0.0f64..=1.0,
        ) {
            let mut watcher = ViewportWatcher::new(WatchOptions::once().threshold(threshold));
            watcher.attach();
            let mut reports = 0;
            let mut seen_visible = false;
            for visible in events {
                if let Some(signal) = watcher.handle(ViewportEvent::Intersection { visible }) {
                    prop_assert!(signal.is_visible);
                    reports += 1;
                }
                seen_visible |= visible;
                prop_assert_eq!(watcher.signal().is_visible, seen_visible);
            }
            prop_assert!(reports <= 1);
        }
    }
}
