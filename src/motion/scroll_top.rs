//! Offset thresholds for floating scroll controls.

use super::throttle::{Offer, Throttle};

/// `offset > threshold`; exactly at the threshold is still hidden.
pub fn above(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// `offset < threshold`.
pub fn below(offset: f64, threshold: f64) -> bool {
    offset < threshold
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollUpdate {
    /// Visibility flipped to this value.
    Changed(bool),
    Unchanged,
    /// Offset held back; flush after `delay_ms`.
    Scheduled { delay_ms: f64 },
}

/// Visibility of a scroll-to-top control, recomputed at most once per
/// throttle interval.
#[derive(Clone, Debug)]
pub struct ScrollTopAffordance {
    threshold: f64,
    throttle: Throttle<f64>,
    visible: bool,
}

impl ScrollTopAffordance {
    pub fn new(threshold: f64, throttle_ms: f64) -> Self {
        Self {
            threshold,
            throttle: Throttle::new(throttle_ms),
            visible: false,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_scroll(&mut self, offset: f64, now: f64) -> ScrollUpdate {
        match self.throttle.offer(offset, now) {
            Offer::Emit(offset) => self.apply(offset),
            Offer::Deferred { delay_ms } => ScrollUpdate::Scheduled { delay_ms },
            Offer::Coalesced => ScrollUpdate::Unchanged,
        }
    }

    pub fn flush(&mut self, now: f64) -> ScrollUpdate {
        match self.throttle.flush(now) {
            Some(offset) => self.apply(offset),
            None => ScrollUpdate::Unchanged,
        }
    }

    pub fn dispose(&mut self) {
        self.throttle.cancel();
    }

    fn apply(&mut self, offset: f64) -> ScrollUpdate {
        let visible = above(offset, self.threshold);
        if visible == self.visible {
            return ScrollUpdate::Unchanged;
        }
        self.visible = visible;
        ScrollUpdate::Changed(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_is_exclusive() {
        assert!(!above(500.0, 500.0));
        assert!(above(501.0, 500.0));
        assert!(below(199.0, 200.0));
        assert!(!below(200.0, 200.0));
    }

    #[test]
    fn reports_only_changes() {
        let mut affordance = ScrollTopAffordance::new(500.0, 100.0);
        assert_eq!(affordance.on_scroll(200.0, 0.0), ScrollUpdate::Unchanged);
        assert_eq!(affordance.on_scroll(900.0, 150.0), ScrollUpdate::Changed(true));
        assert_eq!(affordance.on_scroll(950.0, 300.0), ScrollUpdate::Unchanged);
        assert_eq!(affordance.on_scroll(500.0, 450.0), ScrollUpdate::Changed(false));
        assert!(!affordance.is_visible());
    }

    #[test]
    fn fast_scroll_lands_on_final_offset() {
        let mut affordance = ScrollTopAffordance::new(500.0, 100.0);
        affordance.on_scroll(0.0, 0.0);
        assert_eq!(
            affordance.on_scroll(300.0, 20.0),
            ScrollUpdate::Scheduled { delay_ms: 80.0 }
        );
        assert_eq!(affordance.on_scroll(501.0, 40.0), ScrollUpdate::Unchanged);
        assert_eq!(affordance.flush(60.0), ScrollUpdate::Unchanged);
        assert!(!affordance.is_visible());
        assert_eq!(affordance.flush(100.0), ScrollUpdate::Changed(true));
    }

    proptest! {
        #[test]
        fn visible_iff_above_threshold(offset in 0.0f64..10_000.0) {
            let mut affordance = ScrollTopAffordance::new(500.0, 100.0);
            affordance.on_scroll(offset, 0.0);
            prop_assert_eq!(affordance.is_visible(), offset > 500.0);
        }
    }
}
