//! Pointer-follow light for the hero.

use super::throttle::{Offer, Throttle};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Radial light centred on the pointer.
    pub fn light_css(&self) -> String {
        format!(
            "background: radial-gradient(circle 600px at {}px {}px, rgba(255,215,0,0.1), transparent 40%);",
            self.x, self.y
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PointerUpdate {
    Applied(PointerPosition),
    /// Stored; flush after `delay_ms`.
    Scheduled { delay_ms: f64 },
    Coalesced,
    Ignored,
}

#[derive(Clone, Debug)]
pub struct PointerFollow {
    breakpoint: f64,
    enabled: bool,
    throttle: Throttle<PointerPosition>,
    position: PointerPosition,
}

impl PointerFollow {
    /// Starts disabled until a viewport width is known.
    pub fn new(throttle_ms: f64, breakpoint: f64) -> Self {
        Self {
            breakpoint,
            enabled: false,
            throttle: Throttle::new(throttle_ms),
            position: PointerPosition::default(),
        }
    }

    pub fn enabled_for(width: f64, breakpoint: f64) -> bool {
        width > breakpoint
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(test)]
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    /// Returns true when the enabled state flipped.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let enabled = Self::enabled_for(width, self.breakpoint);
        if enabled == self.enabled {
            return false;
        }
        self.enabled = enabled;
        if !enabled {
            self.throttle.cancel();
        }
        true
    }

    /// `origin` is the container's top-left corner in client coordinates.
    pub fn on_pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        origin: (f64, f64),
        now: f64,
    ) -> PointerUpdate {
        if !self.enabled {
            return PointerUpdate::Ignored;
        }
        let relative = PointerPosition {
            x: client_x - origin.0,
            y: client_y - origin.1,
        };
        match self.throttle.offer(relative, now) {
            Offer::Emit(position) => {
                self.position = position;
                PointerUpdate::Applied(position)
            }
            Offer::Deferred { delay_ms } => PointerUpdate::Scheduled { delay_ms },
            Offer::Coalesced => PointerUpdate::Coalesced,
        }
    }

    /// Apply the coalesced position once its interval has passed.
    pub fn flush(&mut self, now: f64) -> Option<PointerPosition> {
        if !self.enabled {
            self.throttle.cancel();
            return None;
        }
        let position = self.throttle.flush(now)?;
        self.position = position;
        Some(position)
    }

    /// Forget a coalesced move whose flush will never run.
    pub fn cancel_pending(&mut self) {
        self.throttle.cancel();
    }

    pub fn dispose(&mut self) {
        self.enabled = false;
        self.throttle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> PointerFollow {
        let mut follow = PointerFollow::new(50.0, 768.0);
        follow.set_viewport_width(1280.0);
        follow
    }

    #[test]
    fn moves_are_relative_to_the_container() {
        let mut follow = desktop();
        let update = follow.on_pointer_move(300.0, 200.0, (100.0, 80.0), 0.0);
        assert_eq!(update, PointerUpdate::Applied(PointerPosition { x: 200.0, y: 120.0 }));
    }

    #[test]
    fn burst_is_coalesced_to_the_last_move() {
        let mut follow = desktop();
        follow.on_pointer_move(10.0, 10.0, (0.0, 0.0), 0.0);
        assert_eq!(
            follow.on_pointer_move(20.0, 20.0, (0.0, 0.0), 10.0),
            PointerUpdate::Scheduled { delay_ms: 40.0 }
        );
        assert_eq!(
            follow.on_pointer_move(30.0, 35.0, (0.0, 0.0), 30.0),
            PointerUpdate::Coalesced
        );
        assert_eq!(follow.position(), PointerPosition { x: 10.0, y: 10.0 });

        assert_eq!(follow.flush(50.0), Some(PointerPosition { x: 30.0, y: 35.0 }));
        assert_eq!(follow.position(), PointerPosition { x: 30.0, y: 35.0 });
    }

    #[test]
    fn never_updates_at_or_below_breakpoint() {
        for width in [320.0, 767.0, 768.0] {
            let mut follow = PointerFollow::new(50.0, 768.0);
            follow.set_viewport_width(width);
            assert!(!follow.is_enabled());
            for i in 0..20 {
                let t = i as f64 * 100.0;
                assert_eq!(follow.on_pointer_move(t, t, (0.0, 0.0), t), PointerUpdate::Ignored);
                assert_eq!(follow.flush(t), None);
            }
            assert_eq!(follow.position(), PointerPosition::default());
        }
    }

    #[test]
    fn shrinking_below_breakpoint_drops_pending_move() {
        let mut follow = desktop();
        follow.on_pointer_move(10.0, 10.0, (0.0, 0.0), 0.0);
        follow.on_pointer_move(40.0, 40.0, (0.0, 0.0), 10.0);
        assert!(follow.set_viewport_width(600.0));
        assert!(!follow.set_viewport_width(700.0));
        assert_eq!(follow.flush(100.0), None);
        assert_eq!(follow.position(), PointerPosition { x: 10.0, y: 10.0 });
    }

    #[test]
    fn dispose_cancels_pending_flush() {
        let mut follow = desktop();
        follow.on_pointer_move(1.0, 1.0, (0.0, 0.0), 0.0);
        follow.on_pointer_move(2.0, 2.0, (0.0, 0.0), 5.0);
        follow.dispose();
        assert_eq!(follow.flush(200.0), None);
    }

    #[test]
    fn light_css_uses_pixels() {
        let css = PointerPosition { x: 12.0, y: 40.5 }.light_css();
        assert!(css.contains("at 12px 40.5px"));
    }
}
