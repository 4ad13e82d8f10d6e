//! Leading-edge throttle with a coalescing trailing flush.
//!
//! The first value offered after a quiet period is emitted right away. Values
//! offered inside the interval replace one another and the latest one is
//! handed out by [`Throttle::flush`] once the interval has elapsed, so the
//! final position of a burst is never lost.

/// What the caller should do with an offered value.
#[derive(Clone, Debug, PartialEq)]
pub enum Offer<T> {
    /// Apply this value now.
    Emit(T),
    /// Value stored; schedule a flush `delay_ms` from now.
    Deferred { delay_ms: f64 },
    /// Value stored over an earlier pending one; a flush is already due.
    Coalesced,
}

#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_emit: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_emit: None,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn offer(&mut self, value: T, now: f64) -> Offer<T> {
        if self.pending.is_some() {
            self.pending = Some(value);
            return Offer::Coalesced;
        }

        match self.last_emit {
            Some(last) if now - last < self.interval_ms => {
                self.pending = Some(value);
                Offer::Deferred {
                    delay_ms: self.interval_ms - (now - last),
                }
            }
            _ => {
                self.last_emit = Some(now);
                Offer::Emit(value)
            }
        }
    }

    /// Hand out the coalesced value if its interval has elapsed.
    pub fn flush(&mut self, now: f64) -> Option<T> {
        let due = match self.last_emit {
            Some(last) => now - last >= self.interval_ms,
            None => true,
        };
        if !due {
            return None;
        }
        let value = self.pending.take()?;
        self.last_emit = Some(now);
        Some(value)
    }

    /// Drop any coalesced value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_offer_is_emitted() {
        let mut throttle = Throttle::new(50.0);
        assert_eq!(throttle.offer(1, 0.0), Offer::Emit(1));
    }

    #[test]
    fn burst_coalesces_to_latest_value() {
        let mut throttle = Throttle::new(50.0);
        assert_eq!(throttle.offer(1, 0.0), Offer::Emit(1));
        assert_eq!(throttle.offer(2, 10.0), Offer::Deferred { delay_ms: 40.0 });
        assert_eq!(throttle.offer(3, 20.0), Offer::Coalesced);
        assert_eq!(throttle.offer(4, 30.0), Offer::Coalesced);

        assert_eq!(throttle.flush(40.0), None);
        assert_eq!(throttle.flush(50.0), Some(4));
        assert!(!throttle.has_pending());
    }

    #[test]
    fn flush_restarts_the_interval() {
        let mut throttle = Throttle::new(100.0);
        throttle.offer("a", 0.0);
        throttle.offer("b", 20.0);
        assert_eq!(throttle.flush(100.0), Some("b"));
        assert_eq!(throttle.offer("c", 150.0), Offer::Deferred { delay_ms: 50.0 });
        assert_eq!(throttle.offer("d", 250.0), Offer::Coalesced);
        assert_eq!(throttle.flush(250.0), Some("d"));
    }

    #[test]
    fn quiet_period_emits_immediately() {
        let mut throttle = Throttle::new(50.0);
        throttle.offer(1, 0.0);
        assert_eq!(throttle.offer(2, 75.0), Offer::Emit(2));
    }

    #[test]
    fn cancel_drops_the_pending_value() {
        let mut throttle = Throttle::new(50.0);
        throttle.offer(1, 0.0);
        throttle.offer(2, 10.0);
        throttle.cancel();
        assert_eq!(throttle.flush(100.0), None);
    }
}
