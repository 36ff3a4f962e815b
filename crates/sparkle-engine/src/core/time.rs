/// Trailing-edge debounce timer.
///
/// The host calls [`Debounce::trigger`] for every raw event and arms a timer
/// for [`Debounce::delay_ms`]. When the timer fires it asks
/// [`Debounce::poll`]; only the call that lands after a full quiet period
/// returns true, so a burst of resize events collapses into one.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay_ms: f64,
    /// Timestamp of the most recent trigger, cleared once it has fired.
    last_trigger: Option<f64>,
}

impl Debounce {
    /// Resize events are forwarded after this many quiet milliseconds.
    pub const RESIZE_DELAY_MS: f64 = 100.0;

    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_trigger: None,
        }
    }

    /// Record a raw event at `now_ms`.
    pub fn trigger(&mut self, now_ms: f64) {
        self.last_trigger = Some(now_ms);
    }

    /// True exactly once per burst, when `now_ms` is at least `delay_ms`
    /// after the latest trigger.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.last_trigger {
            Some(at) if now_ms - at >= self.delay_ms => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds left in the current quiet period, `None` when idle.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.last_trigger
            .map(|at| (self.delay_ms - (now_ms - at)).max(0.0))
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::RESIZE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_quiet_period() {
        let mut d = Debounce::new(100.0);
        d.trigger(0.0);
        assert!(!d.poll(50.0));
        assert!(d.poll(100.0));
    }

    #[test]
    fn burst_collapses_into_one() {
        let mut d = Debounce::new(100.0);
        d.trigger(0.0);
        d.trigger(40.0);
        d.trigger(80.0);
        // timer armed by the first trigger fires early
        assert!(!d.poll(100.0));
        assert!(!d.poll(140.0));
        assert!(d.poll(180.0));
        // later timers from the same burst find nothing pending
        assert!(!d.poll(200.0));
    }

    #[test]
    fn remaining_tracks_latest_trigger() {
        let mut d = Debounce::new(100.0);
        assert_eq!(d.remaining_ms(0.0), None);
        d.trigger(10.0);
        assert_eq!(d.remaining_ms(30.0), Some(80.0));
        assert_eq!(d.remaining_ms(500.0), Some(0.0));
        assert!(d.poll(500.0));
        assert_eq!(d.remaining_ms(500.0), None);
    }

    #[test]
    fn idle_never_fires() {
        let mut d = Debounce::default();
        assert_eq!(d.remaining_ms(0.0), None);
        assert!(!d.poll(1_000.0));
    }

    #[test]
    fn default_delay_is_resize_delay() {
        assert_eq!(Debounce::default().delay_ms(), 100.0);
    }
}
