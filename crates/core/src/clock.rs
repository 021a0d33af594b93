//! Clock module - elapsed-time bookkeeping for frame-driven scenes
//!
//! The engine never reads a clock itself. The host hands it a monotonically
//! increasing timestamp every frame; [`PhaseClock`] turns those into an
//! accumulated elapsed time, and [`Ticker`]s measure intervals against it.

/// Accumulates elapsed milliseconds from host timestamps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseClock {
    prev_timestamp: Option<u64>,
    delta_ms: u64,
    elapsed_ms: u64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next frame timestamp.
    ///
    /// Returns false on the first call after construction or [`reset`](Self::reset):
    /// that frame only records the timestamp, so there is no bogus initial delta.
    pub fn advance(&mut self, timestamp_ms: u64) -> bool {
        let Some(prev) = self.prev_timestamp.replace(timestamp_ms) else {
            return false;
        };
        self.delta_ms = timestamp_ms.saturating_sub(prev);
        self.elapsed_ms += self.delta_ms;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Milliseconds accumulated since the first recorded frame
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Length of the most recent frame
    pub fn delta_ms(&self) -> u64 {
        self.delta_ms
    }
}

/// Fires once per interval of elapsed time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Ticker {
    /// Create an unarmed ticker
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Start measuring from `now_ms`
    pub fn arm(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    pub fn disarm(&mut self) {
        self.last_ms = None;
    }

    /// Check whether a full interval has passed since the last tick.
    ///
    /// An unarmed ticker arms itself and reports false. When it fires, the
    /// next interval is measured from `now_ms`.
    pub fn due(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_ms = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }
}

/// A flag that flips every interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blinker {
    ticker: Ticker,
    on: bool,
    toggles: u32,
}

impl Blinker {
    /// Create a blinker that starts in the visible phase
    pub fn new(interval_ms: u64) -> Self {
        Self {
            ticker: Ticker::new(interval_ms),
            on: true,
            toggles: 0,
        }
    }

    /// Advance to `now_ms`; returns true when the flag flipped
    pub fn update(&mut self, now_ms: u64) -> bool {
        if !self.ticker.due(now_ms) {
            return false;
        }
        self.on = !self.on;
        self.toggles += 1;
        true
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.ticker.arm(now_ms);
    }

    /// Current phase
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flips since the counter was last cleared
    pub fn toggles(&self) -> u32 {
        self.toggles
    }

    pub fn clear_toggles(&mut self) {
        self.toggles = 0;
    }

    /// Back to the initial visible, unarmed state
    pub fn reset(&mut self) {
        self.ticker.disarm();
        self.on = true;
        self.toggles = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_timestamp_is_only_recorded() {
        let mut clock = PhaseClock::new();
        assert!(!clock.advance(5_000));
        assert_eq!(clock.elapsed_ms(), 0);

        assert!(clock.advance(5_016));
        assert_eq!(clock.delta_ms(), 16);
        assert_eq!(clock.elapsed_ms(), 16);
    }

    #[test]
    fn reset_forgets_previous_timestamp() {
        let mut clock = PhaseClock::new();
        clock.advance(100);
        clock.advance(200);
        clock.reset();
        assert!(!clock.advance(10_000));
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn backwards_timestamp_adds_nothing() {
        let mut clock = PhaseClock::new();
        clock.advance(100);
        clock.advance(50);
        assert_eq!(clock.elapsed_ms(), 0);
    }

    #[test]
    fn ticker_fires_once_per_interval() {
        let mut t = Ticker::new(1000);
        t.arm(0);
        assert!(!t.due(999));
        assert!(t.due(1000));
        assert!(!t.due(1500));
        assert!(t.due(2000));
    }

    #[test]
    fn unarmed_ticker_arms_on_first_poll() {
        let mut t = Ticker::new(250);
        assert!(!t.due(400));
        assert_eq!(t.last_ms, Some(400));
        assert!(t.due(650));
    }

    #[test]
    fn blinker_counts_toggles() {
        let mut b = Blinker::new(250);
        b.arm(0);
        assert!(b.is_on());
        for step in 1..=4u64 {
            assert!(b.update(step * 250));
        }
        assert_eq!(b.toggles(), 4);
        assert!(b.is_on());

        b.clear_toggles();
        assert_eq!(b.toggles(), 0);
    }
}
