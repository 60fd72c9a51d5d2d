use std::time::Duration;

/// Fixed-interval game clock, polled once per frame.
///
/// Times are seconds on a monotonic timeline (macroquad's `get_time()` in
/// the binary). Ticks stay on the interval grid regardless of frame rate.
/// At most one tick fires per poll; a frame late by more than an interval
/// does not queue up missed ticks.
#[derive(Clone, Debug)]
pub struct Clock {
    interval: f64,
    last_tick_at: Option<f64>,
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.as_secs_f64(), last_tick_at: None }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval)
    }

    pub fn is_running(&self) -> bool {
        self.last_tick_at.is_some()
    }

    /// Arm the clock; the first tick is one interval after `now`.
    pub fn start(&mut self, now: f64) {
        self.last_tick_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.last_tick_at = None;
    }

    /// Change speed. A running clock restarts its interval from `now`.
    pub fn set_interval(&mut self, interval: Duration, now: f64) {
        self.interval = interval.as_secs_f64();
        if self.is_running() {
            self.last_tick_at = Some(now);
        }
    }

    pub fn poll(&mut self, now: f64) -> bool {
        match self.last_tick_at {
            Some(last) if now - last >= self.interval => {
                let next = last + self.interval;
                // more than one interval behind: resync rather than burst
                self.last_tick_at = Some(if now - next >= self.interval { now } else { next });
                true
            }
            _ => false,
        }
    }
}
