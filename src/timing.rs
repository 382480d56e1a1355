//! Keeping the animation tick steady.

use std::{collections::VecDeque, time::Duration};

#[cfg(not(test))]
use std::time::Instant;
#[cfg(test)]
use mock_instant::Instant;

/// Ticks per second the dialog animates at.
pub const TICK_RATE: u32 = 20;

/// How many recent tick costs get averaged.
const WINDOW: usize = 5;

/// Paces a loop to a fixed rate, correcting for the time the loop body itself takes.
///
/// Each tick, call [`Self::start`] before the work and [`Self::finish`] after, then sleep for
/// [`Self::sleep_time`]. The sleep is the period minus the average cost of the last few ticks, so one slow frame
/// doesn't cause a stutter but sustained overhead is compensated for. It never goes negative.
#[derive(Debug)]
pub struct TickPacer {
    period: Duration,
    costs: VecDeque<Duration>,
    started: Option<Instant>,
}

impl TickPacer {
    /// A pacer for `rate` ticks per second.
    pub fn new(rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / rate.max(1),
            costs: VecDeque::with_capacity(WINDOW),
            started: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Mark the start of a tick's work.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Mark the end of a tick's work, returning how long it took. Without a matching `start`, records nothing.
    pub fn finish(&mut self) -> Duration {
        match self.started.take() {
            Some(at) => {
                let cost = Instant::now().duration_since(at);
                self.record(cost);
                cost
            }
            None => Duration::ZERO,
        }
    }

    /// Add a tick's cost to the moving window.
    pub fn record(&mut self, cost: Duration) {
        if self.costs.len() == WINDOW {
            self.costs.pop_front();
        }
        self.costs.push_back(cost);
    }

    /// The mean cost over the window, or zero before anything's been recorded.
    pub fn average(&self) -> Duration {
        if self.costs.is_empty() {
            return Duration::ZERO;
        }
        self.costs.iter().sum::<Duration>() / self.costs.len() as u32
    }

    /// How long to wait before the next tick.
    pub fn sleep_time(&self) -> Duration {
        self.period.saturating_sub(self.average())
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new(TICK_RATE)
    }
}

#[cfg(test)]
mod test {
    use mock_instant::MockClock;

    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn default_is_twenty_hertz() {
        let p = TickPacer::default();
        assert_eq!(p.period(), ms(50));
        assert_eq!(p.sleep_time(), ms(50));
    }

    #[test]
    fn sleep_subtracts_average_cost() {
        let mut p = TickPacer::default();
        p.record(ms(10));
        p.record(ms(20));
        assert_eq!(p.average(), ms(15));
        assert_eq!(p.sleep_time(), ms(35));
    }

    #[test]
    fn window_forgets_old_ticks() {
        let mut p = TickPacer::default();
        p.record(ms(45));
        for _ in 0..WINDOW {
            p.record(ms(5));
        }
        assert_eq!(p.average(), ms(5));
    }

    #[test]
    fn sleep_never_negative() {
        let mut p = TickPacer::default();
        for _ in 0..WINDOW {
            p.record(ms(80));
        }
        assert_eq!(p.sleep_time(), Duration::ZERO);
    }

    #[test]
    fn measures_with_clock() {
        let mut p = TickPacer::default();
        assert_eq!(p.finish(), Duration::ZERO);
        assert_eq!(p.average(), Duration::ZERO);

        p.start();
        MockClock::advance(ms(12));
        assert_eq!(p.finish(), ms(12));
        p.start();
        MockClock::advance(ms(4));
        assert_eq!(p.finish(), ms(4));
        assert_eq!(p.average(), ms(8));
        assert_eq!(p.sleep_time(), ms(42));
    }
}
