//! Fixed-interval frame timer

use std::time::{Duration, Instant};

use crate::error::{PlatformError, Result};

/// Repeating timer polled by the event loop
///
/// A late poll fires once and reschedules from the current time; missed
/// ticks are not replayed.
#[derive(Clone, Debug)]
pub struct FrameTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl FrameTimer {
    /// Timer firing every `1000 / framerate` whole milliseconds
    pub fn new(framerate: i32) -> Result<Self> {
        Ok(Self {
            interval: Self::interval_for(framerate)?,
            next: None,
        })
    }

    /// Tick interval for a framerate, truncated to whole milliseconds
    pub fn interval_for(framerate: i32) -> Result<Duration> {
        if framerate <= 0 {
            return Err(PlatformError::InvalidFramerate(framerate));
        }
        Ok(Duration::from_millis((1000 / framerate) as u64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Schedule the first tick one interval after `now`
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    /// When the next tick is due
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true if a tick is due at `now` and schedules the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };
        if now < due {
            return false;
        }
        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_truncates_to_whole_milliseconds() {
        assert_eq!(FrameTimer::interval_for(40).unwrap(), Duration::from_millis(25));
        assert_eq!(FrameTimer::interval_for(100).unwrap(), Duration::from_millis(10));
        assert_eq!(FrameTimer::interval_for(60).unwrap(), Duration::from_millis(16));
        assert_eq!(FrameTimer::interval_for(1000).unwrap(), Duration::from_millis(1));
        assert_eq!(FrameTimer::interval_for(5000).unwrap(), Duration::ZERO);
    }

    #[test]
    fn non_positive_framerate_is_rejected() {
        assert!(matches!(
            FrameTimer::new(0),
            Err(PlatformError::InvalidFramerate(0))
        ));
        assert!(matches!(
            FrameTimer::new(-5),
            Err(PlatformError::InvalidFramerate(-5))
        ));
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = FrameTimer::new(40).unwrap();
        assert!(!timer.is_running());
        assert!(!timer.poll(Instant::now()));

        let start = Instant::now();
        timer.start(start);
        timer.stop();
        assert!(!timer.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(40).unwrap();
        timer.start(start);

        assert!(!timer.poll(start + Duration::from_millis(24)));
        assert!(timer.poll(start + Duration::from_millis(25)));
        assert!(!timer.poll(start + Duration::from_millis(26)));
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(50)));
    }

    #[test]
    fn late_poll_does_not_burst() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(100).unwrap();
        timer.start(start);

        let late = start + Duration::from_millis(95);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.deadline(), Some(late + Duration::from_millis(10)));
    }

    #[test]
    fn zero_interval_fires_every_poll() {
        let start = Instant::now();
        let mut timer = FrameTimer::new(2000).unwrap();
        timer.start(start);
        assert!(timer.poll(start));
        assert!(timer.poll(start));
        assert!(timer.poll(start + Duration::from_nanos(1)));
    }
}
