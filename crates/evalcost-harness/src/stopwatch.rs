use std::time::{Duration, Instant};

/// Wall-clock timer that can be paused.
///
/// Training loops pause the stopwatch while a checkpoint observer does its
/// bookkeeping (evaluating the current policy, appending records) so the
/// recorded training time covers only the training itself.
///
/// # Examples
///
/// ```
/// use evalcost_harness::stopwatch::Stopwatch;
///
/// let mut sw = Stopwatch::start();
/// // ... train ...
/// sw.pause();
/// // ... evaluate the policy mid-training ...
/// sw.resume();
/// let trained_for = sw.elapsed();
/// ```
#[derive(Debug)]
pub struct Stopwatch {
    started_at: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl Stopwatch {
    /// Starts a new stopwatch.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    /// Restarts the stopwatch from zero, clearing any pause state.
    pub fn reset(&mut self) {
        *self = Self::start();
    }

    /// Pauses the stopwatch. Pausing twice without a resume is a no-op.
    pub fn pause(&mut self) {
        if self.paused_at.is_none() {
            self.paused_at = Some(Instant::now());
        }
    }

    /// Resumes a paused stopwatch. Resuming a running stopwatch is a no-op.
    pub fn resume(&mut self) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total += paused_at.elapsed();
        }
    }

    /// Time spent running, excluding paused intervals.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        let gross = self.started_at.elapsed();
        let paused = match self.paused_at {
            Some(paused_at) => self.paused_total + paused_at.elapsed(),
            None => self.paused_total,
        };
        gross.saturating_sub(paused)
    }

    /// [`elapsed`](Self::elapsed) as seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_elapsed_advances_while_running() {
        let sw = Stopwatch::start();
        thread::sleep(Duration::from_millis(20));
        assert!(sw.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_paused_time_is_excluded() {
        let mut sw = Stopwatch::start();
        thread::sleep(Duration::from_millis(10));
        sw.pause();
        thread::sleep(Duration::from_millis(50));
        sw.resume();
        // The 50ms pause must not count towards elapsed time.
        assert!(sw.elapsed() < Duration::from_millis(40));
    }

    #[test]
    fn test_elapsed_is_frozen_while_paused() {
        let mut sw = Stopwatch::start();
        sw.pause();
        let before = sw.elapsed();
        thread::sleep(Duration::from_millis(20));
        let after = sw.elapsed();
        assert!(after <= before + Duration::from_millis(5));
    }

    #[test]
    fn test_double_pause_and_double_resume_are_noops() {
        let mut sw = Stopwatch::start();
        sw.pause();
        sw.pause();
        sw.resume();
        sw.resume();
        thread::sleep(Duration::from_millis(10));
        assert!(sw.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_reset_clears_pause_state() {
        let mut sw = Stopwatch::start();
        sw.pause();
        sw.reset();
        thread::sleep(Duration::from_millis(10));
        // After reset the stopwatch runs again.
        assert!(sw.elapsed() >= Duration::from_millis(5));
    }
}
