//! Scoped wall-clock timing.

use std::time::{Duration, Instant};

/// Measures the time from construction until drop and writes it to `sink`.
///
/// The write happens in `Drop`, so the duration is captured however the
/// timed scope is left: normal completion, an early `return`, or unwinding.
///
/// # Example
/// ```
/// use pagesim::sim::Stopwatch;
/// use std::time::Duration;
///
/// let mut elapsed = Duration::ZERO;
/// {
///     let _watch = Stopwatch::start(&mut elapsed);
///     std::thread::sleep(Duration::from_millis(1));
/// }
/// assert!(elapsed >= Duration::from_millis(1));
/// ```
pub struct Stopwatch<'a> {
    started: Instant,
    sink: &'a mut Duration,
}

impl<'a> Stopwatch<'a> {
    pub fn start(sink: &'a mut Duration) -> Self {
        Self {
            started: Instant::now(),
            sink,
        }
    }
}

impl Drop for Stopwatch<'_> {
    fn drop(&mut self) {
        *self.sink = self.started.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_on_error_return() {
        fn timed(elapsed: &mut Duration) -> Result<(), &'static str> {
            let _watch = Stopwatch::start(elapsed);
            std::thread::sleep(Duration::from_millis(2));
            Err("bail")
        }

        let mut elapsed = Duration::ZERO;
        assert!(timed(&mut elapsed).is_err());
        assert!(elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_records_on_unwind() {
        let mut elapsed = Duration::ZERO;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _watch = Stopwatch::start(&mut elapsed);
            std::thread::sleep(Duration::from_millis(1));
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(elapsed >= Duration::from_millis(1));
    }
}
