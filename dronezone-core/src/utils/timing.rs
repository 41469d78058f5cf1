use std::time::{Duration, Instant};

/// Implements a simple performance timer.
pub struct Timer;

impl Timer {
    /// Runs the action and returns its result together with elapsed time.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Instant::now();
        let result = action();

        (result, start.elapsed())
    }

    /// Runs the action and reports elapsed time to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let (result, duration) = Self::measure_duration(action);
        callback(duration);

        result
    }
}
