use std::time::{Duration, Instant};

/// A stage result paired with how long the stage took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub const fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `stage` and measure it with the monotonic clock.
pub(crate) fn measure<T>(stage: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = stage();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Like [`measure`], for stages that can fail. Errors carry no timing.
pub(crate) fn measure_fallible<T, E>(stage: impl FnOnce() -> Result<T, E>) -> Result<Timed<T>, E> {
    let Timed { value, elapsed } = measure(stage);
    value.map(|value| Timed { value, elapsed })
}
