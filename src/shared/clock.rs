/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(test)]
use std::sync::Arc;
use std::time::Instant;

/// Source of press timestamps.
///
/// Timestamps only order button presses against each other; they are never
/// compared to the millisecond delays returned by the state machine.
/// Implementations must return strictly increasing, nonzero values — zero is
/// the "not requested" sentinel in the request arrays.
pub trait TimeSource {
    fn now(&self) -> u64;
}

/// Wall-clock time source backed by a monotonic `Instant`.
pub struct MonotonicClock {
    origin: Instant,
    last: AtomicU64,
}

impl MonotonicClock {
    pub fn new() -> MonotonicClock {
        MonotonicClock {
            origin: Instant::now(),
            last: AtomicU64::new(0),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        MonotonicClock::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> u64 {
        // Nanoseconds since construction, bumped past the previous reading
        // so two presses can never share a timestamp.
        let raw = self.origin.elapsed().as_nanos() as u64 + 1;
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = raw.max(last + 1);
            match self.last.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }
}

/// Deterministic time source for the unit tests: each call returns the next
/// integer, so the order of `now()` calls fully determines press priority.
#[cfg(test)]
#[derive(Clone)]
pub struct SequenceClock {
    ticks: Arc<AtomicU64>,
}

#[cfg(test)]
impl SequenceClock {
    pub fn new() -> SequenceClock {
        SequenceClock {
            ticks: Arc::new(AtomicU64::new(0)),
        }
    }
}

#[cfg(test)]
impl TimeSource for SequenceClock {
    fn now(&self) -> u64 {
        self.ticks.fetch_add(1, Ordering::Relaxed) + 1
    }
}
