use chrono::{ Local, NaiveDateTime };
use rand::Rng;

/// Supplies the local wall-clock time for the date/time rule.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Supplies uniform choices for the fallback rule.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&self, len: usize) -> usize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
