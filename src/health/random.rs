// src/health/random.rs
use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
///
/// Kept behind a trait so deterministic tests can substitute fixed
/// draws for the thread-local RNG.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Production source backed by `rand`'s thread-local generator.
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Uniform integer over the inclusive range `[start, end]`, computed as
/// `floor(u * (end - start + 1) + start)` from a unit draw `u`.
pub fn uniform_in_range(source: &dyn RandomSource, start: i64, end: i64) -> i64 {
    let unit = source.next_unit();
    (unit * (end - start + 1) as f64 + start as f64).floor() as i64
}
