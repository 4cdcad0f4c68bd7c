//! Pseudo-random number generation seeded from wall-clock time.

use core::cell::UnsafeCell;
use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

static RAND: LazyLock<Rand> = LazyLock::new(Rand::new);

pub struct Rand(UnsafeCell<usize>);
unsafe impl Sync for Rand {}

impl Rand {
    #[inline]
    pub fn new() -> Self {
        Rand(UnsafeCell::new(seed()))
    }

    #[inline(always)]
    pub fn get() -> usize {
        let state = unsafe { *RAND.0.get() };

        // SplitMix64 state transition
        let new_state = state.wrapping_add(0x9e3779b97f4a7c15_usize);
        unsafe { *RAND.0.get() = new_state };

        // SplitMix64 output finalizer
        let mut z = new_state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9_usize);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb_usize);
        z ^ (z >> 31)
    }
}

/// Seed at second resolution. Runs started within the same wall-clock second
/// share a seed.
fn seed() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as usize
}
