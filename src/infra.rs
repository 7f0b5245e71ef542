//! Infrastructure traits for abstracting I/O and randomness.
//!
//! Catalog and config loading go through [`FileSystem`]; the recommendation
//! tie-break goes through [`JitterSource`]. Tests swap both for deterministic
//! implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Whether a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Source of the small random offset added to recommendation scores.
///
/// Implementations must return a value in `[0, max)`, or `0.0` when `max`
/// is not positive.
pub trait JitterSource {
    /// Draw the next jitter value.
    fn next_jitter(&mut self, max: f64) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for Box<J> {
    fn next_jitter(&mut self, max: f64) -> f64 {
        (**self).next_jitter(max)
    }
}

/// Always returns zero, making recommendation order fully deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn next_jitter(&mut self, _max: f64) -> f64 {
        0.0
    }
}

/// Jitter drawn from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadJitter;

impl JitterSource for ThreadJitter {
    fn next_jitter(&mut self, max: f64) -> f64 {
        if max > 0.0 {
            rand::thread_rng().gen_range(0.0..max)
        } else {
            0.0
        }
    }
}

/// Jitter from a seeded generator, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl JitterSource for SeededJitter {
    fn next_jitter(&mut self, max: f64) -> f64 {
        if max > 0.0 {
            self.rng.gen_range(0.0..max)
        } else {
            0.0
        }
    }
}
