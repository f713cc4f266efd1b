//! RNG module - injected randomness for shape and color draws
//!
//! Every random decision the session makes (small vs big catalog, shape
//! within the catalog, display color) goes through the `RandomSource` trait
//! so outcomes are reproducible under test with a scripted substitute.
//!
//! The production implementation is a simple LCG seeded at construction.

/// Source of uniform random values
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max); max must be > 0
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        // The low LCG bits cycle with a short period (bit 0 alternates every
        // step), so small ranges must come from the upper half of the word.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Scripted random source for tests and tooling
///
/// Returns the queued values in order, cycling back to the start when the
/// script runs out. `next_range` reduces the scripted value modulo `max`,
/// so scripts written with in-range values pass through unchanged.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRandom {
    /// Create a scripted source; the script must not be empty
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "ScriptedRandom needs at least one value");
        Self { values, pos: 0 }
    }

    fn next(&mut self) -> u32 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        self.next() % max
    }
}
