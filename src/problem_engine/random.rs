use rand::Rng;

/// Source of uniform integer draws over an inclusive range.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `StdRng` gives fully
/// reproducible problems. [`ScriptedSource`] forces exact draws.
pub trait RandomSource {
    /// Uniform draw from `lo..=hi`. Callers guarantee `lo <= hi`.
    fn next_int(&mut self, lo: u32, hi: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.gen_range(lo..=hi)
    }
}

/// Replays a fixed list of values in order, wrapping around at the end.
///
/// A scripted value outside the requested range is clamped into it, so a
/// script never produces an out-of-range operand.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ScriptedSource needs at least one value");
        ScriptedSource { values, cursor: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(lo, hi)
    }
}
