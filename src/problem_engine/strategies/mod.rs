//! Problem strategies, one per kind of level.
//!
//! Every strategy exposes a `generate` entry point that draws its operands
//! from a [`RandomSource`](crate::problem_engine::RandomSource) and a `build`
//! function that writes the text for known operands:
//!
//! ```ignore
//! pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, config: &LevelConfig) -> Problem
//! pub fn build(a: u32, ...) -> Problem
//! ```
//!
//! The generator dispatches to these via `generator.rs`.

/// Level 1 (and any unknown level).
pub mod basic;
/// Levels 2 and 3, including the avoid-carrying draw.
pub mod eleven;
