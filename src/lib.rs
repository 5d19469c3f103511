//! # multiply_adventure
//!
//! An offline, deterministic problem engine for a three-level arithmetic
//! adventure: multiplication facts, then single digits × 11, then two-digit
//! numbers × 11 with the carry shortcut.
//!
//! ## How it works
//!
//! 1. Take a [`LevelConfig`] (or the stock levels from [`GameConfig::default`]).
//! 2. Call [`generate`] with a level number and any [`RandomSource`]; every
//!    `rand::Rng` qualifies, and a seeded `StdRng` makes the output
//!    reproducible.
//! 3. The returned [`Problem`] carries the question, the exact answer, a hint
//!    for after a wrong attempt and a walkthrough for after a correct one.
//!
//! Level numbers other than 1–3 fall back to basic multiplication.
//!
//! [`GameSession`] wraps the generator with score, stars, a
//! countdown and level progression, for front ends that want the full game.
//!
//! ## Quick start
//!
//! ```rust
//! use multiply_adventure::{generate, LevelConfig, ScriptedSource};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let level3 = LevelConfig::with_range(3, 10, 99);
//!
//! // Seeded draws:
//! let mut rng = StdRng::seed_from_u64(42);
//! let p = generate(3, &level3, &mut rng);
//! assert_eq!(p.answer, u64::from(p.a) * 11);
//!
//! // Forced draws:
//! let p = generate(3, &level3, &mut ScriptedSource::new(vec![48]));
//! assert_eq!(p.question, "48 × 11 = ?");
//! assert_eq!(p.answer, 528);
//! println!("{}", p.pattern_explanation);
//! ```

pub mod config;
pub mod problem_engine;
pub mod session;
pub mod telemetry;

// Convenience re-exports so callers can use `multiply_adventure::generate`
// directly without reaching into `problem_engine::`.
pub use config::GameConfig;
pub use problem_engine::{
    generate, generate_with_options, ConfigError, GenerateOptions, LevelConfig, Problem,
    RandomSource, ScriptedSource, Strategy,
};
pub use session::{AnswerOutcome, GameSession, Progress, SessionError, SessionStatus, TickOutcome};

#[cfg(test)]
mod tests;
