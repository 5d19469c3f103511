//! Shared builder functions used by every strategy.
//!
//! Each strategy draws operands and writes its own hint and walkthrough; the
//! question text and the answer are always derived the same way, so that part
//! lives here.

use crate::problem_engine::{
    models::{LevelConfig, Problem},
    random::RandomSource,
};

/// Draw one operand from the level's inclusive range.
pub fn draw_operand<R: RandomSource + ?Sized>(rng: &mut R, config: &LevelConfig) -> u32 {
    let (lo, hi) = config.operand_range();
    rng.next_int(lo, hi)
}

/// Format the question shown to the player (e.g. "7 × 8 = ?").
pub fn question_str(a: u32, b: u32) -> String {
    format!("{a} × {b} = ?")
}

/// `b` written `max(a, 1)` times, joined by " + " (e.g. "8 + 8 + 8").
pub fn repeated_addition(a: u32, b: u32) -> String {
    let terms = a.max(1) as usize;
    vec![b.to_string(); terms].join(" + ")
}

/// Exact product of two operands. Never overflows.
pub fn product(a: u32, b: u32) -> u64 {
    u64::from(a) * u64::from(b)
}

/// Assemble the final [`Problem`]. The answer is always `a * b`.
pub fn problem(a: u32, b: u32, hint: String, pattern_explanation: String) -> Problem {
    Problem {
        a,
        b,
        question: question_str(a, b),
        answer: product(a, b),
        hint,
        pattern_explanation,
    }
}
