use tracing::debug;

use crate::problem_engine::{
    digits::{is_carry_free, ElevenSplit},
    error::ConfigError,
    helpers::{draw_operand, problem},
    models::{LevelConfig, Problem, ELEVEN},
    random::RandomSource,
};

/// Digit redraws tried before falling back to an explicit candidate pick.
pub const MAX_CARRY_FREE_ATTEMPTS: u32 = 256;

// ---------------------------------------------------------------------------
// Level 2: single digit × 11
// ---------------------------------------------------------------------------

/// Digit width is not enforced; the configured range is trusted.
pub fn generate_single_digit<R: RandomSource + ?Sized>(rng: &mut R, config: &LevelConfig) -> Problem {
    let a = draw_operand(rng, config);
    build_single_digit(a)
}

pub fn build_single_digit(a: u32) -> Problem {
    let hint = format!("When you multiply a single digit by 11, the digit appears twice: {a}{a}");
    let explanation = format!(
        "When multiplying any single digit ({a}) by 11, the answer will be that digit \
         repeated twice: {a}{a}"
    );
    problem(a, ELEVEN, hint, explanation)
}

// ---------------------------------------------------------------------------
// Level 3: two digits × 11
// ---------------------------------------------------------------------------

pub fn generate_two_digit<R: RandomSource + ?Sized>(rng: &mut R, config: &LevelConfig) -> Problem {
    let a = draw_operand(rng, config);
    build_two_digit(a)
}

/// Like [`generate_two_digit`] but only draws numbers whose digits sum below
/// 10, so the walkthrough never needs a carry.
///
/// Draws a first digit in 1..=9 and a second digit that keeps the sum under
/// 10, retrying until the number lands in the configured range. Fails up front
/// if the range holds no such number. After [`MAX_CARRY_FREE_ATTEMPTS`] misses
/// it picks uniformly among the qualifying numbers in range, so a range that
/// passed the check always yields a problem.
pub fn generate_two_digit_carry_free<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &LevelConfig,
) -> Result<Problem, ConfigError> {
    let (lo, hi) = config.operand_range();
    let candidates: Vec<u32> = (lo.max(10)..=hi.min(99)).filter(|&a| is_carry_free(a)).collect();
    if candidates.is_empty() {
        return Err(ConfigError::NoCarryFreeValues { min: lo, max: hi });
    }

    for attempt in 1..=MAX_CARRY_FREE_ATTEMPTS {
        let first = rng.next_int(1, 9);
        let second = rng.next_int(0, 9 - first);
        let a = first * 10 + second;
        if (lo..=hi).contains(&a) {
            debug!(a, attempt, "carry-free operand drawn");
            return Ok(build_two_digit(a));
        }
    }

    // At most 45 carry-free numbers exist, so the index always fits in u32.
    let last = (candidates.len() - 1) as u32;
    let a = candidates[rng.next_int(0, last) as usize];
    debug!(a, candidates = candidates.len(), "carry-free operand picked after redraw cap");
    Ok(build_two_digit(a))
}

pub fn build_two_digit(a: u32) -> Problem {
    let split = ElevenSplit::of(a);
    let ElevenSplit { first, second, middle } = split;

    let (hint, explanation) = if split.needs_carry() {
        let (lead, mid, _) = split.result_digits();
        (
            "Remember to carry the 1 when the sum of digits is 10 or more!".to_string(),
            format!(
                "For {a} × 11:\n\
                 1. Take first digit: {first}\n\
                 2. Add digits: {first} + {second} = {middle}\n\
                 3. Since the sum is ≥ 10, add 1 to first digit: {lead}\n\
                 4. Use the ones place of sum for middle: {mid}\n\
                 5. Last digit: {second}\n\
                 6. Result: {}",
                split.result_literal()
            ),
        )
    } else {
        (
            format!(
                "Pattern: first digit ({first}), sum of digits ({middle}), last digit ({second})"
            ),
            format!(
                "For {a} × 11:\n\
                 1. Take first digit: {first}\n\
                 2. Add the digits for middle: {first} + {second} = {middle}\n\
                 3. Take last digit: {second}\n\
                 4. Put them together: {}",
                split.result_literal()
            ),
        )
    };

    problem(a, ELEVEN, hint, explanation)
}
