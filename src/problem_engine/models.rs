use std::fmt;
use serde::{Deserialize, Serialize};

use crate::problem_engine::error::ConfigError;

/// The fixed second operand used by the ×11 levels.
pub const ELEVEN: u32 = 11;

// ---------------------------------------------------------------------------
// Level configuration
// ---------------------------------------------------------------------------

/// Static tuning data for one stage of the adventure.
///
/// Only `min_digit`, `max_digit` and `multiplier` matter to the generator;
/// the remaining fields drive the session and the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_digit: u32,
    pub max_digit: u32,
    #[serde(default)]
    pub multiplier: Option<u32>,
    pub problems_to_solve: u32,
    pub time_per_problem: u32,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub companion: String,
}

impl LevelConfig {
    /// Minimal config with just an id and an operand range. Handy for tests
    /// and for callers that only want problems.
    pub fn with_range(id: u32, min_digit: u32, max_digit: u32) -> Self {
        LevelConfig {
            id,
            name: format!("Level {id}"),
            description: String::new(),
            min_digit,
            max_digit,
            multiplier: if id >= 2 { Some(ELEVEN) } else { None },
            problems_to_solve: 5,
            time_per_problem: 30,
            focus: String::new(),
            companion: String::new(),
        }
    }

    /// Inclusive operand bounds, always ordered low to high.
    ///
    /// A swapped range is a caller bug; it is normalised here rather than
    /// panicking inside the random source.
    pub fn operand_range(&self) -> (u32, u32) {
        if self.min_digit <= self.max_digit {
            (self.min_digit, self.max_digit)
        } else {
            (self.max_digit, self.min_digit)
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        let (lo, hi) = self.operand_range();
        (lo..=hi).contains(&value)
    }

    /// Largest answer this level can ask for.
    pub fn max_answer(&self) -> u64 {
        let (_, hi) = self.operand_range();
        if Strategy::for_level(self.id).uses_eleven() {
            u64::from(hi) * u64::from(ELEVEN)
        } else {
            u64::from(hi) * u64::from(hi)
        }
    }

    /// Reject settings that would make the level unplayable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_digit > self.max_digit {
            return Err(ConfigError::InvalidRange {
                level: self.id,
                min: self.min_digit,
                max: self.max_digit,
            });
        }
        if self.problems_to_solve == 0 {
            return Err(ConfigError::ZeroProblems { level: self.id });
        }
        if self.time_per_problem == 0 {
            return Err(ConfigError::ZeroTime { level: self.id });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Strategy dispatch
// ---------------------------------------------------------------------------

/// Which generation strategy a level uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Level 1: both operands drawn from the range.
    Basic,
    /// Level 2: a single digit times 11.
    SingleDigitBy11,
    /// Level 3: a two-digit number times 11.
    TwoDigitBy11,
}

impl Strategy {
    /// Map a level number to its strategy.
    ///
    /// Anything outside 1..=3 falls back to `Basic`. This mirrors how the game
    /// has always behaved and is not treated as an error.
    pub fn for_level(level: u32) -> Self {
        match level {
            2 => Strategy::SingleDigitBy11,
            3 => Strategy::TwoDigitBy11,
            _ => Strategy::Basic,
        }
    }

    /// True for the strategies whose second operand is pinned to 11.
    pub fn uses_eleven(self) -> bool {
        !matches!(self, Strategy::Basic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Basic           => "basic multiplication",
            Strategy::SingleDigitBy11 => "multiplying by 11 (single digits)",
            Strategy::TwoDigitBy11    => "multiplying by 11 (two digits)",
        };
        write!(f, "{}", s)
    }
}

/// Extra knobs for [`generate_with_options`](crate::problem_engine::generate_with_options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Two-digit ×11 only: restrict draws to numbers whose digits sum below
    /// 10. Nothing in the main game flow turns this on.
    pub avoid_carrying: bool,
}

// ---------------------------------------------------------------------------
// Generated problem
// ---------------------------------------------------------------------------

/// One arithmetic question together with its answer and teaching text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub a: u32,
    pub b: u32,
    /// Display text, always `"{a} × {b} = ?"`.
    pub question: String,
    /// Exact product, widened so any pair of `u32` operands fits.
    pub answer: u64,
    /// Short nudge shown after a wrong attempt.
    pub hint: String,
    /// Longer walkthrough shown after a correct answer.
    pub pattern_explanation: String,
}

impl Problem {
    /// Exact-match check against a numeric answer.
    pub fn is_correct(&self, value: u64) -> bool {
        value == self.answer
    }
}
