//! One play-through of the adventure: score, stars, countdown and level flow.
//!
//! The session is owned by whatever drives the UI. It never renders anything;
//! each call returns an outcome describing what the front end should show.

use core::fmt;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GameConfig;
use crate::problem_engine::{generate, ConfigError, LevelConfig, Problem, RandomSource};

/// Longest answer the player can type.
pub const MAX_ANSWER_DIGITS: usize = 5;

/// Countdown value at or below which the timer should be drawn as urgent.
pub const LOW_TIME_SECS: u32 = 5;

/// Points for a correct answer on `level`.
pub fn points_for_level(level: u32) -> u32 {
    10 + level * 5
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    LevelComplete,
    GameComplete,
}

/// Where the session went after a correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Progress {
    NextProblem,
    LevelComplete,
    GameComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    /// Nothing was typed.
    Empty,
    /// Not a number the keypad could have produced.
    Invalid,
    /// Wrong answer; the hint is now available.
    Incorrect,
    Correct {
        points: u32,
        /// Walkthrough for the problem just solved. Only the ×11 levels show it.
        explanation: Option<String>,
        progress: Progress,
    },
    /// The level or game is already over.
    Inactive,
}

impl AnswerOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AnswerOutcome::Empty     => "Please enter an answer!",
            AnswerOutcome::Invalid   => "Numbers only, please!",
            AnswerOutcome::Incorrect => "Try again!",
            AnswerOutcome::Correct { .. } => "Correct!",
            AnswerOutcome::Inactive  => "This level is finished.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Running { time_left: u32, low_time: bool },
    /// The countdown hit zero and a fresh problem replaced the old one.
    TimeUp,
    Idle,
}

impl TickOutcome {
    pub const TIME_UP_MESSAGE: &'static str = "Time's up! Let's try a new problem.";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    LevelNotComplete { level: u32 },
    GameAlreadyComplete,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelNotComplete { level } => write!(f, "level {level} is still in progress"),
            Self::GameAlreadyComplete => write!(f, "every level has been completed"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Caller-owned game state.
pub struct GameSession<R: RandomSource> {
    config: GameConfig,
    rng: R,
    level: u32,
    score: u32,
    stars: u32,
    problems_solved: u32,
    current: Problem,
    time_left: u32,
    hint_unlocked: bool,
    hint_visible: bool,
    status: SessionStatus,
}

impl GameSession<StdRng> {
    /// Session backed by `StdRng`; a seed makes the whole run reproducible.
    pub fn seeded(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Start at level 1 with the first problem ready and the countdown full.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let first = config.level(1)?;
        let current = generate(1, first, &mut rng);
        let time_left = first.time_per_problem;
        Ok(GameSession {
            config,
            rng,
            level: 1,
            score: 0,
            stars: 0,
            problems_solved: 0,
            current,
            time_left,
            hint_unlocked: false,
            hint_visible: false,
            status: SessionStatus::Playing,
        })
    }

    pub fn level(&self) -> u32 { self.level }
    pub fn score(&self) -> u32 { self.score }
    pub fn stars(&self) -> u32 { self.stars }
    pub fn problems_solved(&self) -> u32 { self.problems_solved }
    pub fn current_problem(&self) -> &Problem { &self.current }
    pub fn time_left(&self) -> u32 { self.time_left }
    pub fn status(&self) -> SessionStatus { self.status }
    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn hint_unlocked(&self) -> bool { self.hint_unlocked }

    pub fn level_config(&self) -> &LevelConfig {
        // `level` is always within 1..=total_levels.
        &self.config.levels[(self.level - 1) as usize]
    }

    /// Check a typed answer against the current problem.
    pub fn submit_answer(&mut self, input: &str) -> AnswerOutcome {
        if self.status != SessionStatus::Playing {
            return AnswerOutcome::Inactive;
        }
        let input = input.trim();
        if input.is_empty() {
            return AnswerOutcome::Empty;
        }
        if input.len() > MAX_ANSWER_DIGITS || !input.bytes().all(|b| b.is_ascii_digit()) {
            return AnswerOutcome::Invalid;
        }
        let Ok(value) = input.parse::<u64>() else {
            return AnswerOutcome::Invalid;
        };

        if !self.current.is_correct(value) {
            debug!(level = self.level, question = %self.current.question, value, "incorrect answer");
            self.hint_unlocked = true;
            return AnswerOutcome::Incorrect;
        }

        let points = points_for_level(self.level);
        self.score += points;
        self.problems_solved += 1;
        self.stars = self.problems_solved;

        let explanation = (self.level > 1).then(|| self.current.pattern_explanation.clone());

        let progress = if self.problems_solved >= self.level_config().problems_to_solve {
            if self.level >= self.config.total_levels() {
                self.status = SessionStatus::GameComplete;
                Progress::GameComplete
            } else {
                self.status = SessionStatus::LevelComplete;
                Progress::LevelComplete
            }
        } else {
            self.next_problem();
            Progress::NextProblem
        };

        debug!(level = self.level, score = self.score, stars = self.stars, ?progress, "correct answer");
        AnswerOutcome::Correct { points, explanation, progress }
    }

    /// Show or hide the hint. Returns the hint text while it is visible.
    ///
    /// The hint stays locked until the player has answered wrong once.
    pub fn toggle_hint(&mut self) -> Option<&str> {
        if !self.hint_unlocked || self.status != SessionStatus::Playing {
            return None;
        }
        self.hint_visible = !self.hint_visible;
        self.hint_visible.then_some(self.current.hint.as_str())
    }

    /// One second passes on the level countdown.
    ///
    /// The countdown is shared by every problem of a level. It is refilled
    /// only when it runs out and when a level starts, never by a correct answer.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != SessionStatus::Playing {
            return TickOutcome::Idle;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            debug!(level = self.level, question = %self.current.question, "time up");
            self.next_problem();
            self.refill_countdown();
            return TickOutcome::TimeUp;
        }
        TickOutcome::Running {
            time_left: self.time_left,
            low_time: self.time_left <= LOW_TIME_SECS,
        }
    }

    /// Move on after [`Progress::LevelComplete`].
    pub fn advance_level(&mut self) -> Result<(), SessionError> {
        match self.status {
            SessionStatus::LevelComplete => {}
            SessionStatus::GameComplete => return Err(SessionError::GameAlreadyComplete),
            SessionStatus::Playing => return Err(SessionError::LevelNotComplete { level: self.level }),
        }
        self.level += 1;
        self.problems_solved = 0;
        self.stars = 0;
        self.status = SessionStatus::Playing;
        self.next_problem();
        self.refill_countdown();
        debug!(level = self.level, "advanced to next level");
        Ok(())
    }

    /// Back to level 1 with no score or stars.
    pub fn reset(&mut self) {
        self.level = 1;
        self.score = 0;
        self.stars = 0;
        self.problems_solved = 0;
        self.status = SessionStatus::Playing;
        self.next_problem();
        self.refill_countdown();
    }

    fn next_problem(&mut self) {
        let level = self.level;
        let cfg = &self.config.levels[(level - 1) as usize];
        self.current = generate(level, cfg, &mut self.rng);
        self.hint_unlocked = false;
        self.hint_visible = false;
    }

    fn refill_countdown(&mut self) {
        self.time_left = self.level_config().time_per_problem;
    }
}
