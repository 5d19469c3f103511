use core::fmt;

/// Misconfiguration surfaced to the caller.
///
/// None of these can come out of [`generate`](crate::problem_engine::generate)
/// itself; they are raised while loading configuration or when the
/// avoid-carrying draw cannot be satisfied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidRange { level: u32, min: u32, max: u32 },
    NoCarryFreeValues { min: u32, max: u32 },
    NoLevels,
    LevelIdMismatch { index: usize, expected: u32, found: u32 },
    ZeroProblems { level: u32 },
    ZeroTime { level: u32 },
    AnswerTooLong { level: u32, max_answer: u64, max_digits: usize },
    UnknownLevel { level: u32, total: u32 },
    Parse(String),
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { level, min, max } => {
                write!(f, "level {level}: min_digit {min} is greater than max_digit {max}")
            }
            Self::NoCarryFreeValues { min, max } => write!(
                f,
                "range {min}..={max} has no two-digit number whose digits sum below 10"
            ),
            Self::NoLevels => write!(f, "configuration defines no levels"),
            Self::LevelIdMismatch { index, expected, found } => write!(
                f,
                "level at position {index} has id {found}, expected {expected}"
            ),
            Self::ZeroProblems { level } => {
                write!(f, "level {level}: problems_to_solve must be at least 1")
            }
            Self::ZeroTime { level } => {
                write!(f, "level {level}: time_per_problem must be at least 1 second")
            }
            Self::AnswerTooLong { level, max_answer, max_digits } => write!(
                f,
                "level {level}: answers reach {max_answer}, longer than the {max_digits}-digit answer box"
            ),
            Self::UnknownLevel { level, total } => {
                write!(f, "level {level} is not configured (1..={total} available)")
            }
            Self::Parse(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Io(msg) => write!(f, "cannot read configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
