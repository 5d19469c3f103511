use tracing::{trace, warn};

use crate::problem_engine::{
    error::ConfigError,
    models::{GenerateOptions, LevelConfig, Problem, Strategy, ELEVEN},
    random::RandomSource,
    strategies,
};

/// Core dispatch: routes a level number to its strategy.
///
/// Levels 2 and 3 always multiply by 11, whatever `config.multiplier` says.
/// Level numbers other than 1–3 fall back to basic multiplication. Never fails.
pub fn generate<R: RandomSource + ?Sized>(level: u32, config: &LevelConfig, rng: &mut R) -> Problem {
    let strategy = Strategy::for_level(level);
    check_multiplier(strategy, config);

    let problem = match strategy {
        Strategy::Basic =>
            strategies::basic::generate(rng, config),

        Strategy::SingleDigitBy11 =>
            strategies::eleven::generate_single_digit(rng, config),

        Strategy::TwoDigitBy11 =>
            strategies::eleven::generate_two_digit(rng, config),
    };

    trace!(level, ?strategy, question = %problem.question, answer = problem.answer, "problem generated");
    problem
}

/// [`generate`] with extra options.
///
/// `avoid_carrying` only changes the two-digit ×11 strategy; it is the one
/// path that can fail, when the range cannot produce a carry-free number.
pub fn generate_with_options<R: RandomSource + ?Sized>(
    level: u32,
    config: &LevelConfig,
    rng: &mut R,
    options: GenerateOptions,
) -> Result<Problem, ConfigError> {
    match Strategy::for_level(level) {
        Strategy::TwoDigitBy11 if options.avoid_carrying => {
            check_multiplier(Strategy::TwoDigitBy11, config);
            strategies::eleven::generate_two_digit_carry_free(rng, config)
        }
        _ => Ok(generate(level, config, rng)),
    }
}

fn check_multiplier(strategy: Strategy, config: &LevelConfig) {
    if !strategy.uses_eleven() {
        return;
    }
    if let Some(m) = config.multiplier.filter(|&m| m != ELEVEN) {
        warn!(level = config.id, configured = m, "ignoring configured multiplier; ×11 levels always use 11");
    }
}
