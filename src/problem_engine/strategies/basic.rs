use crate::problem_engine::{
    helpers::{draw_operand, problem, product, repeated_addition},
    models::{LevelConfig, Problem},
    random::RandomSource,
};

/// Level 1: both operands drawn independently from the level's range.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, config: &LevelConfig) -> Problem {
    let a = draw_operand(rng, config);
    let b = draw_operand(rng, config);
    build(a, b)
}

/// Text for a basic problem with known operands.
pub fn build(a: u32, b: u32) -> Problem {
    let hint = format!("Think of {a} groups with {b} in each group.");
    let explanation = format!(
        "Multiplication means repeated addition. {a} × {b} means {a} groups of {b}, \
         which is {} = {}",
        repeated_addition(a, b),
        product(a, b),
    );
    problem(a, b, hint, explanation)
}
