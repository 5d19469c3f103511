//! Tour of the problem engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **One problem per level** with fixed seeds, so the output is
//!    reproducible.
//! 2. **Worked ×11 examples**: forced draws for the no-carry case (23), the
//!    carry case (48) and the boundary where the digits sum to exactly 10 (55).
//! 3. **Unknown level**: level 7 falls back to basic multiplication.
//! 4. **Avoid-carrying mode**: the optional two-digit draw that skips carries.
//! 5. **A scripted session**: correct and wrong answers, hints and scoring.

use multiply_adventure::{
    generate, generate_with_options, AnswerOutcome, GameConfig, GameSession, GenerateOptions,
    LevelConfig, Problem, ScriptedSource,
};
use rand::{rngs::StdRng, SeedableRng};

/// Pretty-print one problem with its teaching text.
fn print_problem(label: &str, p: &Problem) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  {}   answer: {}", p.question, p.answer);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Hint: {}", p.hint);
    for line in p.pattern_explanation.lines() {
        println!("       {}", line);
    }
    println!();
}

fn main() {
    let config = GameConfig::default();

    println!();
    println!("══ One problem per level ══");
    println!();
    for (cfg, seed) in config.levels.iter().zip([1001u64, 2002, 3003]) {
        let p = generate(cfg.id, cfg, &mut StdRng::seed_from_u64(seed));
        print_problem(&format!("Level {} — {}", cfg.id, cfg.name), &p);
    }

    println!("══ Two digits × 11 ══");
    println!();
    let mountain = &config.levels[2];
    for a in [23u32, 48, 55] {
        let p = generate(3, mountain, &mut ScriptedSource::new(vec![a]));
        print_problem(&format!("a = {a}"), &p);
    }

    println!("══ Unknown level 7 (falls back to basic) ══");
    println!();
    let p = generate(7, &LevelConfig::with_range(7, 2, 4), &mut StdRng::seed_from_u64(7));
    print_problem("Level 7", &p);

    println!("══ Avoid-carrying draws ══");
    println!();
    let mut rng = StdRng::seed_from_u64(99);
    let opts = GenerateOptions { avoid_carrying: true };
    let questions: Vec<String> = (0..8)
        .filter_map(|_| generate_with_options(3, mountain, &mut rng, opts).ok())
        .map(|p| p.question)
        .collect();
    println!("  {}", questions.join("   "));
    println!();

    println!("══ Scripted session ══");
    println!();
    let mut session = match GameSession::new(config, ScriptedSource::new(vec![7, 8, 3, 4])) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("config error: {e}");
            return;
        }
    };
    for typed in ["", "54", "h", "56"] {
        println!("  {}  typed {typed:?}", session.current_problem().question);
        if typed == "h" {
            println!("    hint: {}", session.toggle_hint().unwrap_or("(locked)"));
            continue;
        }
        let outcome = session.submit_answer(typed);
        println!("    {}", outcome.message());
        if let AnswerOutcome::Correct { points, .. } = outcome {
            println!("    +{points}  score {}  stars {}", session.score(), session.stars());
        }
    }
    println!("  next: {}", session.current_problem().question);
}
