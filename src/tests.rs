//! Crate-level tests for `multiply_adventure`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Answers | `answer == a * b` for every level and seed |
//! | Ranges | Operands stay inside the configured range; ×11 levels pin `b` |
//! | Carry | Every two-digit operand recomposes to `a * 11`; 55 takes the carry branch |
//! | Determinism | Same seed → identical problems; forced draws → identical problems |
//! | Fallback | Unknown level numbers behave like level 1 |
//! | Worked examples | 7 × 8, 9 × 11, 48 × 11, 23 × 11 |
//! | Serialisation | `Problem` survives a JSON trip |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::problem_engine::digits::ElevenSplit;
use crate::{generate, GameConfig, LevelConfig, Problem, ScriptedSource, Strategy};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Stock config for a 1-based level.
fn level(n: u32) -> LevelConfig {
    GameConfig::default().level(n).cloned().expect("stock level exists")
}

fn seeded(level_no: u32, cfg: &LevelConfig, seed: u64) -> Problem {
    generate(level_no, cfg, &mut StdRng::seed_from_u64(seed))
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── answers and ranges ───────────────────────────────────────────────────────

#[test]
fn answer_is_always_the_product() {
    for n in 1..=3 {
        let cfg = level(n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        for _ in 0..300 {
            let p = generate(n, &cfg, &mut rng);
            assert_eq!(p.answer, u64::from(p.a) * u64::from(p.b), "level {n}: {}", p.question);
            assert_eq!(p.question, format!("{} × {} = ?", p.a, p.b));
        }
    }
}

#[test]
fn operands_stay_in_configured_range() {
    for n in 1..=3 {
        let cfg = level(n);
        let mut rng = StdRng::seed_from_u64(1000 + n as u64);
        for _ in 0..300 {
            let p = generate(n, &cfg, &mut rng);
            assert!(cfg.contains(p.a), "level {n}: a={} outside {}..={}", p.a, cfg.min_digit, cfg.max_digit);
            if n == 1 {
                assert!(cfg.contains(p.b), "level 1: b={} out of range", p.b);
            }
        }
    }
}

#[test]
fn basic_level_reaches_both_range_ends() {
    let cfg = level(1);
    let mut rng = StdRng::seed_from_u64(3);
    let draws: Vec<u32> = (0..500).flat_map(|_| {
        let p = generate(1, &cfg, &mut rng);
        [p.a, p.b]
    }).collect();
    assert!(draws.contains(&1));
    assert!(draws.contains(&10));
}

#[test]
fn eleven_levels_always_multiply_by_eleven() {
    for n in [2, 3] {
        let mut cfg = level(n);
        for multiplier in [None, Some(11), Some(12), Some(0)] {
            cfg.multiplier = multiplier;
            for seed in SEEDS {
                assert_eq!(seeded(n, &cfg, seed).b, 11, "level {n} multiplier {multiplier:?}");
            }
        }
    }
}

// ── two-digit × 11 ───────────────────────────────────────────────────────────

#[test]
fn every_two_digit_operand_recomposes_to_the_product() {
    let cfg = level(3);
    for a in 10..=99u32 {
        let p = generate(3, &cfg, &mut ScriptedSource::new(vec![a]));
        let split = ElevenSplit::of(a);
        assert_eq!(p.a, a);
        assert_eq!(p.answer, u64::from(a) * 11);
        assert_eq!(u64::from(split.recompose()), p.answer, "a={a}");
        assert!(p.pattern_explanation.ends_with(&p.answer.to_string()), "a={a}: {}", p.pattern_explanation);

        let steps = p.pattern_explanation.lines().count() - 1;
        if split.needs_carry() {
            assert_eq!(steps, 6, "a={a}");
            assert!(p.hint.contains("carry the 1"));
        } else {
            assert_eq!(steps, 4, "a={a}");
            assert!(p.hint.starts_with("Pattern: first digit"));
        }
    }
}

#[test]
fn digit_sum_of_ten_carries() {
    let p = generate(3, &level(3), &mut ScriptedSource::new(vec![55]));
    assert_eq!(p.answer, 605);
    assert!(p.pattern_explanation.contains("Since the sum is ≥ 10, add 1 to first digit: 6"));
    assert!(p.pattern_explanation.ends_with("6. Result: 605"));
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for n in 1..=3 {
        let cfg = level(n);
        for seed in SEEDS {
            assert_eq!(seeded(n, &cfg, seed), seeded(n, &cfg, seed), "level {n} seed={seed}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let cfg = level(3);
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        if seeded(3, &cfg, seed).question == seeded(3, &cfg, seed + 500).question {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical questions across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn forced_draws_produce_identical_problems() {
    let cfg = level(1);
    let a = generate(1, &cfg, &mut ScriptedSource::new(vec![6, 9]));
    let b = generate(1, &cfg, &mut ScriptedSource::new(vec![6, 9]));
    assert_eq!(a, b);
}

#[test]
fn basic_level_draws_a_then_b() {
    let mut src = ScriptedSource::new(vec![3, 9]);
    let p = generate(1, &level(1), &mut src);
    assert_eq!((p.a, p.b), (3, 9));
    assert_eq!(src.draws(), 2);

    let mut src = ScriptedSource::new(vec![4]);
    generate(2, &level(2), &mut src);
    assert_eq!(src.draws(), 1, "×11 levels draw a single operand");
}

// ── unknown levels ───────────────────────────────────────────────────────────

#[test]
fn unknown_levels_fall_back_to_basic_multiplication() {
    let cfg = level(1);
    for n in [0u32, 4, 99] {
        assert_eq!(Strategy::for_level(n), Strategy::Basic);
        let fallback = generate(n, &cfg, &mut ScriptedSource::new(vec![7, 8]));
        let basic = generate(1, &cfg, &mut ScriptedSource::new(vec![7, 8]));
        assert_eq!(fallback, basic, "level {n}");
    }
}

#[test]
fn unknown_level_uses_the_supplied_range() {
    let cfg = LevelConfig::with_range(9, 20, 25);
    for seed in SEEDS {
        let p = seeded(9, &cfg, seed);
        assert!((20..=25).contains(&p.a) && (20..=25).contains(&p.b), "{}", p.question);
        assert!(p.hint.starts_with("Think of"));
    }
}

// ── worked examples ──────────────────────────────────────────────────────────

#[test]
fn seven_times_eight() {
    let p = generate(1, &level(1), &mut ScriptedSource::new(vec![7, 8]));
    assert_eq!(p.question, "7 × 8 = ?");
    assert_eq!(p.answer, 56);
    assert_eq!(p.hint, "Think of 7 groups with 8 in each group.");
    assert_eq!(
        p.pattern_explanation,
        "Multiplication means repeated addition. 7 × 8 means 7 groups of 8, which is \
         8 + 8 + 8 + 8 + 8 + 8 + 8 = 56"
    );
}

#[test]
fn nine_times_eleven() {
    let p = generate(2, &level(2), &mut ScriptedSource::new(vec![9]));
    assert_eq!(p.question, "9 × 11 = ?");
    assert_eq!(p.answer, 99);
    assert!(p.hint.contains("99"));
    assert_eq!(
        p.pattern_explanation,
        "When multiplying any single digit (9) by 11, the answer will be that digit repeated twice: 99"
    );
}

#[test]
fn forty_eight_times_eleven_carries() {
    let p = generate(3, &level(3), &mut ScriptedSource::new(vec![48]));
    assert_eq!(p.answer, 528);
    assert_eq!(ElevenSplit::of(48).result_digits(), (5, 2, 8));
    assert_eq!(p.hint, "Remember to carry the 1 when the sum of digits is 10 or more!");
    assert!(p.pattern_explanation.contains("2. Add digits: 4 + 8 = 12"));
}

#[test]
fn twenty_three_times_eleven_does_not_carry() {
    let p = generate(3, &level(3), &mut ScriptedSource::new(vec![23]));
    assert_eq!(p.answer, 253);
    assert_eq!(p.hint, "Pattern: first digit (2), sum of digits (5), last digit (3)");
    assert!(p.pattern_explanation.ends_with("4. Put them together: 253"));
}

// ── serialisation ────────────────────────────────────────────────────────────

#[test]
fn problem_serialises_to_json() {
    let p = generate(3, &level(3), &mut ScriptedSource::new(vec![23]));
    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["question"], "23 × 11 = ?");
    assert_eq!(json["answer"], 253);
    let back: Problem = serde_json::from_value(json).unwrap();
    assert_eq!(back, p);
}
