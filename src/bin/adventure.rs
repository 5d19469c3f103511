use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use multiply_adventure::{
    generate_with_options, telemetry, AnswerOutcome, GameConfig, GameSession, GenerateOptions,
    Progress,
};
use rand::{rngs::StdRng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "adventure", about = "Multiplication adventure in the terminal")]
struct Cli {
    /// TOML level table (defaults to $ADVENTURE_CONFIG_PATH, then the stock levels).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print problems for one level.
    Generate {
        #[arg(long, default_value_t = 1)]
        level: u32,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Two-digit level only: never draw a number that needs a carry.
        #[arg(long)]
        avoid_carrying: bool,
        /// One JSON object per line instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Play through every level, answering on stdin. Type `h` for a hint.
    Play {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    telemetry::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::load_from_env(),
    };

    match cli.command {
        Command::Generate { level, count, seed, avoid_carrying, json } => {
            run_generate(&config, level, count, seed, avoid_carrying, json)
        }
        Command::Play { seed } => run_play(config, seed),
    }
}

fn run_generate(
    config: &GameConfig,
    level: u32,
    count: usize,
    seed: Option<u64>,
    avoid_carrying: bool,
    json: bool,
) -> Result<()> {
    let level_cfg = config.level(level)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let options = GenerateOptions { avoid_carrying };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let problem = generate_with_options(level, level_cfg, &mut rng, options)
            .with_context(|| format!("generating a problem for level {level}"))?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&problem)?)?;
        } else {
            writeln!(out, "{}  (answer: {})", problem.question, problem.answer)?;
            writeln!(out, "  hint: {}", problem.hint)?;
            for line in problem.pattern_explanation.lines() {
                writeln!(out, "  {line}")?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_play(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut session = GameSession::seeded(config, seed)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    announce_level(&session);
    loop {
        print!("{}  ", session.current_problem().question);
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading answer from stdin")?;

        if line.trim().eq_ignore_ascii_case("h") {
            match session.toggle_hint() {
                Some(hint) => println!("  hint: {hint}"),
                None => println!("  (hints unlock after a wrong answer)"),
            }
            continue;
        }

        let outcome = session.submit_answer(&line);
        println!("  {}", outcome.message());
        let AnswerOutcome::Correct { points, explanation, progress } = outcome else {
            continue;
        };

        println!(
            "  +{points} points  score: {}  stars: {}/{}",
            session.score(),
            session.stars(),
            session.level_config().problems_to_solve
        );
        if let Some(text) = explanation {
            for l in text.lines() {
                println!("    {l}");
            }
        }

        match progress {
            Progress::NextProblem => {}
            Progress::LevelComplete => {
                println!("\nLevel {} complete!", session.level());
                session.advance_level()?;
                announce_level(&session);
            }
            Progress::GameComplete => {
                println!(
                    "\nWell done, {}! Final score: {}",
                    session.config().player_name,
                    session.score()
                );
                break;
            }
        }
    }
    Ok(())
}

fn announce_level<R: multiply_adventure::RandomSource>(session: &GameSession<R>) {
    let cfg = session.level_config();
    println!("\n=== Level {}: {} ===", cfg.id, cfg.name);
    if !cfg.description.is_empty() {
        println!("{}", cfg.description);
    }
    if !cfg.companion.is_empty() {
        println!("{} will help you with {}.", cfg.companion, cfg.focus);
    }
    println!();
}
