//! End-to-end demo of the practice engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **One problem per mode**: fixed seeds, so the output is reproducible.
//! 2. **A short session**: a scripted learner answers a few problems through
//!    `SessionEngine`, including one malformed answer that is rejected
//!    without touching the stats.
//! 3. **CSV export** of that session's history.
//!
//! Set `RUST_LOG=number_sense_tutor=debug` to see the engine's tracing output.

use number_sense_tutor::{
    generate_problem, Clock, MemoryStore, Mode, OperationChoice, ProblemRequest, SessionEngine,
    TutorSettings,
};
use rand::{rngs::StdRng, SeedableRng};

fn print_problem(mode: Mode, operation: OperationChoice, seed: u64) {
    let problem = generate_problem(ProblemRequest { mode, operation, maximum: 20, rng_seed: Some(seed) });
    println!("  [{mode} / {operation}]  seed={seed}");
    println!("  Q: {}", problem.prompt());
    println!("  Hint: {}", problem.hint());
    if let Some(answer) = problem.answer() {
        println!("  Answer: {answer}");
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "number_sense_tutor=info".into()),
        )
        .init();

    println!();
    println!("══ One problem per mode ══");
    println!();
    for (mode, operation, seed) in [
        (Mode::Flash,     OperationChoice::Subtract, 1001u64),
        (Mode::Visual,    OperationChoice::Add,      2002),
        (Mode::Word,      OperationChoice::Multiply, 3003),
        (Mode::Decompose, OperationChoice::Mix,      4004),
        (Mode::MakeTen,   OperationChoice::Add,      5005),
        (Mode::Flash,     OperationChoice::Divide,   6006),
    ] {
        print_problem(mode, operation, seed);
    }

    println!("══ A short session ══");
    println!();
    let settings = TutorSettings { mode: Mode::Word, operation: OperationChoice::Mix, maximum: 20 };
    let mut engine = SessionEngine::start_new(
        StdRng::seed_from_u64(7),
        MemoryStore::default(),
        Clock::System,
        settings,
    );

    for round in 0..4 {
        let shown = engine.current().display_text.clone();
        let answer = engine.current().problem.answer().unwrap_or_default();
        println!("  Q: {shown}");

        if round == 1 {
            let hint = engine.request_hint();
            println!("  (hint) {hint}");
            if let Err(e) = engine.submit("twelve") {
                println!("  rejected: {e}");
            }
        }

        // Miss one on purpose.
        let typed = if round == 2 { answer + 1 } else { answer };
        match engine.submit(&typed.to_string()) {
            Ok(feedback) => println!("  {}", feedback.message),
            Err(e)       => println!("  rejected: {e}"),
        }
        println!();
    }

    let stats = engine.stats();
    println!(
        "  Correct {}/{}  Streak {}  Avg {}s",
        stats.correct_count,
        stats.attempted_count,
        stats.current_streak,
        stats.average_seconds()
    );
    println!();

    println!("══ CSV export ══");
    println!();
    match engine.export_csv() {
        Ok((name, csv)) => {
            println!("  {name}");
            for line in csv.lines() {
                println!("  {line}");
            }
        }
        Err(e) => println!("  export failed: {e}"),
    }
}
