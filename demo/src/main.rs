//! cardwise reference scenarios Demo CLI
//!
//! Runs one or all of the reference evaluation scenarios against the real
//! evaluator with in-memory validators and fraud checkers.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- run flaky-vendor
//!   cargo run -p demo -- --json run-all
//!   cargo run -p demo -- list

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cardwise_contracts::error::{CardwiseError, CardwiseResult};
use cardwise_ref::scenarios::{self, ScenarioOutcome};

// ── CLI definition ────────────────────────────────────────────────────────────

/// cardwise: credit card application evaluator demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "cardwise evaluator reference scenarios",
    long_about = "Runs the cardwise reference scenarios showing the fraud, income, age,\n\
                  licence and lookup gates of the application evaluator."
)]
struct Cli {
    /// Print outcomes as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every scenario in sequence.
    RunAll,
    /// Run a single scenario by name.
    Run {
        /// Scenario name, as printed by `list`.
        name: String,
    },
    /// List the available scenarios.
    List,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see every pipeline step.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let outcomes = match cli.command {
        Command::List => {
            for (name, _) in scenarios::ALL {
                println!("{}", name);
            }
            return;
        }
        Command::RunAll => scenarios::run_all(),
        Command::Run { name } => run_one(&name),
    };

    let outcomes = match outcomes {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!(error = %e, "scenario aborted");
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&outcomes) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Demo error: failed to render JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_banner();
        for outcome in &outcomes {
            print_outcome(outcome);
        }
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        eprintln!("{} scenario(s) did not match their expected decisions.", failed);
        std::process::exit(1);
    }
    if !cli.json {
        println!("All selected scenarios completed successfully.");
    }
}

fn run_one(name: &str) -> CardwiseResult<Vec<ScenarioOutcome>> {
    match scenarios::run_named(name) {
        Some(outcome) => Ok(vec![outcome?]),
        None => Err(CardwiseError::ConfigError {
            reason: format!("unknown scenario '{}'; try `demo list`", name),
        }),
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_outcome(outcome: &ScenarioOutcome) {
    println!("=== {} ===", outcome.name);
    println!("  {}", outcome.description);
    for (idx, decision) in outcome.decisions.iter().enumerate() {
        let expected = outcome
            .expected
            .get(idx)
            .map(|e| e.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  Application {}:  {} (expected {})", idx + 1, decision, expected);
    }
    println!("  Lookups performed: {}", outcome.lookup_count);
    println!("  Referred to a person: {}", outcome.referrals());
    println!(
        "  RESULT: {}",
        if outcome.passed() { "PASS" } else { "MISMATCH" }
    );
    println!();
}

fn print_banner() {
    println!();
    println!("cardwise: Credit Card Application Evaluator");
    println!("Reference Scenarios");
    println!("============================================");
    println!();
    println!("Evaluation pipeline per application:");
    println!("  [1] Fraud check (if configured)     → ReferredToHumanFraudRisk");
    println!("  [2] Income at/above accept bar      → AutoAccepted");
    println!("  [3] Age below minimum               → ReferredToHuman");
    println!("  [4] Set lookup mode, read licence   → expired: ReferredToHuman");
    println!("  [5] Frequent flyer lookup           → invalid/failed: ReferredToHuman");
    println!("  [6] Income below decline bar        → AutoDeclined, else ReferredToHuman");
    println!();
}
