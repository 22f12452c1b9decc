use anyhow::Context as _;
use box_duel::{parse_weights, play_observed, simulate, SimulationConfig, TurnReport, Weight};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct CommandArgs {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the given weights in order
    Play(PlayArg),
    /// Play a seeded random weight sequence
    Simulate(SimulateArg),
}

#[derive(Debug, Clone, clap::Args)]
struct PlayArg {
    /// Input weights, in turn order
    weights: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
struct SimulateArg {
    /// Random seed
    #[arg(long, default_value_t = SimulationConfig::default().seed)]
    seed: u64,
    /// Number of turns
    #[arg(long, default_value_t = SimulationConfig::default().turns)]
    turns: usize,
    /// Largest weight to generate (inclusive)
    #[arg(long, default_value_t = SimulationConfig::default().max_weight)]
    max_weight: Weight,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn narrate(report: &TurnReport) {
    println!("{report}");
}

fn print_final((a, b): (f64, f64)) {
    println!("Final: player A {a}, player B {b}");
}

fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);

    match args.mode {
        Mode::Play(arg) => {
            let inputs = parse_weights(&arg.weights).context("failed to parse weights")?;
            print_final(play_observed(&inputs, &mut narrate));
        }
        Mode::Simulate(arg) => {
            let config = SimulationConfig::default()
                .with_seed(arg.seed)
                .with_turns(arg.turns)
                .with_max_weight(arg.max_weight);
            let result = simulate(&config, &mut narrate).context("invalid simulation config")?;
            println!("Inputs: {:?}", result.inputs);
            print_final(result.scores);
        }
    }
    Ok(())
}
