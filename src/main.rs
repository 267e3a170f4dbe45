use clap::Parser;

use rust_nbody::driver::{format_energy, parse_step_count, run};

/// Simulates the outer solar system and prints its total energy before and
/// after the given number of steps.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Number of steps of dt = 0.01 years to take
    #[arg(allow_hyphen_values = true)]
    steps: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let steps = parse_step_count(args.steps.as_deref())?;

    let report = run(steps);
    println!("{}", format_energy(report.initial));
    println!("{}", format_energy(report.last));

    Ok(())
}
