use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rusty_logic::parser;
use rusty_logic::shell::Shell;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "rusty_logic".to_string());
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: {program} <netlist_file>");
        return ExitCode::from(84);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(84)
        }
    }
}

fn run(path: &str) -> anyhow::Result<()> {
    let circuit =
        parser::parse_file(path).with_context(|| format!("failed to load netlist '{path}'"))?;
    let mut shell = Shell::new(circuit);
    shell.run()?;
    Ok(())
}
