use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use qrgen::{logging, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::debug!("{:?}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdin_is_tty = stdin.is_terminal();
    let input = qrgen::resolve_input(
        cli.data.as_deref(),
        stdin_is_tty,
        &mut stdin.lock(),
        &mut io::stdout(),
        &cli.prompt_defaults(),
    )?;

    let output = qrgen::generate(cli, input).context("Failed to generate QR code")?;
    println!("QR code saved as {}", output.display());
    Ok(())
}
