use clap::Parser;
use rate_tracker::logging::init_cli_logger;
use rate_tracker::{Shell, TrackerConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive tracker for role headcount, blended hourly rate and total cost.
#[derive(Parser, Debug)]
#[command(name = "rate-tracker", version, about)]
struct Args {
    /// TOML file seeding the available roles and currency symbol
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> rate_tracker::Result<()> {
    let config = match args.config {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };

    let mut shell = Shell::new(config);
    println!("{}", shell.banner());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(line) = lines.next() else {
            break;
        };

        let response = shell.execute(&line?);
        if response.quit {
            break;
        }
        if !response.output.is_empty() {
            println!("{}", response.output);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_cli_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
