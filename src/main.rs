use std::io::Read;
use std::path::PathBuf;

use clap::Parser as cParser;
use log::LevelFilter;

use linked_stack::{command, BrowserHistoryStack, Error};

/// Replay a browser history script, one command per line.
#[derive(cParser, Debug)]
struct Args {
    /// Script to run, stdin when absent
    script: Option<PathBuf>,

    /// More log output, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG wins over the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    let mut history = BrowserHistoryStack::new();
    for line in command::run_script(&script, &mut history)? {
        if !line.is_empty() {
            println!("{}", line);
        }
    }
    Ok(())
}
