//! `hopscotch [-d] [input-file]` — see `README.md` for the input format.

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use clap::Parser;

use hopscotch::frontend::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "hopscotch", about = "Condense a directed graph into its strongly connected components")]
struct Args {
    /// Render DOT-language output instead of plain group listings.
    #[arg(short = 'd')]
    dot: bool,

    /// Input file; reads standard input when omitted.
    file: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // The original tool's `-h` falls through to the same `usage()` path
            // as an unrecognized flag and exits 1; matched here rather than
            // taking clap's default exit-0-on-help behavior.
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hopscotch: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), hopscotch::FrontendError> {
    let format = if args.dot { OutputFormat::Dot } else { OutputFormat::Plain };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.file {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            frontend::run(reader, &mut out, format)
        }
        None => {
            let stdin = io::stdin();
            frontend::run(stdin.lock(), &mut out, format)
        }
    }
}
