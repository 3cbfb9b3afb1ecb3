use clap::Parser as ClapParser;
use larch_lang::cli::{self, CliError, RunOptions, RunOutcome};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "larch")]
#[command(about = "Larch - a declarative tree notation with flattened, parent-referencing output")]
#[command(version)]
struct Cli {
    /// Input file ('-' reads from stdin)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    output: Option<PathBuf>,

    /// Emit the tree as JSON instead of the flat form
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let input = match cli.input {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(path),
        None if !atty::is(atty::Stream::Stdin) => None,
        None => return Err(CliError::NoInput),
    };

    let options = RunOptions {
        input,
        output: cli.output,
        json: cli.json,
    };

    match cli::execute_run(&options)? {
        RunOutcome::Written(path) => println!("Result written to {}", path.display()),
        RunOutcome::Printed => {}
    }

    Ok(())
}
