use clap::Parser;
use tradepipe::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
