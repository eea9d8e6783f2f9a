use gitgrowth::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    gitgrowth::logging::init();
    let cli = Cli::parse();
    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
