//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use nextstop_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match nextstop_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("nextstop: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
