#![allow(clippy::cargo_common_metadata)]
use mind_glaive::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments; help and usage errors end here
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(err) => return cli::report_parse_error(&err),
    };

    // Setup logging based on debug flag
    if let Err(err) = setup_logging(args.debug) {
        cli::report_error(&err);
        return ExitCode::FAILURE;
    }

    // Initialize configuration and execute the appropriate command
    let result = Config::from_args(&args)
        .map_err(anyhow::Error::from)
        .and_then(|config| cli::execute_command(&config, &args.command));

    // Map the outcome to the process exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
