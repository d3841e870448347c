use keyfreq::{config, logging, pipeline};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let logger_installed = match logging::init_logging() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("warning: {}", e);
            false
        }
    };

    let options = config::Options::from_env();
    let preferences = config::ReportPreferences::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pipeline::run(&options, &preferences, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            // Nothing more can be done if stderr itself is gone.
            let _ = pipeline::report_failure(&error, logger_installed, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}
