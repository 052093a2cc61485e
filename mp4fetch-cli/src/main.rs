// mp4fetch-cli/src/main.rs
//
// Entry point for the mp4fetch binary.
//
// Responsibilities:
// - Parsing the positional arguments and tool overrides.
// - Setting up logging on stderr.
// - Running the fetch via mp4fetch-core.
// - Printing exactly one result line on stdout.
// - Exiting 0 on success and 1 on any failure.

use clap::Parser;
use clap::error::ErrorKind;
use mp4fetch_cli::{Cli, logging, run_fetch_command};
use mp4fetch_core::{FetchReport, usage_error};
use std::io::{self, Write};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // Callers parse stdout, so argument errors still produce a result line
            logging::init(false);
            log::error!("{}", err.to_string().trim_end());
            emit_and_exit(&FetchReport::from(usage_error()));
        }
    };

    logging::init(cli.verbose);
    log::debug!("mp4fetch v{} starting up", env!("CARGO_PKG_VERSION"));

    let report = run_fetch_command(&cli);
    emit_and_exit(&report);
}

fn emit_and_exit(report: &FetchReport) -> ! {
    let line = match report.to_json_line() {
        Ok(line) => line,
        Err(e) => {
            log::error!("Failed to serialize result: {e}");
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
        log::error!("Failed to write result: {e}");
        process::exit(1);
    }
    process::exit(report.exit_code());
}
