// CDX - Directory alias manager
use cdx::cli::{execute_command, Args};
use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse_checked(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match execute_command(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
