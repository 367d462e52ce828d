//! Mimeconv: Document Conversion CLI Tool
//!
//! A command-line wrapper around unoconv for converting documents
//! between formats using a headless LibreOffice instance.

mod cli;
mod convert;
mod utils;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use cli::Cli;
use convert::{convert, ConversionRequest, ConvertError};
use utils::{create_spinner, print_converted, print_failed, setup_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);
    log::debug!("Debug mode enabled.");

    let request = ConversionRequest {
        input: cli.input_file,
        output: cli.output_file,
        target_mime: cli.target_mime,
        tool: cli.unoconv_path,
        timeout: cli.timeout.map(Duration::from_secs),
    };

    let spinner = create_spinner(&format!("Converting {}...", request.input.display()));
    let result = convert(&request);
    spinner.finish_and_clear();

    match result {
        Ok(done) => {
            log::debug!("Conversion targeted MIME type: {}", done.target_mime);
            print_converted(&done.output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            if let ConvertError::ToolFailed { stdout, stderr, .. } = &err {
                log::error!("Stdout: {}", stdout);
                log::error!("Stderr: {}", stderr);
            }
            print_failed();
            ExitCode::FAILURE
        }
    }
}
