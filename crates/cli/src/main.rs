// AppBin - RISC-V Boot Image Emitter
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::Context;
use appbin_core::{EmitError, EmitReport, DEFAULT_OUTPUT, LED_PROGRAM};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};

const EXIT_PASS: u8 = 0;
const EXIT_VERIFY_FAIL: u8 = 1;
const EXIT_IO_ERROR: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write the LED boot image for the Basys 3 RISC-V core",
    long_about = None
)]
struct Cli {
    /// Path of the raw image to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Read the image back after writing and compare it word by word
    #[arg(long)]
    verify: bool,

    /// Print a JSON report instead of the confirmation message
    #[arg(long)]
    json: bool,

    /// Enable debug logging (word listing)
    #[arg(short, long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status: &'static str,
    #[serde(flatten)]
    report: &'a EmitReport,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for the confirmation / report
    if cli.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(&cli) {
        Ok(report) => {
            if let Err(e) = print_confirmation(&cli, &report) {
                error!("{:#}", e);
                return ExitCode::from(EXIT_IO_ERROR);
            }
            ExitCode::from(EXIT_PASS)
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn exit_code_for(e: &anyhow::Error) -> u8 {
    let verify_failed = e
        .downcast_ref::<EmitError>()
        .is_some_and(EmitError::is_verify_failure);
    if verify_failed {
        EXIT_VERIFY_FAIL
    } else {
        EXIT_IO_ERROR
    }
}

fn run(cli: &Cli) -> anyhow::Result<EmitReport> {
    info!("Writing boot image: {:?}", cli.output);
    for (i, w) in LED_PROGRAM.iter().enumerate() {
        debug!("{:#04x}: {:08x}  {}", i * 4, w.word, w.asm);
    }

    let words = appbin_core::led_program_words();
    let report = appbin_core::write_image(&cli.output, &words)
        .with_context(|| format!("Failed to emit boot image {:?}", cli.output))?;

    if cli.verify {
        appbin_core::verify_image(&cli.output, &words)
            .with_context(|| format!("Verification of {:?} failed", cli.output))?;
        info!("Read-back verification passed");
    }

    Ok(report)
}

fn print_confirmation(cli: &Cli, report: &EmitReport) -> anyhow::Result<()> {
    if cli.json {
        let line = serde_json::to_string(&JsonReport {
            status: "written",
            report,
        })
        .context("Failed to serialize report")?;
        println!("{}", line);
    } else {
        println!(
            "{} created! Ready to flash with Vivado.",
            report.path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn wrapped(e: EmitError) -> anyhow::Error {
        anyhow::Error::new(e).context("Verification of \"app.bin\" failed")
    }

    #[test]
    fn test_mismatch_maps_to_verify_fail() {
        let e = wrapped(EmitError::Mismatch {
            path: PathBuf::from("app.bin"),
            offset: 8,
            expected: 0x00b5_2223,
            found: 0x00b5_2200,
        });
        assert_eq!(exit_code_for(&e), EXIT_VERIFY_FAIL);
    }

    #[test]
    fn test_short_file_maps_to_verify_fail() {
        let e = wrapped(EmitError::Length {
            path: PathBuf::from("app.bin"),
            expected: 16,
            found: 12,
        });
        assert_eq!(exit_code_for(&e), EXIT_VERIFY_FAIL);
    }

    #[test]
    fn test_io_failures_map_to_io_error() {
        let full = std::io::Error::from(std::io::ErrorKind::Other);
        let e = anyhow::Error::new(EmitError::Write {
            path: Path::new("/dev/full").to_path_buf(),
            source: full,
        })
        .context("Failed to emit boot image");
        assert_eq!(exit_code_for(&e), EXIT_IO_ERROR);

        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        let e = wrapped(EmitError::Read {
            path: PathBuf::from("app.bin"),
            source: missing,
        });
        assert_eq!(exit_code_for(&e), EXIT_IO_ERROR);
    }

    #[test]
    fn test_foreign_error_maps_to_io_error() {
        let e = anyhow::anyhow!("Failed to serialize report");
        assert_eq!(exit_code_for(&e), EXIT_IO_ERROR);
    }
}
