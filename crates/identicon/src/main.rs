//! identicon: render deterministic 5x5 identicons from strings.
//!
//! Each input string is hashed with MD5 and turned into a 250x250 PNG
//! written to `<input>.png`.
//!
//! # Usage
//!
//! ```text
//! identicon [OPTIONS] <INPUT>...
//! ```

#![allow(clippy::print_stdout)]

mod error;
mod logging;
mod output;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use identicon_pipeline::diagnostics::{Clock, process_with_diagnostics};
use identicon_pipeline::{ImageDescriptor, Md5Hasher};
use serde::Serialize;

use crate::error::CliError;

/// Generate identicon PNGs from strings.
///
/// Every input is rendered independently as a 250x250 image of mirrored
/// 50x50 squares, colored and laid out from the MD5 digest of the input.
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Strings to render. Each produces `<INPUT>.png`.
    ///
    /// Arguments are hashed as raw bytes, so they need not be UTF-8.
    #[arg(required = true)]
    inputs: Vec<OsString>,

    /// Write to this path instead of `<INPUT>.png` (single input only).
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Directory that derived `<INPUT>.png` paths are placed in.
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Print the image descriptor for each input as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Run the pipeline and encode the PNG, but write nothing.
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Per-input record printed by `--json`.
///
/// Non-UTF-8 inputs are shown lossily. The descriptor's digest still
/// identifies the exact bytes.
#[derive(Serialize)]
struct Report<'a> {
    input: Cow<'a, str>,
    path: Option<&'a Path>,
    descriptor: &'a ImageDescriptor,
}

/// [`Clock`] implementation backed by [`std::time::Instant`].
struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: &Instant) -> Duration {
        since.elapsed()
    }
}

/// Render one input and write it unless `--dry-run` is set.
fn generate(cli: &Cli, input: &OsStr) -> Result<(), CliError> {
    let (descriptor, diagnostics) =
        process_with_diagnostics(input.as_encoded_bytes(), &Md5Hasher, &StdClock)?;
    log::debug!("{input:?}:\n{}", diagnostics.report());

    let png = identicon_export::to_png(&descriptor)?;
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| output::output_path(input, &cli.out_dir));

    if cli.dry_run {
        log::info!(
            "{input:?}: {} squares, {} bytes (dry run, not writing {})",
            descriptor.pixel_map().len(),
            png.len(),
            path.display(),
        );
    } else {
        output::write_image(&path, &png)?;
        log::info!(
            "{input:?}: {} squares -> {} ({} bytes)",
            descriptor.pixel_map().len(),
            path.display(),
            png.len(),
        );
    }

    if cli.json {
        let report = Report {
            input: input.to_string_lossy(),
            path: (!cli.dry_run).then_some(path.as_path()),
            descriptor: &descriptor,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.output.is_some() && cli.inputs.len() > 1 {
        return Err(CliError::OutputWithMultipleInputs(cli.inputs.len()));
    }
    for input in &cli.inputs {
        generate(cli, input)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::configure_logger(logging::level_from_flags(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
