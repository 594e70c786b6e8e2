//! `corrmark <LEFT> <RIGHT>` - open both images side by side and mark
//! corresponding points until the window is closed or a key is pressed.

use anyhow::Context as _;
use clap::Parser;
use clap::error::ErrorKind;
use corrmark::CorrespondenceError;
use corrmark::app::run_session;
use corrmark::canvas::CanvasCompositor;
use corrmark::logging::init_logging;
use corrmark::settings::Settings;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "corrmark", version, about = "Mark point correspondences between two images")]
struct Cli {
    /// Left image
    image_left: PathBuf,
    /// Right image
    image_right: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// `--help` and `--version` are answered by clap and count as success.
fn is_informational(e: &clap::Error) -> bool {
    matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Print clap's message, followed by the usage line for a rejected command line.
fn report_parse_error(e: &clap::Error) -> ExitCode {
    if let Err(io) = e.print() {
        tracing::warn!("Failed to print command line message: {io}");
    }
    if is_informational(e) {
        return ExitCode::SUCCESS;
    }
    eprintln!("{}", CorrespondenceError::Usage(String::new()));
    ExitCode::FAILURE
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load();
    let composite = CanvasCompositor::load_pair(&cli.image_left, &cli.image_right)
        .context("Could not open file(s)")?;
    run_session(composite, settings).context("Marking session failed")?;
    Ok(())
}
