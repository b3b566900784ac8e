pub mod completions;
pub mod pad;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use clap_complete::Shell;

use crate::error::{PaddingError, Result};
use crate::output::{Printer, Verbosity};

/// Usage line printed for a wrong number of arguments.
pub const USAGE: &str =
    "Usage: padding <tileset file> <tile width> <tile height> [padding (default 1px)]";

/// padding - Pad spritesheet tiles and bleed their edge colours into the gaps
#[derive(Parser, Debug)]
#[command(name = "padding")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Tileset image to pad
    pub tileset: Option<PathBuf>,

    /// Width of one tile in pixels
    pub tile_width: Option<OsString>,

    /// Height of one tile in pixels
    pub tile_height: Option<OsString>,

    /// Pixels added on each side of every tile (default: 1)
    pub padding: Option<OsString>,

    /// Output file (default: <tileset stem>_padded.png next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write atlas metadata as JSON next to the output
    #[arg(long)]
    pub json: bool,

    /// Suppress status output
    #[arg(long, short)]
    pub quiet: bool,

    /// Print grid details
    #[arg(long, short)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Parse command-line arguments.
///
/// `--help` and `--version` print and exit as usual; any other clap error
/// becomes a usage error.
pub fn parse_from<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => usage_error(),
    })
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completions::run(shell);
    }

    let printer = Printer::with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    let args = pad::PadArgs::from_cli(cli)?;
    pad::run(&args, &printer)?;
    Ok(())
}

pub(crate) fn usage_error() -> PaddingError {
    PaddingError::Usage {
        usage: USAGE.to_string(),
    }
}
