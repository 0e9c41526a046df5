use clap::error::ErrorKind;
use clap::Parser;
use histview_core::{HistError, Result, DEFAULT_BINS, MAX_BINS};
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Show a histogram of the third comma-separated column of a text file.
#[derive(Debug, Clone, Parser)]
#[command(name = "histview", version, about)]
pub struct Cli {
    /// Delimited text file to read.
    pub input: PathBuf,

    /// Number of equal-width bins.
    #[arg(value_parser = parse_bin_count, allow_negative_numbers = true)]
    pub bins: Option<NonZeroUsize>,

    /// Configuration file (default: $XDG_CONFIG_HOME/histview/histview.toml).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse a full argument list, program name first.
    ///
    /// Returns `None` once `--help` or `--version` output has been printed;
    /// every other clap failure becomes [`HistError::Argument`].
    pub fn from_args<I, T>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(Some(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.print()
                    .map_err(|io| HistError::Argument(format!("cannot print usage: {io}")))?;
                Ok(None)
            }
            Err(e) => Err(HistError::Argument(e.to_string().trim_end().to_string())),
        }
    }

    /// The requested bin count, or the default of 20.
    pub fn bin_count(&self) -> NonZeroUsize {
        self.bins.unwrap_or(DEFAULT_BINS)
    }
}

fn parse_bin_count(raw: &str) -> Result<NonZeroUsize, String> {
    let value: i128 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not an integer"))?;

    if value > MAX_BINS as i128 {
        return Err(format!("bin count must be at most {MAX_BINS}, got {value}"));
    }

    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| format!("bin count must be positive, got {value}"))
}
