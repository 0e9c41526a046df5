//! histview — show a histogram of one numeric column of a delimited text file.
//!
//! ```text
//! histview <input-file> [bin-count]
//! ```

pub mod cli;

pub use cli::Cli;

use histview_core::{Figure, Result};
use histview_data::ColumnSpec;
use std::ffi::OsString;
use tracing::info;

/// Parse `args` (program name first), load the data and show the histogram
/// window. Returns once the window has been closed, or right away after
/// printing `--help`/`--version`.
///
/// Input errors are reported ahead of configuration errors.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some(cli) = Cli::from_args(args)? else {
        return Ok(());
    };
    let figure = prepare(&cli)?;
    let config = histview_config::resolve(cli.config.as_deref())?;

    histview_window::show(figure, &config)
}

/// Everything `run` does before opening a window: read the input column and
/// bin it.
pub fn prepare(cli: &Cli) -> Result<Figure> {
    let bins = cli.bin_count();
    let samples = histview_data::load_column(&cli.input, &ColumnSpec::default())?;

    let figure = Figure::new(&cli.input, &samples, bins)?;
    let (low, high) = figure.histogram.range();
    info!(
        "{} samples from '{}' in {} bins over [{low}, {high}]",
        figure.samples,
        cli.input.display(),
        bins,
    );

    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use histview_core::HistError;
    use std::ffi::OsStr;
    use std::io::Write;

    fn input(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::from_args(std::iter::once("histview").chain(args.iter().copied()))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn third_column_becomes_titled_figure() {
        let file = input(&["1,2,3.5", "4,5,6.0", "7,8,9.5"]);
        let path = file.path().to_str().unwrap();

        let figure = prepare(&cli(&[path])).unwrap();

        assert_eq!(figure.samples, 3);
        assert_eq!(figure.title, format!("{path} histogram"));
        assert_eq!(figure.histogram.bins(), 20);
        assert_eq!(figure.histogram.range(), (3.5, 9.5));
        assert_eq!(figure.histogram.total(), 3);
    }

    #[test]
    fn bin_argument_is_used() {
        let file = input(&["0,0,1", "0,0,2", "0,0,3", "0,0,4"]);
        let path = file.path().to_str().unwrap();

        let figure = prepare(&cli(&[path, "3"])).unwrap();
        assert_eq!(figure.histogram.bins(), 3);
        assert_eq!(figure.histogram.counts(), &[1, 1, 2]);
    }

    #[test]
    fn bad_bin_argument_fails_before_loading() {
        let result = run(["histview", "/definitely/not/here.csv", "abc"]);
        assert!(matches!(result, Err(HistError::Argument(_))));
    }

    #[test]
    fn missing_argument_fails() {
        assert!(matches!(run(["histview"]), Err(HistError::Argument(_))));
    }

    #[test]
    fn version_flag_returns_without_a_window() {
        assert!(run(["histview", "--version"]).is_ok());
    }

    #[test]
    fn missing_input_wins_over_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("absent.csv");
        let config = dir.path().join("absent.toml");

        let result = run([
            OsStr::new("histview"),
            OsStr::new("-c"),
            config.as_os_str(),
            data.as_os_str(),
        ]);
        assert!(matches!(result, Err(HistError::FileAccess { .. })));
    }

    #[test]
    fn nonexistent_file_fails_with_file_access() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let path = path.to_str().unwrap();

        match prepare(&cli(&[path])) {
            Err(e @ HistError::FileAccess { .. }) => assert!(e.to_string().contains(path)),
            other => panic!("expected file access error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_fails_with_parse() {
        let file = input(&["1,2,3", "1,2,x"]);
        let path = file.path().to_str().unwrap();

        assert!(matches!(prepare(&cli(&[path])), Err(HistError::Parse { line: 2, .. })));
    }
}
