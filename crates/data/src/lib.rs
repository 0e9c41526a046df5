//! Numeric column loader for delimited text files.
//!
//! Every non-blank line is one record. Text from `#` to the end of a line is
//! a comment, fields are trimmed, and there is no quoting or header row. The
//! selected field of every record must parse as `f64`.

use csv::StringRecord;
use histview_core::{HistError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const COMMENT: char = '#';

/// Which field of each record to read, and how fields are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub delimiter: u8,
    /// Zero-based field index.
    pub column:    usize,
}

impl Default for ColumnSpec {
    /// The third comma-separated field.
    fn default() -> Self {
        Self {
            delimiter: b',',
            column:    2,
        }
    }
}

/// Read the column described by `spec` from the file at `path`.
pub fn load_column(path: impl AsRef<Path>, spec: &ColumnSpec) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| HistError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = read_column(file, path, spec)?;
    tracing::debug!("Loaded {} samples from '{}'", samples.len(), path.display());
    Ok(samples)
}

/// Read the column described by `spec` from `reader`. `source` names the
/// input in error messages.
pub fn read_column<R: Read>(reader: R, source: &Path, spec: &ColumnSpec) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(spec.delimiter)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    let mut record = StringRecord::new();
    let mut last_line = 0;

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(record_error(source, e, last_line + 1)),
        }

        let line = record.position().map_or(last_line + 1, |p| p.line());
        last_line = line;

        if is_blank(&record) {
            continue;
        }

        let text = field(&record, spec.column).map_err(|found| HistError::Parse {
            path: source.to_path_buf(),
            line,
            message: format!(
                "expected at least {} fields, found {found}",
                spec.column + 1
            ),
        })?;

        let value = text.parse::<f64>().map_err(|_| HistError::Parse {
            path: source.to_path_buf(),
            line,
            message: format!("could not convert '{text}' to a number"),
        })?;

        samples.push(value);
    }

    Ok(samples)
}

/// The text of field `column` with any comment removed, or the number of
/// fields the record actually has.
fn field(record: &StringRecord, column: usize) -> Result<&str, usize> {
    for (index, raw) in record.iter().enumerate() {
        let (text, commented) = match raw.find(COMMENT) {
            Some(at) => (raw[..at].trim_end(), true),
            None => (raw, false),
        };

        if index == column {
            return Ok(text);
        }
        if commented {
            return Err(index + 1);
        }
    }

    Err(record.len())
}

/// `true` for whitespace-only and comment-only lines.
fn is_blank(record: &StringRecord) -> bool {
    match record.get(0) {
        None => true,
        Some(first) => {
            let before_comment = first.split(COMMENT).next().unwrap_or("");
            before_comment.trim().is_empty() && (record.len() == 1 || first.contains(COMMENT))
        }
    }
}

fn record_error(source: &Path, err: csv::Error, fallback_line: u64) -> HistError {
    let line = err.position().map_or(fallback_line, |p| p.line());
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(io) => HistError::FileAccess {
            path:   source.to_path_buf(),
            source: io,
        },
        _ => HistError::Parse {
            path: source.to_path_buf(),
            line,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn read(input: &str) -> Result<Vec<f64>> {
        read_column(input.as_bytes(), Path::new("mem.csv"), &ColumnSpec::default())
    }

    #[test]
    fn reads_third_field_in_order() {
        let samples = read("1,2,3.5\n4,5,6.0\n7,8,9.5\n").unwrap();
        assert_eq!(samples, vec![3.5, 6.0, 9.5]);
    }

    #[test]
    fn extra_fields_and_whitespace_are_fine() {
        let samples = read(" 0 , 12 , -4.25 , extra\n1,1,1e3").unwrap();
        assert_eq!(samples, vec![-4.25, 1000.0]);
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let input = "# i,nonces,time\n1,2,3\n\n   \n  # indented\n4,5,6 # trailing\n";
        assert_eq!(read(input).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn empty_input_gives_no_samples() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        match read("1,2,3\n1,2,x\n") {
            Err(HistError::Parse { line, message, .. }) => {
                assert_eq!(line, 2);
                assert!(message.contains("'x'"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn short_record_is_parse_error() {
        match read("1,2\n") {
            Err(HistError::Parse { line, message, .. }) => {
                assert_eq!(line, 1);
                assert!(message.contains("found 2"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn comment_cuts_record_short() {
        assert!(matches!(read("1,# 2,3\n"), Err(HistError::Parse { .. })));
    }

    #[test]
    fn custom_delimiter_and_column() {
        let spec = ColumnSpec { delimiter: b';', column: 0 };
        let samples = read_column("2.5;x\n-1;y\n".as_bytes(), Path::new("mem"), &spec).unwrap();
        assert_eq!(samples, vec![2.5, -1.0]);
    }

    #[test]
    fn load_column_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,a,1.5").unwrap();
        writeln!(file, "1,b,2.5").unwrap();

        let samples = load_column(file.path(), &ColumnSpec::default()).unwrap();
        assert_eq!(samples, vec![1.5, 2.5]);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        match load_column(&path, &ColumnSpec::default()) {
            Err(e @ HistError::FileAccess { .. }) => {
                assert!(e.to_string().contains("missing.csv"));
            }
            other => panic!("expected file access error, got {other:?}"),
        }
    }
}
