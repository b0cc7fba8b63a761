//! Output sink selection.

use std::io::{self, Write};
use std::path::Path;

use crate::error_handling::InitializationError;

/// Opens the CSV destination: the given file, or stdout when `path` is `None`.
///
/// Uses a trait object so the exporter handles both the same way.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, InitializationError> {
    match path {
        Some(path) => {
            let file =
                std::fs::File::create(path).map_err(|source| InitializationError::OutputFileError {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_output_creates_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("out.csv");

        let mut out = open_output(Some(&path)).expect("file should open");
        out.write_all(b"a,b\n").expect("write");
        out.flush().expect("flush");
        drop(out);

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "a,b\n");
    }

    #[test]
    fn test_open_output_missing_directory() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing").join("out.csv");

        let err = open_output(Some(&path)).err().expect("should fail");
        assert!(matches!(err, InitializationError::OutputFileError { .. }));
    }
}
