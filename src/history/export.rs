//! History export

use std::path::{Path, PathBuf};

use super::{History, InputError};
use crate::telemetry::{increment_counter, CounterMetric};

/// File name offered for exported history
pub const DEFAULT_EXPORT_FILE: &str = "history_sample.txt";

/// Write the history as comma-joined text
///
/// A directory target gets `file_name` appended. Returns the path actually
/// written.
pub fn write_history(
    path: impl AsRef<Path>,
    file_name: &str,
    history: &History,
) -> Result<PathBuf, InputError> {
    let path = path.as_ref();
    let target = if path.is_dir() {
        path.join(file_name)
    } else {
        path.to_path_buf()
    };

    std::fs::write(&target, history.to_export_string())?;

    tracing::info!(path = %target.display(), rounds = history.len(), "History exported");
    increment_counter(CounterMetric::HistoryExported, "file");

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let history = History::parse("1.3, 1.4, 2.1").unwrap();

        let written = write_history(&path, DEFAULT_EXPORT_FILE, &history).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.3,1.4,2.1");
    }

    #[test]
    fn test_write_to_directory_uses_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::parse("2.5").unwrap();

        let written = write_history(dir.path(), DEFAULT_EXPORT_FILE, &history).unwrap();
        assert_eq!(written, dir.path().join(DEFAULT_EXPORT_FILE));
        assert_eq!(std::fs::read_to_string(written).unwrap(), "2.5");
    }

    #[test]
    fn test_write_to_directory_uses_given_name() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::parse("1.1, 9.9").unwrap();

        let written = write_history(dir.path(), "rounds.txt", &history).unwrap();
        assert_eq!(written, dir.path().join("rounds.txt"));
        assert!(!dir.path().join(DEFAULT_EXPORT_FILE).exists());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let history = History::parse("2.5").unwrap();
        let result = write_history("/nonexistent/dir/out.txt", DEFAULT_EXPORT_FILE, &history);
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
