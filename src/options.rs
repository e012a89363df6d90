// SPDX-License-Identifier: MPL-2.0

//! Loading the option list the picker is offered.
//!
//! Options come from a JSON array of `{ "value": ..., "label": ... }`
//! objects, or from the built-in sample when no file is configured.

use crate::widgets::PickerOption;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading an options file.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses a JSON options document.
pub fn parse_options(path: &Path, contents: &str) -> Result<Vec<PickerOption>, OptionsError> {
    serde_json::from_str(contents).map_err(|source| OptionsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the options file at `path`.
pub async fn load_options(path: impl AsRef<Path>) -> Result<Vec<PickerOption>, OptionsError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let options = parse_options(path, &contents)?;
    tracing::info!(path = %path.display(), count = options.len(), "loaded options");
    Ok(options)
}

/// Sample options shown when no options file is configured.
pub fn builtin_options() -> Vec<PickerOption> {
    [
        ("release-channel", "Release Channel"),
        ("locale", "Locale"),
        ("country", "Country"),
        ("version", "Firefox Version"),
        ("sample-rate", "Sample Rate"),
        ("profile-age", "Profile Age"),
        ("search-engine", "Default Search Engine"),
        ("addon-installed", "Add-on Installed"),
    ]
    .into_iter()
    .map(|(value, label)| PickerOption::new(value, label))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_load_options_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"value": "a", "label": "Alpha"}}, {{"label": "No value"}}]"#
        )
        .unwrap();

        let options = load_options(file.path()).await.unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0], PickerOption::new("a", "Alpha"));
        assert_eq!(options[1].value, "");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_options(dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, OptionsError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_options(Path::new("bad.json"), "{not json").unwrap_err();
        assert!(matches!(err, OptionsError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid options in bad.json"));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let options = builtin_options();
        let mut ids: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), options.len());
    }
}
