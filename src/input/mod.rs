//! Input loading.
//!
//! A lookup reads its document either from a file on disk or from standard
//! input. In the stdin case the caller names the document, and that name is
//! what file references are resolved against.

use crate::error::{Error, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// Content from stdin, resolved as if it lived at `name`.
    Stdin { name: String },
}

impl InputSource {
    /// Builds the source from the `--file` and `--stdin` flags.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] unless exactly one flag is set. Empty values
    /// count as unset.
    pub fn from_flags(file: Option<String>, stdin: Option<String>) -> Result<Self> {
        let file = file.filter(|f| !f.is_empty());
        let stdin = stdin.filter(|s| !s.is_empty());
        match (file, stdin) {
            (Some(file), None) => Ok(InputSource::File(PathBuf::from(file))),
            (None, Some(name)) => Ok(InputSource::Stdin { name }),
            _ => Err(Error::Usage),
        }
    }

    /// The path references are resolved against.
    pub fn source_name(&self) -> String {
        match self {
            InputSource::File(path) => path.to_string_lossy().into_owned(),
            InputSource::Stdin { name } => name.clone(),
        }
    }

    /// Reads the whole document, returning it with its source name.
    pub fn read(&self) -> Result<(String, String)> {
        let name = self.source_name();
        let content = match self {
            InputSource::File(path) => {
                let bytes = fs::read(path).map_err(|error| Error::Io {
                    source_name: name.clone(),
                    error,
                })?;
                decode(bytes, &name)?
            }
            InputSource::Stdin { .. } => read_from(io::stdin().lock(), &name)?,
        };
        debug!(source = %name, chars = content.chars().count(), "read input");
        Ok((content, name))
    }
}

/// Reads `reader` to the end as UTF-8 text.
pub fn read_from<R: Read>(mut reader: R, source_name: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|error| Error::Io {
            source_name: source_name.to_string(),
            error,
        })?;
    decode(buffer, source_name)
}

fn decode(bytes: Vec<u8>, source_name: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        source_name: source_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_from_flags_file() {
        let source = InputSource::from_flags(Some("k.yaml".to_string()), None).unwrap();
        assert_eq!(source, InputSource::File(PathBuf::from("k.yaml")));
        assert_eq!(source.source_name(), "k.yaml");
    }

    #[test]
    fn test_from_flags_stdin() {
        let source =
            InputSource::from_flags(None, Some("/tmp/kustomization.yaml".to_string())).unwrap();
        assert_eq!(source.source_name(), "/tmp/kustomization.yaml");
    }

    #[test]
    fn test_from_flags_requires_exactly_one() {
        assert!(matches!(InputSource::from_flags(None, None), Err(Error::Usage)));
        assert!(matches!(
            InputSource::from_flags(Some("a".to_string()), Some("b".to_string())),
            Err(Error::Usage)
        ));
        assert!(matches!(
            InputSource::from_flags(Some(String::new()), None),
            Err(Error::Usage)
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kustomization.yaml");
        fs::write(&path, "resources: []\n").unwrap();

        let source = InputSource::File(path.clone());
        let (content, name) = source.read().unwrap();
        assert_eq!(content, "resources: []\n");
        assert_eq!(name, path.to_string_lossy());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = InputSource::File(dir.path().join("missing.yaml"));
        assert!(matches!(source.read(), Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_from_rejects_invalid_utf8() {
        let result = read_from(Cursor::new(vec![0xff, 0xfe]), "stdin.yaml");
        assert!(matches!(result, Err(Error::Encoding { .. })));
    }

    #[test]
    fn test_read_from_reader() {
        let content = read_from(Cursor::new(b"a: 1\n".to_vec()), "stdin.yaml").unwrap();
        assert_eq!(content, "a: 1\n");
    }
}
