//! Error types for position lookups.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can end a lookup early.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither or both of the file and stdin sources were given.
    #[error("you must provide either --file=<path> or --stdin=<filename>")]
    Usage,

    /// The input is not valid YAML.
    #[error("could not parse yaml: {message}")]
    Parse { message: String },

    /// No node's token covers the requested position.
    #[error("no node found at line {line}, col {column}")]
    NotFound { line: usize, column: usize },

    #[error("failed to read {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("{source_name} is not valid UTF-8")]
    Encoding { source_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_echoes_coordinates() {
        let err = Error::NotFound {
            line: 99,
            column: 1,
        };
        assert_eq!(err.to_string(), "no node found at line 99, col 1");
    }

    #[test]
    fn test_parse_message_includes_scanner_text() {
        let err = Error::Parse {
            message: "did not find expected node content".to_string(),
        };
        assert!(err.to_string().contains("did not find expected node content"));
    }
}
