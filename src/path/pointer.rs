//! Structural path to pointer path conversion.
//!
//! Single-quoted key segments (`$.'app.kubernetes.io/name'`) are copied into
//! the pointer without their quotes and without splitting at their dots.
//!
//! # Known limitation
//!
//! Bracket indices are matched one character at a time (`[0]`..`[9]`, or a
//! literal `[+]`). Indices of 10 or more are left in bracket form and then
//! split at the remaining dots, so `$.items[12]` becomes `/items[12]`.
//! Key names are not escaped: a key containing `/` or `~` produces an
//! ambiguous segment.

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKET_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([0-9+])\]").unwrap());

/// Converts a structural path into a pointer path.
///
/// A bare `$` has no root descent and comes back unchanged.
///
/// # Example
///
/// ```
/// use kustomize_yaml_helper::path::to_pointer_path;
///
/// assert_eq!(to_pointer_path("$.resources[0]"), "/resources/0");
/// assert_eq!(to_pointer_path("$"), "$");
/// ```
pub fn to_pointer_path(path: &str) -> String {
    let path = path.replacen("$.", "/", 1);
    split_quoted(&path)
        .into_iter()
        .map(|piece| match piece {
            Piece::Plain(text) => BRACKET_INDEX.replace_all(&text, "/${1}").replace('.', "/"),
            Piece::Quoted(key) => key,
        })
        .collect()
}

enum Piece {
    Plain(String),
    /// Contents of a `'...'` segment with `''` unescaped.
    Quoted(String),
}

fn split_quoted(path: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, quoted) {
            ('\'', false) => {
                if !current.is_empty() {
                    pieces.push(Piece::Plain(std::mem::take(&mut current)));
                }
                quoted = true;
            }
            ('\'', true) if chars.peek() == Some(&'\'') => {
                chars.next();
                current.push('\'');
            }
            ('\'', true) => {
                pieces.push(Piece::Quoted(std::mem::take(&mut current)));
                quoted = false;
            }
            (other, _) => current.push(other),
        }
    }

    if quoted {
        pieces.push(Piece::Quoted(current));
    } else if !current.is_empty() {
        pieces.push(Piece::Plain(current));
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_index() {
        assert_eq!(to_pointer_path("$.resources[0]"), "/resources/0");
    }

    #[test]
    fn test_bare_root_unchanged() {
        assert_eq!(to_pointer_path("$"), "$");
    }

    #[test]
    fn test_nested_keys() {
        assert_eq!(
            to_pointer_path("$.spec.template.metadata.labels"),
            "/spec/template/metadata/labels"
        );
    }

    #[test]
    fn test_mixed_keys_and_indices() {
        assert_eq!(
            to_pointer_path("$.patches[1].target.names[3]"),
            "/patches/1/target/names/3"
        );
    }

    #[test]
    fn test_root_sequence_index() {
        // No `$.` prefix to replace, so the sigil stays.
        assert_eq!(to_pointer_path("$[2]"), "$/2");
    }

    #[test]
    fn test_multi_digit_index_is_not_converted() {
        assert_eq!(to_pointer_path("$.items[12]"), "/items[12]");
        assert_eq!(to_pointer_path("$.items[12].name"), "/items[12]/name");
    }

    #[test]
    fn test_plus_index() {
        assert_eq!(to_pointer_path("$.items[+]"), "/items/+");
    }

    #[test]
    fn test_quoted_key_keeps_its_dots() {
        assert_eq!(
            to_pointer_path("$.commonLabels.'app.kubernetes.io/name'"),
            "/commonLabels/app.kubernetes.io/name"
        );
        assert_eq!(to_pointer_path("$.'a.b'"), "/a.b");
        assert_eq!(to_pointer_path("$.a.'b.c'.d"), "/a/b.c/d");
    }

    #[test]
    fn test_quoted_key_is_not_index_converted() {
        assert_eq!(to_pointer_path("$.'x[0]'[1]"), "/x[0]/1");
    }

    #[test]
    fn test_doubled_quote_in_key() {
        assert_eq!(to_pointer_path("$.'it''s.x'"), "/it's.x");
    }

    #[test]
    fn test_slash_in_key_is_not_escaped() {
        assert_eq!(
            to_pointer_path("$.metadata.annotations.'example.com/name'"),
            "/metadata/annotations/example.com/name"
        );
    }

    #[test]
    fn test_same_input_same_output() {
        let path = "$.a[0].b";
        assert_eq!(to_pointer_path(path), to_pointer_path(path));
    }
}
