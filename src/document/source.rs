//! Character-indexed view of the input text.
//!
//! yaml-rust2 reports marker offsets in characters. `SourceText` keeps the
//! input as a character vector with a table of line starts so those offsets
//! can be turned into 1-based positions and the text around a marker can be
//! inspected for indicators (`-`, `:`, `[`, `{`) the event stream does not
//! report on its own.

use super::token::Position;

pub struct SourceText {
    chars: Vec<char>,
    /// Character index of the first character of each line.
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut line_starts = vec![0];
        for (index, ch) in chars.iter().enumerate() {
            if *ch == '\n' {
                line_starts.push(index + 1);
            }
        }
        Self { chars, line_starts }
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Returns true when the text at `index` starts with `prefix`.
    pub fn starts_with_at(&self, index: usize, prefix: &str) -> bool {
        let mut offset = index;
        for expected in prefix.chars() {
            if self.char_at(offset) != Some(expected) {
                return false;
            }
            offset += 1;
        }
        true
    }

    /// Converts a character index into a 1-based position.
    ///
    /// Indices past the end clamp to the position just after the last character.
    pub fn position(&self, index: usize) -> Position {
        let index = index.min(self.chars.len());
        let line = match self.line_starts.binary_search(&index) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        Position::new(line + 1, index - self.line_starts[line] + 1)
    }

    /// Collects characters from `start` while `keep` holds.
    pub fn take_while(&self, start: usize, keep: impl Fn(char) -> bool) -> String {
        self.chars
            .iter()
            .skip(start)
            .take_while(|ch| keep(**ch))
            .collect()
    }

    /// Index just past a scalar that starts at `start`.
    ///
    /// Quoted scalars end after their closing quote (`''` and `\"` escapes are
    /// skipped); plain scalars end after `plain_len` characters.
    pub fn scalar_end(&self, start: usize, plain_len: usize) -> usize {
        match self.char_at(start) {
            Some('\'') => {
                let mut index = start + 1;
                while let Some(ch) = self.char_at(index) {
                    if ch == '\'' {
                        if self.char_at(index + 1) == Some('\'') {
                            index += 2;
                            continue;
                        }
                        return index + 1;
                    }
                    index += 1;
                }
                index
            }
            Some('"') => {
                let mut index = start + 1;
                while let Some(ch) = self.char_at(index) {
                    match ch {
                        '\\' => index += 2,
                        '"' => return index + 1,
                        _ => index += 1,
                    }
                }
                index.min(self.chars.len())
            }
            _ => start + plain_len,
        }
    }

    /// Finds `target` at or after `from`, skipping spaces and tabs only.
    pub fn find_forward_on_line(&self, from: usize, target: char) -> Option<usize> {
        let mut index = from;
        while let Some(ch) = self.char_at(index) {
            match ch {
                ' ' | '\t' => index += 1,
                c if c == target => return Some(index),
                _ => return None,
            }
        }
        None
    }

    /// Finds a standalone `target` indicator before `before`.
    ///
    /// Whitespace, line breaks, trailing comments on earlier lines and node
    /// properties (`&anchor`, `!tag`) are skipped. Any other text in between
    /// means there is no indicator.
    pub fn find_backward(&self, before: usize, target: char) -> Option<usize> {
        let mut index = before.min(self.chars.len());
        loop {
            while index > 0 && self.chars[index - 1].is_whitespace() {
                index -= 1;
                if self.chars[index] == '\n' {
                    index = self.comment_start(index);
                }
            }
            if index == 0 {
                return None;
            }

            let end = index;
            let mut start = end;
            while start > 0 && !self.chars[start - 1].is_whitespace() {
                start -= 1;
            }
            match self.chars[start] {
                c if c == target && end - start == 1 => return Some(start),
                '&' | '!' => index = start,
                _ => return None,
            }
        }
    }

    /// Index of the `#` opening a comment on the line ending at `line_end`,
    /// or `line_end` when the line has none.
    fn comment_start(&self, line_end: usize) -> usize {
        let line = match self.line_starts.binary_search(&line_end) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        (line_start..line_end)
            .find(|&i| {
                self.chars[i] == '#' && (i == line_start || self.chars[i - 1].is_whitespace())
            })
            .unwrap_or(line_end)
    }
}
