//! Raw input tokenization and per-group staging buffers.
//!
//! # Responsibility
//! - Split typed text and parsed file contents into normalized tokens.
//! - Hold uncommitted tokens per group until an explicit commit.
//!
//! # Invariants
//! - Staged tokens are normalized (see `normalize_word_text`).
//! - A buffer never holds the same token twice.
//! - Staged tokens have no word id and are invisible to the pool.

use crate::model::word::normalize_word_text;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TOKEN_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("valid token separator regex"));

const FILE_COMMENT_PREFIX: char = '#';

/// Tokenizes typed input split on commas, whitespace and newlines.
///
/// Output is normalized and de-duplicated, first occurrence wins.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    TOKEN_SEPARATOR_RE
        .split(raw)
        .filter_map(normalize_word_text)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Tokenizes uploaded file contents line by line.
///
/// Lines starting with `#` are comments.
pub fn tokenize_file(contents: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    contents
        .lines()
        .filter(|line| !line.trim_start().starts_with(FILE_COMMENT_PREFIX))
        .flat_map(tokenize)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Uncommitted tokens of one group.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StagingBuffer {
    tokens: Vec<String>,
}

impl StagingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends tokens not already staged; returns how many were added.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = String>) -> usize {
        let before = self.tokens.len();
        for token in tokens {
            if !self.tokens.contains(&token) {
                self.tokens.push(token);
            }
        }
        self.tokens.len() - before
    }

    /// Removes one staged token by its normalized form.
    pub fn remove(&mut self, token: &str) -> bool {
        let Some(normalized) = normalize_word_text(token) else {
            return false;
        };
        let before = self.tokens.len();
        self.tokens.retain(|staged| *staged != normalized);
        self.tokens.len() != before
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Drains the buffer for commit.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize, tokenize_file, StagingBuffer};

    #[test]
    fn tokenize_splits_on_commas_whitespace_and_newlines() {
        assert_eq!(tokenize("cat, dog  dog"), vec!["cat", "dog"]);
        assert_eq!(tokenize("Sun,\nMOON\tstar,,"), vec!["sun", "moon", "star"]);
    }

    #[test]
    fn tokenize_drops_tokens_without_letters() {
        assert_eq!(tokenize("42, --, a1, !"), vec!["a1"]);
        assert!(tokenize("   ,  \n ").is_empty());
    }

    #[test]
    fn tokenize_file_skips_comment_lines() {
        let contents = "# week 3 list\nship\n  # spare\nshop, chip\nSHIP\n";
        assert_eq!(tokenize_file(contents), vec!["ship", "shop", "chip"]);
    }

    #[test]
    fn buffer_deduplicates_and_drains() {
        let mut buffer = StagingBuffer::new();
        assert_eq!(buffer.extend(tokenize("cat dog")), 2);
        assert_eq!(buffer.extend(tokenize("dog emu")), 1);
        assert_eq!(buffer.tokens(), ["cat", "dog", "emu"]);

        assert!(buffer.remove(" DOG "));
        assert!(!buffer.remove("dog"));
        assert_eq!(buffer.take(), vec!["cat", "emu"]);
        assert!(buffer.is_empty());
    }
}
