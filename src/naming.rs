//! Branch name normalization
//!
//! Turns a free-text description such as `"Support HTTPServer2 config"` into a
//! kebab-case segment (`support-http-server2-config`) and combines it with a
//! prefix into a full branch name (`feature/support-http-server2-config`).

use crate::error::BranchError;
use std::fmt;

/// How characters outside letters, digits and separators are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PunctuationPolicy {
    /// Treat the character as a token separator
    #[default]
    Strip,
    /// Fail with [`BranchError::InvalidCharacter`]
    Reject,
}

/// Converts free text into lowercase tokens joined by single hyphens.
///
/// Characters other than ASCII letters, digits, whitespace, `_` and `-` are
/// treated as separators. Use [`normalize`] with [`PunctuationPolicy::Reject`]
/// to refuse them instead.
pub fn kebab_case(input: &str) -> String {
    tokenize(input).join("-")
}

/// Like [`kebab_case`], with an explicit policy for punctuation.
pub fn normalize(input: &str, policy: PunctuationPolicy) -> Result<String, BranchError> {
    if policy == PunctuationPolicy::Reject {
        if let Some((position, ch)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphanumeric() && !is_separator(*c))
        {
            return Err(BranchError::InvalidCharacter { ch, position });
        }
    }
    Ok(kebab_case(input))
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

fn tokenize(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let end = if c.is_ascii_uppercase() {
            acronym_end(&chars, i)
                .or_else(|| word_end(&chars, i))
                .unwrap_or(i + 1)
        } else if c.is_ascii_lowercase() {
            // A lowercase start always forms a word
            word_end(&chars, i).unwrap_or(i + 1)
        } else if c.is_ascii_digit() {
            run_end(&chars, i, |c| c.is_ascii_digit())
        } else {
            i += 1;
            continue;
        };

        tokens.push(chars[i..end].iter().collect::<String>().to_ascii_lowercase());
        i = end;
    }

    tokens
}

/// End of the longest run of two or more capitals that is followed by a
/// capitalized word or by a non-letter.
fn acronym_end(chars: &[char], start: usize) -> Option<usize> {
    let upper_end = run_end(chars, start, |c| c.is_ascii_uppercase());

    (start + 2..=upper_end)
        .rev()
        .find(|&end| is_boundary(chars, end) || starts_capitalized_word(chars, end))
}

/// End of `[A-Z]?[a-z]+[0-9]*` starting at `start`.
fn word_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    if chars[i].is_ascii_uppercase() {
        i += 1;
    }
    let lower_end = run_end(chars, i, |c| c.is_ascii_lowercase());
    if lower_end == i {
        return None;
    }
    Some(run_end(chars, lower_end, |c| c.is_ascii_digit()))
}

fn run_end(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[start..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| start + offset)
}

fn is_boundary(chars: &[char], at: usize) -> bool {
    chars.get(at).is_none_or(|c| !c.is_ascii_alphabetic())
}

fn starts_capitalized_word(chars: &[char], at: usize) -> bool {
    matches!(
        (chars.get(at), chars.get(at + 1)),
        (Some(a), Some(b)) if a.is_ascii_uppercase() && b.is_ascii_lowercase()
    )
}

/// A full branch name: `<prefix>/<suffix>` where the suffix is kebab-case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName {
    full: String,
    suffix_start: usize,
}

impl BranchName {
    /// Combine a prefix and an already normalized suffix.
    ///
    /// # Errors
    ///
    /// - [`BranchError::EmptyName`] if the suffix is empty
    /// - [`BranchError::InvalidBranchName`] if git would refuse the name
    pub fn new(prefix: &str, suffix: &str) -> Result<Self, BranchError> {
        if suffix.is_empty() {
            return Err(BranchError::EmptyName);
        }

        let prefix = prefix.trim_matches('/');
        let (full, suffix_start) = if prefix.is_empty() {
            (suffix.to_string(), 0)
        } else {
            (format!("{prefix}/{suffix}"), prefix.len() + 1)
        };

        if !git2::Reference::is_valid_name(&format!("refs/heads/{full}")) {
            return Err(BranchError::InvalidBranchName(full));
        }

        Ok(Self { full, suffix_start })
    }

    /// Normalize a description and prefix it.
    pub fn from_description(
        prefix: &str,
        description: &str,
        policy: PunctuationPolicy,
    ) -> Result<Self, BranchError> {
        let suffix = normalize(description, policy)?;
        Self::new(prefix, &suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// The kebab-case part after the prefix
    pub fn suffix(&self) -> &str {
        &self.full[self.suffix_start..]
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}
