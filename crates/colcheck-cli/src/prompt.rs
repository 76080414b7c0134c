//! Interactive file path acquisition.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const MODEL_PROMPT: &str = "Enter the path of the old base: ";
pub const NEW_PROMPT: &str = "Enter the path of the new base: ";
pub const INVALID_PATH_MESSAGE: &str = "Invalid path! Please enter the correct file path.";
pub const PATH_EXAMPLE_MESSAGE: &str =
    r"Example of a correct path: C:\Users\your_user\Desktop\your_file.xlsx";

/// Errors raised while acquiring a file path.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// Input ended before an existing path was entered.
    #[error("input closed before a valid path was entered")]
    InputClosed,

    /// A bounded retry policy ran out of attempts.
    #[error("no valid path entered after {attempts} attempt(s)")]
    AttemptsExhausted { attempts: u32 },

    /// A path given up front (not typed at the prompt) does not exist.
    #[error("invalid path: {path} does not exist")]
    InvalidPath { path: PathBuf },
}

/// How many times an invalid path may be re-entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Keep prompting until an existing path is entered.
    #[default]
    Unbounded,
    /// Give up after this many attempts.
    Bounded(u32),
}

impl RetryPolicy {
    fn allows(self, attempts: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded(max) => attempts < max,
        }
    }
}

impl From<Option<u32>> for RetryPolicy {
    fn from(max_attempts: Option<u32>) -> Self {
        max_attempts.map_or(Self::Unbounded, Self::Bounded)
    }
}

/// Trims surrounding whitespace, then removes one enclosing pair of double
/// quotes, as left by "Copy as path" on Windows.
pub fn normalize_path_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}

/// Prompts until the user enters a path that exists on the filesystem.
pub fn acquire_path<R, W>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
    policy: RetryPolicy,
) -> Result<PathBuf, PromptError>
where
    R: BufRead,
    W: Write,
{
    acquire_path_with(prompt, input, output, policy, Path::exists)
}

/// Prompts until `exists` accepts the entered path.
///
/// Each rejected entry prints guidance and prompts again, for as long as
/// `policy` allows.
pub fn acquire_path_with<R, W, F>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
    policy: RetryPolicy,
    exists: F,
) -> Result<PathBuf, PromptError>
where
    R: BufRead,
    W: Write,
    F: Fn(&Path) -> bool,
{
    let mut attempts = 0u32;
    loop {
        if !policy.allows(attempts) {
            return Err(PromptError::AttemptsExhausted { attempts });
        }
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        attempts = attempts.saturating_add(1);

        let candidate = PathBuf::from(normalize_path_input(&line));
        if exists(&candidate) {
            tracing::debug!(path = %candidate.display(), attempts, "Accepted path");
            return Ok(candidate);
        }
        tracing::debug!(path = %candidate.display(), attempts, "Rejected path");
        writeln!(output, "{INVALID_PATH_MESSAGE}")?;
        writeln!(output, "{PATH_EXAMPLE_MESSAGE}")?;
    }
}

/// Uses `given` when present, otherwise prompts for a path.
///
/// A given path gets the same normalization as typed input but is not
/// retried: if it does not exist the result is [`PromptError::InvalidPath`].
pub fn resolve_path<R, W>(
    given: Option<&Path>,
    prompt: &str,
    input: &mut R,
    output: &mut W,
    policy: RetryPolicy,
) -> Result<PathBuf, PromptError>
where
    R: BufRead,
    W: Write,
{
    let Some(given) = given else {
        return acquire_path(prompt, input, output, policy);
    };
    let path = match given.to_str() {
        Some(text) => PathBuf::from(normalize_path_input(text)),
        None => given.to_path_buf(),
    };
    if path.exists() {
        Ok(path)
    } else {
        Err(PromptError::InvalidPath { path })
    }
}
