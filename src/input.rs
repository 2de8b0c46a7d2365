//! Input loading and line cleanup.
//!
//! The input file holds one domain-like string per line, as produced by
//! stripping the local part from a list of email addresses. Some entries carry
//! a literal `.tld` placeholder where the real top-level domain was redacted.
//!
//! Cleanup removes line terminators and any trailing `.tld` placeholder.
//! Nothing else: no encoding validation, no line-length limits, no
//! deduplication, and blank lines are kept so that output stays line-aligned
//! with input.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error_handling::InputError;

lazy_static! {
    // One or more repetitions, so cleanup is idempotent
    static ref PLACEHOLDER_SUFFIX: Regex =
        Regex::new(r"(?i)(\.tld)+$").expect("placeholder suffix regex is valid");
}

/// Cleans a single raw input line.
///
/// Removes carriage returns and line feeds, then strips a trailing
/// case-insensitive `.tld` placeholder. The result of cleaning an
/// already-clean line is the line itself.
pub fn clean_line(line: &str) -> String {
    let stripped = line.replace(['\r', '\n'], "");
    PLACEHOLDER_SUFFIX.replace(&stripped, "").into_owned()
}

/// Loads the input file and cleans every line.
///
/// Returns the cleaned lines in file order. Blank lines are passed through
/// unchanged so callers see exactly one entry per input line.
///
/// # Errors
///
/// Returns [`InputError::ReadError`] if the file is missing or unreadable.
/// Whether that is fatal is the caller's decision; the driver treats it as a
/// recoverable condition.
pub fn load_domains(path: &Path) -> Result<Vec<String>, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents.lines().map(clean_line).collect())
}
