//! Configuration constants.

/// Default input file, read from the working directory when no path is given.
///
/// The file contains one domain-like string per line, as produced by stripping
/// the local part from a list of email addresses. Entries may carry a literal
/// `.tld` placeholder suffix, which is removed before resolution.
pub const DEFAULT_INPUT_FILE: &str = "stripped_emails.txt";

/// Token printed for a line that has no registrable domain.
///
/// One result is printed per input line, so output stays aligned with input
/// even when individual lines fail to resolve.
pub const UNRESOLVED_TOKEN: &str = "none";
