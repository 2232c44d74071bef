//! Filename rules
//!
//! This module contains the rule engine: a pure function computing the
//! destination filename (or a skip decision) for one source filename and a
//! run configuration. No filesystem access happens here; the walker owns all
//! side effects.

use std::ffi::OsStr;
use std::path::Path;

use crate::configuration::RenameJob;

/// Decision of the rule engine for one filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDecision {
    /// Transfer the file under the given name
    Rename(String),
    /// Leave the file alone
    Skip,
}

/// Computes the destination filename for one source filename
///
/// The pipeline runs in three steps:
/// 1. Extension filter: files whose extension is not in `job.filetypes()`
///    are skipped (an empty filter allows every file).
/// 2. Substitution pass: find-strings are applied longest first so a longer
///    pattern is consumed before a shorter pattern that is its substring;
///    each pattern replaces every occurrence in the working name, and later
///    patterns operate on the already-substituted name.
/// 3. Extension policy, keyed on the *original* filename's extension:
///    - `ma`: the configured prefix is added to the substituted name.
///    - `txt`: the result is `NOTE_<stem>_TEMP.txt` from the original stem,
///      discarding the substituted name.
///    - `png`: the result is `T_<stem>.png` from the substituted name's stem.
///    - anything else, including extension-less files, keeps the substituted
///      name unmodified.
///
/// Deterministic given identical inputs; no side effects.
pub fn compute_name(filename: &str, job: &RenameJob) -> RuleDecision {
    let extension = file_extension(filename);

    if !job.filetypes().is_empty() && !job.filetypes().iter().any(|ft| ft == extension) {
        return RuleDecision::Skip;
    }

    let substituted = apply_substitutions(filename, job.find_strings(), job.replace_with());

    let renamed = match extension {
        "ma" => format!("{}{}", job.prefix(), substituted),
        "txt" => format!("NOTE_{}_TEMP.{}", file_stem(filename), extension),
        "png" => format!("T_{}.png", file_stem(&substituted)),
        _ => substituted,
    };

    RuleDecision::Rename(renamed)
}

/// Replaces every occurrence of each find-string, longest pattern first
///
/// The sort is stable, so patterns of equal length keep their configured
/// order. Replacement is non-overlapping, left to right.
fn apply_substitutions(filename: &str, find_strings: &[String], replace_with: &str) -> String {
    let mut patterns: Vec<&String> = find_strings.iter().collect();
    patterns.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut renamed = filename.to_string();
    for pattern in patterns {
        renamed = renamed.replace(pattern.as_str(), replace_with);
    }

    renamed
}

/// Extracts the extension from a filename
///
/// Returns the text after the final `.`, or an empty string for names with
/// no extension (including leading-dot names such as `.config`).
pub fn file_extension(filename: &str) -> &str {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("")
}

/// Extracts the stem (the name before the final `.`) from a filename
pub fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(filename)
}
