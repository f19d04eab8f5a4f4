//! Removal of invisible and control characters from text files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SheetsmithError};

/// Code points with no visible glyph that commonly sneak into source files.
const INVISIBLE_CHARACTERS: &[char] = &[
    '\u{00A0}', // no-break space
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{FEFF}', // byte-order mark
    '\r',
    '\0',
    '\u{000B}', // vertical tab
    '\u{000C}', // form feed
    '\u{001A}', // substitute
    '\u{001B}', // escape
];

/// An immutable set of characters to strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizationRuleSet {
    characters: &'static [char],
}

impl SanitizationRuleSet {
    /// The default rule set: invisible spaces, BOM, carriage return and
    /// stray control characters.
    pub const INVISIBLE: SanitizationRuleSet = SanitizationRuleSet {
        characters: INVISIBLE_CHARACTERS,
    };

    /// Characters removed by this rule set.
    pub fn characters(&self) -> &'static [char] {
        self.characters
    }

    /// Returns true if `c` is removed by this rule set.
    pub fn contains(&self, c: char) -> bool {
        self.characters.contains(&c)
    }
}

impl Default for SanitizationRuleSet {
    fn default() -> Self {
        Self::INVISIBLE
    }
}

/// Outcome of sanitizing a file in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    /// File that was rewritten.
    pub path: PathBuf,
    /// Character count before sanitizing.
    pub chars_before: usize,
    /// Character count after sanitizing.
    pub chars_after: usize,
}

impl SanitizeReport {
    /// Number of characters removed.
    pub fn removed(&self) -> usize {
        self.chars_before - self.chars_after
    }
}

/// Remove every character in `rules` from `content`.
pub fn sanitize(content: &str, rules: &SanitizationRuleSet) -> String {
    content.chars().filter(|&c| !rules.contains(c)).collect()
}

/// Sanitize a UTF-8 text file and overwrite it with the result.
pub fn sanitize_file(path: impl AsRef<Path>, rules: &SanitizationRuleSet) -> Result<SanitizeReport> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SheetsmithError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let io_error = |source: std::io::Error| SheetsmithError::Io {
        path: path.to_path_buf(),
        source,
    };

    debug!(path = %path.display(), "reading file");
    let content = fs::read_to_string(path).map_err(io_error)?;

    let clean = sanitize(&content, rules);

    debug!(path = %path.display(), "writing sanitized content");
    fs::write(path, &clean).map_err(io_error)?;

    let report = SanitizeReport {
        path: path.to_path_buf(),
        chars_before: content.chars().count(),
        chars_after: clean.chars().count(),
    };
    info!(path = %path.display(), removed = report.removed(), "sanitized file");

    Ok(report)
}
