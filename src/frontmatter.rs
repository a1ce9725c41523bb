//! Frontmatter parsing.
//!
//! A skill document opens with a header block delimited by `---` lines.
//! Only flat `key: value` pairs are understood; blank lines, `#` comments,
//! and lines without a `:` are skipped. Nested YAML, sequences, and
//! multi-line scalars are deliberately out of reach, so no YAML crate is
//! pulled in.
//!
//! ```
//! use skill_lint::frontmatter::parse_frontmatter;
//!
//! let meta = parse_frontmatter("---\nname: \"my-skill\"\n---\n# Body\n").unwrap();
//! assert_eq!(meta.get("name").map(String::as_str), Some("my-skill"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// Line boundaries: `\r\n`, a lone `\r` or `\n`, and the Unicode line and
/// paragraph separators.
static RE_LINE_BREAK: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap()
});

/// Flat key/value metadata from the frontmatter block.
pub type Metadata = BTreeMap<String, String>;

/// Why a document's frontmatter could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    /// The document is empty or its first line is not the delimiter.
    MissingStart,
    /// No closing delimiter line follows the opening one.
    MissingEnd,
}

impl fmt::Display for FrontmatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontmatterError::MissingStart => write!(f, "missing frontmatter start"),
            FrontmatterError::MissingEnd => write!(f, "missing frontmatter end"),
        }
    }
}

impl std::error::Error for FrontmatterError {}

/// Parses the frontmatter block at the top of `content`.
///
/// The opening line is compared after trimming; the closing line must be
/// exactly [`DELIMITER`]. When a key repeats, the last value wins. Old Mac
/// `\r` endings split lines just like `\n` and `\r\n`.
pub fn parse_frontmatter(content: &str) -> Result<Metadata, FrontmatterError> {
    let mut lines = RE_LINE_BREAK.split(content);

    let first = lines.next().ok_or(FrontmatterError::MissingStart)?;
    if first.trim_start_matches('\u{feff}').trim() != DELIMITER {
        return Err(FrontmatterError::MissingStart);
    }

    let mut meta = Metadata::new();
    for line in lines {
        if line == DELIMITER {
            return Ok(meta);
        }
        if let Some((key, value)) = parse_entry(line) {
            meta.insert(key.to_string(), value.to_string());
        }
    }

    Err(FrontmatterError::MissingEnd)
}

/// Splits one frontmatter line into `(key, value)`.
///
/// Returns `None` for blank lines, comments, and lines without a `:`.
fn parse_entry(line: &str) -> Option<(&str, &str)> {
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), strip_quotes(value.trim())))
}

/// Removes one layer of matching `"` or `'` quotes around `value`.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
