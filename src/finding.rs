//! Validation errors and the run-wide report.
//!
//! Every problem the linter detects becomes a [`ValidationError`] appended to
//! a [`ValidationReport`]. Errors are never deduplicated: two identical
//! messages for the same document are both meaningful and both reported.

use std::fmt;
use std::path::{Path, PathBuf};

/// Category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The skills root directory itself is absent.
    Root,
    /// Missing document or malformed frontmatter delimiters.
    Structure,
    /// Absent, mismatched, malformed, or duplicate `name`.
    Naming,
    /// A relative link escapes its folder or points at nothing.
    Link,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Root => write!(f, "root"),
            ErrorKind::Structure => write!(f, "structure"),
            ErrorKind::Naming => write!(f, "naming"),
            ErrorKind::Link => write!(f, "link"),
        }
    }
}

/// Stable identifiers for every check the linter performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    SkillsDirMissing,
    MissingSkillFile,
    MissingFrontmatterStart,
    MissingFrontmatterEnd,
    MissingName,
    FolderMismatch,
    InvalidNameFormat,
    DuplicateName,
    LinkEscapes,
    MissingLinkTarget,
}

impl Rule {
    pub fn id(self) -> &'static str {
        match self {
            Rule::SkillsDirMissing => "structure/skills-dir-missing",
            Rule::MissingSkillFile => "structure/missing-skill-md",
            Rule::MissingFrontmatterStart => "structure/missing-frontmatter-start",
            Rule::MissingFrontmatterEnd => "structure/missing-frontmatter-end",
            Rule::MissingName => "naming/missing-name",
            Rule::FolderMismatch => "naming/folder-mismatch",
            Rule::InvalidNameFormat => "naming/invalid-format",
            Rule::DuplicateName => "naming/duplicate",
            Rule::LinkEscapes => "link/escapes-skill-dir",
            Rule::MissingLinkTarget => "link/missing-target",
        }
    }

    pub fn kind(self) -> ErrorKind {
        match self {
            Rule::SkillsDirMissing => ErrorKind::Root,
            Rule::MissingSkillFile | Rule::MissingFrontmatterStart | Rule::MissingFrontmatterEnd => {
                ErrorKind::Structure
            }
            Rule::MissingName
            | Rule::FolderMismatch
            | Rule::InvalidNameFormat
            | Rule::DuplicateName => ErrorKind::Naming,
            Rule::LinkEscapes | Rule::MissingLinkTarget => ErrorKind::Link,
        }
    }

    /// One-line description used as the SARIF rule summary.
    pub fn summary(self) -> &'static str {
        match self {
            Rule::SkillsDirMissing => "The skills directory does not exist",
            Rule::MissingSkillFile => "Skill folder has no SKILL.md",
            Rule::MissingFrontmatterStart => "SKILL.md does not open with a frontmatter delimiter",
            Rule::MissingFrontmatterEnd => "SKILL.md frontmatter is never closed",
            Rule::MissingName => "Frontmatter has no name",
            Rule::FolderMismatch => "Skill name differs from its folder name",
            Rule::InvalidNameFormat => "Skill name does not match the allowed pattern",
            Rule::DuplicateName => "Skill name is declared by more than one folder",
            Rule::LinkEscapes => "Relative link resolves outside the skill folder",
            Rule::MissingLinkTarget => "Relative link points at a file that does not exist",
        }
    }
}

/// One detected problem, tied to the document it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub rule: Rule,
    /// `None` only for the run-level [`ErrorKind::Root`] error.
    pub file: Option<PathBuf>,
    pub message: String,
}

impl ValidationError {
    pub fn new(rule: Rule, file: &Path, message: impl Into<String>) -> Self {
        ValidationError {
            rule,
            file: Some(file.to_path_buf()),
            message: message.into(),
        }
    }

    pub fn skills_dir_missing(skills_dir_name: &str) -> Self {
        ValidationError {
            rule: Rule::SkillsDirMissing,
            file: None,
            message: format!("{skills_dir_name}/ directory not found"),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.rule.kind()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}: {}", file.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Overall outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Process exit status for this verdict.
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }
}

/// Ordered accumulation of every error found during one run.
#[derive(Debug)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
    skills_checked: usize,
    checked_at: String,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        ValidationReport {
            errors: Vec::new(),
            skills_checked: 0,
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn record_skill_checked(&mut self) {
        self.skills_checked += 1;
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn skills_checked(&self) -> usize {
        self.skills_checked
    }

    pub fn checked_at(&self) -> &str {
        &self.checked_at
    }

    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        if self.passed() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// Errors raised by `rule`, in accumulation order.
    pub fn errors_for(&self, rule: Rule) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.rule == rule)
    }
}
