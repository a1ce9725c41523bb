//! Skill validation.
//!
//! [`run_validation`] is the main entry-point: it locates the skills
//! directory under a root, enumerates the skill folders in file-name order,
//! and checks each one in turn:
//!
//! 1. the skill document exists,
//! 2. its frontmatter parses,
//! 3. its `name` matches the folder, the allowed pattern, and is unique,
//! 4. every relative link stays inside the folder and resolves to a file.
//!
//! Problems are collected into a [`ValidationReport`]; a bad folder never
//! stops the remaining folders from being checked. Only I/O failures
//! (unreadable files, directory enumeration errors) abort the run.

use crate::config::Config;
use crate::containment::{self, LinkStatus};
use crate::finding::{Rule, ValidationError, ValidationReport};
use crate::frontmatter::{self, FrontmatterError, Metadata};
use crate::links;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate subdirectory of the skills directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillFolder {
    /// Directory name, compared against the declared skill `name`.
    pub name: String,
    pub path: PathBuf,
}

/// First document to declare each skill name during a run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    first_seen: HashMap<String, PathBuf>,
}

impl NameRegistry {
    /// Records `name` as declared by `document`.
    ///
    /// Returns the earlier document when the name was already taken; the
    /// registry keeps the first sighting in that case.
    pub fn register(&mut self, name: &str, document: &Path) -> Option<&Path> {
        match self.first_seen.entry(name.to_string()) {
            Entry::Occupied(entry) => Some(entry.into_mut().as_path()),
            Entry::Vacant(entry) => {
                entry.insert(document.to_path_buf());
                None
            }
        }
    }

    pub fn first_declared(&self, name: &str) -> Option<&Path> {
        self.first_seen.get(name).map(PathBuf::as_path)
    }
}

/// Validates the skills directory under `root` using `config`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_lint::{config::Config, validate};
///
/// let report = validate::run_validation(Path::new("."), Config::default()).unwrap();
/// std::process::exit(report.verdict().exit_code());
/// ```
///
/// # Errors
///
/// Returns `Err(String)` for an invalid name pattern or any I/O failure.
pub fn run_validation(root: &Path, config: Config) -> Result<ValidationReport, String> {
    let validator = Validator::new(config)?;
    validator.validate_skills_dir(&root.join(&validator.config.skills_dir))
}

/// Applies one [`Config`] to skill folders.
pub struct Validator {
    config: Config,
    name_pattern: regex::Regex,
}

impl Validator {
    /// # Errors
    ///
    /// Fails when the configured name pattern does not compile.
    pub fn new(config: Config) -> Result<Self, String> {
        let name_pattern = config.compile_name_pattern()?;
        Ok(Validator {
            config,
            name_pattern,
        })
    }

    /// Validates every skill folder inside `skills_dir`.
    ///
    /// A missing `skills_dir` is reported as a single error rather than
    /// returned as `Err`.
    pub fn validate_skills_dir(&self, skills_dir: &Path) -> Result<ValidationReport, String> {
        let mut report = ValidationReport::new();

        if !skills_dir.is_dir() {
            log::info!("skills directory {} does not exist", skills_dir.display());
            report.push(ValidationError::skills_dir_missing(&self.config.skills_dir));
            return Ok(report);
        }

        let mut registry = NameRegistry::default();
        for folder in discover_skill_folders(skills_dir)? {
            self.validate_skill(&folder, &mut registry, &mut report)?;
        }

        Ok(report)
    }

    /// Runs every check on one folder, appending problems to `report`.
    ///
    /// A missing document or unparsable frontmatter ends the folder's checks.
    /// Naming problems do not: links are still verified.
    pub fn validate_skill(
        &self,
        folder: &SkillFolder,
        registry: &mut NameRegistry,
        report: &mut ValidationReport,
    ) -> Result<(), String> {
        log::debug!("checking skill folder {}", folder.path.display());
        report.record_skill_checked();

        let document = folder.path.join(&self.config.skill_file);
        if !document.is_file() {
            report.push(ValidationError::new(
                Rule::MissingSkillFile,
                &document,
                format!("missing {}", self.config.skill_file),
            ));
            return Ok(());
        }

        let content = std::fs::read_to_string(&document)
            .map_err(|e| format!("Failed to read {}: {}", document.display(), e))?;

        let meta = match frontmatter::parse_frontmatter(&content) {
            Ok(meta) => meta,
            Err(e) => {
                let rule = match e {
                    FrontmatterError::MissingStart => Rule::MissingFrontmatterStart,
                    FrontmatterError::MissingEnd => Rule::MissingFrontmatterEnd,
                };
                report.push(ValidationError::new(rule, &document, e.to_string()));
                return Ok(());
            }
        };

        self.check_name(folder, &document, &meta, registry, report);
        self.check_links(folder, &document, &content, report)
    }

    fn check_name(
        &self,
        folder: &SkillFolder,
        document: &Path,
        meta: &Metadata,
        registry: &mut NameRegistry,
        report: &mut ValidationReport,
    ) {
        let name = match meta.get("name") {
            Some(name) if !name.is_empty() => name.as_str(),
            _ => {
                report.push(ValidationError::new(
                    Rule::MissingName,
                    document,
                    "missing name in frontmatter",
                ));
                return;
            }
        };

        if name != folder.name {
            report.push(ValidationError::new(
                Rule::FolderMismatch,
                document,
                format!("name '{name}' does not match folder '{}'", folder.name),
            ));
        }

        if !self.name_pattern.is_match(name) {
            report.push(ValidationError::new(
                Rule::InvalidNameFormat,
                document,
                format!("name '{name}' must match {}", self.config.name_pattern),
            ));
        }

        if let Some(first) = registry.register(name, document) {
            let message = format!("duplicate name '{name}' also in {}", first.display());
            report.push(ValidationError::new(Rule::DuplicateName, document, message));
        }
    }

    fn check_links(
        &self,
        folder: &SkillFolder,
        document: &Path,
        content: &str,
        report: &mut ValidationReport,
    ) -> Result<(), String> {
        let root = containment::normalize(&folder.path)
            .map_err(|e| format!("Failed to resolve {}: {}", folder.path.display(), e))?;

        for link in links::relative_links(content, &self.config.excluded_link_prefixes) {
            let status = containment::check_link(&root, link)
                .map_err(|e| format!("Failed to resolve link '{link}' in {}: {e}", document.display()))?;

            match status {
                LinkStatus::Resolved(path) => {
                    log::debug!("link {link} -> {}", path.display());
                }
                LinkStatus::Escapes(_) => report.push(ValidationError::new(
                    Rule::LinkEscapes,
                    document,
                    format!("link escapes skill dir: {link}"),
                )),
                LinkStatus::Missing(_) => report.push(ValidationError::new(
                    Rule::MissingLinkTarget,
                    document,
                    format!("missing link target: {link}"),
                )),
            }
        }

        Ok(())
    }
}

/// Returns the immediate subdirectories of `skills_dir`, sorted by name.
///
/// Symbolic links to directories count as folders; plain files are ignored.
///
/// # Errors
///
/// Fails when the directory cannot be enumerated.
pub fn discover_skill_folders(skills_dir: &Path) -> Result<Vec<SkillFolder>, String> {
    let mut folders = Vec::new();

    for entry in WalkDir::new(skills_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.map_err(|e| format!("Failed to read {}: {}", skills_dir.display(), e))?;
        if !entry.path().is_dir() {
            continue;
        }
        folders.push(SkillFolder {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        });
    }

    Ok(folders)
}
