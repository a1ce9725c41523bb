//! Validation settings.
//!
//! The linter needs no configuration at all: [`Config::default`] encodes the
//! standard layout (`skills/<folder>/SKILL.md`), the skill-name pattern, and
//! the link schemes that are never treated as local files. A `skill-lint.toml`
//! placed in the root directory can override any of these.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skill_lint::config::Config;
//!
//! let config = Config::load(Path::new("."), None).expect("failed to load config");
//! assert_eq!(config.skill_file, "SKILL.md");
//! ```

use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "skill-lint.toml";

/// Default allowed shape of a skill name.
pub const DEFAULT_NAME_PATTERN: &str = "^[a-z0-9-]{1,64}$";

/// Link prefixes that mark anchors, web URLs, and non-file schemes.
pub const DEFAULT_EXCLUDED_LINK_PREFIXES: &[&str] =
    &["#", "http://", "https://", "mailto:", "tel:", "//"];

/// Immutable settings for one validation run.
///
/// # Examples
///
/// ```toml
/// skills_dir = "skills"
/// skill_file = "SKILL.md"
/// name_pattern = "^[a-z0-9-]{1,64}$"
/// excluded_link_prefixes = ["#", "http://", "https://", "mailto:", "tel:", "//"]
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory under the root whose immediate subdirectories are skills.
    pub skills_dir: String,
    /// Document every skill folder must contain.
    pub skill_file: String,
    /// Regular expression a skill `name` must match.
    pub name_pattern: String,
    /// Link targets starting with any of these are not local files.
    pub excluded_link_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            skills_dir: "skills".to_string(),
            skill_file: "SKILL.md".to_string(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            excluded_link_prefixes: DEFAULT_EXCLUDED_LINK_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Loads configuration for the given root directory.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`CONFIG_FILE_NAME`] inside `root`.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, or the
    /// selected file cannot be read or parsed.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Config, String> {
        let config_path: Option<PathBuf> = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => return Err(format!("Config file not found: {}", p.display())),
            None => {
                let default_path = root.join(CONFIG_FILE_NAME);
                default_path.is_file().then_some(default_path)
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                let config: Config = toml::from_str(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
                log::info!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Compiles [`name_pattern`](Config::name_pattern).
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the pattern is not a valid regular expression.
    pub fn compile_name_pattern(&self) -> Result<regex::Regex, String> {
        regex::Regex::new(&self.name_pattern)
            .map_err(|e| format!("Invalid name_pattern '{}': {}", self.name_pattern, e))
    }
}
