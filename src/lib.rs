//! # skill-lint
//!
//! Structural linter for a directory of agent skills.
//!
//! A skills directory holds one folder per skill. Each folder carries a
//! `SKILL.md` whose frontmatter declares the skill's `name` and whose body
//! links to resources stored next to it. `skill-lint` checks that every
//! folder is internally consistent without touching the network:
//!
//! - the document exists and opens with a `---` frontmatter block,
//! - `name` is present, equals the folder name, matches `^[a-z0-9-]{1,64}$`,
//!   and is unique across all folders,
//! - every relative link resolves to an existing file inside the folder.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skill_lint::{config::Config, output, validate};
//!
//! let root = Path::new(".");
//! let config = Config::load(root, None).expect("failed to load config");
//! let report = validate::run_validation(root, config).expect("validation aborted");
//!
//! print!("{}", output::format_report(&report, output::OutputFormat::Pretty));
//! std::process::exit(report.verdict().exit_code());
//! ```
//!
//! ## Architecture
//!
//! 1. **[`frontmatter`]** — parse the flat `key: value` header block.
//! 2. **[`links`]** — extract local relative link targets from the body.
//! 3. **[`containment`]** — resolve a target and keep it inside its folder.
//! 4. **[`validate`]** — run the checks over every skill folder in order.
//! 5. **[`finding`]** — errors and the aggregated [`finding::ValidationReport`].
//! 6. **[`output`]** — render the report as text, JSON, or SARIF.
//!
//! Settings live in [`config`].

pub mod config;
pub mod containment;
pub mod finding;
pub mod frontmatter;
pub mod links;
pub mod output;
pub mod validate;
