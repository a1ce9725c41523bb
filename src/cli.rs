use clap::Parser;
use skill_lint::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-lint",
    version,
    about = "Structural linter for skill directories"
)]
pub struct Cli {
    /// Directory containing `skills/` (defaults to the directory above the
    /// one holding this executable)
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
