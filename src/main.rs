mod cli;

use clap::Parser;
use cli::Cli;
use skill_lint::{config::Config, output, validate};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = match cli.root {
        Some(root) => root,
        None => installation_root().unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }),
    };
    log::info!("validating skills under {}", root.display());

    let config = Config::load(&root, cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let report = validate::run_validation(&root, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    print!("{}", output::format_report(&report, cli.format));
    std::process::exit(report.verdict().exit_code());
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Returns the directory one level above the executable's own directory,
/// e.g. `<root>` for an executable installed at `<root>/bin/skill-lint`.
fn installation_root() -> Result<PathBuf, String> {
    let exe = std::env::current_exe()
        .and_then(std::fs::canonicalize)
        .map_err(|e| format!("Failed to locate executable: {e}"))?;

    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| format!("No installation root above {}", exe.display()))
}
