// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use p8tokens_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use p8tokens_engine::SourceOverride;
use p8tokens_shared_kernel::Budget;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self> {
        let walk = walk_options_from_args(args)?;
        let budget = Budget::new(args.behavior.budget)?;

        ConfigBuilder::default()
            .walk(walk)
            .budget(budget)
            .strict(args.behavior.strict)
            .watch(args.behavior.watch)
            .watch_interval(Duration::from_secs(
                args.behavior.watch_interval.unwrap_or(1),
            ))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    let scan = &args.scan;

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(scan.jobs.unwrap_or_else(num_cpus::get))
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .extensions(scan.ext.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// 引数から設定を組み立て、`--stdin-name` があれば標準入力を読み込む
///
/// # Errors
/// Returns an error if the configuration is invalid or stdin cannot be read.
pub fn load(args: &Args) -> Result<Config> {
    let mut config = Config::try_from(args)?;

    if let Some(name) = &args.scan.stdin_name {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!("read {} bytes from stdin as {name}", bytes.len());
        config.overrides.push(SourceOverride::new(name.as_str(), text));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "p8tokens",
            "a",
            "b",
            "--ext",
            "p8,lua",
            "--max-depth",
            "2",
            "--budget",
            "100",
            "--strict",
            "-j",
            "3",
        ])
        .unwrap();

        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.walk.roots, [PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(config.walk.extensions, ["p8", "lua"]);
        assert_eq!(config.walk.max_depth, Some(2));
        assert_eq!(config.walk.threads, 3);
        assert_eq!(config.budget.limit(), 100);
        assert!(config.strict);
        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_default_root_is_current_dir() {
        let args = Args::try_parse_from(["p8tokens"]).unwrap();
        let config = Config::try_from(&args).unwrap();
        assert_eq!(config.walk.roots, [PathBuf::from(".")]);
        assert!(config.walk.git_ignore);
    }
}
