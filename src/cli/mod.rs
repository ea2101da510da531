pub mod commands;
pub mod dispatch;
pub mod error;
pub mod flags;
pub mod logging;
pub mod output;
pub mod progress;
pub mod token;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Config;
use commands::Context;
use dispatch::Invocation;

#[derive(Parser, Debug)]
#[command(
    name = "repotoggle",
    version,
    about = "Inspect and toggle settings of your GitHub repositories",
    override_usage = "repotoggle [OPTIONS] <command> [subcommand] [--flags] [repositories...]"
)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the repository snapshot
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command (status, update, alter, help) followed by its subcommand,
    /// `--key=value` flags and repository names
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn load_config(&self) -> Config {
        let mut config = self
            .config
            .clone()
            .or_else(Config::default_path)
            .map(|path| Config::load(&path))
            .unwrap_or_default();

        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        config
    }
}

pub async fn run(cli: &Cli) -> Result<()> {
    let config = cli.load_config();
    let ctx = Context::from_config(&config);
    let invocation = Invocation::from_args(cli.args.as_slice());
    dispatch::dispatch(&invocation, &ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_raw_arguments_after_command_are_not_parsed_by_clap() {
        let cli = Cli::parse_from([
            "repotoggle",
            "-v",
            "alter",
            "auto_delete_head",
            "--enabled",
            "--count=2,x=\"y\"",
            "repo-a",
        ]);
        assert!(cli.verbose);
        assert_eq!(
            cli.args,
            vec!["alter", "auto_delete_head", "--enabled", "--count=2,x=\"y\"", "repo-a"]
        );
    }

    #[test]
    fn test_no_command_is_accepted() {
        let cli = Cli::parse_from(["repotoggle"]);
        assert!(cli.args.is_empty());
    }

    #[test]
    fn test_data_dir_overrides_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yml");
        fs::write(&config_path, "data_dir: /from/config\nper_page: 10\n").unwrap();

        let cli = Cli::parse_from([
            "repotoggle",
            "--config",
            config_path.to_str().unwrap(),
            "--data-dir",
            "/from/cli",
            "status",
        ]);
        let config = cli.load_config();
        assert_eq!(config.data_dir(), PathBuf::from("/from/cli"));
        assert_eq!(config.per_page(), 10);
    }
}
