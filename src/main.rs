//! logcell - Entry Point

use clap::Parser;
use logcell::model::{sample_records, AppError, LogLevel, LogRecord};
use std::path::PathBuf;
use tracing::info;

/// logcell - browse log messages in fixed-height cells
#[derive(Parser, Debug)]
#[command(name = "logcell")]
#[command(version)]
#[command(about = "Browse log messages in fixed-height cells, expanding truncated ones on demand")]
pub struct Args {
    /// Messages to show, one cell each (a built-in sample set if none are given)
    pub messages: Vec<String>,

    /// Level of the given messages (debug, info, warning, error, critical)
    #[arg(long, default_value = "info")]
    pub level: LogLevel,

    /// Height of each cell in rows (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_height: Option<u16>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Records to display: the given messages, or the samples.
    fn records(&self) -> Vec<LogRecord> {
        if self.messages.is_empty() {
            return sample_records();
        }
        self.messages
            .iter()
            .map(|message| LogRecord::new(self.level, message.replace("\\n", "\n")))
            .collect()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = logcell::config::load_config_with_precedence(args.config.clone())?;
        let merged = logcell::config::merge_config(config_file);
        let with_env = logcell::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let no_color_override = if args.no_color { Some(true) } else { None };
        logcell::config::apply_cli_overrides(with_env, args.cell_height, no_color_override)
    };

    logcell::logging::init(&config.log_file_path)?;

    let records = args.records();
    info!(
        config = ?config,
        records = records.len(),
        "Configuration loaded and resolved"
    );

    logcell::view::run(records, &config)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["logcell", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["logcell", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["logcell"]);
        assert!(args.messages.is_empty());
        assert_eq!(args.level, LogLevel::Info);
        assert_eq!(args.cell_height, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_no_messages_uses_samples() {
        let args = Args::parse_from(["logcell"]);
        assert_eq!(args.records(), sample_records());
    }

    #[test]
    fn test_messages_become_records_with_level() {
        let args = Args::parse_from(["logcell", "--level", "error", "disk full", "retrying"]);
        let records = args.records();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message(), "disk full");
        assert!(records.iter().all(|r| r.level() == LogLevel::Error));
    }

    #[test]
    fn test_escaped_newlines_are_expanded() {
        let args = Args::parse_from(["logcell", "a\\nb"]);
        assert_eq!(args.records()[0].message(), "a\nb");
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let args = Args::parse_from(["logcell", "--level", "WARNING"]);
        assert_eq!(args.level, LogLevel::Warning);
    }

    #[test]
    fn test_unknown_level_rejects() {
        let result = Args::try_parse_from(["logcell", "--level", "loud"]);
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cell_height_long_flag() {
        let args = Args::parse_from(["logcell", "--cell-height", "4"]);
        assert_eq!(args.cell_height, Some(4));
    }

    #[test]
    fn test_cell_height_rejects_zero() {
        let result = Args::try_parse_from(["logcell", "--cell-height", "0"]);
        assert_eq!(result.unwrap_err().kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["logcell", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["logcell", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cell_height_flows_through_config_precedence_chain() {
        use logcell::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            cell_height: Some(5),
            no_color: None,
            log_file_path: None,
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.cell_height, 5, "Config file should override default");

        let with_cli = apply_cli_overrides(merged, Some(3), None);
        assert_eq!(with_cli.cell_height, 3, "CLI should override all other sources");
    }
}
