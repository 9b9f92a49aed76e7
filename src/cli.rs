//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::config::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pressroom page-generation CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: pressroom.toml)
    #[arg(short = 'C', long, default_value = "pressroom.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate page descriptors and the json feed from the content graph
    Build {
        /// Deployment mode (overrides [build] mode)
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// enable json feed generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        feed: Option<bool>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_defaults() {
        let cli = Cli::try_parse_from(["pressroom", "build"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("pressroom.toml"));
        assert!(cli.root.is_none());

        let Commands::Build { mode, output, feed } = cli.command;
        assert!(mode.is_none());
        assert!(output.is_none());
        assert!(feed.is_none());
    }

    #[test]
    fn test_parse_mode_values() {
        for (raw, expected) in [
            ("production", Mode::Production),
            ("staging", Mode::Staging),
            ("development", Mode::Development),
        ] {
            let cli = Cli::try_parse_from(["pressroom", "build", "--mode", raw]).unwrap();
            let Commands::Build { mode, .. } = cli.command;
            assert_eq!(mode, Some(expected));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["pressroom", "build", "--mode", "qa"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_root_and_output() {
        let cli = Cli::try_parse_from([
            "pressroom", "--root", "/srv/blog", "build", "--output", "dist",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/blog")));

        let Commands::Build { output, .. } = cli.command;
        assert_eq!(output, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_parse_feed_flag_forms() {
        let cli = Cli::try_parse_from(["pressroom", "build", "--feed"]).unwrap();
        let Commands::Build { feed, .. } = cli.command;
        assert_eq!(feed, Some(true));

        let cli = Cli::try_parse_from(["pressroom", "build", "--feed", "false"]).unwrap();
        let Commands::Build { feed, .. } = cli.command;
        assert_eq!(feed, Some(false));
    }
}
