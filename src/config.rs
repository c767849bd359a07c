//! Configuration management for the rewind tool.
//!
//! Handles:
//! - Command-line argument parsing
//! - Profile file discovery

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the rewind tool
#[derive(Debug, Parser)]
#[command(name = "grewind")]
#[command(about = "Rewrites sliced G-code so the toolpath executes in reverse order")]
#[command(version)]
pub struct Args {
    /// Directory scanned for *.gcode input files
    #[arg(long, default_value = "input", help = "Directory containing input G-code files")]
    pub input_dir: PathBuf,

    /// Directory the reversed files are written to
    #[arg(long, default_value = "output", help = "Directory for reversed G-code files")]
    pub output_dir: PathBuf,

    /// Explicit machine profile file
    #[arg(long, help = "Machine profile TOML file")]
    pub profile: Option<PathBuf>,

    /// Log level for the tool
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for input files
    pub input_dir: PathBuf,
    /// Directory the outputs are written to
    pub output_dir: PathBuf,
    /// Profile file explicitly set via command line
    pub cli_profile: Option<PathBuf>,
    /// Candidate profile locations, highest priority first
    pub profile_paths: Vec<PathBuf>,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine profile candidates
        let mut profile_paths = Vec::new();

        // Add user-specified file if provided
        if let Some(custom_profile) = args.profile.clone() {
            profile_paths.push(custom_profile);
        }

        // Add default user config location
        if let Some(config_dir) = dirs::config_dir() {
            profile_paths.push(config_dir.join("grewind").join("profile.toml"));
        }

        Ok(Config {
            input_dir: args.input_dir,
            output_dir: args.output_dir,
            cli_profile: args.profile,
            profile_paths,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_profile_has_highest_priority() {
        let args = Args {
            input_dir: PathBuf::from("in"),
            output_dir: PathBuf::from("out"),
            profile: Some(PathBuf::from("/tmp/custom.toml")),
            log_level: "debug".to_string(),
        };

        let config = Config::from_args(args).expect("config");
        assert_eq!(config.profile_paths[0], PathBuf::from("/tmp/custom.toml"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn defaults_without_profile() {
        let args = Args {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            profile: None,
            log_level: "info".to_string(),
        };

        let config = Config::from_args(args).expect("config");
        assert!(config.cli_profile.is_none());
        assert_eq!(config.input_dir, PathBuf::from("input"));
    }
}
