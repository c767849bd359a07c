//! Machine Profiles
//!
//! A profile describes one machine: its travel limits, the height window to
//! keep, and the command/parameter vocabularies the pipeline matches against.
//! Profiles are TOML files; a default profile is embedded in the binary.

pub mod schema;

pub use schema::{Profile, ProfileFile};

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;

/// Embedded default profile, used when no profile file is found
const EMBEDDED_DEFAULT: &str = include_str!("../../resources/profiles/default.toml");

/// Load the effective profile for a run.
///
/// Candidates from the configuration are tried in priority order; a candidate
/// that exists but fails to parse is an error (the only fatal error class in
/// the tool). When no candidate exists, the embedded default is used.
pub fn load_profile(config: &Config) -> Result<Profile> {
    for path in &config.profile_paths {
        if path.is_file() {
            return load_profile_file(path);
        }
        // An explicitly requested profile must exist
        if config.cli_profile.as_deref() == Some(path.as_path()) {
            anyhow::bail!("profile file not found: {}", path.display());
        }
    }

    log::debug!("no profile file found, using embedded default");
    embedded_default()
}

/// Load a profile from a specific TOML file
pub fn load_profile_file(path: &Path) -> Result<Profile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let file: ProfileFile = toml::from_str(&text)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    log::info!("loaded profile from {}", path.display());
    Ok(Profile::from(file))
}

/// Parse the profile embedded in the binary
pub fn embedded_default() -> Result<Profile> {
    let file: ProfileFile =
        toml::from_str(EMBEDDED_DEFAULT).context("embedded default profile is invalid")?;
    Ok(Profile::from(file))
}
