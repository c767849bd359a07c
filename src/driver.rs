//! Per-file Driver
//!
//! Enumerates input files and runs the pipeline once per file. Files are
//! processed independently: a failure is reported and the run continues with
//! the next file, and a failed file leaves no partial output behind.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::pipeline;
use crate::profile::Profile;

/// Prefix prepended to each input file name for its output
pub const OUTPUT_PREFIX: &str = "reversed_";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Process every G-code file in the input directory
pub fn run(config: &Config, profile: &Profile) -> Result<()> {
    fs::create_dir_all(&config.input_dir).with_context(|| {
        format!("failed to create input directory {}", config.input_dir.display())
    })?;
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("failed to create output directory {}", config.output_dir.display())
    })?;

    let mut inputs = gcode_files(&config.input_dir)?;
    if inputs.is_empty() {
        log::warn!("no G-code files found in {}", config.input_dir.display());
        return Ok(());
    }
    inputs.sort();

    for path in inputs {
        match process_file(&path, profile, &config.output_dir) {
            Ok(output) => log::info!("processed {} -> {}", path.display(), output.display()),
            Err(err) => log::error!("failed to process {}: {:#}", path.display(), err),
        }
    }

    Ok(())
}

/// List the `*.gcode` files in a directory (extension matched case-insensitively)
pub fn gcode_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read input directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_gcode = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gcode"));
        if is_gcode && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Rewind one file and write `<prefix><name>` into the output directory.
///
/// The whole result is written in one call only after the transform has
/// finished, so a failure never leaves a partial output file.
pub fn process_file(path: &Path, profile: &Profile, output_dir: &Path) -> Result<PathBuf> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let result = pipeline::rewind_document(lines, profile);

    let name = path
        .file_name()
        .with_context(|| format!("input path {} has no file name", path.display()))?;
    let output = output_dir.join(format!("{}{}", OUTPUT_PREFIX, name.to_string_lossy()));

    let mut rendered = String::with_capacity(text.len());
    for line in &result {
        rendered.push_str(line);
        rendered.push_str(LINE_ENDING);
    }
    fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(output)
}
