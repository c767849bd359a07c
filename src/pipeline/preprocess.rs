//! Preprocessor
//!
//! Two independent line-level passes over the motion block: vendor
//! initialization scaffolding is deleted, and extrusion-amount tokens are
//! stripped so the reversed toolpath never extrudes.

use regex::Regex;
use std::sync::LazyLock;

/// First line of vendor initialization scaffolding
pub const INIT_START_MARKER: &str = ";Initilization Start";
/// Last line of vendor initialization scaffolding
pub const INIT_END_MARKER: &str = ";Initilization End";
/// Comment prepended when an initialization block was removed
const INIT_REMOVED_NOTE: &str = "; Removed Cura initialization block";

/// An extrusion token with its optional leading space, e.g. ` E12.4`
static EXTRUSION_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?E-?\d+(\.\d+)?").expect("hard-coded pattern compiles"));

/// Delete every line between the initialization markers, both inclusive.
///
/// When at least one block was removed, a note is prepended so the output
/// records why the scaffolding is gone.
pub fn strip_init_block(lines: Vec<String>) -> Vec<String> {
    let mut inside_block = false;
    let mut removed_any = false;
    let mut cleaned = Vec::with_capacity(lines.len());

    for line in lines {
        if line.contains(INIT_START_MARKER) {
            inside_block = true;
            removed_any = true;
            continue;
        }
        if line.contains(INIT_END_MARKER) {
            inside_block = false;
            continue;
        }
        if !inside_block {
            cleaned.push(line);
        }
    }

    if removed_any {
        cleaned.insert(0, INIT_REMOVED_NOTE.to_string());
    }

    cleaned
}

/// Strip extrusion tokens from every line, dropping lines that end up blank
pub fn strip_extrusion(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| {
            let cleaned = EXTRUSION_STRIP_RE.replace_all(&line, "").into_owned();
            if cleaned.trim().is_empty() {
                None
            } else {
                Some(cleaned)
            }
        })
        .collect()
}
