//! Reverser & Safety Injector
//!
//! Computes a safe clearance height from the trimmed motion block, appends
//! the corresponding lift command to the preamble, strips end-of-program
//! marker lines and reverses the motion block.

use crate::parser::line;
use crate::profile::Profile;

/// End-of-program marker; any motion-block line carrying it is dropped
pub const END_MARKER: &str = ";End G-code";

/// Feed rate used for the injected safety lift
const SAFE_LIFT_FEED: &str = "F3000";

/// Append a lift to the safe clearance height to the preamble.
///
/// The safe height is the maximum height seen in the motion block, floored
/// at the configured lower bound, plus the clearance offset.
pub fn inject_safe_lift(preamble: &mut Vec<String>, motion: &[String], profile: &Profile) {
    let mut max_height = profile.bottom_z;
    for text in motion {
        let height = line::extract_height(text, profile.bottom_z);
        if height > max_height {
            max_height = height;
        }
    }

    let safe_height = max_height + profile.safe_z_offset;
    log::debug!("injecting safety lift to Z{safe_height}");
    preamble.push(format!(
        "G1 {}{} {} ; Raise Z to safe height",
        line::HEIGHT_LETTER,
        safe_height,
        SAFE_LIFT_FEED
    ));
}

/// Drop every line containing the end-of-program marker
pub fn strip_end_marker(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|text| !text.contains(END_MARKER))
        .collect()
}
