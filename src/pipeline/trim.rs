//! Range Trimmer
//!
//! Clips the motion block to the configured height window: a forward sweep
//! drops the leading run of lines below the lower bound, a backward sweep
//! drops the trailing run above the upper bound.
//!
//! Known limitation, preserved deliberately: only one leading and one
//! trailing excursion is removed. A toolpath that dips outside the window
//! mid-block keeps the out-of-range segment, because each sweep stops
//! trimming permanently at the first in-bounds line.

use crate::parser::line;
use crate::profile::Profile;

/// Trim the motion block to `[bottom_z, top_z]`.
///
/// A line's resolved height is its explicit height token when present, else
/// the last known height; the carry is updated on every line, motion or not.
pub fn trim_to_bounds(lines: Vec<String>, profile: &Profile) -> Vec<String> {
    // Forward sweep: leading run below the lower bound
    let mut last_height = f64::NEG_INFINITY;
    let mut trimming = true;
    let mut forward = Vec::with_capacity(lines.len());
    for text in lines {
        last_height = line::extract_height(&text, last_height);
        if trimming && last_height < profile.bottom_z {
            continue;
        }
        trimming = false;
        forward.push(text);
    }

    // Backward sweep: trailing run above the upper bound
    let mut last_height = f64::INFINITY;
    let mut trimming = true;
    let mut backward = Vec::with_capacity(forward.len());
    for text in forward.into_iter().rev() {
        last_height = line::extract_height(&text, last_height);
        if trimming && last_height > profile.top_z {
            continue;
        }
        trimming = false;
        backward.push(text);
    }
    backward.reverse();
    backward
}
