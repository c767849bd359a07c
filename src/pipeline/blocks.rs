//! Block Separator
//!
//! Splits a file into a non-motion preamble, one contiguous motion block and
//! a trailing footer, based on the motion command and coordinate vocabularies
//! of the machine profile.

use crate::profile::Profile;

/// Per-layer bookkeeping comment that belongs with the motion data
pub const LAYER_ZERO_MARKER: &str = ";LAYER:0";

/// The three sections of a G-code file
#[derive(Debug, Clone, PartialEq)]
pub struct Blocks {
    pub preamble: Vec<String>,
    pub motion: Vec<String>,
    pub footer: Vec<String>,
}

/// Split a file into preamble / motion block / footer.
///
/// One linear scan finds the first and last line that both start with a
/// configured motion command and carry at least one configured coordinate
/// letter; the motion block is the inclusive span between them. A file with
/// no qualifying line becomes all preamble.
pub fn separate_blocks(lines: Vec<String>, profile: &Profile) -> Blocks {
    let mut first_motion = None;
    let mut last_motion = None;

    for (index, line) in lines.iter().enumerate() {
        if is_motion_line(line, profile) {
            if first_motion.is_none() {
                first_motion = Some(index);
            }
            last_motion = Some(index);
        }
    }

    let (Some(first), Some(last)) = (first_motion, last_motion) else {
        return Blocks {
            preamble: lines,
            motion: Vec::new(),
            footer: Vec::new(),
        };
    };

    let mut rest = lines;
    let footer = rest.split_off(last + 1);
    let mut motion = rest.split_off(first);
    let mut preamble = rest;

    // The last layer-zero marker in the preamble anchors per-layer
    // bookkeeping; move it to the front of the motion data it describes.
    for index in (0..preamble.len()).rev() {
        if preamble[index].starts_with(LAYER_ZERO_MARKER) {
            let marker = preamble.remove(index);
            motion.insert(0, marker);
            break;
        }
    }

    Blocks {
        preamble,
        motion,
        footer,
    }
}

/// A line qualifies as motion iff a configured motion command prefixes the
/// trimmed line and a configured coordinate letter appears anywhere in it
fn is_motion_line(line: &str, profile: &Profile) -> bool {
    let trimmed = line.trim();
    let has_motion = profile
        .motion_commands
        .iter()
        .any(|cmd| trimmed.starts_with(cmd.as_str()));
    let has_coordinate = profile
        .coordinate_letters
        .iter()
        .any(|letter| line.contains(letter.as_str()));

    has_motion && has_coordinate
}
