//! Rewind Pipeline
//!
//! The motion-block extraction and rewrite pipeline: separate the file into
//! blocks, normalize the motion block, clip it to the height window, drop
//! locally redundant state tokens, then reverse it behind an injected safety
//! lift. Each stage fully consumes and produces the block before the next
//! begins; nothing here performs I/O or raises an error.

pub mod blocks;
pub mod preprocess;
pub mod redundancy;
pub mod reverse;
pub mod tagger;
pub mod trim;

pub use blocks::{separate_blocks, Blocks};

use crate::profile::Profile;

/// Run the full pipeline over one file's lines.
///
/// Output is the preamble (with the safety lift appended) followed by the
/// reversed motion block; the footer is read only to be discarded.
pub fn rewind_document(lines: Vec<String>, profile: &Profile) -> Vec<String> {
    let Blocks {
        mut preamble,
        motion,
        footer,
    } = blocks::separate_blocks(lines, profile);
    if !footer.is_empty() {
        log::debug!("discarding {} footer line(s)", footer.len());
    }

    let motion = preprocess::strip_init_block(motion);
    let motion = preprocess::strip_extrusion(motion);
    let motion = tagger::tag_motion_block(motion, profile);
    let motion = trim::trim_to_bounds(motion, profile);

    // The safe height scans the trimmed block while its height tokens are
    // still intact, before redundancy elimination thins them out
    reverse::inject_safe_lift(&mut preamble, &motion, profile);

    let motion = redundancy::strip_redundant_feed_rates(motion, profile);
    let motion = redundancy::strip_redundant_heights(motion);
    let mut motion = reverse::strip_end_marker(motion);
    motion.reverse();

    preamble.extend(motion);
    preamble
}
