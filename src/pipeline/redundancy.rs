//! Redundancy Eliminator
//!
//! Two independent backward sweeps over the tagged motion block. A feed or
//! height token that is unchanged from the nearest following occurrence on a
//! motion line is dropped, so the reversed program only restates state when
//! it actually changes. Tokens are compared as text (`F3000` vs `F3000`),
//! not as parsed numbers.

use crate::parser::line;
use crate::profile::Profile;

/// Drop feed tokens that repeat the nearest following (motion code, feed)
/// pair. Pure-comment lines are skipped; a command outside the configured
/// motion vocabulary resets the tracked state.
pub fn strip_redundant_feed_rates(mut lines: Vec<String>, profile: &Profile) -> Vec<String> {
    let mut last_code: Option<String> = None;
    let mut last_feed: Option<String> = None;

    for index in (0..lines.len()).rev() {
        if lines[index].trim_start().starts_with(';') {
            continue;
        }

        let current_code = line::extract_command(&lines[index]);
        let current_feed = line::feed_token(&lines[index]);

        match current_code {
            Some(code) if profile.is_motion_command(&code) => {
                if last_code.as_deref() == Some(code.as_str())
                    && current_feed.is_some()
                    && current_feed == last_feed
                {
                    lines[index] = line::strip_feed_token(&lines[index]);
                } else {
                    last_code = Some(code);
                    last_feed = current_feed;
                }
            }
            _ => {
                last_code = None;
                last_feed = None;
            }
        }
    }

    lines
}

/// Drop height tokens that repeat the nearest following one.
///
/// Lines without a height letter are skipped without resetting the tracked
/// state; a candidate that carries the letter but no parseable token resets
/// it.
pub fn strip_redundant_heights(mut lines: Vec<String>) -> Vec<String> {
    let mut last_height: Option<String> = None;

    for index in (0..lines.len()).rev() {
        let text = &lines[index];
        if text.trim_start().starts_with(';') || !text.contains(line::HEIGHT_LETTER) {
            continue;
        }

        match line::height_token(text) {
            Some(token) => {
                if last_height.as_deref() == Some(token.as_str()) {
                    lines[index] = line::strip_height_token(&lines[index]);
                } else {
                    last_height = Some(token);
                }
            }
            None => {
                last_height = None;
            }
        }
    }

    lines
}
