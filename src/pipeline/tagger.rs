//! State Tagger
//!
//! Single forward pass over the motion block carrying the current height and
//! feed rate. Motion lines are rewritten into canonical token order with any
//! implicit height/feed filled in from the carried state, so every motion
//! line downstream has an explicit feed and height token.

use regex::Regex;
use std::sync::LazyLock;

use crate::parser::line;
use crate::profile::Profile;

/// Motion command code anywhere in the command portion
static G_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(G\d+)").expect("hard-coded pattern compiles"));

/// Command code or feed token, for stripping before re-emission
static G_OR_FEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(G\d+|F-?\d+(\.\d+)?)").expect("hard-coded pattern compiles"));

/// Rewrite each motion line into canonical form:
/// `<code> <feed> <remaining coordinates> [<height from carry>] [<comment>]`.
///
/// Carried height and feed both start at zero and are updated from every
/// line before it is rewritten, comment lines included.
pub fn tag_motion_block(lines: Vec<String>, profile: &Profile) -> Vec<String> {
    let feed_letter = profile
        .feed_rate_letters
        .first()
        .cloned()
        .unwrap_or_else(|| line::FEED_LETTER.to_string());

    let mut current_height = 0.0;
    let mut current_feed = 0.0;

    lines
        .into_iter()
        .map(|text| {
            current_height = line::extract_height(&text, current_height);
            current_feed = line::extract_feed(&text, current_feed);

            let (command_part, comment_part) = match text.split_once(';') {
                Some((before, after)) => (before.trim(), Some(format!(";{}", after.trim()))),
                None => (text.trim(), None),
            };

            let is_motion = profile
                .motion_commands
                .iter()
                .any(|cmd| command_part.starts_with(cmd.as_str()));
            if !is_motion {
                return text;
            }

            let mut rewritten = String::new();

            if let Some(code) = G_CODE_RE.find(command_part) {
                rewritten.push_str(code.as_str());
            }

            // Feed second: keep an explicit token, otherwise synthesize one
            // from the carried feed rate
            let has_feed_letter = profile
                .feed_rate_letters
                .iter()
                .any(|letter| command_part.contains(letter.as_str()));
            if has_feed_letter {
                if let Some(token) = line::feed_token(command_part) {
                    rewritten.push(' ');
                    rewritten.push_str(&token);
                }
            } else {
                rewritten.push_str(&format!(" {}{}", feed_letter, current_feed));
            }

            // Remaining coordinate tokens, with the code and feed stripped
            // out and the whitespace they leave behind collapsed
            let stripped = G_OR_FEED_RE.replace_all(command_part, "");
            let remaining = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
            if !remaining.is_empty() {
                rewritten.push(' ');
                rewritten.push_str(&remaining);
            }

            // Height last, synthesized from carry when absent
            if !rewritten.contains(line::HEIGHT_LETTER) {
                rewritten.push_str(&format!(" {}{}", line::HEIGHT_LETTER, current_height));
            }

            if let Some(comment) = comment_part {
                rewritten.push(' ');
                rewritten.push_str(&comment);
            }

            rewritten
        })
        .collect()
}
