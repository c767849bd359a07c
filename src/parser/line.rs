//! G-code Line Model
//!
//! A line is an original text, a letter-to-value parameter map derived from
//! it, and an optional trailing comment. Re-deriving the map from the
//! original text is idempotent; tagging only ever fills in absent values.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Parameter letter carrying the height coordinate
pub const HEIGHT_LETTER: char = 'Z';
/// Parameter letter carrying the feed rate
pub const FEED_LETTER: char = 'F';

/// One `<Letter><signed decimal>` token in the command portion of a line
static PARAM_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([-+]?\d*\.?\d+)").expect("hard-coded pattern compiles"));

/// Motion command code at the start of a line
static G_COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G\d+").expect("hard-coded pattern compiles"));

/// Word-bounded height value, e.g. the `0.3` of `Z0.3`
static HEIGHT_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bZ(-?\d+(\.\d+)?)\b").expect("hard-coded pattern compiles"));

/// Word-bounded feed value, e.g. the `1500` of `F1500`
static FEED_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bF(-?\d+(\.\d+)?)\b").expect("hard-coded pattern compiles"));

/// A full feed token, e.g. `F1500`
static FEED_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"F-?\d+(\.\d+)?").expect("hard-coded pattern compiles"));

/// A full height token, e.g. `Z0.3`
static HEIGHT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Z-?\d+(\.\d+)?").expect("hard-coded pattern compiles"));

/// A feed token with its leading whitespace, for stripping
static FEED_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*F-?\d+(\.\d+)?").expect("hard-coded pattern compiles"));

/// A height token with its leading whitespace, for stripping
static HEIGHT_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*Z-?\d+(\.\d+)?").expect("hard-coded pattern compiles"));

/// A parsed G-code line
#[derive(Debug, Clone, PartialEq)]
pub struct GcodeLine {
    /// The raw source text the line was parsed from
    pub original: String,
    /// Letter-to-value map derived from the command portion; later duplicate
    /// letters on the same line overwrite earlier ones
    pub params: HashMap<char, f64>,
    /// Trailing comment including its leading `;`, if any
    pub comment: Option<String>,
}

impl GcodeLine {
    /// Parse a raw text line
    ///
    /// The portion after the first `;` becomes the comment; the portion
    /// before it is scanned for `<Letter><number>` tokens. Unparseable text
    /// yields an empty map, never an error; a numeric token that fails to
    /// parse is logged and skipped.
    pub fn parse(text: &str) -> Self {
        let (command_part, comment) = match text.split_once(';') {
            Some((before, after)) => (before, Some(format!(";{}", after.trim()))),
            None => (text, None),
        };

        let mut params = HashMap::new();
        for caps in PARAM_TOKEN_RE.captures_iter(command_part) {
            let letter = caps[1].chars().next().unwrap_or_default();
            match caps[2].parse::<f64>() {
                Ok(value) => {
                    params.insert(letter, value);
                }
                Err(err) => {
                    log::warn!("ignoring malformed value {:?} on {:?}: {}", &caps[2], text, err);
                }
            }
        }

        Self {
            original: text.to_string(),
            params,
            comment,
        }
    }

    /// Insert a height value unless the line already carries one
    pub fn tag_height(&mut self, z: f64) {
        self.params.entry(HEIGHT_LETTER).or_insert(z);
    }

    /// Insert a feed value unless the line already carries one
    pub fn tag_feed(&mut self, f: f64) {
        self.params.entry(FEED_LETTER).or_insert(f);
    }

    /// Explicit height value, if the line carries one
    pub fn height(&self) -> Option<f64> {
        self.params.get(&HEIGHT_LETTER).copied()
    }

    /// Explicit feed value, if the line carries one
    pub fn feed(&self) -> Option<f64> {
        self.params.get(&FEED_LETTER).copied()
    }
}

/// Extract the height value from a line, falling back to a carried default.
///
/// The whole raw line is scanned, comments included, matching what the
/// pipeline stages expect for last-known-height carry. A token that fails to
/// parse is logged and treated as absent.
pub fn extract_height(line: &str, default: f64) -> f64 {
    extract_value(&HEIGHT_VALUE_RE, line, default)
}

/// Extract the feed value from a line, falling back to a carried default
pub fn extract_feed(line: &str, default: f64) -> f64 {
    extract_value(&FEED_VALUE_RE, line, default)
}

fn extract_value(re: &Regex, line: &str, default: f64) -> f64 {
    let Some(caps) = re.captures(line) else {
        return default;
    };
    match caps[1].parse::<f64>() {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring malformed value {:?} on {:?}: {}", &caps[1], line, err);
            default
        }
    }
}

/// The motion command code at the start of a line, e.g. `G1`
pub fn extract_command(line: &str) -> Option<String> {
    G_COMMAND_RE
        .find(line.trim_start())
        .map(|m| m.as_str().to_string())
}

/// The full feed token on a line, e.g. `F1500`
pub fn feed_token(line: &str) -> Option<String> {
    FEED_TOKEN_RE.find(line).map(|m| m.as_str().to_string())
}

/// The full height token on a line, e.g. `Z0.3`
pub fn height_token(line: &str) -> Option<String> {
    HEIGHT_TOKEN_RE.find(line).map(|m| m.as_str().to_string())
}

/// Remove every feed token from a line
pub fn strip_feed_token(line: &str) -> String {
    FEED_STRIP_RE.replace_all(line, "").trim().to_string()
}

/// Remove every height token from a line
pub fn strip_height_token(line: &str) -> String {
    HEIGHT_STRIP_RE.replace_all(line, "").trim().to_string()
}
