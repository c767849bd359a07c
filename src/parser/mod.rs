//! G-code Parser
//!
//! Line-oriented parsing of G-code into a parameter map, plus the token
//! extraction helpers the rewrite pipeline works with.

pub mod line;

pub use line::{GcodeLine, FEED_LETTER, HEIGHT_LETTER};

/// Parse a single line of G-code into structured data
///
/// This is the main entry point for parsing. It splits off the comment and
/// scans the command portion for `<Letter><number>` tokens.
pub fn parse_line(text: &str) -> GcodeLine {
    GcodeLine::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_command() {
        let line = parse_line("G1 X10 Y20");

        assert_eq!(line.params.get(&'G'), Some(&1.0));
        assert_eq!(line.params.get(&'X'), Some(&10.0));
        assert_eq!(line.params.get(&'Y'), Some(&20.0));
        assert!(line.comment.is_none());
    }

    #[test]
    fn parse_with_comment() {
        let line = parse_line("G1 X10 ; move to X10");

        assert_eq!(line.params.get(&'X'), Some(&10.0));
        assert_eq!(line.comment.as_deref(), Some(";move to X10"));
    }

    #[test]
    fn parse_comment_only() {
        let line = parse_line("; this is a comment");

        assert!(line.params.is_empty());
        assert_eq!(line.comment.as_deref(), Some(";this is a comment"));
    }

    #[test]
    fn parse_unparseable_text_yields_empty_map() {
        let line = parse_line("not gcode at all");
        assert!(line.params.is_empty());
    }
}
