//! Maps one input line to the frame it should produce.
//!
//! Two literal prefixes are reserved.  Everything else is a chat message:
//!
//! | line            | frame                    |
//! |-----------------|--------------------------|
//! | `/name Alice`   | `Name("Alice")`          |
//! | `/tag dev`      | `Tag("dev")`             |
//! | `hello there`   | `Message("hello there")` |
//! | `/name`         | `Message("/name")`       |
//!
//! The prefixes include the trailing space, so a bare `/name` is a message.

use crate::protocol::frame::{Frame, Tag};

/// Prefix that turns a line into a set-name command.
pub const NAME_PREFIX: &[u8] = b"/name ";

/// Prefix that turns a line into a set-tag command.
pub const TAG_PREFIX: &[u8] = b"/tag ";

/// Classifies a newline-stripped input line.
///
/// Prefixes are checked in order (`/name `, then `/tag `); the first match
/// wins and the remainder of the line becomes the argument.
pub fn classify_line(line: &[u8]) -> Frame {
    if let Some(name) = line.strip_prefix(NAME_PREFIX) {
        Frame::new(Tag::Name, name)
    } else if let Some(tag) = line.strip_prefix(TAG_PREFIX) {
        Frame::new(Tag::Tag, tag)
    } else {
        Frame::new(Tag::Message, line)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_prefix_produces_name_frame() {
        assert_eq!(classify_line(b"/name Alice"), Frame::new(Tag::Name, "Alice"));
    }

    #[test]
    fn test_tag_prefix_produces_tag_frame() {
        assert_eq!(classify_line(b"/tag dev"), Frame::new(Tag::Tag, "dev"));
    }

    #[test]
    fn test_plain_line_produces_message_frame() {
        assert_eq!(
            classify_line(b"hello there"),
            Frame::new(Tag::Message, "hello there")
        );
    }

    #[test]
    fn test_bare_name_without_space_is_message() {
        assert_eq!(classify_line(b"/name"), Frame::new(Tag::Message, "/name"));
    }

    #[test]
    fn test_bare_tag_without_space_is_message() {
        assert_eq!(classify_line(b"/tag"), Frame::new(Tag::Message, "/tag"));
    }

    #[test]
    fn test_name_prefix_with_empty_remainder_is_empty_name() {
        assert_eq!(classify_line(b"/name "), Frame::new(Tag::Name, ""));
    }

    #[test]
    fn test_remainder_keeps_inner_and_trailing_spaces() {
        // Only the prefix is stripped; the argument is taken verbatim.
        assert_eq!(
            classify_line(b"/name  Bob Smith "),
            Frame::new(Tag::Name, " Bob Smith ")
        );
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert_eq!(
            classify_line(b"/NAME Alice"),
            Frame::new(Tag::Message, "/NAME Alice")
        );
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        assert_eq!(
            classify_line(b" /tag dev"),
            Frame::new(Tag::Message, " /tag dev")
        );
    }

    #[test]
    fn test_name_checked_before_tag() {
        // "/name /tag x" is a name change whose argument happens to look like a command.
        assert_eq!(
            classify_line(b"/name /tag x"),
            Frame::new(Tag::Name, "/tag x")
        );
    }

    #[test]
    fn test_empty_line_is_empty_message() {
        assert_eq!(classify_line(b""), Frame::new(Tag::Message, ""));
    }
}
