//! Fixed-width text wrapping for bubble labels.
//!
//! Wrapping is width-based, not word-based: the walk accumulates characters
//! and breaks the line as soon as it would exceed the width, marking mid-word
//! breaks with a hyphen. There is no backtracking to the previous space.

/// Maximum characters per bubble line.
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// Wrap `message` so no line exceeds `line_width` characters.
///
/// When the character before a break is not a space, a hyphen is appended to
/// the broken line to mark the mid-word split. Messages that already fit are
/// returned unchanged; the empty string stays empty.
pub fn wrap(message: &str, line_width: usize) -> String {
    let mut formatted = String::with_capacity(message.len() + message.len() / line_width.max(1));
    let mut counter = 0;
    let mut prev = None;

    for ch in message.chars() {
        if counter < line_width {
            formatted.push(ch);
        } else {
            // breaking mid-word: leave a hyphen at the end of the line
            if prev != Some(' ') {
                formatted.push('-');
            }
            counter = 0;
            formatted.push('\n');
            formatted.push(ch);
        }
        counter += 1;
        prev = Some(ch);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_stays_empty() {
        assert_eq!(wrap("", DEFAULT_LINE_WIDTH), "");
    }

    #[test]
    fn test_short_message_unchanged() {
        assert_eq!(wrap("hello bot", DEFAULT_LINE_WIDTH), "hello bot");
        // exactly at the limit is still one line
        let fifty = "x".repeat(50);
        assert_eq!(wrap(&fifty, DEFAULT_LINE_WIDTH), fifty);
    }

    #[test]
    fn test_mid_word_break_inserts_hyphen() {
        let msg = "hi there, this is a somewhat long greeting message exceeding fifty chars";
        let wrapped = wrap(msg, DEFAULT_LINE_WIDTH);
        assert_eq!(
            wrapped,
            "hi there, this is a somewhat long greeting message-\n exceeding fifty chars"
        );
        assert_eq!(wrapped.matches('\n').count(), 1);
    }

    #[test]
    fn test_break_after_space_has_no_hyphen() {
        // 50 chars ending in a space, so the break falls between words
        let msg = format!("{} tail", "a".repeat(49));
        let wrapped = wrap(&msg, DEFAULT_LINE_WIDTH);
        assert_eq!(wrapped, format!("{} \ntail", "a".repeat(49)));
    }

    #[test]
    fn test_content_is_preserved() {
        let msg = "the quick brown fox jumps over the lazy dog and keeps running far beyond the fence";
        let wrapped = wrap(msg, DEFAULT_LINE_WIDTH);
        let restored: String = wrapped.chars().filter(|c| *c != '\n' && *c != '-').collect();
        assert_eq!(restored, msg);
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let msg = "m".repeat(500);
        for line in wrap(&msg, DEFAULT_LINE_WIDTH).lines() {
            assert!(line.trim_end_matches('-').chars().count() <= DEFAULT_LINE_WIDTH);
        }
    }

    #[test]
    fn test_custom_width() {
        let wrapped = wrap("abcdefghij", 4);
        assert_eq!(wrapped, "abcd-\nefgh-\nij");
    }
}
