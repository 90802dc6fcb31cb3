//! Shortcut expansion: inserting a snippet into the log at the cursor.
//!
//! [`expand`] is pure and total — the caller owns writing the result back
//! into the document and moving focus. All indices are char offsets, not
//! byte offsets, matching how an editor counts cursor positions.

use crate::core::shortcut::Shortcut;

/// The result of expanding a shortcut into the log text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The log text with the snippet inserted.
    pub text: String,
    /// Where the cursor lands, as a char offset into `text`.
    pub cursor_index: usize,
}

/// Inserts `shortcut.text` into `current_text` at `cursor_index`.
///
/// Nothing is overwritten. The new cursor sits `shortcut.cursor` chars past
/// the insertion point when that offset lies within the snippet; any
/// out-of-range offset (including the conventional `-1`) is clamped to the
/// end of the inserted text. A `cursor_index` past the end of `current_text`
/// is clamped to the end before inserting.
pub fn expand(current_text: &str, cursor_index: usize, shortcut: &Shortcut) -> Expansion {
    let text_chars = current_text.chars().count();
    let insert_at = cursor_index.min(text_chars);
    let insert_byte = byte_offset(current_text, insert_at);

    let mut text = String::with_capacity(current_text.len() + shortcut.text.len());
    text.push_str(&current_text[..insert_byte]);
    text.push_str(&shortcut.text);
    text.push_str(&current_text[insert_byte..]);

    let snippet_chars = shortcut.text.chars().count();
    let offset = match usize::try_from(shortcut.cursor) {
        Ok(offset) if offset <= snippet_chars => offset,
        _ => snippet_chars,
    };

    Expansion {
        text,
        cursor_index: insert_at + offset,
    }
}

/// Byte offset of the `char_index`-th char of `s`, or `s.len()` when past the end.
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shortcut::ShortcutKind;

    fn shortcut(text: &str, cursor: i64) -> Shortcut {
        Shortcut {
            label: "test".to_string(),
            text: text.to_string(),
            cursor,
            kind: ShortcutKind::Text,
            position: 0,
        }
    }

    #[test]
    fn test_expand_places_cursor_at_offset() {
        let result = expand("Hello ", 6, &shortcut("World!", 5));
        assert_eq!(result.text, "Hello World!");
        assert_eq!(result.cursor_index, 11);
    }

    #[test]
    fn test_expand_clamps_out_of_range_offset_to_snippet_end() {
        let result = expand("Hello ", 6, &shortcut("World!", 999));
        assert_eq!(result.text, "Hello World!");
        assert_eq!(result.cursor_index, 12);
    }

    #[test]
    fn test_expand_treats_negative_offset_as_snippet_end() {
        let result = expand("Hello ", 6, &shortcut("World!", -1));
        assert_eq!(result.cursor_index, 12);
    }

    #[test]
    fn test_expand_inserts_mid_text_without_overwriting() {
        let result = expand("ac", 1, &shortcut("b", 1));
        assert_eq!(result.text, "abc");
        assert_eq!(result.cursor_index, 2);
    }

    #[test]
    fn test_expand_at_start_and_end() {
        let start = expand("log", 0, &shortcut(">> ", 3));
        assert_eq!(start.text, ">> log");
        assert_eq!(start.cursor_index, 3);

        let end = expand("log", 3, &shortcut("!", 0));
        assert_eq!(end.text, "log!");
        assert_eq!(end.cursor_index, 3);
    }

    #[test]
    fn test_expand_clamps_cursor_index_past_text_end() {
        let result = expand("ab", 10, &shortcut("c", 0));
        assert_eq!(result.text, "abc");
        assert_eq!(result.cursor_index, 2);
    }

    #[test]
    fn test_expand_counts_chars_not_bytes() {
        // 'é' and '日' are multi-byte; cursor math must stay char-based.
        let result = expand("café", 4, &shortcut("日記", 1));
        assert_eq!(result.text, "café日記");
        assert_eq!(result.cursor_index, 5);
    }

    #[test]
    fn test_expand_empty_snippet_keeps_cursor() {
        let result = expand("note", 2, &shortcut("", 0));
        assert_eq!(result.text, "note");
        assert_eq!(result.cursor_index, 2);
    }

    #[test]
    fn test_expand_length_property() {
        let cases = [("", 0usize), ("Hello ", 3), ("多字节文本", 5)];
        for (text, cursor) in cases {
            let s = shortcut("snippet", 2);
            let result = expand(text, cursor, &s);
            assert_eq!(
                result.text.chars().count(),
                text.chars().count() + s.text.chars().count()
            );
            assert!(result.cursor_index >= cursor.min(text.chars().count()));
            assert!(
                result.cursor_index
                    <= cursor.min(text.chars().count()) + s.text.chars().count()
            );
        }
    }
}
