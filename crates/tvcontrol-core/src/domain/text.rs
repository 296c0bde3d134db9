//! Escaping for `input text`.

/// Escapes free text for `shell input text`.
///
/// The device shell splits arguments on whitespace and `input text` decodes
/// `%s` back into a space, so every whitespace character becomes `%s`.
/// Backslashes are doubled first so they survive the shell.
///
/// ```rust
/// use tvcontrol_core::domain::escape_input_text;
///
/// assert_eq!(escape_input_text("hello world"), "hello%sworld");
/// ```
pub fn escape_input_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            c if c.is_whitespace() => escaped.push_str("%s"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_percent_s() {
        assert_eq!(escape_input_text("the office"), "the%soffice");
    }

    #[test]
    fn test_tabs_and_newlines_are_whitespace() {
        assert_eq!(escape_input_text("a\tb\nc"), "a%sb%sc");
    }

    #[test]
    fn test_backslash_is_doubled() {
        assert_eq!(escape_input_text(r"C:\tv"), r"C:\\tv");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(escape_input_text("netflix"), "netflix");
    }
}
