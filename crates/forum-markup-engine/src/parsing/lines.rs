/// Returns an iterator over the lines of `text`, split on `\n`.
///
/// No line is dropped: `""` yields one empty line and a trailing `\n` yields a
/// trailing empty line. Lines are returned unmodified, so a `\r` before a `\n`
/// stays on its line.
pub fn source_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        assert_eq!(source_lines("").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn trailing_newline_keeps_empty_last_line() {
        assert_eq!(source_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
    }

    #[test]
    fn consecutive_newlines() {
        assert_eq!(
            source_lines("a\n\n\nb").collect::<Vec<_>>(),
            vec!["a", "", "", "b"]
        );
    }

    #[test]
    fn keeps_carriage_returns() {
        assert_eq!(
            source_lines("a\r\nb\r\n").collect::<Vec<_>>(),
            vec!["a\r", "b\r", ""]
        );
    }

    #[test]
    fn lone_carriage_return_inside_line_is_kept() {
        assert_eq!(source_lines("a\rb").collect::<Vec<_>>(), vec!["a\rb"]);
    }
}
