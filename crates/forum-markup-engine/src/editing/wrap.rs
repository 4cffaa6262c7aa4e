use serde::Serialize;

use super::{EditError, Selection};

/// Text after a wrap, with the selection that brackets the original substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wrapped {
    pub text: String,
    pub selection: Selection,
}

/// Wraps the selected substring in `prefix` and `suffix`.
///
/// The returned selection covers exactly the originally selected text, shifted
/// right by `prefix.len()`; the suffix length never affects it. With a caret
/// (empty selection) this leaves the caret between prefix and suffix, ready
/// for typing.
///
/// # Errors
/// Returns an [`EditError`] if `selection` is reversed, out of bounds, or
/// splits a character.
pub fn wrap_selection(
    text: &str,
    selection: Selection,
    prefix: &str,
    suffix: &str,
) -> Result<Wrapped, EditError> {
    selection.validate(text)?;

    let mut out = String::with_capacity(text.len() + prefix.len() + suffix.len());
    out.push_str(&text[..selection.start]);
    out.push_str(prefix);
    out.push_str(selection.slice(text));
    out.push_str(suffix);
    out.push_str(&text[selection.end..]);

    Ok(Wrapped {
        text: out,
        selection: selection.offset(prefix.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn wraps_word_in_link_delimiters() {
        let w = wrap_selection("hello world", Selection::new(0, 5), "[", "](url)").unwrap();
        assert_eq!(w.text, "[hello](url) world");
        assert_eq!(w.selection, Selection::new(1, 6));
    }

    #[test]
    fn caret_lands_between_delimiters() {
        let w = wrap_selection("ab", Selection::caret(1), "**", "**").unwrap();
        assert_eq!(w.text, "a****b");
        assert_eq!(w.selection, Selection::caret(3));
    }

    #[rstest]
    #[case("**", "**", "x **mid** y", Selection::new(4, 7))]
    #[case("*", "*", "x *mid* y", Selection::new(3, 6))]
    #[case("### ", "", "x ### mid y", Selection::new(6, 9))]
    #[case("- ", "", "x - mid y", Selection::new(4, 7))]
    fn selection_ignores_suffix_length(
        #[case] prefix: &str,
        #[case] suffix: &str,
        #[case] text: &str,
        #[case] selection: Selection,
    ) {
        let w = wrap_selection("x mid y", Selection::new(2, 5), prefix, suffix).unwrap();
        assert_eq!(w.text, text);
        assert_eq!(w.selection, selection);
        assert_eq!(w.selection.slice(&w.text), "mid");
    }

    #[test]
    fn wraps_empty_text() {
        let w = wrap_selection("", Selection::caret(0), "*", "*").unwrap();
        assert_eq!(w.text, "**");
        assert_eq!(w.selection, Selection::caret(1));
    }

    #[test]
    fn wraps_multibyte_selection() {
        let w = wrap_selection("añb", Selection::new(1, 3), "*", "*").unwrap();
        assert_eq!(w.text, "a*ñ*b");
        assert_eq!(w.selection.slice(&w.text), "ñ");
    }

    #[test]
    fn rejects_reversed_selection() {
        assert_eq!(
            wrap_selection("abc", Selection::new(2, 1), "*", "*"),
            Err(EditError::ReversedSelection { start: 2, end: 1 })
        );
    }

    #[test]
    fn rejects_selection_past_end() {
        assert!(matches!(
            wrap_selection("abc", Selection::new(0, 9), "*", "*"),
            Err(EditError::OutOfBounds { .. })
        ));
    }
}
