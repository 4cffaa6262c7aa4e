use crate::parsing::{ParsedPost, render_post};

use super::{
    Cmd, EditError, Patch, Selection,
    commands::DEFAULT_LINK_PLACEHOLDER,
    wrap_selection,
};

/// The editing surface's state: a draft string and its selection.
///
/// The selection is tracked as an anchor (the end that stays put while
/// extending) and a head (the caret). Every text change goes through
/// [`Draft::apply`], which bumps `version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    anchor: usize,
    head: usize,
    version: u64,
    link_placeholder: String,
}

impl Draft {
    /// Creates a draft with the caret at the end of `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        Self {
            text,
            anchor: len,
            head: len,
            version: 0,
            link_placeholder: DEFAULT_LINK_PLACEHOLDER.to_string(),
        }
    }

    /// Sets the target written by [`super::ToolbarAction::Link`].
    #[must_use]
    pub fn with_link_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.link_placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        Selection::new(self.anchor.min(self.head), self.anchor.max(self.head))
    }

    /// The caret: the end of the selection that moves.
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Renders the current text for preview.
    pub fn render(&self) -> ParsedPost {
        render_post(&self.text)
    }

    /// Applies `cmd`, returning what changed.
    ///
    /// # Errors
    /// Only [`Cmd::Select`] can fail, when given an invalid selection. All
    /// other commands work from the draft's own (always valid) selection.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        log::debug!("draft v{} apply {:?}", self.version, cmd);
        match cmd {
            Cmd::Wrap { prefix, suffix } => self.wrap(&prefix, &suffix),
            Cmd::Toolbar(action) => {
                let (prefix, suffix) = action.delimiters_with_placeholder(&self.link_placeholder);
                self.wrap(prefix, &suffix)
            }
            Cmd::InsertText(text) => {
                let sel = self.selection();
                self.text.replace_range(sel.range(), &text);
                let caret = sel.start + text.len();
                self.set_caret(caret);
                Ok(self.edited(sel.start..caret))
            }
            Cmd::DeleteBackward => {
                let sel = self.selection();
                let range = if sel.is_empty() {
                    self.prev_boundary(sel.start)..sel.start
                } else {
                    sel.range()
                };
                if range.is_empty() {
                    return Ok(self.unchanged());
                }
                self.text.replace_range(range.clone(), "");
                self.set_caret(range.start);
                Ok(self.edited(range.start..range.start))
            }
            Cmd::MoveLeft { extend } => {
                let sel = self.selection();
                if !extend && !sel.is_empty() {
                    self.set_caret(sel.start);
                } else {
                    let to = self.prev_boundary(self.head);
                    self.move_head(to, extend);
                }
                Ok(self.unchanged())
            }
            Cmd::MoveRight { extend } => {
                let sel = self.selection();
                if !extend && !sel.is_empty() {
                    self.set_caret(sel.end);
                } else {
                    let to = self.next_boundary(self.head);
                    self.move_head(to, extend);
                }
                Ok(self.unchanged())
            }
            Cmd::Select(sel) => {
                sel.validate(&self.text)?;
                self.anchor = sel.start;
                self.head = sel.end;
                Ok(self.unchanged())
            }
        }
    }

    fn wrap(&mut self, prefix: &str, suffix: &str) -> Result<Patch, EditError> {
        let sel = self.selection();
        let wrapped = wrap_selection(&self.text, sel, prefix, suffix)?;
        self.text = wrapped.text;
        self.anchor = wrapped.selection.start;
        self.head = wrapped.selection.end;
        Ok(self.edited(sel.start..sel.end + prefix.len() + suffix.len()))
    }

    fn set_caret(&mut self, at: usize) {
        self.anchor = at;
        self.head = at;
    }

    fn move_head(&mut self, to: usize, extend: bool) {
        if extend {
            self.head = to;
        } else {
            self.set_caret(to);
        }
    }

    fn prev_boundary(&self, at: usize) -> usize {
        self.text[..at]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, at: usize) -> usize {
        self.text[at..]
            .chars()
            .next()
            .map(|c| at + c.len_utf8())
            .unwrap_or(at)
    }

    fn edited(&mut self, changed: std::ops::Range<usize>) -> Patch {
        self.version += 1;
        Patch {
            changed,
            new_selection: self.selection(),
            version: self.version,
        }
    }

    fn unchanged(&self) -> Patch {
        Patch {
            changed: self.head..self.head,
            new_selection: self.selection(),
            version: self.version,
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new(String::new())
    }
}
