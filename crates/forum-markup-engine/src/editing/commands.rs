use std::borrow::Cow;

use serde::Serialize;

use crate::parsing::{
    blocks::kinds::{Heading, ListItem},
    inline::kinds::{Emphasis, ExplicitLink, Strong},
};

use super::Selection;

/// The placeholder written between `](` and `)` by the link action.
pub const DEFAULT_LINK_PLACEHOLDER: &str = "url";

/// Formatting actions offered by an editing toolbar.
///
/// Each action is a fixed `(prefix, suffix)` pair handed to
/// [`super::wrap_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ToolbarAction {
    Bold,
    Italic,
    Heading,
    ListItem,
    Link,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 5] = [
        ToolbarAction::Bold,
        ToolbarAction::Italic,
        ToolbarAction::Heading,
        ToolbarAction::ListItem,
        ToolbarAction::Link,
    ];

    /// The delimiter pair with the default link placeholder.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            ToolbarAction::Bold => (Strong::DELIMITER, Strong::DELIMITER),
            ToolbarAction::Italic => (Emphasis::DELIMITER, Emphasis::DELIMITER),
            ToolbarAction::Heading => (Heading::PREFIX, ""),
            ToolbarAction::ListItem => (ListItem::PREFIX, ""),
            ToolbarAction::Link => (ExplicitLink::OPEN, "](url)"),
        }
    }

    /// Like [`ToolbarAction::delimiters`], with `placeholder` as the link target.
    pub fn delimiters_with_placeholder(self, placeholder: &str) -> (&'static str, Cow<'static, str>) {
        match self {
            ToolbarAction::Link if placeholder != DEFAULT_LINK_PLACEHOLDER => (
                ExplicitLink::OPEN,
                Cow::Owned(format!(
                    "{}{placeholder}{}",
                    ExplicitLink::MIDDLE,
                    ExplicitLink::CLOSE
                )),
            ),
            _ => {
                let (prefix, suffix) = self.delimiters();
                (prefix, Cow::Borrowed(suffix))
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolbarAction::Bold => "bold",
            ToolbarAction::Italic => "italic",
            ToolbarAction::Heading => "heading",
            ToolbarAction::ListItem => "list",
            ToolbarAction::Link => "link",
        }
    }
}

/// Commands that can be applied to a [`super::Draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Wrap the selection in an arbitrary delimiter pair.
    Wrap { prefix: String, suffix: String },
    /// Wrap the selection using a toolbar action's delimiters.
    Toolbar(ToolbarAction),
    /// Replace the selection with `text`, leaving the caret after it.
    InsertText(String),
    /// Delete the selection, or the character before a caret.
    DeleteBackward,
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    Select(Selection),
}
