use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use forum_markup_engine::{Cmd, Draft, ToolbarAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Composer state: the draft being edited and where it is saved.
pub struct App {
    path: PathBuf,
    draft: Draft,
    saved_version: u64,
    status: String,
}

impl App {
    /// Opens `path` as a draft. A missing file starts an empty draft.
    pub fn open(path: PathBuf, link_placeholder: &str) -> Result<Self> {
        let text = if path.exists() {
            std::fs::read_to_string(&path)
                .with_context(|| format!("reading draft {}", path.display()))?
        } else {
            String::new()
        };
        let status = format!("Editing {}", path.display());
        Ok(Self {
            path,
            draft: Draft::new(text).with_link_placeholder(link_placeholder),
            saved_version: 0,
            status,
        })
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.draft.version() != self.saved_version
    }

    pub fn save(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, self.draft.text())
            .with_context(|| format!("writing draft {}", self.path.display()))?;
        self.saved_version = self.draft.version();
        self.status = format!("Saved {}", self.path.display());
        log::info!("saved draft to {}", self.path.display());
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Control> {
        if key.kind != KeyEventKind::Press {
            return Ok(Control::Continue);
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(Control::Quit),
            KeyCode::Char('q') if ctrl => return Ok(Control::Quit),
            KeyCode::Char('s') if ctrl => {
                if let Err(e) = self.save() {
                    self.status = format!("Save failed: {e:#}");
                }
                return Ok(Control::Continue);
            }
            _ => {}
        }

        if let Some(cmd) = command_for_key(&key) {
            if let Cmd::Toolbar(action) = &cmd {
                self.status = format!("Applied {}", action.label());
            }
            if let Err(e) = self.draft.apply(cmd) {
                self.status = format!("Edit rejected: {e}");
            }
        }
        Ok(Control::Continue)
    }
}

/// Maps a key press to the draft command it triggers, if any.
pub fn command_for_key(key: &KeyEvent) -> Option<Cmd> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char(c) if ctrl => toolbar_for_char(c).map(Cmd::Toolbar),
        KeyCode::Char(c) => Some(Cmd::InsertText(c.to_string())),
        KeyCode::Enter => Some(Cmd::InsertText("\n".to_string())),
        KeyCode::Backspace => Some(Cmd::DeleteBackward),
        KeyCode::Left => Some(Cmd::MoveLeft { extend: shift }),
        KeyCode::Right => Some(Cmd::MoveRight { extend: shift }),
        _ => None,
    }
}

fn toolbar_for_char(c: char) -> Option<ToolbarAction> {
    match c {
        'b' => Some(ToolbarAction::Bold),
        'e' => Some(ToolbarAction::Italic),
        't' => Some(ToolbarAction::Heading),
        'l' => Some(ToolbarAction::ListItem),
        'k' => Some(ToolbarAction::Link),
        _ => None,
    }
}
