use forum_markup_engine::{Block, InlineNode, ParsedPost, Selection};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, Paragraph, Wrap},
};

use crate::app::App;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    let draft = app.draft();
    let title = if app.is_dirty() { "Draft *" } else { "Draft" };
    let editor = Paragraph::new(editor_lines(draft.text(), draft.selection()))
        .block(Panel::default().borders(Borders::ALL).title(title));
    f.render_widget(editor, panes[0]);

    let (col, row) = caret_position(draft.text(), draft.head());
    f.set_cursor_position((panes[0].x + 1 + col, panes[0].y + 1 + row));

    let preview = Paragraph::new(preview_lines(&draft.render()))
        .block(Panel::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[1]);

    let help = vec![
        Line::from(Span::raw(
            "^B bold | ^E italic | ^T heading | ^L list | ^K link | ^S save | Esc quit",
        )),
        Line::from(Span::styled(
            app.status().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(help), rows[1]);
}

/// Raw draft lines with the selected range shown reversed.
pub fn editor_lines(text: &str, selection: Selection) -> Vec<Line<'static>> {
    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let line_end = line_start + line.len();
        let sel_start = selection.start.clamp(line_start, line_end) - line_start;
        let sel_end = selection.end.clamp(line_start, line_end) - line_start;

        let mut spans = Vec::new();
        if sel_start > 0 {
            spans.push(Span::raw(line[..sel_start].to_string()));
        }
        if sel_end > sel_start {
            spans.push(Span::styled(line[sel_start..sel_end].to_string(), selected));
        }
        if sel_end < line.len() {
            spans.push(Span::raw(line[sel_end..].to_string()));
        }
        lines.push(Line::from(spans));
        line_start = line_end + 1;
    }
    lines
}

/// Column and row of the caret at byte offset `head`, counted in chars.
pub fn caret_position(text: &str, head: usize) -> (u16, u16) {
    let before = &text[..head];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count();
    (
        u16::try_from(col).unwrap_or(u16::MAX),
        u16::try_from(row).unwrap_or(u16::MAX),
    )
}

/// Styled preview of a rendered post, one terminal line per block.
pub fn preview_lines(post: &ParsedPost) -> Vec<Line<'static>> {
    post.blocks
        .iter()
        .map(|rb| match &rb.block {
            Block::Heading(_) => {
                let style = Style::default()
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED);
                Line::from(inline_spans(&rb.inline, style))
            }
            Block::ListItem(_) => {
                let mut spans = vec![Span::raw("• ")];
                spans.extend(inline_spans(&rb.inline, Style::default()));
                Line::from(spans)
            }
            Block::Paragraph(_) => Line::from(inline_spans(&rb.inline, Style::default())),
            Block::Blank => Line::default(),
        })
        .collect()
}

fn inline_spans(nodes: &[InlineNode], base: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for node in nodes {
        push_spans(&mut spans, node, base);
    }
    spans
}

fn push_spans(spans: &mut Vec<Span<'static>>, node: &InlineNode, style: Style) {
    match node {
        InlineNode::Text(s) => spans.push(Span::styled(s.clone(), style)),
        InlineNode::Strong(children) => {
            let style = style.add_modifier(Modifier::BOLD);
            for child in children {
                push_spans(spans, child, style);
            }
        }
        InlineNode::Emphasis(children) => {
            let style = style.add_modifier(Modifier::ITALIC);
            for child in children {
                push_spans(spans, child, style);
            }
        }
        InlineNode::Link { label, href } => {
            spans.push(Span::styled(
                label.clone(),
                style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));
            if label != href {
                spans.push(Span::styled(
                    format!(" ({href})"),
                    style.fg(Color::DarkGray),
                ));
            }
        }
    }
}
