//! Recursion tree pane
//!
//! One text row per tree level, nodes left to right in creation order. The
//! node touched by the latest step is underlined; a quick sort pivot is drawn
//! in the pivot colour inside its node.

use crate::projection::tree::{NodeStatus, TreeNode, TreeView};
use crate::ui::theme::{node_color, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn node_spans(node: &TreeNode, focused: bool) -> Vec<Span<'static>> {
    let mut base = Style::default().fg(node_color(node.status));
    if focused {
        base = base.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    let mut spans = vec![Span::styled("[", base)];
    for (i, value) in node.values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", base));
        }
        let style = if node.status == NodeStatus::Pivot && node.pivot_index == Some(i) {
            base.fg(DEFAULT_THEME.pivot).add_modifier(Modifier::BOLD)
        } else {
            base
        };
        spans.push(Span::styled(value.to_string(), style));
    }
    spans.push(Span::styled("]", base));
    spans
}

pub fn render_tree_pane(frame: &mut Frame, area: Rect, title: &str, view: &TreeView) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let focus = view.focus();
    let mut lines = Vec::new();
    for level in view.levels() {
        let mut spans = Vec::new();
        for (i, node) in level.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.extend(node_spans(node, focus == Some(node.id.as_str())));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
