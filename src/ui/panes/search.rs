//! Row of value blocks for a search step

use crate::projection::blocks::{self, BlockCategory};
use crate::step::SearchStep;
use crate::ui::theme::{block_color, DEFAULT_THEME};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn block_style(category: BlockCategory) -> Style {
    let style = Style::default().bg(block_color(category));
    match category {
        BlockCategory::OutsideWindow => style.fg(DEFAULT_THEME.comment),
        BlockCategory::Found | BlockCategory::Scanning | BlockCategory::Midpoint => {
            style.fg(Color::Black).add_modifier(Modifier::BOLD)
        }
        _ => style.fg(DEFAULT_THEME.fg),
    }
}

pub fn render_search_pane(frame: &mut Frame, area: Rect, title: &str, step: &SearchStep) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let categories = blocks::project(step);
    let mut cells = Vec::with_capacity(step.array.len() * 2);
    for (&value, &category) in step.array.iter().zip(&categories) {
        cells.push(Span::styled(format!(" {:>3} ", value), block_style(category)));
        cells.push(Span::raw(" "));
    }

    let indices: Vec<Span> = (0..step.array.len())
        .map(|i| {
            Span::styled(
                format!(" {:>3}  ", i),
                Style::default().fg(DEFAULT_THEME.comment),
            )
        })
        .collect();

    let mut header = vec![
        Span::styled("Target ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            step.target.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(window) = step.window {
        header.push(Span::styled(
            format!("   window [{}..{}]", window.start, window.end),
            Style::default().fg(DEFAULT_THEME.in_range),
        ));
    }

    let lines = vec![
        Line::from(header),
        Line::default(),
        Line::from(cells),
        Line::from(indices),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
