//! Algorithm card and the description of the current step

use crate::registry::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    info: &AlgorithmInfo,
    step_description: &str,
    failure: Option<&str>,
) {
    let block = Block::default()
        .title(format!(" {} ", info.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{}  ", info.category), label),
            Span::styled("time ", label),
            Span::styled(info.complexity_time, Style::default().fg(DEFAULT_THEME.number)),
            Span::styled("  space ", label),
            Span::styled(info.complexity_space, Style::default().fg(DEFAULT_THEME.number)),
        ]),
        Line::from(Span::styled(info.description, Style::default().fg(DEFAULT_THEME.fg))),
        Line::default(),
        Line::from(Span::styled(
            step_description.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(failure) = failure {
        lines.push(Line::from(Span::styled(
            format!("{} (press r to reload)", failure),
            Style::default().fg(DEFAULT_THEME.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
