//! Bar chart of a sorting step

use crate::projection::bars::{self, BarCategory};
use crate::step::SortStep;
use crate::ui::theme::{bar_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Widest bar and gap that still fit `count` bars into `width` columns
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let per_bar = (width / count).max(1);
    if per_bar >= 3 {
        (per_bar - 1, 1)
    } else {
        (per_bar, 0)
    }
}

pub fn render_array_pane(frame: &mut Frame, area: Rect, title: &str, step: &SortStep) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let categories = bars::project(step);
    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_geometry(inner_width, step.array.len());

    let data: Vec<Bar> = step
        .array
        .iter()
        .zip(&categories)
        .enumerate()
        .map(|(i, (&value, &category))| {
            let mut style = Style::default().fg(bar_color(category));
            if category != BarCategory::Idle {
                style = style.add_modifier(Modifier::BOLD);
            }
            let mut bar = Bar::default()
                .value(value.max(0) as u64)
                .text_value(value.to_string())
                .style(style)
                .value_style(Style::default().fg(Color::Black).bg(bar_color(category)));
            if step.lift_index == Some(i) {
                bar = bar.label(Line::from("▲").style(Style::default().fg(DEFAULT_THEME.key)));
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&data))
        .bar_width(bar_width)
        .bar_gap(bar_gap);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_geometry(100, 24), (3, 1));
        assert_eq!(bar_geometry(60, 24), (2, 0));
        assert_eq!(bar_geometry(10, 64), (1, 0));
        assert_eq!(bar_geometry(10, 0), (1, 0));
    }
}
