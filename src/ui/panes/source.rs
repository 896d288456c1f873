//! Pseudocode pane with the active line highlighted
//!
//! # Features
//!
//! - Keyword, number and procedure-name highlighting for the pseudocode
//! - Current line highlighting with its line number in the accent colour
//! - The current line is kept at a fixed row while stepping
//!
//! A failed run paints the frozen line in the error colour.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEYWORDS: &[&str] = &[
    "procedure", "end", "if", "then", "else", "for", "to", "do", "while", "repeat", "until",
    "return", "and", "or", "not", "in", "inclusive",
];

/// Word-level highlighting; a word followed by `(` is a call
fn highlight_pseudocode(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
            continue;
        }
        flush_word(&mut word, c == '(', &mut spans);
        let style = match c {
            '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            ':' | '=' | '<' | '>' | '+' | '-' | '*' | '/' | '!' => {
                Style::default().fg(DEFAULT_THEME.secondary)
            }
            _ => Style::default(),
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    flush_word(&mut word, false, &mut spans);

    Line::from(spans)
}

fn flush_word(word: &mut String, is_call: bool, spans: &mut Vec<Span<'static>>) {
    if !word.is_empty() {
        let style = word_style(word, is_call);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

fn word_style(word: &str, is_call: bool) -> Style {
    if KEYWORDS.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to, centred on first render
    pub target_line_row: Option<usize>,
}

/// Render the pseudocode pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    source: &str,
    current_line: Option<usize>,
    is_failed: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(line) = current_line.filter(|&l| l > 0 && l <= total_lines) {
        let max_scroll = total_lines.saturating_sub(visible_height);
        scroll_state.offset = (line - 1).saturating_sub(target_row).min(max_scroll);
    } else if total_lines <= visible_height {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let is_current = current_line == Some(line_num);
            let line_num_str = format!("{:3} ", line_num);

            let mut content = highlight_pseudocode(text);
            let num_style = if is_current && is_failed {
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(ratatui::style::Color::Black)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content.spans {
                    span.style = error_style;
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(line_num_str, num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styled(line: &Line<'_>, text: &str) -> Style {
        line.spans
            .iter()
            .find(|s| s.content == text)
            .map(|s| s.style)
            .unwrap()
    }

    #[test]
    fn test_keywords_are_bold() {
        let line = highlight_pseudocode("  if A[j] < pivot then");
        assert!(styled(&line, "if").add_modifier.contains(Modifier::BOLD));
        assert!(styled(&line, "then").add_modifier.contains(Modifier::BOLD));
        assert_eq!(styled(&line, "pivot").fg, Some(DEFAULT_THEME.fg));
    }

    #[test]
    fn test_calls_and_numbers() {
        let line = highlight_pseudocode("swap(A[i], A[0])");
        assert_eq!(styled(&line, "swap").fg, Some(DEFAULT_THEME.function));
        assert_eq!(styled(&line, "0").fg, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_highlight_keeps_text() {
        let text = "  mid := (lo + hi) / 2";
        let line = highlight_pseudocode(text);
        let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, text);
    }
}
