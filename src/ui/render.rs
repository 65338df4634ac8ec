//! Widget rendering
//!
//! Stateless render functions for the frame's visible regions: the controls
//! strip (buttons and combo boxes in registration order), the label rows,
//! the automaton panel area, and the status bar. All drawing reads the
//! shared [`FrameState`] under its lock; nothing here mutates it.

use crate::frame::{FrameState, WidgetId};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the whole frame into the terminal area, clamped to the target
/// window size if one was set.
pub(crate) fn render_frame(frame: &mut Frame, state: &FrameState) {
    let area = clamp_area(frame.area(), state.size);

    let mut window = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    if !state.title.is_empty() {
        window = window.title(format!(" {} ", state.title));
    }
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let label_count = state
        .flow
        .iter()
        .filter(|id| matches!(id, WidgetId::Label(_)))
        .count() as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(label_count),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_controls(frame, rows[0], state);
    render_labels(frame, rows[1], state);
    render_automaton(frame, rows[2], state);
    render_status_bar(frame, rows[3], state);
}

/// Render the interactive controls in one row, registration order.
fn render_controls(frame: &mut Frame, area: Rect, state: &FrameState) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for (index, id) in state.flow.iter().enumerate() {
        let focused = state.focus == Some(index);
        match id {
            WidgetId::Button(name) => {
                if let Some(button) = state.buttons.get(name) {
                    spans.push(Span::styled(
                        format!("[ {} ]", button.text),
                        control_style(DEFAULT_THEME.primary, focused),
                    ));
                    spans.push(Span::raw("  "));
                }
            }
            WidgetId::Combo(name) => {
                if let Some(combo) = state.combos.get(name) {
                    let value = combo.selected_item().unwrap_or("-");
                    spans.push(Span::styled(
                        format!("⟨ {} ⟩", value),
                        control_style(DEFAULT_THEME.secondary, focused),
                    ));
                    spans.push(Span::raw("  "));
                }
            }
            WidgetId::Label(_) => {}
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn control_style(color: Color, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    }
}

/// Render every label on its own line, registration order.
fn render_labels(frame: &mut Frame, area: Rect, state: &FrameState) {
    let lines: Vec<Line> = state
        .flow
        .iter()
        .filter_map(|id| match id {
            WidgetId::Label(name) => state.labels.get(name),
            _ => None,
        })
        .map(|label| Line::from(format!(" {}", label.text)))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, area);
}

/// Render the visible automaton panel as a titled region, or a placeholder
/// note when none is shown. Panel contents are the application's business;
/// the facade only draws the region.
fn render_automaton(frame: &mut Frame, area: Rect, state: &FrameState) {
    match state.panels.current() {
        Some(name) => {
            let block = Block::default()
                .title(format!(" {} ", name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.primary));
            frame.render_widget(block, area);
        }
        None => {
            let paragraph = Paragraph::new("(no automaton panel visible)")
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
        }
    }
}

/// Render the status bar: keybinds on the left, the visible automaton on
/// the right.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &FrameState) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.highlight_bg)
        .fg(DEFAULT_THEME.comment);

    let left_spans = vec![
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" press ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let right_spans = match state.panels.current() {
        Some(name) => vec![Span::styled(
            format!(" {} ", name),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )],
        None => Vec::new(),
    };

    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.highlight_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}

fn clamp_area(area: Rect, size: Option<(u16, u16)>) -> Rect {
    match size {
        Some((width, height)) => Rect {
            width: area.width.min(width),
            height: area.height.min(height),
            ..area
        },
        None => area,
    }
}
