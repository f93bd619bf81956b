//! Operation pane: what the selected operation does and the run inputs

use crate::catalog::OperationKind;
use crate::ui::app::InputMode;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Data shown by the operation pane
pub struct InfoRenderData<'a> {
    pub selected: OperationKind,
    pub value_input: &'a str,
    pub position_input: &'a str,
    pub input_mode: InputMode,
    pub speed: Duration,
    pub list_size: usize,
    pub progress: u8,
    pub narration: &'a str,
}

fn input_span(label: &str, text: &str, editing: bool, placeholder: &str) -> Vec<Span<'static>> {
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let shown = if text.is_empty() && !editing {
        placeholder.to_string()
    } else if editing {
        format!("{}_", text)
    } else {
        text.to_string()
    };
    let value_style = if editing {
        Style::default()
            .bg(DEFAULT_THEME.secondary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if text.is_empty() {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    };
    vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(shown, value_style),
        Span::raw("  "),
    ]
}

/// Render the operation pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let info = data.selected.info();
    let block = Block::default()
        .title(format!(" {} ", info.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let heading = Style::default()
        .fg(DEFAULT_THEME.type_name)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(info.category.label(), heading),
            Span::styled(
                format!("  time {}  space {}", info.time_complexity, info.space_complexity),
                Style::default().fg(DEFAULT_THEME.keyword),
            ),
        ]),
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(Span::styled(
            format!("Tip: {}", info.learner_tip),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    let mut inputs = Vec::new();
    if data.selected.needs_value() {
        let placeholder = if data.selected.is_insertion() {
            "random"
        } else {
            "required"
        };
        inputs.extend(input_span(
            "value",
            data.value_input,
            data.input_mode == InputMode::EditValue,
            placeholder,
        ));
    }
    if data.selected.needs_position() {
        inputs.extend(input_span(
            "position",
            data.position_input,
            data.input_mode == InputMode::EditPosition,
            "0",
        ));
    }
    inputs.push(Span::styled(
        format!("speed: {}ms  size: {}", data.speed.as_millis(), data.list_size),
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    lines.push(Line::from(inputs));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        data.narration.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(DEFAULT_THEME.success).bg(DEFAULT_THEME.current_line_bg))
        .percent(u16::from(data.progress.min(100)))
        .label(format!("{}%", data.progress));
    frame.render_widget(gauge, rows[1]);
}
