//! List pane rendering
//!
//! The top of the pane draws the nodes reachable from `head` in order, each
//! as a fixed-width cell with the role labels that point at it underneath:
//!
//! ```text
//! null <-> [ 10 ] <-> [ 20 ] <-> [ 30 ] <-> null
//!          head       curr
//! ```
//!
//! Nodes that are not reachable (a new node before it is linked, a node that
//! was bypassed) are listed after the chain as detached. Below the chain a
//! slot table shows the raw `prev`/`next` links, which is where the
//! half-updated state between two steps is visible.

use crate::structure::{Link, ListStore, Markers, Role};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 8;
const LINK: &str = " <-> ";
const NULL: &str = "null";

fn node_cell(value: i32) -> String {
    format!("{:^width$}", format!("[ {} ]", value), width = CELL_WIDTH)
}

fn role_labels(markers: &Markers, index: usize) -> String {
    let labels: Vec<&str> = markers.roles_at(index).map(Role::label).collect();
    labels.join(",")
}

fn link_label(link: Link, list: &ListStore) -> String {
    match link.and_then(|i| list.value_of(i).map(|v| (i, v))) {
        Some((i, v)) => format!("#{} ({})", i, v),
        None => NULL.to_string(),
    }
}

/// Chain rows: node row followed by its label row, wrapped to `width`
fn chain_lines(list: &ListStore, markers: &Markers, width: usize) -> Vec<Line<'static>> {
    let order: Vec<usize> = list.traverse_forward().collect();
    if order.is_empty() {
        return vec![Line::from(Span::styled(
            "head -> null (empty list)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }

    let link_style = Style::default().fg(DEFAULT_THEME.link);
    let label_style = Style::default()
        .fg(DEFAULT_THEME.marker)
        .add_modifier(Modifier::ITALIC);
    let step = CELL_WIDTH + LINK.len();
    let per_row = (width.saturating_sub(NULL.len() + LINK.len()) / step).max(1);

    let mut lines = Vec::new();
    for (row, chunk) in order.chunks(per_row).enumerate() {
        let lead = if row == 0 { NULL } else { "" };
        let mut nodes = vec![Span::styled(
            format!("{:>4}{}", lead, LINK),
            link_style,
        )];
        let mut labels = vec![Span::raw(" ".repeat(NULL.len() + LINK.len()))];

        for &index in chunk {
            let Some(node) = list.node(index) else {
                continue;
            };
            nodes.push(Span::styled(
                node_cell(node.value),
                Style::default()
                    .fg(DEFAULT_THEME.node_color(node.status))
                    .add_modifier(Modifier::BOLD),
            ));
            labels.push(Span::styled(
                format!("{:<width$}", role_labels(markers, index), width = step),
                label_style,
            ));
            nodes.push(Span::styled(LINK, link_style));
        }

        if row == (order.len() - 1) / per_row {
            nodes.push(Span::styled(NULL, link_style));
        }
        lines.push(Line::from(nodes));
        lines.push(Line::from(labels));
    }
    lines
}

/// Nodes present in the store but not on the forward chain
fn detached_lines(list: &ListStore, markers: &Markers) -> Vec<Line<'static>> {
    let reachable: Vec<usize> = list.traverse_forward().collect();
    (0..list.len())
        .filter(|i| !reachable.contains(i))
        .filter_map(|i| list.node(i).map(|node| (i, node)))
        .map(|(i, node)| {
            let mut spans = vec![
                Span::styled("detached ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    node_cell(node.value),
                    Style::default()
                        .fg(DEFAULT_THEME.node_color(node.status))
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            let labels = role_labels(markers, i);
            if !labels.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", labels),
                    Style::default().fg(DEFAULT_THEME.marker),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

/// One row per slot with its raw links
fn slot_lines(list: &ListStore) -> Vec<Line<'static>> {
    let header = Line::from(Span::styled(
        format!(
            "{:<4} {:<6} {:<6} {:<10} {:<10} {}",
            "slot", "id", "value", "prev", "next", "status"
        ),
        Style::default()
            .fg(DEFAULT_THEME.type_name)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];
    for (i, node) in list.nodes().iter().enumerate() {
        let is_head = list.head() == Some(i);
        let slot = if is_head {
            format!("{}*", i)
        } else {
            i.to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<4} ", slot),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{:<6} ", node.id.to_string()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{:<6} ", node.value),
                Style::default().fg(DEFAULT_THEME.number),
            ),
            Span::styled(
                format!("{:<10} ", link_label(list.prev_of(i), list)),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("{:<10} ", link_label(list.next_of(i), list)),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                node.status.name(),
                Style::default().fg(DEFAULT_THEME.node_color(node.status)),
            ),
        ]));
    }
    lines
}

/// Render the list pane
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    list: &ListStore,
    markers: &Markers,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Doubly Linked List ({} nodes) ", list.len()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let inner_width = area.width.saturating_sub(3) as usize;
    let mut lines = chain_lines(list, markers, inner_width);
    lines.extend(detached_lines(list, markers));
    lines.push(Line::default());
    lines.extend(slot_lines(list));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
