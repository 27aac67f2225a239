//! Symbol table pane rendering
//!
//! Mirrors the columns of the text report (Name, Type, Value, Line) with one
//! row per entry, most recently declared first.

use crate::symbols::SymbolTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the symbol table pane
pub fn render_symbols_pane(
    frame: &mut Frame,
    area: Rect,
    table: &SymbolTable,
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
        .title(format!(" Symbols ({}) ", table.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if table.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Header row takes one line inside the borders
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    let total_rows = table.len();
    if total_rows > visible_height {
        *scroll_offset = (*scroll_offset).min(total_rows - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let rows: Vec<Row> = table
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name().to_string()).style(Style::default().fg(DEFAULT_THEME.fg)),
                Cell::from(entry.ty().to_string())
                    .style(Style::default().fg(DEFAULT_THEME.type_name)),
                Cell::from(entry.value().to_string())
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(entry.line().to_string())
                    .style(Style::default().fg(DEFAULT_THEME.comment)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Type", "Value", "Line"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(4),
    ];

    let widget = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(widget, area);
}
