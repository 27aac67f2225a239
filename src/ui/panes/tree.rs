//! Syntax tree pane rendering

use crate::render::render_formatted;
use crate::tree::Node;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn is_branch_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| matches!(c, '/' | '\\' | '|' | ' '))
}

fn line_color(line: &str) -> Color {
    let trimmed = line.trim();
    if is_branch_line(line) {
        DEFAULT_THEME.comment
    } else if trimmed.parse::<i32>().is_ok() {
        DEFAULT_THEME.number
    } else if matches!(trimmed, ";" | ":" | "(" | ")" | "=") {
        DEFAULT_THEME.punctuation
    } else {
        DEFAULT_THEME.fg
    }
}

/// Render the formatted tree, one renderer line per list row
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    root: Option<&Node>,
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
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(root) = root else {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let rendered = render_formatted(root, 0);
    let all_items: Vec<ListItem> = rendered
        .lines()
        .map(|line| ListItem::new(line.to_string()).style(Style::default().fg(line_color(line))))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_line_detection() {
        assert!(is_branch_line("    /   \\"));
        assert!(is_branch_line("|"));
        assert!(!is_branch_line("    +"));
        assert!(!is_branch_line("   "));
    }

    #[test]
    fn test_line_colors() {
        assert_eq!(line_color("    42"), DEFAULT_THEME.number);
        assert_eq!(line_color("  ;"), DEFAULT_THEME.punctuation);
        assert_eq!(line_color("/   \\"), DEFAULT_THEME.comment);
        assert_eq!(line_color("dec"), DEFAULT_THEME.fg);
    }
}
