//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(last_number: u32) -> usize {
    if last_number == 0 {
        2
    } else {
        let digits = (last_number as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// Cut `text` to `limit` characters, marking the cut with "..."
pub fn clip_description(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let clipped: String = text.chars().take(limit).collect();
        format!("{}...", clipped)
    } else {
        text.to_string()
    }
}

/// Returns (num_width, title_width, author_width, year_width)
pub fn calculate_book_column_widths(content_width: usize, last_number: u32) -> (usize, usize, usize, usize) {
    // Format: " {num}  {fav}  {title}  {authors}  {year}"
    let num_width = calculate_num_width(last_number);
    let fav_width = 2;
    let year_width = 4;
    let fixed_width = 1 + num_width + 2 + fav_width + 2 + 2 + 2 + year_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 60) / 100;
    let author_width = remaining_width.saturating_sub(title_width);

    (num_width, title_width, author_width, year_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_pads_and_cuts() {
        assert_eq!(truncate_string("Dune", 6), "Dune  ");
        assert_eq!(truncate_string("Children of Dune", 10), "Childre...");
    }

    #[test]
    fn test_clip_description_at_limit() {
        let long = "a".repeat(501);
        let clipped = clip_description(&long, 500);
        assert_eq!(clipped.len(), 503);
        assert!(clipped.ends_with("..."));

        let exact = "b".repeat(500);
        assert_eq!(clip_description(&exact, 500), exact);
    }

    #[test]
    fn test_num_width() {
        assert_eq!(calculate_num_width(0), 2);
        assert_eq!(calculate_num_width(9), 2);
        assert_eq!(calculate_num_width(10), 3);
        assert_eq!(calculate_num_width(120), 4);
    }
}
