//! Main content area rendering (result list and pagination controls)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, AppState, Pagination, SearchStatus, UiState};
use super::utils::{calculate_book_column_widths, render_scrollable_list, truncate_string};

pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    if state.status == SearchStatus::Loading {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .border_style(border_style),
            );
        frame.render_widget(loading, area);
        return;
    }

    if state.result.is_empty() {
        let hint = match state.status {
            SearchStatus::Idle => "Type a title, author or ISBN and press Enter to search\n\nUse Tab to move between the search box and results\nPress h for help",
            _ => "No results to show",
        };
        let content = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(content, area);
        return;
    }

    // Controls above and below the list
    let controls_height = if state.pagination.is_visible() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(controls_height),
            Constraint::Min(0),
            Constraint::Length(controls_height),
        ])
        .split(area);

    render_pagination(frame, chunks[0], &state.pagination, state.is_loading());
    render_book_list(frame, chunks[1], state, ui_state.result_selected, is_focused);
    render_pagination(frame, chunks[2], &state.pagination, state.is_loading());
}

fn render_book_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    selected_index: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let (first, last) = state.pagination.display_range();
    let content_width = area.width.saturating_sub(4) as usize;
    let (num_width, title_width, author_width, year_width) =
        calculate_book_column_widths(content_width, last);

    let items: Vec<ListItem> = state
        .result
        .items
        .iter()
        .enumerate()
        .map(|(i, book)| {
            let number = first + i as u32;
            let fav = if state.is_favorite(&book.id) { "♥" } else { " " };

            let style = if i == selected_index && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if i == selected_index {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(format!(" {:>width$}  ", number, width = num_width), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<2}  ", fav), Style::default().fg(Color::Red)),
                Span::styled(truncate_string(&book.title, title_width), style),
                Span::raw("  "),
                Span::styled(truncate_string(&book.authors, author_width), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::styled(format!("{:>width$}", book.published_year, width = year_width), Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = match state.search_phrase {
        Some(ref phrase) => format!(" Results for \"{}\" ", phrase),
        None => " Results ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected_index, block);
}

fn render_pagination(frame: &mut Frame, area: Rect, pagination: &Pagination, loading: bool) {
    if !pagination.is_visible() || area.height == 0 {
        return;
    }

    let button_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(44)])
        .split(area);

    let info = Paragraph::new(format!(" {}", pagination.summary()))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(info, chunks[0]);

    let controls = Line::from(vec![
        Span::styled("← Previous Page", button_style(pagination.prev_enabled(loading))),
        Span::raw("  "),
        Span::styled(pagination.page_label(), Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled("Next Page →", button_style(pagination.next_enabled(loading))),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(controls), chunks[1]);
}
