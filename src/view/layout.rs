//! Search bar and status line

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, AppState, UiState};

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, loading: bool) {
    let focused = ui_state.active_section == ActiveSection::Search;

    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_input.is_empty() {
        "Enter book title, author, or ISBN..."
    } else {
        &ui_state.search_input
    };

    let title = if loading { " Search (loading...) " } else { " Search " };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1))
                .border_style(if focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, area);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let favorites = format!(" ♥ {} favorites ", state.favorite_ids.len());
    let hint = " Tab switch · ←/→ page · f favorite · h help · q quit";

    let mut spans = vec![
        Span::styled(favorites, Style::default().fg(Color::Red)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ];

    if let Some(ref warning) = state.warning {
        spans.push(Span::styled(
            format!("  ⚠ {}", warning),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
