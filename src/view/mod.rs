//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Rendering is a pure function of the session state and the UI state.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `layout`: Search bar and status line
//! - `content`: Result list and pagination controls
//! - `overlays`: Modal overlays (notice, book detail, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AppState, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &AppState, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_search_bar(frame, chunks[0], ui_state, state.is_loading());

        content::render_results(frame, chunks[1], state, ui_state);

        layout::render_status_line(frame, chunks[2], state);

        if let Some(detail) = state.selected_detail() {
            overlays::render_book_detail(frame, &detail, state.is_favorite(&detail.summary.id));
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }

        // Notices go on top of everything else
        if state.error_message.is_some() || state.warning.is_some() {
            overlays::render_notice(frame, state);
        }
    }
}
