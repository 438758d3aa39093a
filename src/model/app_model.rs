//! Main application model: session state plus terminal UI state

use super::state::{AppState, Effect, Intent, SearchStatus};
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    state: AppState,
    page_size: u32,
    pub ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: AppState::new(page_size),
            page_size,
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run an intent through the reducer and swap in the resulting state
    pub fn dispatch(&mut self, intent: Intent) -> Option<Effect> {
        let previous_status = self.state.status;
        let current = std::mem::replace(&mut self.state, AppState::new(self.page_size));
        let transition = current.reduce(intent);
        self.state = transition.state;

        if previous_status == SearchStatus::Loading && self.state.status != SearchStatus::Loading {
            self.ui_state.result_selected = 0;
            if self.state.status == SearchStatus::Success {
                self.ui_state.active_section = ActiveSection::Results;
            }
        }

        transition.effect
    }

    pub fn snapshot(&self) -> (AppState, UiState) {
        (self.state.clone(), self.ui_state.clone())
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn cycle_section_forward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.prev();
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui_state.active_section = section;
    }

    pub fn append_to_search(&mut self, c: char) {
        self.ui_state.search_input.push(c);
    }

    pub fn backspace_search(&mut self) {
        self.ui_state.search_input.pop();
    }

    pub fn clear_search(&mut self) {
        self.ui_state.search_input.clear();
    }

    pub fn search_input(&self) -> &str {
        &self.ui_state.search_input
    }

    pub fn move_selection_up(&mut self) {
        if self.ui_state.result_selected > 0 {
            self.ui_state.result_selected -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let len = self.state.result.items.len();
        if self.ui_state.result_selected < len.saturating_sub(1) {
            self.ui_state.result_selected += 1;
        }
    }

    pub fn selected_result_id(&self) -> Option<String> {
        self.state
            .result
            .items
            .get(self.ui_state.result_selected)
            .map(|item| item.id.clone())
    }

    /// The book an action like "toggle favorite" applies to: the open detail first
    pub fn focused_book_id(&self) -> Option<String> {
        self.state
            .selected_book
            .clone()
            .or_else(|| self.selected_result_id())
    }

    pub fn has_notice(&self) -> bool {
        self.state.error_message.is_some() || self.state.warning.is_some()
    }

    pub fn is_detail_open(&self) -> bool {
        self.state.selected_book.is_some()
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }
}
