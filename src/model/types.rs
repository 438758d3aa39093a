//! Terminal UI state that never leaves the presentation layer

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        // Only two sections, so cycling backwards lands on the same one
        self.next()
    }
}

/// UI state for the application
#[derive(Clone, Debug)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_input: String,
    pub result_selected: usize,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Search,
            search_input: String::new(),
            result_selected: 0,
            show_help_popup: false,
        }
    }
}
