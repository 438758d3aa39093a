//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Intent};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Notices block all other interactions until dismissed
        if model.has_notice() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                let _ = model.dispatch(Intent::DismissNotice);
            }
            return Ok(());
        }

        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        if model.is_detail_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace => {
                    drop(model);
                    self.close_detail().await;
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    let id = model.focused_book_id();
                    drop(model);
                    if let Some(id) = id {
                        self.toggle_favorite(&id).await;
                    }
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true),
                _ => {}
            }
            return Ok(());
        }

        if model.ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    model.cycle_section_forward();
                    return Ok(());
                }
                KeyCode::Enter => {
                    let phrase = model.search_input().trim().to_string();
                    drop(model);
                    if !phrase.is_empty() {
                        self.perform_search(&phrase).await;
                    }
                    return Ok(());
                }
                KeyCode::Esc => {
                    model.clear_search();
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search();
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true);
                        return Ok(());
                    }
                    model.append_to_search(c);
                    return Ok(());
                }
                _ => {}
            }
        }

        if model.ui_state.active_section == ActiveSection::Results {
            match key.code {
                KeyCode::Up => {
                    model.move_selection_up();
                    return Ok(());
                }
                KeyCode::Down => {
                    model.move_selection_down();
                    return Ok(());
                }
                KeyCode::Enter => {
                    let id = model.selected_result_id();
                    drop(model);
                    if let Some(id) = id {
                        self.select_book(&id).await;
                    }
                    return Ok(());
                }
                KeyCode::Left | KeyCode::Char('[') => {
                    drop(model);
                    self.previous_page().await;
                    return Ok(());
                }
                KeyCode::Right | KeyCode::Char(']') => {
                    drop(model);
                    self.next_page().await;
                    return Ok(());
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    let id = model.selected_result_id();
                    drop(model);
                    if let Some(id) = id {
                        self.toggle_favorite(&id).await;
                    }
                    return Ok(());
                }
                KeyCode::Esc | KeyCode::Char('/') => {
                    model.set_active_section(ActiveSection::Search);
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true),
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward();
                } else {
                    model.cycle_section_forward();
                }
            }
            KeyCode::BackTab => model.cycle_section_backward(),
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup(),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::*;
    use crate::controller::testing::FakeCatalog;
    use crate::model::{AppModel, FavoritesStore, SearchStatus};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller.handle_key_event(press(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Let spawned fetches run to completion on the test runtime
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn setup(total: u32) -> (AppController, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let model = Arc::new(Mutex::new(AppModel::new(10)));
        let controller = AppController::new(
            model,
            Arc::new(FakeCatalog::with("dune", total)),
            Arc::new(FavoritesStore::in_dir(dir.path())),
            10,
        );
        (controller, dir)
    }

    #[tokio::test]
    async fn test_typing_and_enter_runs_search() {
        let (controller, _dir) = setup(15);

        type_text(&controller, "  dune ").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        settle().await;

        let model = controller.model.lock().await;
        assert_eq!(model.state().status, SearchStatus::Success);
        assert_eq!(model.state().search_phrase.as_deref(), Some("dune"));
        assert_eq!(model.ui_state.active_section, ActiveSection::Results);
    }

    #[tokio::test]
    async fn test_results_keys_open_detail_and_favorite() {
        let (controller, _dir) = setup(15);
        type_text(&controller, "dune").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        settle().await;

        controller.handle_key_event(press(KeyCode::Down)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char('f'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();

        let model = controller.model.lock().await;
        assert!(!model.is_detail_open());
        assert_eq!(model.state().favorite_ids, vec!["vol-1".to_string()]);
    }

    #[tokio::test]
    async fn test_right_arrow_goes_to_next_page() {
        let (controller, _dir) = setup(15);
        type_text(&controller, "dune").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        settle().await;

        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        settle().await;
        // Page 2 is the last one
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        settle().await;

        let model = controller.model.lock().await;
        assert_eq!(model.state().pagination.current_page, 2);
        assert_eq!(model.state().result.items.len(), 5);
    }

    #[tokio::test]
    async fn test_notice_blocks_input_until_dismissed() {
        let (controller, _dir) = setup(0);
        type_text(&controller, "dune").await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        settle().await;
        assert!(controller.model.lock().await.has_notice());

        controller.handle_key_event(press(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(controller.model.lock().await.search_input(), "dune");

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!controller.model.lock().await.has_notice());
    }
}
