//! Search, paging and book selection

use crate::model::Intent;
use super::AppController;

impl AppController {
    pub async fn perform_search(&self, phrase: &str) {
        tracing::debug!(phrase, "Performing search");
        // The fetch reports back through the model on its own
        self.dispatch(Intent::Search(phrase.to_string())).await;
    }

    pub async fn change_page(&self, page: u32) {
        if self.dispatch(Intent::ChangePage(page)).await.is_none() {
            tracing::debug!(page, "Page change did not start a fetch");
        }
    }

    pub async fn next_page(&self) {
        let page = self.model.lock().await.state().pagination.current_page;
        self.change_page(page + 1).await;
    }

    pub async fn previous_page(&self) {
        let page = self.model.lock().await.state().pagination.current_page;
        if page > 1 {
            self.change_page(page - 1).await;
        }
    }

    pub async fn select_book(&self, id: &str) {
        self.dispatch(Intent::SelectBook(id.to_string())).await;
    }

    pub async fn close_detail(&self) {
        self.dispatch(Intent::CloseDetail).await;
    }
}
