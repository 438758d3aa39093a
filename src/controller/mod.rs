//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! feeds intents through the model's reducer, and runs the effects it returns.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Search, paging and book selection intents
//! - `favorites`: Loading and toggling favorites

mod input;
mod search;
mod favorites;

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::model::{build_request, AppModel, Catalog, Effect, FavoritesStore, Intent};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    catalog: Arc<dyn Catalog>,
    favorites: Arc<FavoritesStore>,
    page_size: u32,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        catalog: Arc<dyn Catalog>,
        favorites: Arc<FavoritesStore>,
        page_size: u32,
    ) -> Self {
        Self {
            model,
            catalog,
            favorites,
            page_size,
        }
    }

    /// Reduce `intent` and start whatever effect it produced.
    ///
    /// Returns the handle of a spawned fetch so callers can wait for it.
    pub async fn dispatch(&self, intent: Intent) -> Option<JoinHandle<()>> {
        let effect = self.model.lock().await.dispatch(intent);
        effect.map(|effect| self.run_effect(effect))
    }

    fn run_effect(&self, effect: Effect) -> JoinHandle<()> {
        match effect {
            Effect::Fetch { token, query } => {
                let catalog = self.catalog.clone();
                let model = self.model.clone();
                let params = build_request(&query.phrase, query.page, self.page_size);

                tracing::debug!(
                    token = token.0,
                    phrase = %query.phrase,
                    page = query.page,
                    "Fetching page"
                );

                // The model lock is only taken once the response is in
                tokio::spawn(async move {
                    let outcome = catalog.search(&params).await;
                    model.lock().await.dispatch(Intent::FetchCompleted {
                        token,
                        page: query.page,
                        outcome,
                    });
                })
            }
        }
    }
}
