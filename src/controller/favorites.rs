//! Favorites

use crate::model::Intent;
use super::AppController;

impl AppController {
    pub async fn load_favorites(&self) {
        let favorites = self.favorites.load();
        self.dispatch(Intent::FavoritesLoaded(favorites)).await;
    }

    pub async fn toggle_favorite(&self, id: &str) {
        let current = self.model.lock().await.state().favorite_ids.clone();
        let outcome = self.favorites.toggle(id, &current);

        if outcome.persisted {
            let now_favorite = outcome.favorites.iter().any(|fav| fav == id);
            tracing::info!(id, now_favorite, "Favorite toggled");
        } else {
            tracing::warn!(id, "Favorite toggled but not saved");
        }

        self.dispatch(Intent::FavoritesToggled(outcome)).await;
    }
}
