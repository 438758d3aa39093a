//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Terminal UI state (focus, input buffer, selection)
//! - `content`: Catalog records and the book summaries/details derived from them
//! - `query`: Request parameters for one page of a search
//! - `pagination`: Page count, display range and button enablement
//! - `favorites`: Favorite ids persisted in a key-value slot
//! - `catalog_client`: Google Books API client
//! - `state`: Session state record and its reducer
//! - `app_model`: Main application model wrapping the above

mod types;
mod content;
mod query;
mod pagination;
mod favorites;
mod catalog_client;
mod state;
mod app_model;

pub use types::{ActiveSection, UiState};

pub use content::{BookDetail, BookSummary, CatalogPage, SearchResult, Volume, VolumeInfo};

pub use query::{build_request, RequestParams, SearchQuery};

pub use pagination::Pagination;

pub use favorites::{FavoritesStore, FileSlot, KeyValueSlot, ToggleOutcome, FAVORITES_KEY};

pub use catalog_client::{Catalog, GoogleBooksClient};

pub use state::{
    AppState, Effect, Intent, RequestToken, SearchStatus, FAVORITES_NOT_SAVED_WARNING,
    FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE,
};

pub use app_model::AppModel;
