//! Search session state and its transitions
//!
//! `AppState` is an immutable record: every user intent or fetch outcome goes
//! through [`AppState::reduce`], which consumes the old state and returns the
//! next one together with an optional [`Effect`] for the controller to run.
//!
//! Fetches carry a [`RequestToken`]. Only the outcome tagged with the most
//! recently issued token is applied, so a slow response to an earlier request
//! can never overwrite a newer one.

use super::content::{BookDetail, CatalogPage, SearchResult};
use super::favorites::ToggleOutcome;
use super::pagination::Pagination;
use super::query::SearchQuery;
use crate::error::CatalogError;

pub const NO_RESULTS_MESSAGE: &str = "No books found matching your search. Try a different query.";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch data. Please check your network connection or try again later.";
pub const FAVORITES_NOT_SAVED_WARNING: &str =
    "Favorites could not be saved. Changes will be lost when you quit.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// Where the search cycle currently stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Empty,
    Failed,
}

/// Everything that can change the session state
#[derive(Debug)]
pub enum Intent {
    Search(String),
    ChangePage(u32),
    SelectBook(String),
    CloseDetail,
    DismissNotice,
    FetchCompleted {
        token: RequestToken,
        page: u32,
        outcome: Result<CatalogPage, CatalogError>,
    },
    FavoritesLoaded(Vec<String>),
    FavoritesToggled(ToggleOutcome),
}

/// Work the controller must perform after a transition
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch { token: RequestToken, query: SearchQuery },
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub search_phrase: Option<String>,
    pub result: SearchResult,
    pub status: SearchStatus,
    pub pagination: Pagination,
    pub error_message: Option<String>,
    /// Non-fatal persistence problems, kept apart from fetch errors
    pub warning: Option<String>,
    pub favorite_ids: Vec<String>,
    pub selected_book: Option<String>,
    last_token: RequestToken,
    in_flight: Option<RequestToken>,
}

impl AppState {
    pub fn new(page_size: u32) -> Self {
        Self {
            search_phrase: None,
            result: SearchResult::default(),
            status: SearchStatus::Idle,
            pagination: Pagination::new(page_size),
            error_message: None,
            warning: None,
            favorite_ids: Vec::new(),
            selected_book: None,
            last_token: RequestToken::default(),
            in_flight: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorite_ids.iter().any(|fav| fav == id)
    }

    pub fn selected_detail(&self) -> Option<BookDetail> {
        self.selected_book
            .as_deref()
            .and_then(|id| self.result.detail(id))
    }

    pub fn reduce(self, intent: Intent) -> Transition {
        match intent {
            Intent::Search(phrase) => self.start_search(phrase),
            Intent::ChangePage(page) => self.change_page(page),
            Intent::SelectBook(id) => {
                if self.result.contains(&id) {
                    Transition::to(AppState {
                        selected_book: Some(id),
                        ..self
                    })
                } else {
                    tracing::debug!(id = %id, "Ignoring selection of a book not in the result list");
                    Transition::unchanged(self)
                }
            }
            Intent::CloseDetail => Transition::to(AppState {
                selected_book: None,
                ..self
            }),
            Intent::DismissNotice => Transition::to(AppState {
                error_message: None,
                warning: None,
                ..self
            }),
            Intent::FetchCompleted { token, page, outcome } => {
                self.complete_fetch(token, page, outcome)
            }
            Intent::FavoritesLoaded(favorite_ids) => Transition::to(AppState {
                favorite_ids,
                ..self
            }),
            Intent::FavoritesToggled(ToggleOutcome { favorites, persisted }) => {
                let warning = if persisted {
                    self.warning
                } else {
                    Some(FAVORITES_NOT_SAVED_WARNING.to_string())
                };
                Transition::to(AppState {
                    favorite_ids: favorites,
                    warning,
                    ..self
                })
            }
        }
    }

    fn start_search(self, phrase: String) -> Transition {
        let phrase = phrase.trim().to_string();
        if phrase.is_empty() {
            return Transition::unchanged(self);
        }
        if let Some(stale) = self.in_flight {
            tracing::debug!(superseded = stale.0, "New search supersedes in-flight request");
        }
        AppState {
            selected_book: None,
            ..self
        }
        .issue_fetch(phrase, 1)
    }

    fn change_page(self, page: u32) -> Transition {
        let Some(phrase) = self.search_phrase.clone() else {
            tracing::debug!(page, "Page change ignored, no active search");
            return Transition::unchanged(self);
        };
        if self.is_loading() {
            tracing::debug!(page, "Page change rejected while a request is in flight");
            return Transition::unchanged(self);
        }
        if !self.pagination.contains_page(page) {
            tracing::debug!(
                page,
                total_pages = self.pagination.total_pages(),
                "Page change rejected, page out of range"
            );
            return Transition::unchanged(self);
        }
        self.issue_fetch(phrase, page)
    }

    fn issue_fetch(self, phrase: String, page: u32) -> Transition {
        let token = RequestToken(self.last_token.0 + 1);
        let query = SearchQuery {
            phrase: phrase.clone(),
            page,
        };
        let state = AppState {
            search_phrase: Some(phrase),
            status: SearchStatus::Loading,
            error_message: None,
            last_token: token,
            in_flight: Some(token),
            ..self
        };
        Transition {
            state,
            effect: Some(Effect::Fetch { token, query }),
        }
    }

    fn complete_fetch(
        self,
        token: RequestToken,
        page: u32,
        outcome: Result<CatalogPage, CatalogError>,
    ) -> Transition {
        if self.in_flight != Some(token) {
            tracing::debug!(
                token = token.0,
                latest = self.last_token.0,
                "Discarding stale catalog response"
            );
            return Transition::unchanged(self);
        }

        let cleared = AppState {
            in_flight: None,
            result: SearchResult::default(),
            pagination: Pagination {
                current_page: 1,
                total_results: 0,
                ..self.pagination
            },
            ..self
        };

        match outcome {
            Ok(catalog_page) if !catalog_page.volumes.is_empty() => {
                let mut result = SearchResult::from_page(catalog_page);
                // totalItems drifts between pages; never report fewer than what is on screen
                let seen = page.saturating_sub(1) * cleared.pagination.results_per_page
                    + result.items.len() as u32;
                if result.total_count < seen {
                    tracing::debug!(reported = result.total_count, seen, "Raising stale total count");
                    result.total_count = seen;
                }
                let pagination = Pagination {
                    current_page: page,
                    total_results: result.total_count,
                    ..cleared.pagination
                };
                Transition::to(AppState {
                    status: SearchStatus::Success,
                    result,
                    pagination,
                    ..cleared
                })
            }
            Ok(_) => {
                let error_message = (page == 1).then(|| NO_RESULTS_MESSAGE.to_string());
                Transition::to(AppState {
                    status: SearchStatus::Empty,
                    error_message,
                    ..cleared
                })
            }
            Err(e) => {
                tracing::error!(token = token.0, page, error = %e, "Fetch error");
                Transition::to(AppState {
                    status: SearchStatus::Failed,
                    error_message: Some(FETCH_FAILED_MESSAGE.to_string()),
                    ..cleared
                })
            }
        }
    }
}

/// Next state plus whatever the controller has to do about it
#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: AppState) -> Self {
        Self { state, effect: None }
    }

    fn unchanged(state: AppState) -> Self {
        Self::to(state)
    }
}
