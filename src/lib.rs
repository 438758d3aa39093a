//! Book Finder - a terminal client for searching the Google Books catalog
//!
//! Search, page through results, read book details and keep a list of
//! favorites that survives restarts.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod view;

pub use config::Config;
pub use controller::AppController;
pub use error::{CatalogError, StoreError};
pub use model::AppModel;
pub use view::AppView;
