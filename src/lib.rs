pub mod api;
pub mod client;
pub mod config;
pub mod entries;
pub mod errors;
pub mod issue_types;
pub mod models;
pub mod reactive;
pub mod state;
pub mod ui;

pub use api::{EntryQuery, DEFAULT_STATS_DAYS};
pub use client::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use errors::ApiError;
pub use reactive::{Derived, Readable, Subscription, Writable};
pub use state::AppState;
