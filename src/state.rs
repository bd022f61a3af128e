use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::entries::{EntriesStore, EntryIndex};
use crate::errors::ApiError;
use crate::issue_types::IssueTypesStore;
use crate::reactive::Derived;
use crate::ui::UiState;

/// Every store the UI needs, built once at startup and passed down
/// explicitly. Tests build a fresh one each.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub entries: EntriesStore,
    pub entries_by_date: Derived<EntryIndex>,
    pub issue_types: IssueTypesStore,
    pub ui: UiState,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_client(ApiClient::new(config)?))
    }

    pub fn with_client(api: ApiClient) -> Self {
        let entries = EntriesStore::new(api.clone());
        let entries_by_date = entries.by_date();

        Self {
            issue_types: IssueTypesStore::new(api.clone()),
            ui: UiState::new(),
            entries,
            entries_by_date,
            api,
        }
    }
}
