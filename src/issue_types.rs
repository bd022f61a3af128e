use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{IssueType, NewIssueType};
use crate::reactive::{FlagGuard, Readable, Subscription, Writable};
use tracing::error;

/// Cached list of known issue types.
///
/// There is no error flag: a failed `load` is logged and swallowed, a failed
/// `create` is logged and handed back to the caller.
#[derive(Debug, Clone)]
pub struct IssueTypesStore {
    api: ApiClient,
    types: Writable<Vec<IssueType>>,
    loading: Writable<bool>,
}

impl IssueTypesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            types: Writable::default(),
            loading: Writable::new(false),
        }
    }

    pub fn loading(&self) -> &Writable<bool> {
        &self.loading
    }

    pub async fn load(&self) {
        let _loading = FlagGuard::raise(&self.loading);

        match self.api.list_issue_types().await {
            Ok(types) => self.types.set(types),
            Err(err) => error!(error = %err, "failed to load issue types"),
        }
    }

    /// Creates the type, then refetches the full list rather than appending.
    ///
    /// The two requests are not atomic: if the refetch fails the new type
    /// exists server-side but the cache does not show it.
    pub async fn create(&self, issue_type: &NewIssueType) -> Result<IssueType, ApiError> {
        let result = async {
            let created = self.api.create_issue_type(issue_type).await?;
            let types = self.api.list_issue_types().await?;
            self.types.set(types);
            Ok::<_, ApiError>(created)
        }
        .await;

        if let Err(err) = &result {
            error!(error = %err, name = %issue_type.name, "failed to create issue type");
        }
        result
    }
}

impl Readable<Vec<IssueType>> for IssueTypesStore {
    fn get(&self) -> Vec<IssueType> {
        self.types.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&Vec<IssueType>) + Send + Sync + 'static,
    {
        self.types.subscribe(callback)
    }
}
