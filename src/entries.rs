use crate::api::EntryQuery;
use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::{DailyEntry, DailyEntryUpdate, NewDailyEntry};
use crate::reactive::{Derived, FlagGuard, Readable, Subscription, Writable};
use std::{collections::HashMap, sync::Arc};
use tracing::warn;

pub type EntryList = Vec<Arc<DailyEntry>>;
pub type EntryIndex = HashMap<String, Arc<DailyEntry>>;

/// Page size requested by [`EntriesStore::load`].
pub const LOAD_LIMIT: u32 = 100;

/// Cached daily entries plus their `loading` and `error` flags.
///
/// Writes patch the cache from the server's response instead of reloading.
/// Every operation toggles the same flags, so overlapping calls race on
/// them and the last one to finish wins.
#[derive(Debug, Clone)]
pub struct EntriesStore {
    api: ApiClient,
    entries: Writable<EntryList>,
    loading: Writable<bool>,
    error: Writable<Option<String>>,
}

impl EntriesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            entries: Writable::default(),
            loading: Writable::new(false),
            error: Writable::new(None),
        }
    }

    pub fn loading(&self) -> &Writable<bool> {
        &self.loading
    }

    pub fn error(&self) -> &Writable<Option<String>> {
        &self.error
    }

    /// Index of the cache keyed by `date`, kept current for as long as the
    /// returned value lives.
    pub fn by_date(&self) -> Derived<EntryIndex> {
        Derived::new(self, |entries: &EntryList| index_by_date(entries))
    }

    /// Replaces the whole cache with up to [`LOAD_LIMIT`] entries in the
    /// optional range. On failure the cache is left as it was and the message
    /// lands in `error`.
    pub async fn load(&self, start_date: Option<&str>, end_date: Option<&str>) {
        let _loading = FlagGuard::raise(&self.loading);
        self.error.set(None);

        let query = EntryQuery {
            start_date: start_date.map(str::to_string),
            end_date: end_date.map(str::to_string),
            limit: Some(LOAD_LIMIT),
        };

        match self.api.list_entries(&query).await {
            Ok(entries) => self.entries.set(entries.into_iter().map(Arc::new).collect()),
            Err(err) => {
                warn!(error = %err, "failed to load entries");
                self.error.set(Some(err.message));
            }
        }
    }

    /// Posts `entry` and puts the server's copy at the front of the cache.
    pub async fn create(&self, entry: &NewDailyEntry) -> Result<Arc<DailyEntry>, ApiError> {
        let _loading = FlagGuard::raise(&self.loading);
        self.error.set(None);

        let created = Arc::new(self.record(self.api.create_entry(entry).await)?);
        self.entries.update(|entries| {
            let mut next = Vec::with_capacity(entries.len() + 1);
            next.push(Arc::clone(&created));
            next.extend(entries.iter().cloned());
            next
        });

        Ok(created)
    }

    /// Swaps the cached entry for `date` with the server's updated copy,
    /// leaving every other position untouched.
    pub async fn update(
        &self,
        date: &str,
        update: &DailyEntryUpdate,
    ) -> Result<Arc<DailyEntry>, ApiError> {
        let _loading = FlagGuard::raise(&self.loading);
        self.error.set(None);

        let updated = Arc::new(self.record(self.api.update_entry(date, update).await)?);
        self.entries.update(|entries| {
            entries
                .iter()
                .map(|entry| {
                    if entry.date == date {
                        Arc::clone(&updated)
                    } else {
                        Arc::clone(entry)
                    }
                })
                .collect()
        });

        Ok(updated)
    }

    pub async fn delete(&self, date: &str) -> Result<(), ApiError> {
        let _loading = FlagGuard::raise(&self.loading);
        self.error.set(None);

        self.record(self.api.delete_entry(date).await)?;
        self.entries.update(|entries| {
            entries
                .iter()
                .filter(|entry| entry.date != date)
                .cloned()
                .collect()
        });

        Ok(())
    }

    pub fn get_by_date<'a>(
        entries: &'a [Arc<DailyEntry>],
        date: &str,
    ) -> Option<&'a Arc<DailyEntry>> {
        entries.iter().find(|entry| entry.date == date)
    }

    fn record<V>(&self, result: Result<V, ApiError>) -> Result<V, ApiError> {
        if let Err(err) = &result {
            warn!(error = %err, "entry request failed");
            self.error.set(Some(err.message.clone()));
        }
        result
    }
}

impl Readable<EntryList> for EntriesStore {
    fn get(&self) -> EntryList {
        self.entries.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&EntryList) + Send + Sync + 'static,
    {
        self.entries.subscribe(callback)
    }
}

/// Later entries win when two share a date.
pub fn index_by_date(entries: &[Arc<DailyEntry>]) -> EntryIndex {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        index.insert(entry.date.clone(), Arc::clone(entry));
    }
    index
}
