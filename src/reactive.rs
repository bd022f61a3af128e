//! Minimal observable values.
//!
//! A [`Writable`] holds a value and pushes a snapshot to every subscriber on
//! each `set`/`update`. A [`Derived`] recomputes from an upstream
//! [`Readable`] and only notifies its own subscribers once the new value is
//! in place. Async consumers can also use [`Writable::watch`].

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError, Weak,
};
use tokio::sync::watch;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Read side shared by writable and derived values.
pub trait Readable<T> {
    fn get(&self) -> T;

    /// Calls `callback` right away with the current value, then after every
    /// change until the returned [`Subscription`] is dropped.
    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static;
}

/// Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

struct Shared<T> {
    value: watch::Sender<T>,
    subscribers: Mutex<Vec<(u64, Callback<T>)>>,
    next_id: AtomicU64,
}

pub struct Writable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Writable")
            .field(&*self.shared.value.borrow())
            .finish()
    }
}

impl<T: Default + Clone + Send + Sync + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + 'static> Writable<T> {
    pub fn new(initial: T) -> Self {
        let (value, _) = watch::channel(initial);
        Self {
            shared: Arc::new(Shared {
                value,
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    pub fn set(&self, value: T) {
        self.shared.value.send_replace(value);
        self.notify();
    }

    /// Replaces the value with `transform(&current)` in one step.
    pub fn update<F>(&self, transform: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.shared.value.send_modify(|current| {
            let next = transform(current);
            *current = next;
        });
        self.notify();
    }

    pub fn watch(&self) -> watch::Receiver<T> {
        self.shared.value.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.shared.subscribers).len()
    }

    fn notify(&self) {
        let snapshot = T::clone(&self.shared.value.borrow());
        let callbacks: Vec<Callback<T>> = lock(&self.shared.subscribers)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(&snapshot);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Readable<T> for Writable<T> {
    fn get(&self) -> T {
        T::clone(&self.shared.value.borrow())
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.shared.subscribers).push((id, Arc::clone(&callback)));

        callback(&self.get());

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    lock(&shared.subscribers).retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }
}

/// Read-only value recomputed whenever its source changes.
pub struct Derived<U> {
    inner: Writable<U>,
    _source: Arc<Subscription>,
}

impl<U> Clone for Derived<U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _source: Arc::clone(&self._source),
        }
    }
}

impl<U: Clone + Send + Sync + 'static> Derived<U> {
    pub fn new<T, S, F>(source: &S, derive: F) -> Self
    where
        S: Readable<T>,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let inner = Writable::new(derive(&source.get()));
        let target = inner.clone();
        let subscription = source.subscribe(move |value| target.set(derive(value)));

        Self {
            inner,
            _source: Arc::new(subscription),
        }
    }

    pub fn watch(&self) -> watch::Receiver<U> {
        self.inner.watch()
    }
}

impl<U: Clone + Send + Sync + 'static> Readable<U> for Derived<U> {
    fn get(&self) -> U {
        self.inner.get()
    }

    fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&U) + Send + Sync + 'static,
    {
        self.inner.subscribe(callback)
    }
}

/// Holds a loading flag at `true` for as long as the guard lives.
pub(crate) struct FlagGuard<'a> {
    flag: &'a Writable<bool>,
}

impl<'a> FlagGuard<'a> {
    pub(crate) fn raise(flag: &'a Writable<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

fn lock<V>(mutex: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
