use crate::reactive::{Readable, Writable};
use serde::{Deserialize, Serialize};
use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::task::AbortHandle;

/// How long a toast stays up before clearing itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ToastKind,
}

/// Transient UI flags: selected date, modal visibility and the current toast.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    selected_date: Writable<Option<String>>,
    modal_open: Writable<bool>,
    toast: Writable<Option<Toast>>,
    pending_clear: Arc<Mutex<Option<AbortHandle>>>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> &Writable<Option<String>> {
        &self.selected_date
    }

    pub fn modal_open(&self) -> &Writable<bool> {
        &self.modal_open
    }

    pub fn toast(&self) -> &Writable<Option<Toast>> {
        &self.toast
    }

    pub fn open_modal(&self, date: impl Into<String>) {
        self.selected_date.set(Some(date.into()));
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.selected_date.set(None);
    }

    /// Shows a toast and clears it after [`TOAST_DURATION`].
    ///
    /// A newer toast cancels the pending clear of the previous one, so each
    /// toast gets its full duration. Must run inside a tokio runtime.
    pub fn show_toast(&self, text: impl Into<String>, kind: ToastKind) {
        self.toast.set(Some(Toast {
            text: text.into(),
            kind,
        }));

        let toast = self.toast.clone();
        let clear = tokio::spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            toast.set(None);
        });

        let previous = self
            .pending_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(clear.abort_handle());
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    pub fn dismiss_toast(&self) {
        let pending = self
            .pending_clear
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(pending) = pending {
            pending.abort();
        }
        if self.toast.get().is_some() {
            self.toast.set(None);
        }
    }
}
