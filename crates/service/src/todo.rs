use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;

/// Text of a single todo entry. Creation tolerates an absent body, so an
/// entry may be empty (`None`), which serializes as JSON `null`.
pub type TodoText = Option<String>;

/// In-memory per-user todo sequences.
///
/// A single coarse `RwLock` guards the whole map; each operation locks once
/// and is atomic on its own. Nothing is persisted: the map lives exactly as
/// long as the process. Interleaved requests against the same username
/// resolve last-write-wins at operation granularity.
#[derive(Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<HashMap<String, Vec<TodoText>>>>,
}

impl TodoStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Append a todo for the user, creating the sequence on first use.
    /// Duplicates are allowed and the text is stored exactly as given.
    pub async fn add(&self, username: &str, text: TodoText) -> TodoText {
        let mut map = self.inner.write().await;
        map.entry(username.to_string()).or_default().push(text.clone());
        debug!(user = %username, "todo appended");
        text
    }

    /// Current sequence for the user, in insertion order.
    /// A username never seen reads as an empty sequence.
    pub async fn list(&self, username: &str) -> Vec<TodoText> {
        let map = self.inner.read().await;
        map.get(username).cloned().unwrap_or_default()
    }

    /// Remove and return the entry at `idx` of the user's sequence.
    ///
    /// A username never seen is an error. For a known user, an absent or
    /// out-of-range index leaves the sequence untouched and yields `Ok(None)`;
    /// a valid index removes that entry and shifts later ones down.
    pub async fn remove(
        &self,
        username: &str,
        idx: Option<usize>,
    ) -> Result<Option<TodoText>, ServiceError> {
        let mut map = self.inner.write().await;
        let todos = map
            .get_mut(username)
            .ok_or_else(|| ServiceError::not_found("user"))?;
        match idx {
            Some(i) if i < todos.len() => {
                let removed = todos.remove(i);
                debug!(user = %username, idx = i, "todo removed");
                Ok(Some(removed))
            }
            _ => Ok(None),
        }
    }

    /// Number of usernames with a sequence, emptied ones included.
    pub async fn users(&self) -> usize {
        self.inner.read().await.len()
    }
}
