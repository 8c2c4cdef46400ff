use std::sync::Arc;

use reminder_types::Reminder;
use serde_json::Value;
use tokio::sync::RwLock;

/// In-memory, append-only reminder store. Clones share the same sequence.
#[derive(Clone, Default)]
pub struct ReminderRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    last_id: u64,
    items: Vec<Reminder>,
}

impl ReminderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, title: Option<Value>) -> Reminder {
        let mut store = self.inner.write().await;
        // id allocation and append share the lock so ids follow list order
        store.last_id += 1;
        let reminder = Reminder::new(store.last_id, title);
        store.items.push(reminder.clone());
        reminder
    }

    pub async fn list(&self) -> Vec<Reminder> {
        self.inner.read().await.items.clone()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.items.len()
    }
}
