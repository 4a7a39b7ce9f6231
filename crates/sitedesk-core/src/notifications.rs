//! Header notification list

use sitedesk_model::Notification;
use sitedesk_store::{RecordStore, StoreError};
use tracing::debug;

/// Notifications in display order
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: RecordStore<Notification>,
}

impl NotificationCenter {
    /// Center over existing notifications
    ///
    /// # Errors
    /// [`StoreError::DuplicateKey`] if two notifications share an id.
    pub fn new(items: Vec<Notification>) -> Result<Self, StoreError> {
        Ok(Self {
            items: RecordStore::with_records(items)?,
        })
    }

    /// All notifications
    #[must_use]
    pub fn all(&self) -> &[Notification] {
        self.items.as_slice()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Remove a notification; `false` if it was not there
    pub fn dismiss(&mut self, id: &str) -> bool {
        let removed = self.items.remove(&id.to_string()).is_some();
        debug!(id, removed, "notification dismissed");
        removed
    }

    /// Mark one notification read; `false` if it was not there
    pub fn mark_read(&mut self, id: &str) -> bool {
        self.items.update(&id.to_string(), |n| n.read = true)
    }

    /// Mark every notification read
    pub fn mark_all_read(&mut self) {
        let unread: Vec<String> = self
            .items
            .iter()
            .filter(|n| !n.read)
            .map(|n| n.id.clone())
            .collect();
        for id in unread {
            self.items.update(&id, |n| n.read = true);
        }
    }

    /// Underlying store, for subscriptions
    #[must_use]
    pub fn store_mut(&mut self) -> &mut RecordStore<Notification> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn center() -> NotificationCenter {
        NotificationCenter::new(seed::notifications().unwrap()).unwrap()
    }

    #[test]
    fn seed_has_five_unread() {
        assert_eq!(center().unread_count(), 5);
    }

    #[test]
    fn dismiss_and_mark() {
        let mut center = center();
        assert!(center.dismiss("3"));
        assert!(!center.dismiss("3"));
        assert_eq!(center.all().len(), 5);

        assert!(center.mark_read("1"));
        assert!(!center.mark_read("missing"));
        assert_eq!(center.unread_count(), 3);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }
}
