//! Accessors for [`Notification`] records.

use uuid::Uuid;

use ujamaa_shared::models::Notification;

use crate::store::DataStore;

impl DataStore {
    pub fn put_notification(&mut self, notification: Notification) {
        self.notifications.insert(notification.id, notification);
    }

    pub fn get_notification(&self, id: Uuid) -> Option<&Notification> {
        self.notifications.get(&id)
    }

    /// Mutable access for the read flag.
    pub fn get_notification_mut(&mut self, id: Uuid) -> Option<&mut Notification> {
        self.notifications.get_mut(&id)
    }

    /// Notifications delivered to one user, newest first.
    pub fn list_notifications_for_user(&self, user_id: Uuid) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self
            .notifications
            .values()
            .filter(|n| n.user_id == user_id)
            .collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }
}
