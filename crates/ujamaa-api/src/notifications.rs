//! Notification delivery and read state.

use uuid::Uuid;

use ujamaa_shared::models::Notification;

use crate::error::{ApiError, Result};
use crate::Platform;

impl Platform {
    /// Notifications delivered to a user, newest first.
    pub fn notifications_for(&self, user_id: Uuid) -> Vec<Notification> {
        self.store
            .list_notifications_for_user(user_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Mark a notification read.  Only the recipient may do so.
    pub fn mark_read(&mut self, actor: Uuid, notification_id: Uuid) -> Result<()> {
        self.require_actor(actor)?;

        let notification = self
            .store
            .get_notification_mut(notification_id)
            .ok_or(ApiError::NotFound)?;
        if notification.user_id != actor {
            return Err(ApiError::Forbidden);
        }

        notification.is_read = true;
        self.store.save()?;
        Ok(())
    }
}
