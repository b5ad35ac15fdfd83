//! No-op notification adapter

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notice, Notifier};

/// Notifier that discards every notice
///
/// Used when notifications are disabled so no desktop connection is opened.
pub struct NoOpNotifier;

#[async_trait]
impl Notifier for NoOpNotifier {
    async fn notify(&self, _notice: &Notice) -> Result<(), NotificationError> {
        Ok(())
    }
}
