//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust.

mod noop;
mod notify_rust;

pub use self::notify_rust::NotifyRustNotifier;
pub use noop::NoOpNotifier;

use crate::application::ports::Notifier;

/// Create the notifier for the given setting
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(NoOpNotifier)
    }
}
