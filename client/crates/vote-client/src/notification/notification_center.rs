use crate::{Notification, NotificationStatus};

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use log::{info, warn};
use tokio::sync::broadcast;
use tokio::time::Instant;

const CHANNEL_CAPACITY: usize = 64;

/// Oldest notifications are dropped beyond this many.
pub const MAX_HISTORY: usize = 256;

/// Collects notifications, dismisses them after their duration and fans them
/// out to subscribers.
pub struct NotificationCenter {
    duration: Duration,
    history: Mutex<VecDeque<Notification>>,
    tx: broadcast::Sender<Notification>,
}

impl NotificationCenter {
    pub fn new(duration: Duration) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            duration,
            history: Mutex::new(VecDeque::with_capacity(CHANNEL_CAPACITY)),
            tx,
        }
    }

    pub fn success<T: Into<String>, D: Into<String>>(&self, title: T, description: D) {
        self.push(NotificationStatus::Success, title, description);
    }

    pub fn error<T: Into<String>, D: Into<String>>(&self, title: T, description: D) {
        self.push(NotificationStatus::Error, title, description);
    }

    pub fn info<T: Into<String>, D: Into<String>>(&self, title: T, description: D) {
        self.push(NotificationStatus::Info, title, description);
    }

    pub fn push<T: Into<String>, D: Into<String>>(
        &self,
        status: NotificationStatus,
        title: T,
        description: D,
    ) {
        let notification = Notification {
            title: title.into(),
            description: description.into(),
            status,
            raised_at: Instant::now(),
            duration: self.duration,
        };

        match status {
            NotificationStatus::Error => warn!("{}", notification),
            _ => info!("{}", notification),
        }

        // No subscribers is fine
        let _ = self.tx.send(notification.clone());

        let mut history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        if history.len() == MAX_HISTORY {
            history.pop_front();
        }
        history.push_back(notification);
    }

    /// Notifications that have not been dismissed yet.
    pub fn active(&self) -> Vec<Notification> {
        let now = Instant::now();
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|n| !n.is_expired_at(now))
            .cloned()
            .collect()
    }

    /// The most recent notifications (up to [`MAX_HISTORY`]), oldest first.
    pub fn history(&self) -> Vec<Notification> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .back()
            .cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }
}
