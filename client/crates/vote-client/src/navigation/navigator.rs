use crate::Route;

use std::sync::{Mutex, PoisonError};

use log::debug;
use tokio::sync::watch;

/// Tracks the current screen and every screen visited.
pub struct Navigator {
    current_tx: watch::Sender<Route>,
    history: Mutex<Vec<Route>>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        let (current_tx, _) = watch::channel(start);
        Self {
            current_tx,
            history: Mutex::new(vec![start]),
        }
    }

    pub fn navigate(&self, route: Route) {
        debug!("Navigating to {}", route);
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
        self.current_tx.send_replace(route);
    }

    pub fn current(&self) -> Route {
        *self.current_tx.borrow()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receiver that observes every later navigation.
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.current_tx.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::default())
    }
}
