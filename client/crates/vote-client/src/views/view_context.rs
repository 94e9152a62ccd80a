use crate::{ApiClient, ClientError, Navigator, NotificationCenter, SessionContext};

use std::sync::Arc;
use std::time::Duration;

use log::debug;

/// Everything a view needs from the application, handed over at construction.
#[derive(Clone)]
pub struct ViewContext {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionContext>,
    pub notifications: Arc<NotificationCenter>,
    pub navigator: Arc<Navigator>,
    pub login_redirect_delay: Duration,
}

impl ViewContext {
    /// Raise an error notification for `err`.
    ///
    /// Cancelled operations belong to a view that is gone, so they are only logged.
    pub(crate) fn report_failure(&self, title: &str, err: &ClientError) {
        debug!("{}: {}", title, err);
        if !err.is_cancelled() {
            self.notifications.error(title, err.user_message());
        }
    }

    /// Like [`report_failure`](Self::report_failure) but with a fixed description.
    pub(crate) fn report_load_failure(&self, title: &str, description: &str, err: &ClientError) {
        debug!("{}: {}", title, err);
        if !err.is_cancelled() {
            self.notifications.error(title, description);
        }
    }
}
