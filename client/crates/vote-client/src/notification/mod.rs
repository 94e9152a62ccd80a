pub(crate) mod notification;
pub(crate) mod notification_center;

pub use notification::{Notification, NotificationStatus};
pub use notification_center::{MAX_HISTORY, NotificationCenter};
