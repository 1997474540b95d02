use crate::core::announcer::Announcer;
use crate::domain::messages::{Notification, NotificationKind};
use crate::domain::ports::{lock_page, LiveRegion, NotificationSurface, SharedPage};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime;

pub const DEFAULT_VISIBLE_FOR: Duration = Duration::from_millis(3000);
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Transient toast messages. Each one is also announced to screen readers.
pub struct Notifier<P> {
    page: SharedPage<P>,
    announcer: Announcer<P>,
    visible_for: Duration,
}

impl<P> Clone for Notifier<P> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            announcer: self.announcer.clone(),
            visible_for: self.visible_for,
        }
    }
}

impl<P> Notifier<P>
where
    P: NotificationSurface + LiveRegion + Send + 'static,
{
    pub fn new(page: SharedPage<P>, announcer: Announcer<P>, visible_for: Duration) -> Self {
        Self {
            page,
            announcer,
            visible_for,
        }
    }

    pub fn show(&self, message: &str, kind: NotificationKind) {
        let handle = {
            let mut page = lock_page(&self.page);
            let handle = page.show_notification(&Notification::new(message, kind));
            if let Some(handle) = handle {
                page.enter_notification(handle);
            }
            self.announcer.announce_on(&mut page, message);
            handle
        };

        let Some(handle) = handle else {
            return;
        };
        let Ok(rt) = runtime::Handle::try_current() else {
            tracing::warn!("No async runtime, notification will not be dismissed");
            return;
        };

        let page = Arc::clone(&self.page);
        let visible_for = self.visible_for;
        rt.spawn(async move {
            tokio::time::sleep(visible_for).await;
            lock_page(&page).dismiss_notification(handle);
            tokio::time::sleep(EXIT_TRANSITION).await;
            lock_page(&page).remove_notification(handle);
        });
    }
}
