use crate::core::notify::Notifier;
use crate::domain::messages::NotificationKind;
use crate::domain::ports::{ContentSource, LiveRegion, NotificationSurface};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const LOAD_ERROR_MESSAGE: &str = "Error al cargar contenido";

#[derive(Debug, Clone, Serialize)]
pub struct LoadedContent {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

/// Loads optional JSON content. Failures never propagate: they are logged,
/// shown as an error notification, and reported as `None`.
pub struct ContentLoader<P> {
    notifier: Notifier<P>,
}

impl<P> ContentLoader<P>
where
    P: NotificationSurface + LiveRegion + Send + 'static,
{
    pub fn new(notifier: Notifier<P>) -> Self {
        Self { notifier }
    }

    pub async fn load<S>(&self, source: &S, url: &str) -> Option<LoadedContent>
    where
        S: ContentSource + ?Sized,
    {
        tracing::debug!("Loading dynamic content from: {}", url);

        match source.fetch_json(url).await {
            Ok(data) => Some(LoadedContent {
                url: url.to_string(),
                fetched_at: Utc::now(),
                data,
            }),
            Err(e) => {
                tracing::error!(
                    "❌ Failed to load content from {}: {} (Category: {:?})",
                    url,
                    e,
                    e.category()
                );
                self.notifier.show(LOAD_ERROR_MESSAGE, NotificationKind::Error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::announcer::{Announcer, DEFAULT_CLEAR_AFTER};
    use crate::core::notify::DEFAULT_VISIBLE_FOR;
    use crate::core::testing::FakePage;
    use crate::domain::ports::{lock_page, share, SharedPage};
    use crate::utils::error::{Result, SiteError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticSource(Option<serde_json::Value>);

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
            self.0.clone().ok_or_else(|| SiteError::ContentStatusError {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn loader() -> (SharedPage<FakePage>, ContentLoader<FakePage>) {
        let page = share(FakePage::sample());
        let announcer = Announcer::new(Arc::clone(&page), DEFAULT_CLEAR_AFTER);
        let notifier = Notifier::new(Arc::clone(&page), announcer, DEFAULT_VISIBLE_FOR);
        (page, ContentLoader::new(notifier))
    }

    #[tokio::test]
    async fn test_successful_load_returns_data() {
        let (page, loader) = loader();
        let source = StaticSource(Some(serde_json::json!({"destinos": ["Paris"]})));

        let content = loader.load(&source, "https://example.com/destinos.json").await;

        let content = content.expect("content should load");
        assert_eq!(content.data["destinos"][0], "Paris");
        assert!(lock_page(&page).notifications.is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_notifies_and_returns_none() {
        let (page, loader) = loader();

        let content = loader.load(&StaticSource(None), "https://example.com/missing.json").await;

        assert!(content.is_none());
        let page = lock_page(&page);
        assert_eq!(page.notifications.len(), 1);
        assert_eq!(page.notifications[0].notification.message, LOAD_ERROR_MESSAGE);
        assert_eq!(page.notifications[0].notification.kind, NotificationKind::Error);
        assert_eq!(page.live_text().as_deref(), Some(LOAD_ERROR_MESSAGE));
    }
}
