use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_std::channel::Sender;
use core_types::{MenuEntry, NormalizedContent, events::ContentEvent};
use domain::{
    content_normalizer::{coming_soon_content, error_content, home_content, normalize},
    menu::{HOME_ENTRY_ID, MenuRegistry},
};
use http_fetcher::{FetchError, ops::ContentFetcherOps};
use tracing::{debug, error, info, warn};

use crate::error::Error;

/// Result of a menu selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// The content was published and is now current.
    Applied(Arc<NormalizedContent>),
    /// A later selection was made while this one was in flight; its result
    /// was dropped.
    Superseded,
}

/// What the service publishes. Only touched in short synchronous sections.
#[derive(Debug)]
struct ContentState {
    current: Arc<NormalizedContent>,
    loading: bool,
    latest_token: u64,
}

impl ContentState {
    fn begin_request(&mut self) -> u64 {
        self.latest_token += 1;
        self.loading = true;
        self.latest_token
    }

    /// Publishes `content` if `token` is still the latest request.
    fn apply(&mut self, token: u64, content: NormalizedContent) -> Option<Arc<NormalizedContent>> {
        if token != self.latest_token {
            return None;
        }
        self.current = Arc::new(content);
        self.loading = false;
        Some(self.current.clone())
    }
}

/// Service for turning menu selections into the current content.
///
/// Every selection takes a new request token. A response is only published
/// while its token is the latest one, so when the user clicks through the
/// menu faster than the backend answers, the last click wins.
pub struct ContentService {
    registry: Arc<MenuRegistry>,
    fetcher: Arc<dyn ContentFetcherOps>,
    state: Mutex<ContentState>,
    events: Option<Sender<ContentEvent>>,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("registry", &self.registry)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ContentService {
    pub fn new(registry: Arc<MenuRegistry>, fetcher: Arc<dyn ContentFetcherOps>) -> Self {
        Self {
            registry,
            fetcher,
            state: Mutex::new(ContentState {
                current: Arc::new(home_content()),
                loading: false,
                latest_token: 0,
            }),
            events: None,
        }
    }

    /// Report selection progress on `events`.
    pub fn with_events(mut self, events: Sender<ContentEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// The content currently shown.
    pub fn current(&self) -> Arc<NormalizedContent> {
        self.lock_state().current.clone()
    }

    /// Whether the latest selection is still waiting for the backend.
    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Select a menu entry and publish its content.
    ///
    /// Home and entries without an endpoint are answered from fixed records
    /// without a request. Anything else is fetched once and normalized; when
    /// the fetch fails the error record is published instead.
    ///
    /// # Errors
    ///
    /// Returns `Error::MenuEntryNotFound` for an unknown id. The current
    /// content is left untouched in that case.
    pub async fn select(&self, entry_id: &str) -> Result<SelectionOutcome, Error> {
        let entry = self.find_entry(entry_id)?;
        let token = self.lock_state().begin_request();
        info!(entry_id = %entry.id, token, "Selected menu entry");
        self.emit(ContentEvent::Loading {
            entry_id: entry.id.clone(),
            token,
        })
        .await;

        let (content, failure) = match self.load(&entry).await {
            Ok(content) => (content, None),
            Err(e) => {
                error!(
                    entry_id = %entry.id,
                    endpoint = entry.endpoint.as_deref().unwrap_or_default(),
                    error = %e,
                    "Failed to load content"
                );
                (error_content(), Some(e.to_string()))
            }
        };

        let applied = self.lock_state().apply(token, content);
        let Some(content) = applied else {
            warn!(entry_id = %entry.id, token, "Discarding superseded response");
            self.emit(ContentEvent::Superseded {
                entry_id: entry.id,
                token,
            })
            .await;
            return Ok(SelectionOutcome::Superseded);
        };

        let event = match failure {
            Some(error) => ContentEvent::Failed {
                entry_id: entry.id,
                token,
                error,
            },
            None => ContentEvent::Loaded {
                entry_id: entry.id,
                token,
            },
        };
        self.emit(event).await;
        Ok(SelectionOutcome::Applied(content))
    }

    /// Fetch and normalize the content of an entry without publishing it.
    ///
    /// Unlike [`ContentService::select`], fetch failures are returned to the
    /// caller instead of being replaced with the error record.
    pub async fn preview(&self, entry_id: &str) -> Result<NormalizedContent, Error> {
        let entry = self.find_entry(entry_id)?;
        Ok(self.load(&entry).await?)
    }

    fn find_entry(&self, entry_id: &str) -> Result<MenuEntry, Error> {
        self.registry
            .find(entry_id)
            .cloned()
            .ok_or_else(|| Error::MenuEntryNotFound(entry_id.to_string()))
    }

    async fn load(&self, entry: &MenuEntry) -> Result<NormalizedContent, FetchError> {
        if entry.id == HOME_ENTRY_ID {
            return Ok(home_content());
        }
        let Some(endpoint) = entry.endpoint.as_deref() else {
            debug!(entry_id = %entry.id, "Entry has no endpoint");
            return Ok(coming_soon_content(&entry.id));
        };

        let payload = self.fetcher.fetch_json(endpoint).await?;
        Ok(normalize(
            &payload,
            endpoint,
            entry.filter.as_deref(),
            Some(&entry.id),
        ))
    }

    fn lock_state(&self) -> MutexGuard<'_, ContentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn emit(&self, event: ContentEvent) {
        if let Some(events) = &self.events {
            if let Err(e) = events.send(event).await {
                debug!("Content event receiver gone: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use core_types::ContentKind;
    use domain::content_normalizer::ERROR_CONTENT_ID;
    use http_fetcher::mock::MockContentFetcher;
    use serde_json::json;

    const EVENTS: &str = "/events?_format=json";
    const ACTIVITIES: &str = "/activities?_format=json";
    const ARTICLES: &str = "/article?_format=json";

    fn service_with(mock: &MockContentFetcher) -> ContentService {
        ContentService::new(Arc::new(MenuRegistry::temple()), Arc::new(mock.clone()))
    }

    fn applied(outcome: SelectionOutcome) -> Arc<NormalizedContent> {
        match outcome {
            SelectionOutcome::Applied(content) => content,
            SelectionOutcome::Superseded => panic!("selection was superseded"),
        }
    }

    #[async_std::test]
    async fn test_initial_content_is_home() {
        let service = service_with(&MockContentFetcher::new());
        assert_eq!(service.current().id, "home");
        assert!(!service.is_loading());
    }

    #[async_std::test]
    async fn test_select_home_does_not_fetch() {
        let mock = MockContentFetcher::new();
        let service = service_with(&mock);

        let content = applied(service.select("home").await.unwrap());

        assert_eq!(content.id, "home");
        assert_eq!(content.title, "Welcome to Vedic Temple");
        assert_eq!(mock.request_count(), 0);
    }

    #[async_std::test]
    async fn test_select_group_entry_shows_coming_soon() {
        let mock = MockContentFetcher::new();
        let service = service_with(&mock);

        let content = applied(service.select("more").await.unwrap());

        assert_eq!(content.id, "more");
        assert_eq!(content.title, "Content Not Available");
        assert_eq!(mock.request_count(), 0);
    }

    #[async_std::test]
    async fn test_select_fetches_and_normalizes() {
        let mock = MockContentFetcher::new();
        mock.add_response(
            ACTIVITIES,
            json!([
                { "nid": [{ "value": 1 }], "title": [{ "value": "Yoga" }] },
                { "nid": [{ "value": 2 }], "title": [{ "value": "Bhajans" }] }
            ]),
        );
        let service = service_with(&mock);

        let content = applied(service.select("activities").await.unwrap());

        assert_eq!(content.title, "Temple Activities");
        let titles: Vec<&str> = content.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Bhajans", "Yoga"]);
        assert_eq!(mock.requests(), vec![ACTIVITIES.to_string()]);
        assert_eq!(service.current(), content);
        assert!(!service.is_loading());
    }

    #[async_std::test]
    async fn test_select_passes_filter_for_articles() {
        let mock = MockContentFetcher::new();
        mock.add_response(
            ARTICLES,
            json!([
                { "nid": [{ "value": 7 }], "title": [{ "value": "Our Priest" }],
                  "field_menu_item": [{ "value": "Priest" }],
                  "body": [{ "value": "<p>Pandit ji</p>" }] },
                { "nid": [{ "value": 8 }], "title": [{ "value": "Legal notice" }],
                  "field_menu_item": [{ "value": "Legal" }] }
            ]),
        );
        let service = service_with(&mock);

        let content = applied(service.select("priest").await.unwrap());

        assert_eq!(content.title, "Our Priest");
        assert_eq!(content.template.as_deref(), Some("article"));
    }

    #[async_std::test]
    async fn test_failed_fetch_publishes_error_record() {
        let mock = MockContentFetcher::new();
        mock.fail_for(EVENTS, FetchError::Timeout(Duration::from_secs(15)));
        let service = service_with(&mock);

        let content = applied(service.select("events").await.unwrap());

        assert_eq!(content.id, ERROR_CONTENT_ID);
        assert_eq!(content.title, "Content Not Available");
        assert_eq!(content.description, "Unable to load content from the server.");
        assert_eq!(
            content.body.as_deref(),
            Some("<p>This content is temporarily unavailable. Please try again later.</p>")
        );
        assert_eq!(content.kind, ContentKind::Page);
        assert!(!service.is_loading());
    }

    #[async_std::test]
    async fn test_unparseable_response_publishes_error_record() {
        let mock = MockContentFetcher::new();
        mock.fail_for(
            ACTIVITIES,
            FetchError::InvalidJson("expected value at line 1 column 1".into()),
        );
        let service = service_with(&mock);

        let content = applied(service.select("activities").await.unwrap());

        assert_eq!(*content, error_content());
        assert_eq!(service.current().id, ERROR_CONTENT_ID);
    }

    #[async_std::test]
    async fn test_unknown_entry_leaves_content_untouched() {
        let mock = MockContentFetcher::new();
        let service = service_with(&mock);

        let result = service.select("does-not-exist").await;

        assert_eq!(
            result,
            Err(Error::MenuEntryNotFound("does-not-exist".to_string()))
        );
        assert_eq!(service.current().id, "home");
        assert_eq!(mock.request_count(), 0);
    }

    #[async_std::test]
    async fn test_stale_response_is_discarded() {
        let mock = MockContentFetcher::new();
        mock.add_response(EVENTS, json!([{ "title": [{ "value": "Diwali" }] }]));
        mock.delay_for(EVENTS, Duration::from_millis(300));
        mock.add_response(ACTIVITIES, json!([{ "title": [{ "value": "Yoga" }] }]));
        let service = Arc::new(service_with(&mock));

        let slow = {
            let service = service.clone();
            async_std::task::spawn(async move { service.select("events").await })
        };
        async_std::task::sleep(Duration::from_millis(50)).await;
        assert!(service.is_loading());

        let fast = applied(service.select("activities").await.unwrap());
        let slow = slow.await.unwrap();

        assert_eq!(slow, SelectionOutcome::Superseded);
        assert_eq!(fast.title, "Temple Activities");
        assert_eq!(service.current().title, "Temple Activities");
        assert!(!service.is_loading());
    }

    #[async_std::test]
    async fn test_events_are_reported() {
        let mock = MockContentFetcher::new();
        mock.fail_for(EVENTS, FetchError::HttpStatus(500));
        let (tx, rx) = async_std::channel::unbounded();
        let service = service_with(&mock).with_events(tx);

        service.select("home").await.unwrap();
        service.select("events").await.unwrap();

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(
            events,
            vec![
                ContentEvent::Loading {
                    entry_id: "home".into(),
                    token: 1
                },
                ContentEvent::Loaded {
                    entry_id: "home".into(),
                    token: 1
                },
                ContentEvent::Loading {
                    entry_id: "events".into(),
                    token: 2
                },
                ContentEvent::Failed {
                    entry_id: "events".into(),
                    token: 2,
                    error: "HTTP error: status 500".into()
                },
            ]
        );
    }

    #[async_std::test]
    async fn test_preview_does_not_publish() {
        let mock = MockContentFetcher::new();
        mock.add_response(EVENTS, json!([{ "title": [{ "value": "Diwali" }] }]));
        mock.fail_for(ACTIVITIES, FetchError::HttpStatus(503));
        let service = service_with(&mock);

        let content = service.preview("events").await.unwrap();
        assert_eq!(content.title, "Upcoming Events");
        assert_eq!(service.current().id, "home");

        assert_eq!(
            service.preview("activities").await,
            Err(Error::FetchError("HTTP error: status 503".to_string()))
        );
    }
}
