use std::sync::Arc;

use crate::core::interfaces::adapters::{ArticleSearchProvider, ImageSearchProvider};
use crate::core::interfaces::ports::{ResponseContainer, SearchField};
use crate::core::models::{InsertPosition, LookupKind};
use crate::global_constants::{LOG_TAG_ORCHESTRATOR, MIN_ARTICLES_FOR_LIST};
use crate::presentation::{
    render_article_list, render_image_figure, render_no_articles, render_no_images,
    render_request_error,
};

/// Runs an image lookup and an article lookup per submitted keyword and
/// renders each into the shared response container as soon as it settles.
pub struct SearchOrchestrator {
    image_search_provider: Arc<dyn ImageSearchProvider>,
    article_search_provider: Arc<dyn ArticleSearchProvider>,
    search_field: Arc<dyn SearchField>,
    response_container: Arc<dyn ResponseContainer>,
}

impl SearchOrchestrator {
    pub fn build(
        image_search_provider: Arc<dyn ImageSearchProvider>,
        article_search_provider: Arc<dyn ArticleSearchProvider>,
        search_field: Arc<dyn SearchField>,
        response_container: Arc<dyn ResponseContainer>,
    ) -> Self {
        Self {
            image_search_provider,
            article_search_provider,
            search_field,
            response_container,
        }
    }

    /// Shows an image for `default_image_query` without any user input.
    pub async fn initialize(&self, default_image_query: &str) {
        log::info!(
            "{} Loading default image for '{}'",
            LOG_TAG_ORCHESTRATOR,
            default_image_query
        );
        self.fetch_image(default_image_query).await;
    }

    pub async fn handle_submit(&self) {
        let keyword = self.search_field.read_value();
        log::info!("{} Search submitted: '{}'", LOG_TAG_ORCHESTRATOR, keyword);

        if let Err(error) = self.response_container.clear() {
            log::warn!(
                "{} Failed to clear previous results: {}",
                LOG_TAG_ORCHESTRATOR,
                error
            );
        }

        let image_lookup = self.fetch_image(&keyword);
        let article_lookup = self.fetch_articles(&keyword);
        self.search_field.clear_value();

        futures::join!(image_lookup, article_lookup);
    }

    pub async fn fetch_image(&self, keyword: &str) {
        match self.image_search_provider.search_images(keyword).await {
            Ok(Some(image)) => {
                self.insert_fragment(
                    InsertPosition::AfterBegin,
                    &render_image_figure(keyword, &image),
                );
            }
            Ok(None) => {
                log::info!("{} No images for '{}'", LOG_TAG_ORCHESTRATOR, keyword);
                self.insert_fragment(InsertPosition::AfterBegin, &render_no_images());
            }
            Err(error) => self.handle_request_error(&error, LookupKind::Image),
        }
    }

    pub async fn fetch_articles(&self, keyword: &str) {
        match self.article_search_provider.search_articles(keyword).await {
            Ok(articles) if articles.len() >= MIN_ARTICLES_FOR_LIST => {
                self.insert_fragment(InsertPosition::BeforeEnd, &render_article_list(&articles));
            }
            Ok(articles) => {
                log::info!(
                    "{} Only {} articles for '{}', showing placeholder",
                    LOG_TAG_ORCHESTRATOR,
                    articles.len(),
                    keyword
                );
                self.insert_fragment(InsertPosition::BeforeEnd, &render_no_articles());
            }
            Err(error) => self.handle_request_error(&error, LookupKind::Articles),
        }
    }

    fn handle_request_error(&self, error: &anyhow::Error, kind: LookupKind) {
        log::error!(
            "{} Error fetching {}: {:#}",
            LOG_TAG_ORCHESTRATOR,
            kind,
            error
        );
        self.insert_fragment(InsertPosition::BeforeEnd, &render_request_error(kind));
    }

    fn insert_fragment(&self, position: InsertPosition, html: &str) {
        if let Err(error) = self.response_container.insert_adjacent_html(position, html) {
            log::warn!(
                "{} Failed to render fragment: {}",
                LOG_TAG_ORCHESTRATOR,
                error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ArticleResult, ImageResult};
    use crate::ports::{HtmlPageDocument, TerminalSearchField};
    use crate::presentation::PageLayout;
    use futures::channel::oneshot;
    use std::sync::Mutex;

    type EventLog = Arc<Mutex<Vec<String>>>;

    struct MockImageSearchProvider {
        outcome: Result<Option<ImageResult>, String>,
        events: EventLog,
        wait_for_signal: Mutex<Option<oneshot::Receiver<()>>>,
    }

    impl MockImageSearchProvider {
        fn returning(outcome: Result<Option<ImageResult>, String>, events: EventLog) -> Self {
            Self {
                outcome,
                events,
                wait_for_signal: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl ImageSearchProvider for MockImageSearchProvider {
        async fn search_images(&self, keyword: &str) -> anyhow::Result<Option<ImageResult>> {
            self.events
                .lock()
                .unwrap()
                .push(format!("image lookup: {}", keyword));

            let signal = self.wait_for_signal.lock().unwrap().take();
            if let Some(receiver) = signal {
                receiver.await.unwrap();
            }

            self.outcome.clone().map_err(|message| anyhow::anyhow!(message))
        }
    }

    struct MockArticleSearchProvider {
        outcome: Result<Vec<ArticleResult>, String>,
        events: EventLog,
        signal_when_done: Mutex<Option<oneshot::Sender<()>>>,
    }

    impl MockArticleSearchProvider {
        fn returning(outcome: Result<Vec<ArticleResult>, String>, events: EventLog) -> Self {
            Self {
                outcome,
                events,
                signal_when_done: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl ArticleSearchProvider for MockArticleSearchProvider {
        async fn search_articles(&self, keyword: &str) -> anyhow::Result<Vec<ArticleResult>> {
            self.events
                .lock()
                .unwrap()
                .push(format!("article lookup: {}", keyword));

            if let Some(sender) = self.signal_when_done.lock().unwrap().take() {
                let _ = sender.send(());
            }

            self.outcome.clone().map_err(|message| anyhow::anyhow!(message))
        }
    }

    struct RecordingContainer {
        inner: HtmlPageDocument,
        events: EventLog,
    }

    impl ResponseContainer for RecordingContainer {
        fn clear(&self) -> anyhow::Result<()> {
            self.events.lock().unwrap().push("clear".to_string());
            self.inner.clear()
        }

        fn insert_adjacent_html(
            &self,
            position: InsertPosition,
            html: &str,
        ) -> anyhow::Result<()> {
            self.events
                .lock()
                .unwrap()
                .push(format!("insert {:?}", position));
            self.inner.insert_adjacent_html(position, html)
        }
    }

    struct TestHarness {
        orchestrator: SearchOrchestrator,
        search_field: Arc<TerminalSearchField>,
        container: Arc<RecordingContainer>,
        events: EventLog,
    }

    impl TestHarness {
        fn rendered(&self) -> String {
            self.container.inner.inner_html().unwrap()
        }
    }

    fn create_test_image() -> ImageResult {
        ImageResult::new(
            "https://images.example.com/sky.jpg".to_string(),
            "Ansel Stars".to_string(),
            "https://unsplash.com/@ansel".to_string(),
        )
    }

    fn create_test_articles(count: usize) -> Vec<ArticleResult> {
        (1..=count)
            .map(|index| {
                ArticleResult::new(
                    format!("Headline {}", index),
                    format!("Snippet {}", index),
                    format!("https://nyt.example.com/{}", index),
                )
            })
            .collect()
    }

    fn create_harness(
        image_outcome: Result<Option<ImageResult>, String>,
        article_outcome: Result<Vec<ArticleResult>, String>,
    ) -> (TestHarness, Arc<MockImageSearchProvider>, Arc<MockArticleSearchProvider>) {
        let events: EventLog = Arc::new(Mutex::new(Vec::new()));
        let image_provider = Arc::new(MockImageSearchProvider::returning(
            image_outcome,
            Arc::clone(&events),
        ));
        let article_provider = Arc::new(MockArticleSearchProvider::returning(
            article_outcome,
            Arc::clone(&events),
        ));
        let search_field = Arc::new(TerminalSearchField::new());
        let container = Arc::new(RecordingContainer {
            inner: HtmlPageDocument::build("Test", PageLayout::SearchResults, None),
            events: Arc::clone(&events),
        });

        let orchestrator = SearchOrchestrator::build(
            image_provider.clone(),
            article_provider.clone(),
            search_field.clone(),
            container.clone(),
        );

        (
            TestHarness {
                orchestrator,
                search_field,
                container,
                events,
            },
            image_provider,
            article_provider,
        )
    }

    #[tokio::test]
    async fn test_handle_submit_clears_output_before_lookups() {
        let (harness, _, _) =
            create_harness(Ok(Some(create_test_image())), Ok(create_test_articles(2)));
        harness
            .container
            .inner
            .insert_adjacent_html(InsertPosition::BeforeEnd, "<p>stale</p>")
            .unwrap();
        harness.search_field.set_value("aurora");

        harness.orchestrator.handle_submit().await;

        let events = harness.events.lock().unwrap().clone();
        assert_eq!(events[0], "clear");
        assert!(events.contains(&"image lookup: aurora".to_string()));
        assert!(events.contains(&"article lookup: aurora".to_string()));
        assert!(!harness.rendered().contains("stale"));
    }

    #[tokio::test]
    async fn test_handle_submit_clears_search_field() {
        let (harness, _, _) = create_harness(Ok(None), Ok(vec![]));
        harness.search_field.set_value("aurora");

        harness.orchestrator.handle_submit().await;

        assert_eq!(harness.search_field.read_value(), "");
    }

    #[tokio::test]
    async fn test_image_result_caption_contains_keyword_and_photographer() {
        let (harness, _, _) = create_harness(Ok(Some(create_test_image())), Ok(vec![]));
        harness.search_field.set_value("milky way");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert!(rendered.contains("<figure>"));
        assert!(rendered.contains("<figcaption>milky way by"));
        assert!(rendered.contains("Ansel Stars"));
    }

    #[tokio::test]
    async fn test_zero_images_renders_placeholder_without_figure() {
        let (harness, _, _) = create_harness(Ok(None), Ok(create_test_articles(3)));
        harness.search_field.set_value("zzzz");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert!(rendered.contains("No images available"));
        assert!(!rendered.contains("<figure>"));
    }

    #[tokio::test]
    async fn test_single_article_renders_no_articles_placeholder() {
        let (harness, _, _) = create_harness(Ok(None), Ok(create_test_articles(1)));
        harness.search_field.set_value("rare");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert!(rendered.contains("No articles available"));
        assert!(!rendered.contains("<ul id=\"articles\">"));
    }

    #[tokio::test]
    async fn test_multiple_articles_render_one_entry_each() {
        let (harness, _, _) = create_harness(Ok(None), Ok(create_test_articles(4)));
        harness.search_field.set_value("space");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert_eq!(rendered.matches("<li class=\"article\">").count(), 4);
        assert!(rendered.contains("Headline 4"));
        assert!(rendered.contains("Snippet 4"));
        assert!(rendered.contains("https://nyt.example.com/4"));
    }

    #[tokio::test]
    async fn test_image_failure_renders_one_error_and_keeps_articles() {
        let (harness, _, _) = create_harness(
            Err("connection refused".to_string()),
            Ok(create_test_articles(2)),
        );
        harness.search_field.set_value("planets");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert_eq!(rendered.matches("network-error").count(), 1);
        assert!(rendered.contains("No image available"));
        assert_eq!(rendered.matches("<li class=\"article\">").count(), 2);
    }

    #[tokio::test]
    async fn test_article_failure_renders_one_error_and_keeps_image() {
        let (harness, _, _) = create_harness(
            Ok(Some(create_test_image())),
            Err("invalid json".to_string()),
        );
        harness.search_field.set_value("planets");

        harness.orchestrator.handle_submit().await;

        let rendered = harness.rendered();
        assert_eq!(rendered.matches("network-error").count(), 1);
        assert!(rendered.contains("No articles available"));
        assert!(rendered.contains("<figure>"));
    }

    #[tokio::test]
    async fn test_lookups_run_concurrently_and_image_is_inserted_first() {
        let (harness, image_provider, article_provider) =
            create_harness(Ok(Some(create_test_image())), Ok(create_test_articles(2)));
        let (sender, receiver) = oneshot::channel();
        *image_provider.wait_for_signal.lock().unwrap() = Some(receiver);
        *article_provider.signal_when_done.lock().unwrap() = Some(sender);
        harness.search_field.set_value("nebula");

        harness.orchestrator.handle_submit().await;

        let events = harness.events.lock().unwrap().clone();
        let insert_events: Vec<&String> =
            events.iter().filter(|event| event.starts_with("insert")).collect();
        assert_eq!(insert_events, vec!["insert BeforeEnd", "insert AfterBegin"]);
        assert!(harness.rendered().starts_with("<figure>"));
    }

    #[tokio::test]
    async fn test_initialize_fetches_default_image_only() {
        let (harness, _, _) = create_harness(Ok(Some(create_test_image())), Ok(vec![]));

        harness.orchestrator.initialize("night sky").await;

        let events = harness.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["image lookup: night sky".to_string(), "insert AfterBegin".to_string()]
        );
        assert!(harness.rendered().contains("alt=\"night sky\""));
    }
}
