use anyhow::Result;
use std::sync::Arc;

use crate::adapters::{NytArticleSearchProvider, PageResourceFetcher, UnsplashImageSearchProvider};
use crate::cli::{DemoCli, DemoCommand, QuizArgs, SearchArgs};
use crate::core::models::DemoSettings;
use crate::core::orchestrators::search_header_quiz::SearchHeaderQuiz;
use crate::core::orchestrators::search_orchestrator::SearchOrchestrator;
use crate::global_constants::{
    LOG_TAG_APP, QUIZ_PAGE_TITLE, SEARCH_PAGE_TITLE, USER_MESSAGE_SEARCH_PROMPT,
};
use crate::ports::{HtmlPageDocument, TerminalSearchField, TerminalSearchForm};
use crate::presentation::PageLayout;

pub async fn run(cli: DemoCli) -> Result<()> {
    let settings = DemoSettings::load().unwrap_or_else(|e| {
        log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
        DemoSettings::default()
    });

    match cli.command {
        DemoCommand::Search(args) => {
            let settings = apply_search_overrides(settings, &args);
            run_search_demo(settings, args).await
        }
        DemoCommand::Quiz(args) => {
            let settings = apply_quiz_overrides(settings, &args);
            run_quiz_demo(settings, args).await
        }
    }
}

fn apply_search_overrides(mut settings: DemoSettings, args: &SearchArgs) -> DemoSettings {
    if let Some(app_id) = &args.unsplash_app_id {
        settings.unsplash_app_id = app_id.clone();
    }
    if let Some(api_key) = &args.nyt_api_key {
        settings.nyt_api_key = api_key.clone();
    }
    if let Some(output) = &args.output {
        settings.search_output_path = output.clone();
    }
    settings
}

fn apply_quiz_overrides(mut settings: DemoSettings, args: &QuizArgs) -> DemoSettings {
    if let Some(source) = &args.source {
        settings.quiz_source = source.clone();
    }
    if let Some(output) = &args.output {
        settings.quiz_output_path = output.clone();
    }
    settings
}

async fn run_search_demo(settings: DemoSettings, args: SearchArgs) -> Result<()> {
    log::info!("{} Starting search demo", LOG_TAG_APP);

    let http_client = reqwest::Client::new();
    let page = Arc::new(HtmlPageDocument::build(
        SEARCH_PAGE_TITLE,
        PageLayout::SearchResults,
        Some(settings.search_output_path.clone()),
    ));
    page.publish()?;

    if args.open {
        open_page(&page);
    }

    let search_field = Arc::new(TerminalSearchField::new());
    let orchestrator = SearchOrchestrator::build(
        Arc::new(UnsplashImageSearchProvider::new(
            http_client.clone(),
            settings.image_search_base_url.clone(),
            settings.unsplash_app_id.clone(),
        )),
        Arc::new(NytArticleSearchProvider::new(
            http_client,
            settings.article_search_base_url.clone(),
            settings.nyt_api_key.clone(),
        )),
        search_field.clone(),
        page.clone(),
    );

    let default_image_lookup = async {
        if !args.no_default_image {
            orchestrator
                .initialize(&settings.default_image_query)
                .await;
        }
    };

    if args.queries.is_empty() {
        default_image_lookup.await;
        println!("{}", USER_MESSAGE_SEARCH_PROMPT);
        let mut form = TerminalSearchForm::attach_to_stdin();
        while let Some(keyword) = form.next_submission().await? {
            submit_keyword(&orchestrator, &search_field, &keyword).await;
            report_page_location(&page);
        }
    } else {
        // Scripted submissions do not wait for the default image.
        let submissions = async {
            for keyword in &args.queries {
                submit_keyword(&orchestrator, &search_field, keyword).await;
            }
        };
        futures::join!(default_image_lookup, submissions);
        report_page_location(&page);
    }

    Ok(())
}

async fn submit_keyword(
    orchestrator: &SearchOrchestrator,
    search_field: &TerminalSearchField,
    keyword: &str,
) {
    search_field.set_value(keyword);
    orchestrator.handle_submit().await;
}

async fn run_quiz_demo(settings: DemoSettings, args: QuizArgs) -> Result<()> {
    log::info!("{} Starting search header quiz", LOG_TAG_APP);

    let base_directory = match args.base_dir {
        Some(directory) => directory,
        None => std::env::current_dir()?,
    };

    let page = Arc::new(HtmlPageDocument::build(
        QUIZ_PAGE_TITLE,
        PageLayout::HomeSection,
        Some(settings.quiz_output_path.clone()),
    ));
    let quiz = SearchHeaderQuiz::build(
        Arc::new(PageResourceFetcher::new(
            reqwest::Client::new(),
            base_directory,
        )),
        page.clone(),
    );

    quiz.load_search_header(&settings.quiz_source).await;

    println!("{}", page.inner_html()?);
    report_page_location(&page);

    if args.open {
        open_page(&page);
    }

    Ok(())
}

fn report_page_location(page: &HtmlPageDocument) {
    if let Some(output_path) = page.output_path() {
        println!("Page written to {}", output_path.display());
    }
}

fn open_page(page: &HtmlPageDocument) {
    let Some(output_path) = page.output_path() else {
        return;
    };

    log::info!("{} Opening {:?} in browser", LOG_TAG_APP, output_path);
    if let Err(error) = open::that(output_path) {
        log::warn!("{} Failed to open page: {}", LOG_TAG_APP, error);
    }
}
