use std::sync::Arc;

use anyhow::Result;
use newsroom_core::application::{ports::util::SlugGenerator, services::ApplicationServices};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::article::{ArticleReadRepository, ArticleViewRepository};
use newsroom_core::infrastructure::{
    catalog::{load_catalog_file, sample_catalog},
    repositories::InMemoryArticleRepository,
    util::TitleSlugGenerator,
};
use newsroom_core::presentation::news::{NewsPageController, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let articles = match config.catalog_path() {
        Some(path) => load_catalog_file(path).await?,
        None => sample_catalog()?,
    };
    tracing::info!(count = articles.len(), "catalog seeded");

    let repo = Arc::new(InMemoryArticleRepository::new(articles));
    let read_repo: Arc<dyn ArticleReadRepository> = repo.clone();
    let view_repo: Arc<dyn ArticleViewRepository> = repo;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TitleSlugGenerator);

    let services = ApplicationServices::new(read_repo, view_repo, slugger);
    let mut controller =
        NewsPageController::new(&services, config.page_size(), config.load_delay());

    controller.set_search_term(config.search()).await?;
    controller.set_sort_order(config.sort_order()).await?;
    let mut page = controller.set_category(config.category().clone()).await?;

    println!("{}\n", render::render_summary(page.total_matched, page.catalog_size));
    print!("{}", render::render_page(&page, 0));

    while page.has_more && page.page_count < config.max_pages().get() {
        let shown_pages = page.page_count;
        page = controller.load_more().await?;
        print!("{}", render::render_page(&page, shown_pages));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
