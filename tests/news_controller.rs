use std::num::NonZeroUsize;
use std::time::Duration;

use newsroom_core::domain::article::Category;
use newsroom_core::domain::listing::{CategoryFilter, SortOrder};
use newsroom_core::presentation::news::{NewsPageController, render};

mod support;
use support::{dto_ids, sample_services};

fn controller(page_size: usize, delay: Duration) -> NewsPageController {
    NewsPageController::new(
        &sample_services(),
        NonZeroUsize::new(page_size).unwrap(),
        delay,
    )
}

#[tokio::test]
async fn load_more_grows_the_prefix_then_clamps() {
    let mut controller = controller(2, Duration::ZERO);

    let first = controller.refresh().await.unwrap();
    assert_eq!(dto_ids(&first.items), vec![1, 2]);

    let second = controller.load_more().await.unwrap();
    assert!(second.items.starts_with(&first.items));
    assert_eq!(dto_ids(second.newly_revealed(1)), vec![3, 4]);

    let third = controller.load_more().await.unwrap();
    assert_eq!(third.items.len(), 6);
    assert!(!third.has_more);
    assert_eq!(controller.state().page_count.get(), 3);

    let fourth = controller.load_more().await.unwrap();
    assert_eq!(fourth, third);
    assert_eq!(controller.state().page_count.get(), 3);
}

#[tokio::test]
async fn load_more_before_first_render_draws_page_one() {
    let mut controller = controller(4, Duration::ZERO);
    let page = controller.load_more().await.unwrap();
    assert_eq!(page.page_count, 1);
    assert_eq!(page.items.len(), 4);
}

#[tokio::test]
async fn filter_changes_reset_the_page_counter() {
    let mut controller = controller(2, Duration::ZERO);
    controller.refresh().await.unwrap();
    controller.load_more().await.unwrap();
    assert_eq!(controller.state().page_count.get(), 2);

    let page = controller.set_search_term("EVENT").await.unwrap();
    assert_eq!(controller.state().page_count.get(), 1);
    assert_eq!(controller.state().search_term.as_str(), "event");
    // Titles of 1 and 3, excerpt of 5.
    assert_eq!(dto_ids(&page.items), vec![1, 3]);
    assert!(page.has_more);

    controller.load_more().await.unwrap();
    let page = controller
        .set_sort_order(SortOrder::MostViewed)
        .await
        .unwrap();
    assert_eq!(controller.state().page_count.get(), 1);
    assert_eq!(dto_ids(&page.items), vec![1, 5]);

    controller.load_more().await.unwrap();
    let page = controller
        .set_category(CategoryFilter::Only(Category::Volunteer))
        .await
        .unwrap();
    assert_eq!(controller.state().page_count.get(), 1);
    assert_eq!(dto_ids(&page.items), vec![3]);
    assert!(!page.has_more);
}

#[tokio::test]
async fn clearing_the_search_restores_the_full_listing() {
    let mut controller = controller(4, Duration::ZERO);
    controller.set_search_term("makhanda").await.unwrap();
    let page = controller.set_search_term("").await.unwrap();
    assert_eq!(page.total_matched, 6);
    assert_eq!(
        render::render_summary(page.total_matched, page.catalog_size),
        "Showing 6 of 6 articles"
    );
}

#[tokio::test(start_paused = true)]
async fn load_more_waits_for_the_load_delay() {
    let mut controller = controller(4, Duration::from_millis(800));
    controller.refresh().await.unwrap();

    let started = tokio::time::Instant::now();
    let page = controller.load_more().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(800));
    assert_eq!(page.items.len(), 6);

    let idle = tokio::time::Instant::now();
    controller.load_more().await.unwrap();
    assert_eq!(idle.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn opening_an_article_counts_a_view() {
    let mut controller = controller(4, Duration::ZERO);
    let opened = controller.open_article(4).await.unwrap();
    assert_eq!(opened.view_count, 724);

    let page = controller
        .set_sort_order(SortOrder::MostViewed)
        .await
        .unwrap();
    let article = page.items.iter().find(|a| a.id == 4).unwrap();
    assert_eq!(article.view_count, 724);
}

#[tokio::test]
async fn rendered_first_page_lists_cards_and_load_more() {
    let mut controller = controller(4, Duration::ZERO);
    let page = controller.refresh().await.unwrap();
    let out = render::render_page(&page, 0);

    assert!(out.contains("[Event] Upcoming Book Drive Event"));
    assert!(out.contains("April 1, 2024"));
    assert!(out.contains("1,245 views  * Popular"));
    assert!(out.contains("Load More Articles (2 remaining)"));
    assert!(!out.contains("Summer Reading"));
}

#[tokio::test]
async fn appended_render_draws_only_the_next_page() {
    let mut controller = controller(4, Duration::ZERO);
    let first = controller.refresh().await.unwrap();

    let shown_pages = first.page_count;
    let second = controller.load_more().await.unwrap();
    let out = render::render_page(&second, shown_pages);

    assert_eq!(out.matches("\n  /news/").count(), 2);
    assert!(out.contains("Summer Reading Program Launch"));
    assert!(out.contains("Digital Library Initiative"));
    assert!(!out.contains("Upcoming Book Drive Event"));
    assert!(!out.contains("Load More Articles"));
}
