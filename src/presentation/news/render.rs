// src/presentation/news/render.rs
//! Plain-text rendering of the listing. Reads DTOs only.

use chrono::NaiveDate;
use std::fmt::Write as _;

use crate::application::dto::{ArticleDto, ListingPageDto};

pub const NO_RESULTS_TITLE: &str = "No articles found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search terms or filters";
pub const LOAD_MORE_LABEL: &str = "Load More Articles";

/// "April 1, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Thousands separated with commas: 1245 -> "1,245".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn render_card(article: &ArticleDto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", article.category_label, article.title);
    let _ = writeln!(out, "  {}", format_long_date(article.published_on));
    let _ = writeln!(out, "  {}", article.excerpt);
    let _ = write!(out, "  {} views", format_count(article.view_count));
    if article.featured {
        out.push_str("  * Popular");
    }
    let _ = writeln!(out, "\n  /news/{}", article.slug);
    out
}

pub fn render_summary(total_matched: usize, catalog_size: usize) -> String {
    format!("Showing {total_matched} of {catalog_size} articles")
}

pub fn render_no_results() -> String {
    format!("{NO_RESULTS_TITLE}\n{NO_RESULTS_HINT}\n")
}

/// Cards revealed after `previous_page_count` pages, then the load-more hint
/// while more remain. Pass 0 to draw the whole page.
pub fn render_page(page: &ListingPageDto<ArticleDto>, previous_page_count: usize) -> String {
    if page.is_empty() {
        return render_no_results();
    }

    let mut out = String::new();
    for article in page.newly_revealed(previous_page_count) {
        out.push_str(&render_card(article));
        out.push('\n');
    }
    if page.has_more {
        let _ = writeln!(out, "{LOAD_MORE_LABEL} ({} remaining)", page.remaining);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: i64, views: u64, featured: bool) -> ArticleDto {
        ArticleDto {
            id,
            title: format!("Story {id}"),
            slug: format!("story-{id}"),
            excerpt: "An excerpt".into(),
            category: "events".into(),
            category_label: "Event".into(),
            published_on: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            view_count: views,
            featured,
            image: None,
        }
    }

    fn listing(
        items: Vec<ArticleDto>,
        has_more: bool,
        remaining: usize,
        page_size: usize,
    ) -> ListingPageDto<ArticleDto> {
        ListingPageDto {
            page_count: items.len().div_ceil(page_size).max(1),
            total_matched: items.len() + remaining,
            items,
            has_more,
            catalog_size: 6,
            remaining,
            page_size,
        }
    }

    #[test]
    fn long_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(format_long_date(date), "April 1, 2024");
    }

    #[test]
    fn grouped_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(645), "645");
        assert_eq!(format_count(1245), "1,245");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn card_shows_label_views_and_badge() {
        let card = render_card(&dto(1, 1245, true));
        assert!(card.starts_with("[Event] Story 1\n"));
        assert!(card.contains("March 15, 2024"));
        assert!(card.contains("1,245 views  * Popular"));
        assert!(card.contains("/news/story-1"));

        let plain = render_card(&dto(2, 12, false));
        assert!(!plain.contains("Popular"));
    }

    #[test]
    fn summary_counts_matches_against_catalog() {
        assert_eq!(render_summary(2, 6), "Showing 2 of 6 articles");
    }

    #[test]
    fn empty_page_renders_no_results() {
        let out = render_page(&listing(vec![], false, 0, 4), 0);
        assert!(out.contains(NO_RESULTS_TITLE));
        assert!(out.contains(NO_RESULTS_HINT));
    }

    #[test]
    fn page_appends_only_the_newly_revealed_cards() {
        let items = (1..=5).map(|id| dto(id, 1, false)).collect();
        let page = listing(items, true, 3, 2);

        let out = render_page(&page, 2);
        assert!(!out.contains("Story 4\n"));
        assert!(out.contains("Story 5\n"));
        assert!(out.contains("Load More Articles (3 remaining)"));

        let whole = render_page(&page, 0);
        assert_eq!(whole.matches("[Event]").count(), 5);
        assert_eq!(render_page(&page, 9).matches("[Event]").count(), 0);

        let done = listing(vec![dto(1, 1, false)], false, 0, 4);
        assert!(!render_page(&done, 0).contains(LOAD_MORE_LABEL));
    }
}
