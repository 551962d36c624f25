use chrono::NaiveDate;

use crate::domain::article::{Article, ArticleExcerpt, ArticleId, ArticleTitle, Category};
use crate::domain::errors::{DomainError, DomainResult};

struct Seed {
    id: i64,
    title: &'static str,
    category: Category,
    date: (i32, u32, u32),
    image: &'static str,
    excerpt: &'static str,
    views: u64,
    featured: bool,
}

const PLACEHOLDER_CONTENT: &str = "Full article content would go here...";

fn seeds() -> [Seed; 6] {
    [
        Seed {
            id: 1,
            title: "Upcoming Book Drive Event",
            category: Category::Events,
            date: (2024, 4, 1),
            image: "images/book-drive.jpg",
            excerpt: "Join us on April 1, 2024 as we collect and donate books to schools in underserved communities. Your contribution can help us build better libraries.",
            views: 1245,
            featured: true,
        },
        Seed {
            id: 2,
            title: "Library Transformation Success Story",
            category: Category::SuccessStories,
            date: (2024, 3, 15),
            image: "images/library-transformation.jpg",
            excerpt: "Thanks to our generous donors and volunteers, the Makhanda Community School library is now fully stocked and welcoming young readers.",
            views: 892,
            featured: true,
        },
        Seed {
            id: 3,
            title: "Volunteer Appreciation Event",
            category: Category::Volunteer,
            date: (2024, 3, 10),
            image: "images/volunteer-1.jpg",
            excerpt: "We celebrated our amazing volunteers who help make Book's Books possible. Their dedication has positively impacted hundreds of students.",
            views: 567,
            featured: false,
        },
        Seed {
            id: 4,
            title: "New Partnership with Local Publishers",
            category: Category::Announcements,
            date: (2024, 3, 1),
            image: "images/partnership.jpg",
            excerpt: "We're excited to announce new partnerships with major publishers to provide diverse books for our library programs.",
            views: 723,
            featured: false,
        },
        Seed {
            id: 5,
            title: "Summer Reading Program Launch",
            category: Category::Events,
            date: (2024, 2, 20),
            image: "images/summer-reading.jpg",
            excerpt: "Our annual summer reading program begins next month with special events and reading challenges for children of all ages.",
            views: 934,
            featured: true,
        },
        Seed {
            id: 6,
            title: "Digital Library Initiative",
            category: Category::Announcements,
            date: (2024, 2, 10),
            image: "images/digital-library.jpg",
            excerpt: "Expanding our reach with new digital library platforms to serve remote communities with limited physical access to books.",
            views: 645,
            featured: false,
        },
    ]
}

/// The six articles the news page ships with, newest first.
pub fn sample_catalog() -> DomainResult<Vec<Article>> {
    seeds().into_iter().map(Seed::into_article).collect()
}

impl Seed {
    fn into_article(self) -> DomainResult<Article> {
        let (year, month, day) = self.date;
        let published_on = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DomainError::Validation(format!("article {} has an invalid date", self.id))
        })?;
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            excerpt: ArticleExcerpt::new(self.excerpt)?,
            category: self.category,
            published_on,
            view_count: self.views,
            featured: self.featured,
            image: Some(self.image.to_string()),
            content: Some(PLACEHOLDER_CONTENT.to_string()),
        })
    }
}
