use crate::application::ports::util::SlugGenerator;

/// Permalink slugs from article titles, backed by the `slug` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleSlugGenerator;

impl SlugGenerator for TitleSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
