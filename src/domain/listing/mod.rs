pub mod query;
pub mod state;

pub use query::{ListingPage, filter, page, run_query, sort};
pub use state::{CategoryFilter, QueryState, SearchTerm, SortOrder};
