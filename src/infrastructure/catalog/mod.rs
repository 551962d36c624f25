mod json;
mod sample;

pub use json::{load_catalog_file, parse_catalog};
pub use sample::sample_catalog;
