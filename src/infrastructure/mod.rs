pub mod catalog;
pub mod repositories;
pub mod util;
