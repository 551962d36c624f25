pub mod controller;
pub mod render;

pub use controller::NewsPageController;
