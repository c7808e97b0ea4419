pub mod config;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used items
pub use config::AppConfig;
pub use models::{expense::Expense, favorites::Favorites, product::Product};
pub use ui::app::{App, Tab};
