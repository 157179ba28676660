pub mod app;
pub mod commands;
pub mod errors;
pub mod models;
pub mod recipes;
pub mod store;


pub use app::AppState;
pub use errors::{Error, Result};
pub use store::{DataSource, Store};
