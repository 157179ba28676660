pub mod dashboard;
pub mod export;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
