use canteen_manager::commands::{dashboard, export};
use canteen_manager::{AppState, Result, Store};
use chrono::Local;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = env::var("CANTEEN_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let store = Store::new(&data_dir)?;
    info!("data directory: {}", data_dir);

    let state = AppState::load(store);
    let today = Local::now().date_naive();

    let stats = dashboard::stats(&state, &today.format("%Y-%m-%d").to_string());
    println!("Today's Sales:   {:.2}", stats.today_sales);
    println!("Total Stock:     {:.0} units", stats.total_stock_units);
    println!("Low Stock Items: {}", stats.low_stock_count);
    println!("Total Orders:    {}", stats.total_orders);

    for section in export::build_report_document(&state, today).sections {
        println!("\n== {} ==", section.title);
        println!("{}", section.columns.join(" | "));
        for row in &section.rows {
            println!("{}", row.join(" | "));
        }
        for note in &section.notes {
            println!("{}", note);
        }
    }

    Ok(())
}
