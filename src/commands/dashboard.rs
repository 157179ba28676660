use crate::app::AppState;
use crate::commands::inventory::STATUS_LOW_STOCK;
use crate::models::Order;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub today_sales: f64,
    pub total_stock_units: f64,
    pub low_stock_count: usize,
    pub total_orders: usize,
}

/// Headline numbers for the dashboard cards. `today` is the `%Y-%m-%d`
/// date string to match order timestamps against.
///
/// The low-stock count flags an item when its stored status says so OR its
/// quantity is below threshold, which can disagree with the low-stock report
/// (quantity-only) when the stored status is stale. Both criteria are kept
/// as-is; see DESIGN.md.
pub fn stats(state: &AppState, today: &str) -> DashboardStats {
    let today_sales = state
        .orders
        .iter()
        .filter(|o| o.datetime.starts_with(today))
        .map(|o| o.total)
        .sum();
    let total_stock_units = state.inventory.iter().map(|i| i.quantity).sum();
    let low_stock_count = state
        .inventory
        .iter()
        .filter(|i| i.status == STATUS_LOW_STOCK || i.quantity < i.threshold)
        .count();
    DashboardStats {
        today_sales,
        total_stock_units,
        low_stock_count,
        total_orders: state.orders.len(),
    }
}

/// The most recent orders, newest first by timestamp string.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    sorted.truncate(limit);
    sorted
}
