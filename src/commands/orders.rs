use crate::app::AppState;
use crate::errors::{Error, Result};
use crate::models::{MenuItem, Order, OrderItem};
use chrono::Local;
use tracing::info;

pub const STATUS_COMPLETED: &str = "Completed";

/// The in-progress order being built on the order screen. Lives only in
/// memory; it becomes a persisted `Order` at checkout and never before.
#[derive(Debug, Default, Clone)]
pub struct OrderDraft {
    lines: Vec<OrderItem>,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[OrderItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(|l| l.total).sum()
    }

    /// Add `quantity` units of a menu item. A second add of the same item
    /// bumps the existing line instead of creating a duplicate.
    pub fn add_item(&mut self, menu_item: &MenuItem, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(Error::Validation("quantity must be positive".to_string()));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == menu_item.id) {
            line.quantity += quantity;
            line.total = f64::from(line.quantity) * menu_item.price;
        } else {
            self.lines.push(OrderItem {
                id: menu_item.id,
                name: menu_item.name.clone(),
                price: menu_item.price,
                quantity,
                total: f64::from(quantity) * menu_item.price,
            });
        }
        Ok(())
    }

    pub fn remove_item(&mut self, menu_item_id: i64) {
        self.lines.retain(|l| l.id != menu_item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

pub fn next_order_id(orders: &[Order]) -> i64 {
    orders.iter().map(|o| o.id).max().unwrap_or(0) + 1
}

/// Convert the draft into a persisted order stamped with the current local
/// time. The draft is consumed; completed orders are append-only.
pub fn checkout(state: &mut AppState, draft: OrderDraft) -> Result<&Order> {
    let datetime = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    checkout_at(state, draft, datetime)
}

pub fn checkout_at(state: &mut AppState, draft: OrderDraft, datetime: String) -> Result<&Order> {
    if draft.is_empty() {
        return Err(Error::Validation("no items in order".to_string()));
    }

    let id = next_order_id(&state.orders);
    let total = draft.total();
    state.orders.push(Order {
        id,
        datetime,
        items: draft.lines,
        total,
        status: STATUS_COMPLETED.to_string(),
    });
    state.store.save_orders(&state.orders)?;
    info!("order #{} placed, total {:.2}", id, total);

    Ok(state.orders.last().unwrap())
}
