//! Report aggregations. All functions are pure folds over the in-memory
//! collections; "today" is always passed in so reports are reproducible.

use crate::models::{InventoryItem, Order};
use crate::recipes;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub name: String,
    pub available: f64,
    pub used: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeakHours {
    /// (2-digit hour, order count), ascending by hour.
    pub hours: Vec<(String, u32)>,
    /// Orders whose datetime did not parse as `%Y-%m-%d %H:%M:%S`.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryReport {
    pub expired: Vec<InventoryItem>,
    /// (YYYY-MM, expired item count), ascending by month.
    pub trend: Vec<(String, u32)>,
    /// Items whose expiry_date did not parse as `%Y-%m-%d`.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLoss {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

/// Revenue per calendar day, keyed on the date portion of the order
/// timestamp. Days with no orders are simply absent.
pub fn sales_by_day(orders: &[Order]) -> Vec<(String, f64)> {
    let mut by_day: BTreeMap<String, f64> = BTreeMap::new();
    for order in orders {
        let day: String = order.datetime.chars().take(10).collect();
        *by_day.entry(day).or_insert(0.0) += order.total;
    }
    by_day.into_iter().collect()
}

/// Units sold per menu item name, in first-encounter order across all
/// order lines.
pub fn top_selling(orders: &[Order]) -> Vec<(String, u32)> {
    let mut sold: Vec<(String, u32)> = Vec::new();
    for order in orders {
        for line in &order.items {
            match sold.iter_mut().find(|(name, _)| *name == line.name) {
                Some((_, qty)) => *qty += line.quantity,
                None => sold.push((line.name.clone(), line.quantity)),
            }
        }
    }
    sold
}

/// Order counts per hour of day. Orders with malformed timestamps are
/// counted in `skipped` rather than silently vanishing.
pub fn peak_hours(orders: &[Order]) -> PeakHours {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut skipped = 0;
    for order in orders {
        match NaiveDateTime::parse_from_str(&order.datetime, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => *counts.entry(dt.format("%H").to_string()).or_insert(0) += 1,
            Err(_) => skipped += 1,
        }
    }
    PeakHours {
        hours: counts.into_iter().collect(),
        skipped,
    }
}

/// Estimated raw-inventory consumption of all orders, mapped through the
/// recipe table, next to what is currently on hand. Presentational only:
/// nothing is decremented.
pub fn inventory_usage(orders: &[Order], inventory: &[InventoryItem]) -> Vec<UsageRow> {
    let mut used: Vec<(&str, f64)> = Vec::new();
    for order in orders {
        for line in &order.items {
            for (ingredient, qty_per_unit) in recipes::ingredients_for(line.id) {
                let consumed = qty_per_unit * f64::from(line.quantity);
                match used.iter_mut().find(|(name, _)| name == ingredient) {
                    Some((_, total)) => *total += consumed,
                    None => used.push((ingredient, consumed)),
                }
            }
        }
    }
    inventory
        .iter()
        .map(|item| UsageRow {
            name: item.name.clone(),
            available: item.quantity,
            used: used
                .iter()
                .find(|(name, _)| *name == item.name)
                .map(|(_, total)| *total)
                .unwrap_or(0.0),
        })
        .collect()
}

/// Items strictly below their threshold. Equal-to-threshold is not low
/// stock. The stored `status` field is deliberately ignored here; the
/// dashboard count consults it, this report does not.
pub fn low_stock(inventory: &[InventoryItem]) -> Vec<&InventoryItem> {
    inventory.iter().filter(|i| i.quantity < i.threshold).collect()
}

/// Items whose expiry date is strictly before `today`, plus the count of
/// expirations per month. Expiring today is not yet expired.
pub fn expired_items(inventory: &[InventoryItem], today: NaiveDate) -> ExpiryReport {
    let mut expired = Vec::new();
    let mut trend: BTreeMap<String, u32> = BTreeMap::new();
    let mut skipped = 0;
    for item in inventory {
        match NaiveDate::parse_from_str(&item.expiry_date, "%Y-%m-%d") {
            Ok(expiry) if expiry < today => {
                *trend.entry(expiry.format("%Y-%m").to_string()).or_insert(0) += 1;
                expired.push(item.clone());
            }
            Ok(_) => {}
            Err(_) => skipped += 1,
        }
    }
    ExpiryReport {
        expired,
        trend: trend.into_iter().collect(),
        skipped,
    }
}

/// Revenue minus recipe-weighted supplier cost. Ingredients are matched
/// against inventory by name, first match wins; a miss costs nothing.
pub fn profit_loss(orders: &[Order], inventory: &[InventoryItem]) -> ProfitLoss {
    let total_revenue: f64 = orders.iter().map(|o| o.total).sum();
    let mut total_cost = 0.0;
    for order in orders {
        for line in &order.items {
            for (ingredient, qty_per_unit) in recipes::ingredients_for(line.id) {
                if let Some(item) = inventory.iter().find(|i| i.name == *ingredient) {
                    total_cost += qty_per_unit * f64::from(line.quantity) * item.supplier_price;
                }
            }
        }
    }
    ProfitLoss {
        total_revenue,
        total_cost,
        net_profit: total_revenue - total_cost,
    }
}
