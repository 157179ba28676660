use crate::app::AppState;
use crate::errors::{Error, Result};
use crate::models::InventoryItem;
use chrono::Local;
use serde::Deserialize;
use tracing::info;

pub const STATUS_AVAILABLE: &str = "Available";
pub const STATUS_LOW_STOCK: &str = "Low Stock";

/// Editable fields of an inventory record. `last_restock`, `status` and
/// `total_value` are stamped by the command handlers, never supplied.
#[derive(Debug, Deserialize)]
pub struct InventoryForm {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity: f64,
    pub threshold: f64,
    pub expiry_date: String,
    pub supplier_name: String,
    pub supplier_contact: String,
    pub supplier_price: f64,
    pub unit_price: f64,
    pub remarks: String,
}

/// Fill in anything a partial or legacy record is missing and recompute the
/// derived `total_value`. Missing ids (deserialized as 0) are assigned from
/// the running max so two incomplete records never collide. Runs once at
/// load time; running it again is a no-op.
pub fn normalize(inventory: &mut [InventoryItem], today: &str) {
    let mut max_id = inventory.iter().map(|i| i.id).max().unwrap_or(0);
    for item in inventory.iter_mut() {
        if item.id == 0 {
            max_id += 1;
            item.id = max_id;
        }
        if item.last_restock.is_empty() {
            item.last_restock = today.to_string();
        }
        if item.status.is_empty() {
            item.status = STATUS_AVAILABLE.to_string();
        }
        // total_value is derived, never authoritative
        item.total_value = item.quantity * item.unit_price;
    }
}

pub fn next_inventory_id(inventory: &[InventoryItem]) -> i64 {
    inventory.iter().map(|i| i.id).max().unwrap_or(0) + 1
}

pub fn add_inventory_item(state: &mut AppState, form: InventoryForm) -> Result<&InventoryItem> {
    validate(&form)?;

    let id = next_inventory_id(&state.inventory);
    let today = Local::now().format("%Y-%m-%d").to_string();
    state.inventory.push(InventoryItem {
        id,
        name: form.name,
        category: form.category,
        unit: form.unit,
        quantity: form.quantity,
        threshold: form.threshold,
        last_restock: today,
        expiry_date: form.expiry_date,
        supplier_name: form.supplier_name,
        supplier_contact: form.supplier_contact,
        supplier_price: form.supplier_price,
        unit_price: form.unit_price,
        total_value: form.quantity * form.unit_price,
        status: STATUS_AVAILABLE.to_string(),
        remarks: form.remarks,
    });
    state.store.save_inventory(&state.inventory)?;
    info!("added inventory item #{}", id);

    Ok(state.inventory.last().unwrap())
}

pub fn update_inventory_item(
    state: &mut AppState,
    id: i64,
    form: InventoryForm,
) -> Result<&InventoryItem> {
    validate(&form)?;

    let item = state
        .inventory
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| Error::NotFound(format!("inventory item {}", id)))?;
    item.name = form.name;
    item.category = form.category;
    item.unit = form.unit;
    item.quantity = form.quantity;
    item.threshold = form.threshold;
    item.expiry_date = form.expiry_date;
    item.supplier_name = form.supplier_name;
    item.supplier_contact = form.supplier_contact;
    item.supplier_price = form.supplier_price;
    item.unit_price = form.unit_price;
    item.remarks = form.remarks;
    item.last_restock = Local::now().format("%Y-%m-%d").to_string();
    item.total_value = item.quantity * item.unit_price;
    item.status = if item.quantity >= item.threshold {
        STATUS_AVAILABLE.to_string()
    } else {
        STATUS_LOW_STOCK.to_string()
    };

    state.store.save_inventory(&state.inventory)?;
    Ok(state.inventory.iter().find(|i| i.id == id).unwrap())
}

pub fn delete_inventory_item(state: &mut AppState, id: i64) -> Result<()> {
    let before = state.inventory.len();
    state.inventory.retain(|i| i.id != id);
    if state.inventory.len() == before {
        return Err(Error::NotFound(format!("inventory item {}", id)));
    }
    state.store.save_inventory(&state.inventory)?;
    info!("deleted inventory item #{}", id);
    Ok(())
}

fn validate(form: &InventoryForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(Error::Validation("name must not be empty".to_string()));
    }
    for (field, value) in [
        ("quantity", form.quantity),
        ("threshold", form.threshold),
        ("supplier_price", form.supplier_price),
        ("unit_price", form.unit_price),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::Validation(format!(
                "{} must be a non-negative number",
                field
            )));
        }
    }
    Ok(())
}
