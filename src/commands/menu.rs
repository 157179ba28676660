use crate::app::AppState;
use crate::errors::{Error, Result};
use crate::models::MenuItem;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct CreateMenuItem {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

pub fn next_menu_id(menu: &[MenuItem]) -> i64 {
    menu.iter().map(|m| m.id).max().unwrap_or(0) + 1
}

/// The subset shown on the order entry screen.
pub fn available_menu(menu: &[MenuItem]) -> Vec<&MenuItem> {
    menu.iter().filter(|m| m.available).collect()
}

pub fn add_menu_item(state: &mut AppState, item: CreateMenuItem) -> Result<&MenuItem> {
    validate(&item.name, item.price)?;

    let id = next_menu_id(&state.menu);
    state.menu.push(MenuItem {
        id,
        name: item.name,
        price: item.price,
        category: item.category,
        available: item.available,
    });
    state.store.save_menu(&state.menu)?;
    info!("added menu item #{}", id);

    Ok(state.menu.last().unwrap())
}

pub fn update_menu_item(state: &mut AppState, update: UpdateMenuItem) -> Result<&MenuItem> {
    validate(&update.name, update.price)?;

    let item = state
        .menu
        .iter_mut()
        .find(|m| m.id == update.id)
        .ok_or_else(|| Error::NotFound(format!("menu item {}", update.id)))?;
    item.name = update.name;
    item.price = update.price;
    item.category = update.category;
    item.available = update.available;

    let id = update.id;
    state.store.save_menu(&state.menu)?;
    Ok(state.menu.iter().find(|m| m.id == id).unwrap())
}

pub fn delete_menu_item(state: &mut AppState, id: i64) -> Result<()> {
    let before = state.menu.len();
    state.menu.retain(|m| m.id != id);
    if state.menu.len() == before {
        return Err(Error::NotFound(format!("menu item {}", id)));
    }
    state.store.save_menu(&state.menu)?;
    info!("deleted menu item #{}", id);
    Ok(())
}

fn validate(name: &str, price: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("name must not be empty".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(Error::Validation("price must be a non-negative number".to_string()));
    }
    Ok(())
}
