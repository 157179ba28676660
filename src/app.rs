use crate::commands::inventory;
use crate::models::{InventoryItem, MenuItem, Order};
use crate::store::{DataSource, Store};
use chrono::Local;

/// In-memory snapshot of the three persisted collections plus the store they
/// are flushed back to. Command handlers mutate this and persist immediately;
/// nothing else holds data between events.
pub struct AppState {
    pub menu: Vec<MenuItem>,
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub store: Store,
    pub sources: LoadSources,
}

/// Per-document record of whether the load came from disk or fell back to
/// the seed dataset.
#[derive(Debug, Clone, Copy)]
pub struct LoadSources {
    pub menu: DataSource,
    pub inventory: DataSource,
    pub orders: DataSource,
}

impl AppState {
    pub fn load(store: Store) -> Self {
        let today = Local::now().format("%Y-%m-%d").to_string();
        Self::load_at(store, &today)
    }

    /// Load with an explicit "today" used for normalizer date fills.
    pub fn load_at(store: Store, today: &str) -> Self {
        let (menu, menu_src) = store.load_menu();
        let (mut inv, inv_src) = store.load_inventory();
        let (orders, orders_src) = store.load_orders();
        inventory::normalize(&mut inv, today);
        AppState {
            menu,
            inventory: inv,
            orders,
            store,
            sources: LoadSources {
                menu: menu_src,
                inventory: inv_src,
                orders: orders_src,
            },
        }
    }
}
