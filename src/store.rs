use crate::errors::Result;
use crate::models::{self, InventoryItem, MenuItem, Order};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const MENU_FILE: &str = "menu.json";
const INVENTORY_FILE: &str = "inventory.json";
const ORDERS_FILE: &str = "orders.json";

/// Where a loaded collection actually came from. A missing or corrupt
/// document falls back to the built-in seed data; callers that care (tests,
/// the dashboard) can see that it happened instead of it being swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    File,
    Default,
}

/// Flat-file persistence for the three JSON documents. Each collection is
/// stored as a plain JSON array of records, rewritten whole on every save.
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Store { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_menu(&self) -> (Vec<MenuItem>, DataSource) {
        self.load_or_default(MENU_FILE, models::default_menu)
    }

    pub fn load_inventory(&self) -> (Vec<InventoryItem>, DataSource) {
        self.load_or_default(INVENTORY_FILE, models::default_inventory)
    }

    pub fn load_orders(&self) -> (Vec<Order>, DataSource) {
        self.load_or_default(ORDERS_FILE, Vec::new)
    }

    pub fn save_menu(&self, menu: &[MenuItem]) -> Result<()> {
        self.save(MENU_FILE, menu)
    }

    pub fn save_inventory(&self, inventory: &[InventoryItem]) -> Result<()> {
        self.save(INVENTORY_FILE, inventory)
    }

    pub fn save_orders(&self, orders: &[Order]) -> Result<()> {
        self.save(ORDERS_FILE, orders)
    }

    fn load_or_default<T, F>(&self, filename: &str, default: F) -> (Vec<T>, DataSource)
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let path = self.data_dir.join(filename);
        if !path.exists() {
            debug!("{} not found, using default dataset", filename);
            return (default(), DataSource::Default);
        }
        match fs::read_to_string(&path).map_err(|e| e.to_string()).and_then(|contents| {
            serde_json::from_str::<Vec<T>>(&contents).map_err(|e| e.to_string())
        }) {
            Ok(records) => {
                debug!("loaded {} records from {}", records.len(), filename);
                (records, DataSource::File)
            }
            Err(e) => {
                warn!("failed to load {}, falling back to default dataset: {}", filename, e);
                (default(), DataSource::Default)
            }
        }
    }

    // Whole-file overwrite, 4-space indented JSON.
    fn save<T: Serialize>(&self, filename: &str, records: &[T]) -> Result<()> {
        let path = self.data_dir.join(filename);
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;
        fs::write(&path, buf)?;
        debug!("saved {} records to {}", records.len(), filename);
        Ok(())
    }
}
