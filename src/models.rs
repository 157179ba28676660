use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

/// Raw inventory record. Date fields stay strings on purpose: a record with a
/// garbled expiry date must still load, it is just skipped by the expiry
/// report.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub quantity: f64,
    pub threshold: f64,
    pub last_restock: String,
    pub expiry_date: String,
    pub supplier_name: String,
    pub supplier_contact: String,
    pub supplier_price: f64,
    pub unit_price: f64,
    pub total_value: f64,
    pub status: String, // "Available" or "Low Stock"
    pub remarks: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64, // references MenuItem.id
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub datetime: String, // "%Y-%m-%d %H:%M:%S"
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: String, // "Completed"
}

pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Cheeseburger".to_string(),
            price: 5.99,
            category: "Main Course".to_string(),
            available: true,
        },
        MenuItem {
            id: 2,
            name: "French Fries".to_string(),
            price: 2.99,
            category: "Side Dish".to_string(),
            available: true,
        },
        MenuItem {
            id: 3,
            name: "Soda".to_string(),
            price: 1.99,
            category: "Beverage".to_string(),
            available: true,
        },
        MenuItem {
            id: 4,
            name: "Pizza Slice".to_string(),
            price: 3.99,
            category: "Main Course".to_string(),
            available: true,
        },
        MenuItem {
            id: 5,
            name: "Salad".to_string(),
            price: 4.99,
            category: "Side Dish".to_string(),
            available: true,
        },
    ]
}

pub fn default_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            name: "Buns".to_string(),
            category: "Bakery".to_string(),
            unit: "pcs".to_string(),
            quantity: 100.0,
            threshold: 20.0,
            last_restock: "2025-09-01".to_string(),
            expiry_date: "2025-09-30".to_string(),
            supplier_name: "ABC Bakery".to_string(),
            supplier_contact: "9876543210".to_string(),
            supplier_price: 2.0,
            unit_price: 5.0,
            total_value: 500.0,
            status: "Available".to_string(),
            remarks: String::new(),
        },
        InventoryItem {
            id: 2,
            name: "Potatoes".to_string(),
            category: "Vegetables".to_string(),
            unit: "kg".to_string(),
            quantity: 50.0,
            threshold: 10.0,
            last_restock: "2025-09-01".to_string(),
            expiry_date: "2025-09-15".to_string(),
            supplier_name: "Fresh Farms".to_string(),
            supplier_contact: "9123456780".to_string(),
            supplier_price: 20.0,
            unit_price: 30.0,
            total_value: 1500.0,
            status: "Available".to_string(),
            remarks: String::new(),
        },
        InventoryItem {
            id: 3,
            name: "Soda Syrup".to_string(),
            category: "Beverages".to_string(),
            unit: "liters".to_string(),
            quantity: 30.0,
            threshold: 5.0,
            last_restock: "2025-09-01".to_string(),
            expiry_date: "2025-12-01".to_string(),
            supplier_name: "Cool Drinks Co.".to_string(),
            supplier_contact: "9988776655".to_string(),
            supplier_price: 50.0,
            unit_price: 80.0,
            total_value: 2400.0,
            status: "Available".to_string(),
            remarks: String::new(),
        },
        InventoryItem {
            id: 4,
            name: "Cheese".to_string(),
            category: "Dairy".to_string(),
            unit: "kg".to_string(),
            quantity: 20.0,
            threshold: 5.0,
            last_restock: "2025-09-01".to_string(),
            expiry_date: "2025-09-20".to_string(),
            supplier_name: "Dairy Best".to_string(),
            supplier_contact: "9001122334".to_string(),
            supplier_price: 100.0,
            unit_price: 150.0,
            total_value: 3000.0,
            status: "Available".to_string(),
            remarks: String::new(),
        },
        InventoryItem {
            id: 5,
            name: "Lettuce".to_string(),
            category: "Vegetables".to_string(),
            unit: "kg".to_string(),
            quantity: 15.0,
            threshold: 3.0,
            last_restock: "2025-09-01".to_string(),
            expiry_date: "2025-09-10".to_string(),
            supplier_name: "Green Leaf".to_string(),
            supplier_contact: "9112233445".to_string(),
            supplier_price: 15.0,
            unit_price: 25.0,
            total_value: 375.0,
            status: "Available".to_string(),
            remarks: String::new(),
        },
    ]
}
