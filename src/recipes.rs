//! Static recipe table mapping a menu item to the raw inventory consumed per
//! unit sold. Reference data only, never persisted.

/// Ingredients consumed by one unit of the given menu item, as
/// (inventory item name, quantity per unit) pairs. Menu items without a
/// recipe return an empty slice and contribute nothing to usage or cost.
pub fn ingredients_for(menu_item_id: i64) -> &'static [(&'static str, f64)] {
    match menu_item_id {
        1 => &[("Buns", 1.0), ("Cheese", 0.2)],   // Cheeseburger
        2 => &[("Potatoes", 0.3)],                // French Fries
        3 => &[("Soda Syrup", 0.2)],              // Soda
        4 => &[("Buns", 1.0), ("Cheese", 0.2)],   // Pizza Slice
        5 => &[("Lettuce", 0.1)],                 // Salad
        _ => &[],
    }
}
