use crate::domain::model::MenuItem;
use std::collections::BTreeMap;

/// A menu item plus how many of it the user wants. Quantity is always
/// positive; entries at zero are removed instead.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// In-session shopping cart keyed by item id, one entry per distinct item.
/// Adding an item that is already present merges into its quantity.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: BTreeMap<i64, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: MenuItem, quantity: u32) {
        let quantity = quantity.max(1);
        self.entries
            .entry(item.id)
            .and_modify(|entry| entry.quantity += quantity)
            .or_insert(CartEntry { item, quantity });
    }

    pub fn remove(&mut self, id: i64) -> Option<CartEntry> {
        self.entries.remove(&id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().map(CartEntry::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, title: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            original_title: title.to_string(),
            title: title.to_string(),
            price,
            description: String::new(),
            ingredients: vec![],
            categories: vec![],
            allergy_tags: vec![],
            image_hints: vec![],
        }
    }

    #[test]
    fn test_add_merges_quantities_per_item() {
        let mut cart = Cart::new();
        cart.add(item(1, "Margherita Pizza", 10.0), 1);
        cart.add(item(1, "Margherita Pizza", 10.0), 2);
        cart.add(item(2, "Cavatelli", 25.0), 1);

        assert_eq!(cart.len(), 2);
        let pizza = cart.entries().find(|e| e.item.id == 1).unwrap();
        assert_eq!(pizza.quantity, 3);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(item(1, "Margherita Pizza", 10.0), 2);
        cart.add(item(2, "Cavatelli", 25.0), 1);

        assert_eq!(cart.total(), 45.0);
        let pizza = cart.entries().find(|e| e.item.id == 1).unwrap();
        assert_eq!(pizza.line_total(), 20.0);
    }

    #[test]
    fn test_zero_quantity_is_clamped_to_one() {
        let mut cart = Cart::new();
        cart.add(item(1, "Margherita Pizza", 10.0), 0);
        assert_eq!(cart.entries().next().unwrap().quantity, 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add(item(1, "Margherita Pizza", 10.0), 1);
        assert!(cart.remove(1).is_some());
        assert!(cart.is_empty());
        assert!(cart.remove(1).is_none());
    }
}
