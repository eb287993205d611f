use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Quantity;

use super::model::{CartLineItem, LineItemAttributes, LineItemId};

/// Ordered list of cart lines.
///
/// Operations on unknown line ids are silent no-ops.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new line with quantity 1.
    pub fn add_item(&mut self, product: Product, attributes: LineItemAttributes) -> &CartLineItem {
        self.items.push(CartLineItem::new(product, attributes));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Returns `false` when the line does not exist.
    pub fn change_quantity(&mut self, id: LineItemId, quantity: Quantity) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes a line for good.
    pub fn remove(&mut self, id: LineItemId) -> Option<CartLineItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    pub fn get(&self, id: LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: LineItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use rust_decimal_macros::dec;

    fn product(name: &str) -> Product {
        Product::new(NewProductProps {
            name: name.to_string(),
            price: dec!(10),
            discount_percent: None,
            image_url: None,
        })
        .unwrap()
    }

    #[test]
    fn should_append_items_in_order() {
        let mut store = CartStore::new();

        store.add_item(product("Cap"), LineItemAttributes::default());
        store.add_item(product("Scarf"), LineItemAttributes::default());

        let names: Vec<&str> = store.iter().map(|i| i.product.name.as_str()).collect();
        assert_eq!(names, vec!["Cap", "Scarf"]);
    }

    #[test]
    fn should_keep_attributes_on_added_item() {
        let mut store = CartStore::new();
        let attributes = LineItemAttributes {
            size: Some("M".to_string()),
            color: Some("navy".to_string()),
        };

        let id = store.add_item(product("Shirt"), attributes.clone()).id;

        assert_eq!(store.get(id).unwrap().attributes, attributes);
    }

    #[test]
    fn should_change_quantity_of_existing_item() {
        let mut store = CartStore::new();
        let id = store.add_item(product("Cap"), LineItemAttributes::default()).id;

        let changed = store.change_quantity(id, Quantity::clamped(4));

        assert!(changed);
        assert_eq!(store.get(id).unwrap().quantity.get(), 4);
    }

    #[test]
    fn should_ignore_quantity_change_for_unknown_item() {
        let mut store = CartStore::new();
        store.add_item(product("Cap"), LineItemAttributes::default());

        let changed = store.change_quantity(LineItemId::new(), Quantity::clamped(9));

        assert!(!changed);
        assert_eq!(store.iter().next().unwrap().quantity.get(), 1);
    }

    #[test]
    fn should_ignore_removal_of_unknown_item() {
        let mut store = CartStore::new();
        store.add_item(product("Cap"), LineItemAttributes::default());

        assert!(store.remove(LineItemId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn should_clear_all_items() {
        let mut store = CartStore::new();
        store.add_item(product("Cap"), LineItemAttributes::default());
        store.add_item(product("Scarf"), LineItemAttributes::default());

        store.clear();

        assert!(store.is_empty());
    }
}
