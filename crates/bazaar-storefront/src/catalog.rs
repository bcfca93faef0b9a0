//! Demo catalog.
//!
//! Product and store listings come from remote services in production;
//! this static catalog stands in for them so the storefront runs
//! self-contained. The cart engine only ever sees [`NewLineItem`]
//! descriptors built from these entries.

use bazaar_commerce::{Currency, Money, NewLineItem, ProductId, StoreId};
use serde::{Deserialize, Serialize};

/// A sellable product as listed by its store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub store_id: StoreId,
    pub store_name: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: Option<String>,
}

impl Product {
    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Build the descriptor handed to the cart engine.
    pub fn to_line_item(&self) -> NewLineItem {
        NewLineItem {
            product_id: self.id.clone(),
            store_id: self.store_id.clone(),
            store_name: self.store_name.clone(),
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            category: self.category.clone(),
        }
    }
}

fn product(
    id: &str,
    store_id: &str,
    store_name: &str,
    name: &str,
    description: &str,
    cents: i64,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        store_id: StoreId::new(store_id),
        store_name: store_name.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::new(cents, Currency::USD),
        image: format!("/images/{id}.jpg"),
        category: Some(category.to_string()),
    }
}

/// The full demo catalog.
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "p-kettle",
            "s-northside",
            "Northside Kitchen",
            "Stovetop Kettle",
            "Brushed steel kettle, 1.7 liters.",
            3499,
            "kitchen",
        ),
        product(
            "p-grinder",
            "s-northside",
            "Northside Kitchen",
            "Burr Coffee Grinder",
            "Conical burr grinder with 18 settings.",
            5999,
            "kitchen",
        ),
        product(
            "p-notebook",
            "s-paperworks",
            "Paperworks",
            "Dot-grid Notebook",
            "A5, 192 pages, lay-flat binding.",
            1250,
            "stationery",
        ),
        product(
            "p-pen",
            "s-paperworks",
            "Paperworks",
            "Brass Fountain Pen",
            "Fine nib, converter included.",
            4200,
            "stationery",
        ),
        product(
            "p-lamp",
            "s-glowhaus",
            "Glowhaus",
            "Desk Lamp",
            "Dimmable LED lamp with walnut base.",
            7800,
            "lighting",
        ),
        product(
            "p-bulb",
            "s-glowhaus",
            "Glowhaus",
            "Filament Bulb 4-pack",
            "Warm white E26 filament bulbs.",
            1899,
            "lighting",
        ),
    ]
}

/// Look up a demo product by id.
pub fn find_product(id: &str) -> Option<Product> {
    demo_products().into_iter().find(|p| p.id.as_str() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let products = demo_products();
        let mut ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_find_product() {
        assert!(find_product("p-kettle").is_some());
        assert!(find_product("p-missing").is_none());
    }

    #[test]
    fn test_descriptor_carries_store_identity() {
        let lamp = find_product("p-lamp").unwrap();
        let item = lamp.to_line_item();
        assert_eq!(item.store_id, lamp.store_id);
        assert_eq!(item.store_name, lamp.store_name);
        assert_eq!(item.price, lamp.price);
    }
}
