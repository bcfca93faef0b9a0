//! The store-grouped cart aggregate and its mutation operations.
//!
//! A [`Cart`] holds line items grouped by selling store. Every mutation
//! runs the derived values (group subtotals, cart totals, last-updated
//! stamp) through [`Cart::recalculate`], so they are never stale at an
//! observable point. Operations are infallible: an unknown line id is a
//! no-op and a quantity at or below zero means removal.
//!
//! The aggregate is plain data — no I/O happens here. Hosts persist the
//! serde snapshot (`stores`, `total_items`, `total_amount`,
//! `last_updated`) however they like.

use crate::clock::now_millis;
use crate::ids::{LineItemId, ProductId, StoreId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Descriptor for an item about to enter the cart.
///
/// Callers supply product and store identity plus display attributes;
/// the cart assigns the line id, the quantity and the insertion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLineItem {
    /// Catalog identity of the product.
    pub product_id: ProductId,
    /// Identity of the selling store.
    pub store_id: StoreId,
    /// Display name of the selling store.
    pub store_name: String,
    /// Product display name.
    pub name: String,
    /// Unit price at the time of adding.
    pub price: Money,
    /// Product image URL.
    pub image: String,
    /// Optional category label.
    pub category: Option<String>,
}

/// A single product entry in the cart with its own quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Unique within the cart; never reused, even when the same product
    /// is re-added after removal.
    pub id: LineItemId,
    /// Catalog identity, stable across the item's lifetime.
    pub product_id: ProductId,
    /// Identity of the selling store.
    pub store_id: StoreId,
    /// Display name of the selling store.
    pub store_name: String,
    /// Product display name, immutable once set.
    pub name: String,
    /// Product image URL, immutable once set.
    pub image: String,
    /// Optional category label, immutable once set.
    pub category: Option<String>,
    /// Unit price snapshot taken at add time, never re-fetched.
    pub price: Money,
    /// Always >= 1.
    pub quantity: i64,
    /// Millisecond timestamp of first insertion, immutable.
    pub added_at: i64,
}

impl CartLineItem {
    fn from_descriptor(item: NewLineItem) -> Self {
        Self {
            id: LineItemId::for_product(&item.product_id),
            product_id: item.product_id,
            store_id: item.store_id,
            store_name: item.store_name,
            name: item.name,
            image: item.image,
            category: item.category,
            price: item.price,
            quantity: 1,
            added_at: now_millis(),
        }
    }

    /// Price times quantity for this line.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// The line items belonging to one selling store, with their subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreGroup {
    /// Store identity; equals the `store_id` of every contained item.
    pub store_id: StoreId,
    /// Store display name.
    pub store_name: String,
    /// Line items in insertion order.
    pub items: Vec<CartLineItem>,
    /// Derived: sum of line totals. Recomputed, never set independently.
    pub total: Money,
}

impl StoreGroup {
    fn with_item(item: CartLineItem) -> Self {
        Self {
            store_id: item.store_id.clone(),
            store_name: item.store_name.clone(),
            total: item.line_total(),
            items: vec![item],
        }
    }

    fn recalculate(&mut self) {
        self.total = Money::saturating_sum(self.items.iter().map(CartLineItem::line_total));
    }
}

/// The root cart aggregate.
///
/// At most one [`StoreGroup`] exists per distinct store id, no group is
/// ever empty, and no two line items share a product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Store groups in first-touch order.
    pub stores: Vec<StoreGroup>,
    /// Derived: sum of all quantities across all stores.
    pub total_items: i64,
    /// Derived: sum of all group totals.
    pub total_amount: Money,
    /// Millisecond timestamp of the most recent mutation.
    pub last_updated: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            stores: Vec::new(),
            total_items: 0,
            total_amount: Money::default(),
            last_updated: now_millis(),
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// The product search spans every store group, not just the target
    /// store: a product belongs to exactly one store, and a global search
    /// keeps an inconsistent caller-supplied store id from duplicating
    /// the product under a second group. A match increments the existing
    /// line's quantity by one; otherwise a fresh line item (quantity 1,
    /// new id, insertion time now) joins its store group, creating the
    /// group on first contact with that store.
    ///
    /// Returns the id of the affected line item.
    pub fn add_item(&mut self, item: NewLineItem) -> LineItemId {
        let mut merged = None;
        'stores: for group in &mut self.stores {
            for existing in &mut group.items {
                if existing.product_id == item.product_id {
                    existing.quantity = existing.quantity.saturating_add(1);
                    merged = Some(existing.id.clone());
                    break 'stores;
                }
            }
        }
        if let Some(id) = merged {
            self.recalculate();
            return id;
        }

        let line = CartLineItem::from_descriptor(item);
        let id = line.id.clone();
        if let Some(group) = self.stores.iter_mut().find(|g| g.store_id == line.store_id) {
            group.items.push(line);
        } else {
            self.stores.push(StoreGroup::with_item(line));
        }
        self.recalculate();
        id
    }

    /// Remove a line item from whichever group contains it.
    ///
    /// A group losing its last item is removed with it. Returns `false`
    /// and leaves the cart untouched when the id is unknown.
    pub fn remove_item(&mut self, id: &LineItemId) -> bool {
        let mut removed = false;
        for group in &mut self.stores {
            let before = group.items.len();
            group.items.retain(|i| &i.id != id);
            if group.items.len() < before {
                removed = true;
                break;
            }
        }
        if removed {
            self.stores.retain(|g| !g.items.is_empty());
            self.recalculate();
        }
        removed
    }

    /// Set a line item's quantity to an absolute value.
    ///
    /// A quantity at or below zero removes the item. Returns `false`
    /// and leaves the cart untouched when the id is unknown.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        let Some(item) = self
            .stores
            .iter_mut()
            .flat_map(|g| g.items.iter_mut())
            .find(|i| &i.id == id)
        else {
            return false;
        };
        item.quantity = quantity;
        self.recalculate();
        true
    }

    /// Reset to the empty aggregate with a fresh last-updated stamp.
    pub fn clear(&mut self) {
        self.stores.clear();
        self.recalculate();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.total_items
    }

    /// Total amount across all stores.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Number of store groups.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Find a line item by id.
    pub fn find_item(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items().find(|i| &i.id == id)
    }

    /// Iterate over every line item across all stores.
    pub fn items(&self) -> impl Iterator<Item = &CartLineItem> {
        self.stores.iter().flat_map(|g| g.items.iter())
    }

    /// Refresh every derived value from the line items.
    fn recalculate(&mut self) {
        for group in &mut self.stores {
            group.recalculate();
        }
        self.total_items = self
            .items()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity));
        self.total_amount = Money::saturating_sum(self.stores.iter().map(|g| g.total));
        self.last_updated = now_millis();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
