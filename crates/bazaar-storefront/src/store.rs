//! The client-side cart engine.
//!
//! [`CartStore`] wraps the pure [`Cart`] reducer in a reactive signal,
//! mirrors every mutation to durable storage and guards `add_item`
//! against double-invocation from a single user action. Exactly one
//! instance exists per application session, installed at the root with
//! [`provide_cart_store`] and reached anywhere below with [`use_cart`].
//!
//! No operation here returns an error to the UI: storage failures are
//! logged and the in-memory cart stays authoritative for the session,
//! with the next mutation retrying the write.

use bazaar_commerce::{Cart, LineItemId, Money, NewLineItem};
use bazaar_storage::BrowserStore;
use leptos::logging;
use leptos::prelude::*;

/// Storage slot holding the cart snapshot.
pub const CART_SLOT: &str = "bazaar.cart.v1";

/// How long a repeated add from the same user action stays suppressed.
#[cfg(target_arch = "wasm32")]
const ADD_GUARD_MS: u64 = 300;

/// Reactive cart engine: one instance per application session.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
    storage: StoredValue<BrowserStore, LocalStorage>,
    add_in_flight: StoredValue<bool>,
}

impl CartStore {
    /// Restore the cart from durable storage, or start empty.
    ///
    /// A missing slot is a first visit; unreadable or unparseable
    /// content is logged and degrades to the empty cart.
    pub fn new(storage: BrowserStore) -> Self {
        let cart = match storage.get::<Cart>(CART_SLOT) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                logging::warn!("cart: failed to restore snapshot, starting empty: {err}");
                Cart::new()
            }
        };
        Self {
            cart: RwSignal::new(cart),
            storage: StoredValue::new_local(storage),
            add_in_flight: StoredValue::new(false),
        }
    }

    /// Add one unit of a product to the cart.
    ///
    /// While an add is still being applied, a second invocation for the
    /// same user action (the rendering host can double-invoke handlers)
    /// is suppressed; the guard releases shortly after.
    pub fn add_item(&self, item: NewLineItem) {
        if self.add_in_flight.get_value() {
            logging::log!("cart: duplicate add suppressed for {}", item.product_id);
            return;
        }
        self.add_in_flight.set_value(true);

        self.cart.update(|cart| {
            cart.add_item(item);
        });
        self.persist();
        self.release_add_guard();
    }

    /// Remove a line item. Unknown ids are a no-op.
    pub fn remove_item(&self, id: &LineItemId) {
        if self.cart.with_untracked(|c| c.find_item(id).is_none()) {
            return;
        }
        self.cart.update(|cart| {
            cart.remove_item(id);
        });
        self.persist();
    }

    /// Set a line item's quantity; at or below zero removes it.
    /// Unknown ids are a no-op.
    pub fn update_quantity(&self, id: &LineItemId, quantity: i64) {
        if self.cart.with_untracked(|c| c.find_item(id).is_none()) {
            return;
        }
        self.cart.update(|cart| {
            cart.update_quantity(id, quantity);
        });
        self.persist();
    }

    /// Reset the cart to the empty aggregate.
    pub fn clear(&self) {
        self.cart.update(|cart| cart.clear());
        self.persist();
    }

    /// Total item count (sum of quantities). Reactive read.
    pub fn item_count(&self) -> i64 {
        self.cart.with(|c| c.item_count())
    }

    /// Total amount across all stores. Reactive read.
    pub fn total_amount(&self) -> Money {
        self.cart.with(|c| c.total_amount())
    }

    /// Read-only subscription to the current cart snapshot.
    pub fn cart(&self) -> ReadSignal<Cart> {
        self.cart.read_only()
    }

    /// Mirror the current cart to durable storage.
    ///
    /// A failed write leaves the in-memory cart authoritative; the next
    /// mutation retries.
    fn persist(&self) {
        let result = self
            .storage
            .with_value(|storage| self.cart.with_untracked(|cart| storage.set(CART_SLOT, cart)));
        if let Err(err) = result {
            logging::error!("cart: failed to persist snapshot: {err}");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn release_add_guard(&self) {
        let guard = self.add_in_flight;
        set_timeout(
            move || guard.set_value(false),
            std::time::Duration::from_millis(ADD_GUARD_MS),
        );
    }

    // A native host never double-invokes handlers; release within the
    // same call so sequential adds are never suppressed.
    #[cfg(not(target_arch = "wasm32"))]
    fn release_add_guard(&self) {
        self.add_in_flight.set_value(false);
    }
}

/// Install the session's cart engine into the reactive tree.
pub fn provide_cart_store() {
    provide_context(CartStore::new(BrowserStore::open()));
}

/// Access the cart engine from anywhere under the provider.
///
/// Panics if no [`provide_cart_store`] ran higher in the tree, which is
/// a wiring mistake rather than a runtime condition.
pub fn use_cart() -> CartStore {
    expect_context::<CartStore>()
}
