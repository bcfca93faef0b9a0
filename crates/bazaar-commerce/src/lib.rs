//! Commerce domain types for the Bazaar storefront.
//!
//! This crate is the pure core of the application:
//!
//! - **IDs**: typed string identifiers for products, stores and cart lines
//! - **Money**: cents-based monetary values with display helpers
//! - **Cart**: the store-grouped cart aggregate and its mutation operations
//!
//! Nothing here performs I/O. The cart is a plain reducer — each operation
//! takes the aggregate from one consistent state to the next — so it can be
//! unit tested without a storage fake and driven by any host (the Leptos
//! storefront wraps it in a signal and mirrors it to browser storage).
//!
//! # Example
//!
//! ```rust
//! use bazaar_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let id = cart.add_item(NewLineItem {
//!     product_id: ProductId::new("p1"),
//!     store_id: StoreId::new("s1"),
//!     store_name: "Store A".to_string(),
//!     name: "Widget".to_string(),
//!     price: Money::new(1000, Currency::USD),
//!     image: "/w.png".to_string(),
//!     category: None,
//! });
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_amount(), Money::new(1000, Currency::USD));
//! cart.remove_item(&id);
//! assert!(cart.is_empty());
//! ```

pub mod cart;
mod clock;
pub mod ids;
pub mod money;

pub use cart::{Cart, CartLineItem, NewLineItem, StoreGroup};
pub use ids::{LineItemId, ProductId, StoreId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLineItem, NewLineItem, StoreGroup};
    pub use crate::ids::{LineItemId, ProductId, StoreId};
    pub use crate::money::{Currency, Money};
}
