//! Bazaar storefront application (Leptos, client-side rendered).
//!
//! Pages and components live in [`app`], the demo catalog in
//! [`catalog`], and the cart engine — the one stateful piece of the
//! application — in [`store`].

pub mod app;
pub mod catalog;
pub mod store;

pub use app::App;
pub use store::{provide_cart_store, use_cart, CartStore, CART_SLOT};
