//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a `ProductId` where a `StoreId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(StoreId);
define_id!(LineItemId);

impl LineItemId {
    /// Derive a fresh cart-line token for a product.
    ///
    /// The token combines the product identity, the creation time and a
    /// process-local counter, so an id is never reused even when the same
    /// product is re-added after removal.
    pub fn for_product(product_id: &ProductId) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let stamp = crate::clock::now_millis() as u64;
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}-{:x}-{:x}", product_id.as_str(), stamp, seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: StoreId = "store-456".into();
        assert_eq!(id.as_str(), "store-456");
    }

    #[test]
    fn test_id_display() {
        let id = StoreId::new("store-789");
        assert_eq!(format!("{}", id), "store-789");
    }

    #[test]
    fn test_id_equality() {
        let id1 = ProductId::new("same");
        let id2 = ProductId::new("same");
        let id3 = ProductId::new("different");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_line_item_id_embeds_product() {
        let product = ProductId::new("p1");
        let id = LineItemId::for_product(&product);
        assert!(id.as_str().starts_with("p1-"));
    }

    #[test]
    fn test_line_item_id_never_reused() {
        let product = ProductId::new("p1");
        let id1 = LineItemId::for_product(&product);
        let id2 = LineItemId::for_product(&product);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = ProductId::new("p1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""p1""#);

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
