//! Newtype IDs for type-safe entity references.
//!
//! Each entity gets its own `i32` wrapper so a cart item id can never be
//! passed where a product id is expected. With the `postgres` feature the
//! wrappers encode and decode as plain `INTEGER` columns via
//! `#[sqlx(transparent)]`.

/// Define a type-safe ID wrapper around `i32`.
///
/// # Example
///
/// ```rust
/// # use lumenparts_core::entity_id;
/// entity_id!(WidgetId);
///
/// let id = WidgetId::new(7);
/// assert_eq!(id.as_i32(), 7);
/// ```
#[macro_export]
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[cfg_attr(feature = "postgres", derive(::sqlx::Type))]
        #[cfg_attr(feature = "postgres", sqlx(transparent))]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Standard entity IDs
entity_id!(ProductId);
entity_id!(CategoryId);
entity_id!(VehicleMakeId);
entity_id!(VehicleModelId);
entity_id!(CartItemId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let product = ProductId::new(1);
        let cart_item = CartItemId::new(1);
        // Same inner value, different types; only the values compare.
        assert_eq!(product.as_i32(), cart_item.as_i32());
    }

    #[test]
    fn id_display_and_conversions() {
        let id = ProductId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(i32::from(id), 42);
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = VehicleMakeId::new(3);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "3");
        let back: VehicleMakeId = serde_json::from_str("3").expect("deserialize");
        assert_eq!(back, id);
    }
}
