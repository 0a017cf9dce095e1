//! Domain models for the storefront API.
//!
//! All models serialize with camelCase field names, matching the JSON wire
//! format the web client consumes.

pub mod cart;
pub mod product;
pub mod vehicle;

pub use cart::{CartItem, CartLine};
pub use product::{NewProduct, Product, ProductFilter, ProductPatch};
pub use vehicle::{Category, VehicleMake, VehicleModel};
