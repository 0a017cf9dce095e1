//! Shared domain types.

pub mod id;
pub mod money;
pub mod session;

pub use id::{CartItemId, CategoryId, ProductId, VehicleMakeId, VehicleModelId};
pub use money::{dollars_to_minor_units, to_minor_units};
pub use session::SessionId;
