//! External services and orchestration.

pub mod checkout;
pub mod stripe;
