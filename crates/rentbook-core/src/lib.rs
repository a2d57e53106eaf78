//! rentbook-core
//!
//! Financial aggregation for the property back office.
//! Depends on rentbook-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod error;
pub mod fiscal;
pub mod owner_expense_service;
pub mod portfolio_service;
pub mod profit_service;
pub mod public_api;
pub mod store;
pub mod time;

pub use error::CoreError;
pub use fiscal::*;
pub use owner_expense_service::*;
pub use portfolio_service::*;
pub use profit_service::*;
pub use public_api::*;
pub use store::*;
pub use time::*;
