//! rentbook-domain
//!
//! Plain record types for the property back office (Property, Tenant, Transaction,
//! Contract)
//! and the aggregate shapes computed from them.
//! No I/O, no CLI, no storage. Only data types, boundary coercion and core enums.

pub mod common;
pub mod contract;
pub mod property;
pub mod report;
pub mod snapshot;
pub mod tenant;
pub mod transaction;

pub use common::*;
pub use contract::*;
pub use property::*;
pub use report::*;
pub use snapshot::*;
pub use tenant::*;
pub use transaction::*;
