//! Shops and services bound to topology nodes

pub mod directory;
pub mod types;

pub use directory::{StoreDirectory, StoreFilter, StoreListing};
pub use types::{OperatingHours, Promotion, Store};
