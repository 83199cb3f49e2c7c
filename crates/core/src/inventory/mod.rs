//! Inventory traversal over the remote controller

pub mod ports;

pub use ports::InventoryApi;
