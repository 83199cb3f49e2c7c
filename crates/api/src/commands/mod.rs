//! Route handlers
//!
//! Organized by feature area:
//! - `auth`: login page data, login, logout
//! - `inventory`: organization → inventory → group → host navigation
//! - `export`: host listing download

pub mod auth;
pub mod export;
pub mod inventory;

pub use auth::{index, login, logout};
pub use export::export_hosts;
pub use inventory::{
    get_host_details, get_host_facts, get_host_jobs, list_group_children, list_hosts,
    list_inventories, list_organizations, list_root_groups,
};
