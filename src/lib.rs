//! CampusEats database maintenance tools
//!
//! Library backing the three maintenance binaries (`check_db`, `fix_db`,
//! `fix_prep_time`) that inspect and repair the `canteens` and `menu_items`
//! collections. Each binary connects with the `MONGODB_URI` connection string,
//! runs one linear pass, prints a human-readable report and exits.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod reconcile;
