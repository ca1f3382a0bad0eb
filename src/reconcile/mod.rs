//! Data-consistency reconciliation between `menu_items` and `canteens`
//!
//! Menu items reference their canteen through the `canteenId` field. Three
//! routines keep that reference set consistent:
//!
//! - [`audit_references`] — read-only detection of dangling references
//! - [`repair_references`] — synthesizes placeholder canteens for dangling
//!   references, then normalizes visibility flags across the collection
//! - [`normalize_prep_times`] — repairs `averagePreparationTime` values that
//!   were stored as strings
//!
//! Each routine is a single linear pass with no retries; driver errors
//! propagate to the caller.

pub mod audit;
pub mod prep_time;
pub mod repair;

pub use audit::{audit_references, dangling_references, AuditReport};
pub use prep_time::{normalize_prep_times, PrepTimeFix};
pub use repair::{find_canteen, repair_references, RepairSummary};
