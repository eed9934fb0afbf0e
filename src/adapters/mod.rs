//! Parsers for the output of user-configured test commands.
//!
//! - [`listing`]: `AT-####: description` inventories from `listAcceptanceTests`.
//! - [`tap`]: TAP-flat pass/fail streams from `runAcceptanceTests`.
//!
//! Both are pure functions of their input.

pub mod listing;
pub mod tap;

pub use listing::{parse_listing, ListedTest, LISTING_ADAPTER};
pub use tap::{parse_tap_flat, TAP_FLAT_ADAPTER};
