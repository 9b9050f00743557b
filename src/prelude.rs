//! Prelude module for historic_calendars crate.
//!
//! Re-exports the derive_more macros used on value types.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
