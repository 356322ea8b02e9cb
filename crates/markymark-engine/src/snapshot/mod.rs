//! # Snapshot Testing Support
//!
//! Helpers for asserting on parser output in tests.
//!
//! ## Modules
//!
//! - **`normalize`**: renders a `ParsedDoc` as a stable, indented text outline
//!   for `insta` snapshots
//! - **`invariants`**: structural checks every parse must satisfy (spans tile
//!   the input, header levels in range, sub-lists nest deeper than their parent)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
