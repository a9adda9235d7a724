//! # Block Parsing
//!
//! Phase 1 of the pipeline: classify each line into a block kind, then
//! fold the classifications into [`crate::models::Block`]s.
//!
//! ## Modules
//!
//! - **`classify`**: the ordered rule table mapping a line to a
//!   [`LineClass`]
//! - **`builder`**: `DocumentBuilder`, which merges adjacent code lines
//!   and runs inline parsing over everything else
//! - **`kinds`**: per-kind syntax knowledge (prefixes, markers)

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::DocumentBuilder;
pub use classify::{LineClass, classify};
