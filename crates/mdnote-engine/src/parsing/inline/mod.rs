//! # Inline Parsing
//!
//! Phase 2 of the pipeline: resolve `*` emphasis markup within one
//! line's text into [`StyledRun`]s.
//!
//! Precedence is bold over italic: the line is first split on `**`, and
//! only the segments outside bold spans are re-split on `*`. Bold spans
//! are emitted as single un-nested runs, so `**bold *and italic***`
//! does not render the inner italic. That matches the renderer this
//! engine replaces and is kept deliberately rather than silently fixed.
//!
//! The parser is total: an unmatched delimiter degrades to literal text
//! and no input can fail to parse.

pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::StyledRun;
