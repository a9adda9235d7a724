//! # mdnote-engine
//!
//! The markdown rendering engine behind mdnote. Takes the raw text of a
//! note and produces a [`Document`]: an ordered tree of styled blocks
//! ready for a renderer to walk.
//!
//! Parsing happens in two stages:
//!
//! 1. **Block classification** ([`parsing::blocks`]): each line is
//!    classified into a block kind (heading, list item, blockquote, code
//!    line, paragraph) by an ordered rule table.
//! 2. **Inline parsing** ([`parsing::inline`]): the text of every block
//!    except code is re-parsed into [`StyledRun`]s carrying bold/italic
//!    styling.
//!
//! The engine is a pure function over its input: [`parse`] is total
//! (any string is valid markdown here), does no I/O, and returns a fresh
//! [`Document`] on every call. Malformed markup degrades to literal text
//! instead of failing, so a note is always renderable.

pub mod models;
pub mod parsing;

pub use models::{Block, Document};
pub use parsing::inline::StyledRun;
pub use parsing::parse;
