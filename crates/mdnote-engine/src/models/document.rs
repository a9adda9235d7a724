use serde::{Deserialize, Serialize};

use crate::parsing::inline::StyledRun;

/// The ordered, immutable document tree produced by one parse.
///
/// A `Document` has no identity beyond the call that created it: there
/// is no caching, no mutation after creation, and no cross-reference
/// between documents. Renderers walk `blocks` in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A structural unit of a document.
///
/// Every variant except [`Block::CodeBlock`] holds inline-parsed runs;
/// code keeps its text verbatim so it is never reinterpreted as
/// emphasis markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// ATX heading, `level` in 1..=6.
    Heading { level: u8, runs: Vec<StyledRun> },
    /// Default block when no other kind matches. An empty source line
    /// is an empty paragraph with zero runs, preserving blank spacing.
    Paragraph { runs: Vec<StyledRun> },
    /// A `- ` bullet item. One line, one item; nesting is out of scope.
    BulletListItem { runs: Vec<StyledRun> },
    /// A `1. `-style item. `ordinal` is the digit string as written.
    OrderedListItem { ordinal: String, runs: Vec<StyledRun> },
    /// A `> ` quoted line.
    Blockquote { runs: Vec<StyledRun> },
    /// One or more adjacent indented lines, newline-joined, verbatim.
    CodeBlock { raw_text: String },
}
