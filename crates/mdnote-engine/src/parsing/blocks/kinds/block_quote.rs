use crate::parsing::blocks::classify::LineClass;

/// Blockquote syntax knowledge. One `> ` prefix per line; nesting is
/// not modeled.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix.
    pub const PREFIX: &'static str = "> ";

    pub fn open(line: &str) -> Option<LineClass<'_>> {
        line.strip_prefix(Self::PREFIX)
            .map(|text| LineClass::Quote { text })
    }
}
