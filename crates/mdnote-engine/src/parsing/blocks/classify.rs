use super::kinds::{BlockQuote, BulletList, CodeIndent, Heading, OrderedList};

/// Classification of a single line, borrowing its content.
///
/// Holds only local facts: what kind of block this line opens and the
/// text left after stripping the kind's prefix. Grouping (code line
/// merging) is the builder's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Heading { level: u8, text: &'a str },
    Bullet { text: &'a str },
    Ordered { ordinal: &'a str, text: &'a str },
    Quote { text: &'a str },
    Code { text: &'a str },
    Paragraph { text: &'a str },
}

/// A classification rule: recognizes one block kind's prefix or bows out.
type Rule = for<'a> fn(&'a str) -> Option<LineClass<'a>>;

/// The classification order is part of the contract: first match wins,
/// and the indent rule is evaluated last so the list/quote prefixes get
/// first claim on a line. Heading counts its full `#` run, so `### H`
/// can never resolve to a shorter level.
const RULES: [Rule; 5] = [
    Heading::open,
    BulletList::open,
    OrderedList::open,
    BlockQuote::open,
    CodeIndent::open,
];

/// Classifies a line by the ordered rule table, defaulting to paragraph.
pub fn classify(line: &str) -> LineClass<'_> {
    RULES
        .iter()
        .find_map(|rule| rule(line))
        .unwrap_or(LineClass::Paragraph { text: line })
}
