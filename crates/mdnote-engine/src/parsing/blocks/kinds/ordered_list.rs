use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::classify::LineClass;

/// An integer ordinal, a dot, one whitespace character.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.\s").expect("ordered list marker regex is valid")
});

/// Ordered list item syntax knowledge.
pub struct OrderedList;

impl OrderedList {
    /// Recognizes `1. text`, `42. text`, etc.
    ///
    /// Only the first marker is consumed: the item text keeps any later
    /// `. ` sequences intact, so `1. see ch. 3` has ordinal `1` and
    /// text `see ch. 3`.
    pub fn open(line: &str) -> Option<LineClass<'_>> {
        let caps = MARKER.captures(line)?;
        let marker = caps.get(0)?;
        let ordinal = caps.get(1)?.as_str();
        Some(LineClass::Ordered {
            ordinal,
            text: &line[marker.end()..],
        })
    }
}
