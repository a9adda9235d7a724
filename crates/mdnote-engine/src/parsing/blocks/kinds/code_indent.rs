use crate::parsing::blocks::classify::LineClass;

/// Indented code line syntax knowledge: four spaces or one tab, with
/// exactly one indent unit stripped and the remainder kept verbatim.
pub struct CodeIndent;

impl CodeIndent {
    pub const SPACES: &'static str = "    ";
    pub const TAB: &'static str = "\t";

    pub fn open(line: &str) -> Option<LineClass<'_>> {
        line.strip_prefix(Self::SPACES)
            .or_else(|| line.strip_prefix(Self::TAB))
            .map(|text| LineClass::Code { text })
    }
}
