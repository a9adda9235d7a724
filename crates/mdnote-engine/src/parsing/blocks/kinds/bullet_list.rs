use crate::parsing::blocks::classify::LineClass;

/// Bullet list item syntax knowledge.
pub struct BulletList;

impl BulletList {
    /// The bullet item prefix.
    pub const PREFIX: &'static str = "- ";

    pub fn open(line: &str) -> Option<LineClass<'_>> {
        line.strip_prefix(Self::PREFIX)
            .map(|text| LineClass::Bullet { text })
    }
}
