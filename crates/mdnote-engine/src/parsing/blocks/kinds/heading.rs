use crate::parsing::blocks::classify::LineClass;

/// ATX heading syntax knowledge.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Deepest heading level recognized.
    pub const MAX_LEVEL: usize = 6;

    /// Recognizes `#`..`######` followed by a space.
    ///
    /// The whole marker run is counted before checking the level, so a
    /// line can only ever match its longest prefix: `### H` is level 3,
    /// never a level-1 heading with `## H` as text. Seven or more
    /// markers, or a missing space, fall through to paragraph.
    pub fn open(line: &str) -> Option<LineClass<'_>> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&level) {
            return None;
        }
        line[level..].strip_prefix(' ').map(|text| LineClass::Heading {
            level: level as u8,
            text,
        })
    }
}
