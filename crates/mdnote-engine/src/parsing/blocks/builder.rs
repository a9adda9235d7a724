use crate::models::Block;
use crate::parsing::inline::parse_inline;

use super::classify::LineClass;

/// Folds classified lines into finished [`Block`]s.
///
/// Adjacent code lines accumulate into one newline-joined code block;
/// every other classification maps one line to one block, in input
/// order. Pure reduction, no failure states.
pub struct DocumentBuilder {
    pending_code: Vec<String>,
    out: Vec<Block>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            pending_code: Vec::new(),
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, class: &LineClass<'_>) {
        if let LineClass::Code { text } = class {
            self.pending_code.push((*text).to_string());
            return;
        }

        self.flush_code();

        let block = match *class {
            LineClass::Heading { level, text } => Block::Heading {
                level,
                runs: parse_inline(text),
            },
            LineClass::Bullet { text } => Block::BulletListItem {
                runs: parse_inline(text),
            },
            LineClass::Ordered { ordinal, text } => Block::OrderedListItem {
                ordinal: ordinal.to_string(),
                runs: parse_inline(text),
            },
            LineClass::Quote { text } => Block::Blockquote {
                runs: parse_inline(text),
            },
            // An empty line stays an empty paragraph (zero runs) so
            // intentional blank spacing renders as blank space.
            LineClass::Paragraph { text: "" } => Block::Paragraph { runs: vec![] },
            LineClass::Paragraph { text } => Block::Paragraph {
                runs: parse_inline(text),
            },
            LineClass::Code { .. } => unreachable!("code lines are accumulated above"),
        };
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_code();
        self.out
    }

    fn flush_code(&mut self) {
        if self.pending_code.is_empty() {
            return;
        }
        let raw_text = std::mem::take(&mut self.pending_code).join("\n");
        self.out.push(Block::CodeBlock { raw_text });
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::classify;

    fn build(lines: &[&str]) -> Vec<Block> {
        let mut builder = DocumentBuilder::new();
        for line in lines {
            builder.push(&classify(line));
        }
        builder.finish()
    }

    #[test]
    fn adjacent_code_lines_merge() {
        let blocks = build(&["    one", "    two"]);
        assert_eq!(blocks, vec![Block::CodeBlock {
            raw_text: "one\ntwo".to_string()
        }]);
    }

    #[test]
    fn blank_line_splits_code_blocks() {
        let blocks = build(&["    one", "", "    two"]);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::CodeBlock { .. }));
        assert_eq!(blocks[1], Block::Paragraph { runs: vec![] });
        assert!(matches!(blocks[2], Block::CodeBlock { .. }));
    }

    #[test]
    fn indented_blank_line_stays_inside_code_block() {
        let blocks = build(&["    one", "    ", "    two"]);
        assert_eq!(blocks, vec![Block::CodeBlock {
            raw_text: "one\n\ntwo".to_string()
        }]);
    }

    #[test]
    fn trailing_code_flushes_at_eof() {
        let blocks = build(&["text", "    tail"]);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], Block::CodeBlock {
            raw_text: "tail".to_string()
        });
    }

    #[test]
    fn paragraphs_do_not_merge_across_lines() {
        let blocks = build(&["one", "two"]);
        assert_eq!(blocks.len(), 2);
    }
}
