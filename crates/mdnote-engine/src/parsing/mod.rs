pub mod blocks;
pub mod inline;

use crate::models::Document;

use blocks::{DocumentBuilder, classify};

/// Parses markdown text into a [`Document`].
///
/// Total over all inputs: malformed markup falls through to paragraph
/// classification or literal text rather than raising an error. The
/// same input always yields a structurally identical document.
///
/// Lines are split on line feeds (`str::lines` semantics, so a trailing
/// newline does not add a phantom line and a `\r` before the newline is
/// dropped). Interior blank lines survive as empty paragraphs so the
/// spacing of the note is preserved.
pub fn parse(markdown: &str) -> Document {
    let mut builder = DocumentBuilder::new();

    for line in markdown.lines() {
        builder.push(&classify(line));
    }

    Document {
        blocks: builder.finish(),
    }
}
