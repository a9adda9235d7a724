use super::types::StyledRun;

/// The bold delimiter. Checked first so `**` is never read as two
/// italic markers.
const BOLD: &str = "**";

/// The italic delimiter, applied only outside bold spans.
const ITALIC: char = '*';

/// Parses one line of text into styled runs.
///
/// Splitting on `**` puts odd-indexed segments inside bold; each
/// outside segment is then split on `*` for italics. An odd delimiter
/// count leaves the final segment unmatched, and that trailing portion
/// is emitted as literal text with its delimiter restored: `*oops`
/// stays the single plain run `"*oops"`.
///
/// Runs with empty text are skipped, except that an empty line yields
/// one empty plain run so it renders as blank space rather than
/// disappearing.
pub fn parse_inline(line: &str) -> Vec<StyledRun> {
    if line.is_empty() {
        return vec![StyledRun::plain("")];
    }

    let segments: Vec<&str> = line.split(BOLD).collect();
    let unclosed = segments.len() % 2 == 0;

    let mut runs = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        let inside_bold = i % 2 == 1;
        let last = i + 1 == segments.len();

        if inside_bold && unclosed && last {
            // Odd number of `**`: the trailing delimiter is literal.
            runs.push(StyledRun::plain(format!("{BOLD}{segment}")));
        } else if inside_bold {
            // Bold spans are single runs; `*` inside them is not
            // re-parsed (legacy behavior, kept on purpose).
            if !segment.is_empty() {
                runs.push(StyledRun::bold(*segment));
            }
        } else {
            push_italic_runs(&mut runs, segment);
        }
    }
    runs
}

/// Splits an outside-bold segment on `*` into italic and plain runs.
fn push_italic_runs(runs: &mut Vec<StyledRun>, segment: &str) {
    let parts: Vec<&str> = segment.split(ITALIC).collect();
    let unclosed = parts.len() % 2 == 0;

    for (i, part) in parts.iter().enumerate() {
        let inside_italic = i % 2 == 1;
        let last = i + 1 == parts.len();

        if inside_italic && unclosed && last {
            runs.push(StyledRun::plain(format!("{ITALIC}{part}")));
        } else if part.is_empty() {
            continue;
        } else if inside_italic {
            runs.push(StyledRun::italic(*part));
        } else {
            runs.push(StyledRun::plain(*part));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(parse_inline("hello world"), vec![StyledRun::plain(
            "hello world"
        )]);
    }

    #[test]
    fn bold_and_italic_disambiguation() {
        assert_eq!(parse_inline("**bold** and *italic*"), vec![
            StyledRun::bold("bold"),
            StyledRun::plain(" and "),
            StyledRun::italic("italic"),
        ]);
    }

    #[test]
    fn bold_delimiters_are_stripped() {
        assert_eq!(parse_inline("a **b** c"), vec![
            StyledRun::plain("a "),
            StyledRun::bold("b"),
            StyledRun::plain(" c"),
        ]);
    }

    #[test]
    fn unmatched_single_star_is_literal() {
        assert_eq!(parse_inline("*oops"), vec![StyledRun::plain("*oops")]);
    }

    #[test]
    fn unmatched_double_star_is_literal() {
        assert_eq!(parse_inline("a ** b"), vec![
            StyledRun::plain("a "),
            StyledRun::plain("** b"),
        ]);
    }

    #[test]
    fn trailing_unmatched_star_after_matched_pair() {
        assert_eq!(parse_inline("x *a* *b"), vec![
            StyledRun::plain("x "),
            StyledRun::italic("a"),
            StyledRun::plain(" "),
            StyledRun::plain("*b"),
        ]);
    }

    #[test]
    fn star_inside_bold_is_not_reparsed() {
        // Known limitation carried over from the legacy renderer.
        assert_eq!(parse_inline("**bold *and italic* text**"), vec![
            StyledRun::bold("bold *and italic* text")
        ]);
    }

    #[test]
    fn empty_line_yields_one_empty_plain_run() {
        assert_eq!(parse_inline(""), vec![StyledRun::plain("")]);
    }

    #[test]
    fn delimiter_only_input_produces_no_runs() {
        // `****` is an empty matched bold span: nothing to render, and
        // the reconstruction invariant still holds (stripped source is
        // empty).
        assert_eq!(parse_inline("****"), Vec::<StyledRun>::new());
    }

    #[test]
    fn concatenation_reconstructs_source_without_delimiters() {
        let runs = parse_inline("**bold** and *italic*");
        let text: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(text, "bold and italic");
    }
}
