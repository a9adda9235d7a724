use anyhow::Result;
use crossterm::style::{StyledContent, Stylize};
use mdnote_engine::{Block, Document, StyledRun, parse};
use std::{
    env, io,
    io::Read,
    path::{Path, PathBuf},
    process,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum InputError {
    #[error("failed to read note file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read note from stdin: {0}")]
    Stdin(#[from] io::Error),
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let markdown = match args.len() {
        1 => read_stdin()?,
        2 => read_file(Path::new(&args[1]))?,
        _ => {
            eprintln!("Usage: {} [note.md]", args[0]);
            eprintln!("Reads stdin when no file is given.");
            process::exit(2);
        }
    };

    let doc = parse(&markdown);
    render(&doc);
    Ok(())
}

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, InputError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Walks the document in order and maps each block to styled terminal
/// output. The match is exhaustive on purpose: a new block kind in the
/// engine must be given a rendering here before this compiles.
fn render(doc: &Document) {
    for block in &doc.blocks {
        match block {
            Block::Heading { level, runs } => {
                for run in runs {
                    let mut s = styled(run).bold().cyan();
                    if *level == 1 {
                        s = s.underlined();
                    }
                    print!("{s}");
                }
                println!();
            }
            Block::Paragraph { runs } => {
                print_runs(runs);
                println!();
            }
            Block::BulletListItem { runs } => {
                print!("• ");
                print_runs(runs);
                println!();
            }
            Block::OrderedListItem { ordinal, runs } => {
                print!("{ordinal}. ");
                print_runs(runs);
                println!();
            }
            Block::Blockquote { runs } => {
                print!("{} ", "▌".dark_grey());
                for run in runs {
                    print!("{}", styled(run).italic());
                }
                println!();
            }
            Block::CodeBlock { raw_text } => {
                for line in raw_text.lines() {
                    println!("    {}", line.dark_grey());
                }
            }
        }
    }
}

fn print_runs(runs: &[StyledRun]) {
    for run in runs {
        print!("{}", styled(run));
    }
}

fn styled(run: &StyledRun) -> StyledContent<&str> {
    let mut s = run.text.as_str().stylize();
    if run.bold {
        s = s.bold();
    }
    if run.italic {
        s = s.italic();
    }
    s
}
