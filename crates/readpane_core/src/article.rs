//! Reader content: embedded sample article plus a plain-text loader.

use std::fs;
use std::path::Path;

use crate::error::AppError;

const SAMPLE_TITLE: &str = "The Quiet Craft of Reading Interfaces";
const SAMPLE_SUBTITLE: &str = "Why typography settings belong to the reader, not the designer";

const SAMPLE_PARAGRAPHS: &[&str] = &[
    "Most reading software ships with one opinion about type: a single face, \
     a single measure, a single contrast. That opinion is usually fine on the \
     screen it was designed on and wrong almost everywhere else. The reader \
     knows their light, their eyesight, and their distance from the glass; \
     the software does not.",
    "Handing those knobs to the reader is cheap. A face for long-form serif \
     reading, a couple of sizes, a pair of colors, and a column width cover \
     the overwhelming majority of real complaints. The trick is not the \
     options themselves but the flow around them: let people try a \
     combination without committing to it, and let them walk everything back \
     in one gesture.",
    "That is what the panel on the left does. Changes preview nowhere until \
     you apply them, closing the panel forgets the experiment, and reset \
     returns the page to its defaults. Open it with the arrow, dismiss it \
     with a click elsewhere or with Escape.",
    "None of this is novel. Paper did it first: readers chose their editions, \
     their lamps, and their chairs. The interface merely stops pretending it \
     knows better.",
];

/// A loaded article: a title, an optional subtitle, and body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub subtitle: String,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Embedded sample so the app renders out of the box.
    pub fn sample() -> Self {
        Self {
            title: SAMPLE_TITLE.to_string(),
            subtitle: SAMPLE_SUBTITLE.to_string(),
            paragraphs: SAMPLE_PARAGRAPHS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Load a plain-text article from disk.
    ///
    /// Format: the first block (up to a blank line) is the header — first
    /// line title, remaining lines subtitle — and each following
    /// blank-line-separated block is one paragraph.
    ///
    /// # Errors
    /// I/O failures propagate as [`AppError::Io`]; a file with no readable
    /// content is [`AppError::Article`].
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
            .ok_or_else(|| AppError::Article(format!("no readable content in {}", path.display())))
    }

    fn parse(text: &str) -> Option<Self> {
        let mut blocks = split_blocks(text);
        if blocks.is_empty() {
            return None;
        }
        let header = blocks.remove(0);
        let mut header_lines = header.lines().map(str::trim);
        let title = header_lines.next()?.to_string();
        let subtitle = header_lines.collect::<Vec<_>>().join(" ");
        Some(Self {
            title,
            subtitle,
            paragraphs: blocks,
        })
    }
}

/// Split text into trimmed, blank-line-separated blocks, folding hard wraps
/// within a block into single spaces.
fn split_blocks(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn sample_has_title_subtitle_and_body() {
        let article = Article::sample();
        assert!(!article.title.is_empty());
        assert!(!article.subtitle.is_empty());
        assert!(article.paragraphs.len() >= 3);
    }

    #[test]
    fn parse_splits_header_and_paragraphs() {
        let text = "A Title\nA subtitle line\n\nFirst paragraph\nstill first.\n\nSecond paragraph.\n";
        let article = Article::parse(text).expect("parse");
        assert_eq!(article.title, "A Title");
        assert_eq!(article.subtitle, "A subtitle line");
        assert_eq!(
            article.paragraphs,
            vec![
                "First paragraph still first.".to_string(),
                "Second paragraph.".to_string()
            ]
        );
    }

    #[test]
    fn parse_without_subtitle_or_body_still_yields_a_title() {
        let article = Article::parse("Only a title\n").expect("parse");
        assert_eq!(article.title, "Only a title");
        assert!(article.subtitle.is_empty());
        assert!(article.paragraphs.is_empty());
    }

    #[test]
    fn load_round_trips_through_a_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "From Disk\nSub\n\nBody text.\n").expect("write");
        let article = Article::load(file.path()).expect("load");
        assert_eq!(article.title, "From Disk");
        assert_eq!(article.paragraphs, vec!["Body text.".to_string()]);
    }

    #[test]
    fn load_rejects_blank_files() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "\n  \n\n").expect("write");
        let err = Article::load(file.path()).expect_err("blank file");
        assert!(matches!(err, AppError::Article(_)));
    }

    #[test]
    fn load_propagates_missing_file_as_io_error() {
        let err = Article::load(Path::new("/definitely/not/here.txt")).expect_err("missing");
        assert!(matches!(err, AppError::Io(_)));
    }
}
