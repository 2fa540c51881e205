//! Hunk structures for a single file's diff.
//!
//! Hunks are produced upstream; this crate only renders them.

use super::DiffSide;
use ratatui::style::Color;
use std::collections::HashSet;

/// A line range on one side of a hunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HunkRange {
    /// First line number (1-based).
    pub start_line: u32,
    /// Number of lines covered.
    pub lines: u32,
}

/// A contiguous region of changes (hunk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Range in the old version.
    pub old_range: HunkRange,
    /// Range in the new version.
    pub new_range: HunkRange,
    /// Enclosing section (e.g. the function name after `@@`).
    pub section: Option<String>,
    /// Lines in this hunk.
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// Create an empty hunk with the given ranges.
    pub fn new(old_start: u32, old_count: u32, new_start: u32, new_count: u32) -> Self {
        Self {
            old_range: HunkRange {
                start_line: old_start,
                lines: old_count,
            },
            new_range: HunkRange {
                start_line: new_start,
                lines: new_count,
            },
            section: None,
            lines: Vec::new(),
        }
    }

    /// Create a hunk with a section heading.
    pub fn with_section(
        old_start: u32,
        old_count: u32,
        new_start: u32,
        new_count: u32,
        section: &str,
    ) -> Self {
        let mut hunk = Self::new(old_start, old_count, new_start, new_count);
        hunk.section = Some(section.to_string());
        hunk
    }

    /// Build a hunk from lines prefixed with ` `, `+` or `-`, numbering
    /// them from the given start lines. Ranges are derived from the lines.
    pub fn from_prefixed_lines(old_start: u32, new_start: u32, lines: &[&str]) -> Self {
        let mut hunk = Self::new(old_start, 0, new_start, 0);
        let (mut old_line, mut new_line) = (old_start, new_start);
        for raw in lines {
            let (kind, content) = match raw.split_at_checked(1) {
                Some(("+", rest)) => (LineKind::Addition, rest),
                Some(("-", rest)) => (LineKind::Deletion, rest),
                Some((" ", rest)) => (LineKind::Context, rest),
                _ => (LineKind::Context, *raw),
            };
            let line = match kind {
                LineKind::Context => DiffLine::context(content, old_line, new_line),
                LineKind::Addition => DiffLine::addition(content, new_line),
                LineKind::Deletion => DiffLine::deletion(content, old_line),
            };
            if line.old_line.is_some() {
                old_line += 1;
                hunk.old_range.lines += 1;
            }
            if line.new_line.is_some() {
                new_line += 1;
                hunk.new_range.lines += 1;
            }
            hunk.lines.push(line);
        }
        hunk
    }

    /// Rendering identity of the hunk.
    ///
    /// Start lines are assumed unique within a file; see [`duplicate_hunk_keys`].
    pub fn key(&self) -> u32 {
        self.old_range.start_line
    }

    /// Header line (e.g., "@@ -10,5 +10,7 @@ fn example()").
    pub fn header(&self) -> String {
        let ranges = format!(
            "@@ -{},{} +{},{} @@",
            self.old_range.start_line,
            self.old_range.lines,
            self.new_range.start_line,
            self.new_range.lines
        );
        match &self.section {
            Some(section) => format!("{} {}", ranges, section),
            None => ranges,
        }
    }

    /// Largest line number on either side, for gutter width.
    pub fn max_line_no(&self) -> u32 {
        self.lines
            .iter()
            .flat_map(|l| [l.old_line, l.new_line])
            .flatten()
            .max()
            .unwrap_or(0)
    }
}

/// Keys shared by more than one hunk, in order of first repetition.
///
/// Such hunks have ambiguous rendering identity; callers report them rather
/// than rewriting the upstream data.
pub fn duplicate_hunk_keys(hunks: &[Hunk]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for key in hunks.iter().map(Hunk::key) {
        if !seen.insert(key) && !duplicates.contains(&key) {
            duplicates.push(key);
        }
    }
    duplicates
}

/// A single line in the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Line type.
    pub kind: LineKind,
    /// Line content (without leading +/-/ ).
    pub content: String,
    /// Line number in old file (for Context and Deletion).
    pub old_line: Option<u32>,
    /// Line number in new file (for Context and Addition).
    pub new_line: Option<u32>,
}

impl DiffLine {
    /// Create a new context line.
    pub fn context(content: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: LineKind::Context,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// Create a new addition line.
    pub fn addition(content: impl Into<String>, new_line: u32) -> Self {
        Self {
            kind: LineKind::Addition,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// Create a new deletion line.
    pub fn deletion(content: impl Into<String>, old_line: u32) -> Self {
        Self {
            kind: LineKind::Deletion,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }

    /// Line number on the given side, if the line exists there.
    pub fn line_on(&self, side: DiffSide) -> Option<u32> {
        match side {
            DiffSide::Base => self.old_line,
            DiffSide::Head => self.new_line,
        }
    }

    /// Side whose decorations and hover context apply in unified mode.
    pub fn primary_side(&self) -> DiffSide {
        match self.kind {
            LineKind::Deletion => DiffSide::Base,
            _ => DiffSide::Head,
        }
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Unchanged line (for context).
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Get the prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Addition => '+',
            LineKind::Deletion => '-',
        }
    }

    /// Foreground color for the prefix character.
    pub fn prefix_color(&self) -> Option<Color> {
        match self {
            LineKind::Addition => Some(Color::Green),
            LineKind::Deletion => Some(Color::Red),
            LineKind::Context => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunk_header_format() {
        let hunk = Hunk::new(10, 5, 10, 7);
        assert_eq!(hunk.header(), "@@ -10,5 +10,7 @@");

        let hunk = Hunk::with_section(10, 5, 10, 7, "fn example()");
        assert_eq!(hunk.header(), "@@ -10,5 +10,7 @@ fn example()");
    }

    #[test]
    fn test_from_prefixed_lines_numbers_both_sides() {
        let hunk = Hunk::from_prefixed_lines(3, 3, &[" a", "-b", "+c", "+d", " e"]);
        assert_eq!(hunk.old_range, HunkRange { start_line: 3, lines: 3 });
        assert_eq!(hunk.new_range, HunkRange { start_line: 3, lines: 4 });

        assert_eq!(hunk.lines[0], DiffLine::context("a", 3, 3));
        assert_eq!(hunk.lines[1], DiffLine::deletion("b", 4));
        assert_eq!(hunk.lines[2], DiffLine::addition("c", 4));
        assert_eq!(hunk.lines[3], DiffLine::addition("d", 5));
        assert_eq!(hunk.lines[4], DiffLine::context("e", 5, 6));
        assert_eq!(hunk.max_line_no(), 6);
    }

    #[test]
    fn test_diff_line_sides() {
        let del = DiffLine::deletion("removed line", 8);
        assert_eq!(del.line_on(DiffSide::Base), Some(8));
        assert_eq!(del.line_on(DiffSide::Head), None);
        assert_eq!(del.primary_side(), DiffSide::Base);

        let ctx = DiffLine::context("unchanged", 5, 6);
        assert_eq!(ctx.line_on(DiffSide::Head), Some(6));
        assert_eq!(ctx.primary_side(), DiffSide::Head);
    }

    #[test]
    fn test_duplicate_hunk_keys_are_reported() {
        let hunks = vec![
            Hunk::new(1, 2, 1, 2),
            Hunk::new(10, 2, 11, 2),
            Hunk::new(1, 1, 30, 1),
            Hunk::new(1, 1, 40, 1),
        ];
        assert_eq!(duplicate_hunk_keys(&hunks), vec![1]);
        assert!(duplicate_hunk_keys(&hunks[..2]).is_empty());
    }
}
