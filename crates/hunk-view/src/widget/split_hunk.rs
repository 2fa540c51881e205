use super::{HunkRenderProps, HunkRenderer, HunkRow, SideCell};
use crate::model::{DiffLine, DiffSide, Hunk, LineKind};

/// Renders a hunk side by side.
///
/// A run of deletions followed by additions is paired row by row; context
/// lines appear on both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitHunk;

impl HunkRenderer for SplitHunk {
    fn rows(&self, hunk: &Hunk, props: &HunkRenderProps<'_>) -> Vec<HunkRow> {
        let hunk_key = hunk.key();
        let mut rows = vec![HunkRow::Header {
            hunk_key,
            text: hunk.header(),
        }];
        let mut deletions: Vec<&DiffLine> = Vec::new();
        let mut additions: Vec<&DiffLine> = Vec::new();

        for line in &hunk.lines {
            match line.kind {
                LineKind::Deletion => {
                    if !additions.is_empty() {
                        flush(&mut rows, hunk_key, &mut deletions, &mut additions, props);
                    }
                    deletions.push(line);
                }
                LineKind::Addition => additions.push(line),
                LineKind::Context => {
                    flush(&mut rows, hunk_key, &mut deletions, &mut additions, props);
                    rows.push(HunkRow::Split {
                        hunk_key,
                        old: SideCell::for_line(line, DiffSide::Base, props),
                        new: SideCell::for_line(line, DiffSide::Head, props),
                    });
                }
            }
        }
        flush(&mut rows, hunk_key, &mut deletions, &mut additions, props);
        rows
    }

    fn row_count(&self, hunk: &Hunk) -> usize {
        let mut rows = 1;
        let (mut deletions, mut additions) = (0, 0);
        for line in &hunk.lines {
            match line.kind {
                LineKind::Deletion => {
                    if additions > 0 {
                        rows += deletions.max(additions);
                        (deletions, additions) = (0, 0);
                    }
                    deletions += 1;
                }
                LineKind::Addition => additions += 1,
                LineKind::Context => {
                    rows += deletions.max(additions) + 1;
                    (deletions, additions) = (0, 0);
                }
            }
        }
        rows + deletions.max(additions)
    }
}

fn flush(
    rows: &mut Vec<HunkRow>,
    hunk_key: u32,
    deletions: &mut Vec<&DiffLine>,
    additions: &mut Vec<&DiffLine>,
    props: &HunkRenderProps<'_>,
) {
    let pairs = deletions.len().max(additions.len());
    for i in 0..pairs {
        rows.push(HunkRow::Split {
            hunk_key,
            old: deletions
                .get(i)
                .and_then(|line| SideCell::for_line(line, DiffSide::Base, props)),
            new: additions
                .get(i)
                .and_then(|line| SideCell::for_line(line, DiffSide::Head, props)),
        });
    }
    deletions.clear();
    additions.clear();
}
