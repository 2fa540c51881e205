use super::{HunkRenderProps, HunkRenderer, HunkRow, SideCell};
use crate::model::Hunk;

/// Renders a hunk as interleaved old and new lines.
///
/// Deleted lines show base decorations, all others head decorations.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedHunk;

impl HunkRenderer for UnifiedHunk {
    fn rows(&self, hunk: &Hunk, props: &HunkRenderProps<'_>) -> Vec<HunkRow> {
        let hunk_key = hunk.key();
        let mut rows = Vec::with_capacity(hunk.lines.len() + 1);
        rows.push(HunkRow::Header {
            hunk_key,
            text: hunk.header(),
        });

        for line in &hunk.lines {
            let Some(cell) = SideCell::for_line(line, line.primary_side(), props) else {
                continue;
            };
            rows.push(HunkRow::Unified {
                hunk_key,
                old_line: line.old_line,
                new_line: line.new_line,
                cell,
            });
        }
        rows
    }

    fn row_count(&self, hunk: &Hunk) -> usize {
        let lines = hunk
            .lines
            .iter()
            .filter(|line| line.line_on(line.primary_side()).is_some())
            .count();
        1 + lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DecorationState, DiffSide, TextDecoration};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unified_rows_pick_decoration_side() {
        let hunk = Hunk::from_prefixed_lines(1, 1, &[" keep", "-old", "+new"]);
        let decorations = DecorationState::from_lists(
            Some(&[TextDecoration::on_line(1).with_after_text("base note")]),
            Some(&[TextDecoration::on_line(1).with_after_text("head note")]),
        );
        let props = HunkRenderProps {
            file_anchor: "f1-",
            is_light_theme: false,
            line_numbers: true,
            persist_lines: true,
            decorations: &decorations,
        };

        let rows = UnifiedHunk.rows(&hunk, &props);
        assert_eq!(rows.len(), 4);
        assert_eq!(UnifiedHunk.row_count(&hunk), 4);
        assert_eq!(
            rows[0],
            HunkRow::Header {
                hunk_key: 1,
                text: "@@ -1,2 +1,2 @@".to_string()
            }
        );

        let HunkRow::Unified { cell, old_line, new_line, .. } = &rows[2] else {
            panic!("expected a unified row");
        };
        assert_eq!((*old_line, *new_line), (Some(2), None));
        assert_eq!(cell.part, DiffSide::Base);
        assert_eq!(cell.anchor.as_deref(), Some("f1-L2"));
        assert_eq!(
            cell.decorations[0].after.as_ref().unwrap().content_text.as_deref(),
            Some("base note")
        );

        let HunkRow::Unified { cell, .. } = &rows[3] else {
            panic!("expected a unified row");
        };
        assert_eq!(cell.part, DiffSide::Head);
        assert_eq!(cell.anchor.as_deref(), Some("f1-R2"));
        assert_eq!(
            cell.decorations[0].after.as_ref().unwrap().content_text.as_deref(),
            Some("head note")
        );
    }

    #[test]
    fn test_anchors_omitted_without_persistence() {
        let hunk = Hunk::from_prefixed_lines(1, 1, &["+new"]);
        let decorations = DecorationState::default();
        let props = HunkRenderProps {
            file_anchor: "f1-",
            is_light_theme: false,
            line_numbers: true,
            persist_lines: false,
            decorations: &decorations,
        };

        let rows = UnifiedHunk.rows(&hunk, &props);
        let HunkRow::Unified { cell, .. } = &rows[1] else {
            panic!("expected a unified row");
        };
        assert!(cell.anchor.is_none());
    }
}
