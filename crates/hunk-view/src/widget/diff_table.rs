//! The diff table widget.

use super::{
    ColumnSpan, HunkRenderProps, HunkRenderer, HunkRow, RowGeometry, SideCell, SplitHunk,
    TableLayout, UnifiedHunk,
};
use crate::dom::{display_text, CellTarget, CodeElement, ContainerElement};
use crate::model::{DecorationState, Hunk, LineKind};
use crate::traits::{DefaultTheme, LightTheme, ThemeProvider};
use hunk_view_config::DiffMode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

/// Shown instead of the table when a file has no hunks.
pub const EMPTY_STATE_MESSAGE: &str = "No changes";

const MIN_LINE_NO_WIDTH: u16 = 3;

/// Geometry recorded while rendering, used for hover hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub container: ContainerElement,
    /// `None` for the empty state.
    pub code: Option<CodeElement>,
    pub layout: TableLayout,
}

/// Widget rendering a file's hunks in unified or split mode.
pub struct DiffTable<'a> {
    hunks: &'a [Hunk],
    decorations: &'a DecorationState,
    mode: DiffMode,
    line_numbers: bool,
    persist_lines: bool,
    is_light_theme: bool,
    file_anchor: &'a str,
    title: Option<&'a str>,
    scroll_offset: usize,
    theme: Option<&'a dyn ThemeProvider>,
}

impl<'a> DiffTable<'a> {
    pub fn new(hunks: &'a [Hunk], decorations: &'a DecorationState) -> Self {
        Self {
            hunks,
            decorations,
            mode: DiffMode::default(),
            line_numbers: true,
            persist_lines: false,
            is_light_theme: false,
            file_anchor: "",
            title: None,
            scroll_offset: 0,
            theme: None,
        }
    }

    pub fn mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn persist_lines(mut self, persist_lines: bool) -> Self {
        self.persist_lines = persist_lines;
        self
    }

    /// Use the built-in light theme instead of the dark one.
    pub fn light_theme(mut self, is_light_theme: bool) -> Self {
        self.is_light_theme = is_light_theme;
        self
    }

    pub fn file_anchor(mut self, file_anchor: &'a str) -> Self {
        self.file_anchor = file_anchor;
        self
    }

    /// Label drawn in the table border.
    pub fn title(mut self, title: Option<&'a str>) -> Self {
        self.title = title.filter(|t| !t.is_empty());
        self
    }

    pub fn scroll_offset(mut self, scroll_offset: usize) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    /// Override the built-in themes.
    pub fn theme(mut self, theme: &'a dyn ThemeProvider) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn layout(&self) -> TableLayout {
        TableLayout::new(self.mode, self.line_numbers)
    }

    /// All rows of the table, hunk by hunk.
    pub fn rows(&self) -> Vec<HunkRow> {
        let props = HunkRenderProps {
            file_anchor: self.file_anchor,
            is_light_theme: self.is_light_theme,
            line_numbers: self.line_numbers,
            persist_lines: self.persist_lines,
            decorations: self.decorations,
        };
        let renderer = self.renderer();
        self.hunks
            .iter()
            .flat_map(|hunk| renderer.rows(hunk, &props))
            .collect()
    }

    /// Row count of `rows()` without building the rows.
    pub fn row_count(&self) -> usize {
        let renderer = self.renderer();
        self.hunks.iter().map(|hunk| renderer.row_count(hunk)).sum()
    }

    fn renderer(&self) -> &'static dyn HunkRenderer {
        match self.mode {
            DiffMode::Unified => &UnifiedHunk,
            DiffMode::Split => &SplitHunk,
        }
    }

    fn active_theme(&self) -> &'a dyn ThemeProvider {
        match self.theme {
            Some(theme) => theme,
            None if self.is_light_theme => &LightTheme,
            None => &DefaultTheme,
        }
    }

    fn line_no_width(&self) -> u16 {
        let max = self.hunks.iter().map(Hunk::max_line_no).max().unwrap_or(0);
        (max.to_string().len() as u16).max(MIN_LINE_NO_WIDTH)
    }

    /// Render into `buf` and return the recorded element geometry.
    pub fn render_table(&self, area: Rect, buf: &mut Buffer) -> RenderedTable {
        let theme = self.active_theme();
        let title = self.title.unwrap_or(self.file_anchor);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()));
        if !title.is_empty() {
            block = block.title(format!(" {} ", title));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = self.layout();
        let container = ContainerElement {
            area,
            title: title.to_string(),
            anchor: self.file_anchor.to_string(),
        };

        if self.hunks.is_empty() {
            let x = inner.x + inner.width.saturating_sub(EMPTY_STATE_MESSAGE.len() as u16) / 2;
            let y = inner.y + inner.height / 2;
            if inner.width > 0 && inner.height > 0 {
                buf.set_stringn(
                    x,
                    y,
                    EMPTY_STATE_MESSAGE,
                    inner.right().saturating_sub(x) as usize,
                    Style::default().fg(theme.placeholder_foreground()),
                );
            }
            return RenderedTable {
                container,
                code: None,
                layout,
            };
        }

        let geometry = RowGeometry::new(
            &layout,
            self.mode,
            inner.x,
            inner.width,
            self.line_no_width(),
        );
        let mut code = CodeElement::new(inner, self.scroll_offset);
        let mut painter = RowPainter { theme, buf };

        let visible = self
            .rows()
            .into_iter()
            .skip(self.scroll_offset)
            .take(inner.height as usize);
        for (offset, row) in visible.enumerate() {
            let y = inner.y + offset as u16;
            match (&row, geometry) {
                (HunkRow::Header { text, .. }, _) => painter.header(text, inner.x, y, inner.width),
                (
                    HunkRow::Unified {
                        hunk_key,
                        old_line,
                        new_line,
                        cell,
                    },
                    RowGeometry::Unified {
                        old_number,
                        new_number,
                        code: code_span,
                    },
                ) => {
                    let style = painter.row_style(cell);
                    painter.fill(ColumnSpan::new(inner.x, inner.width), y, style);
                    painter.number(*old_line, old_number, y, style);
                    painter.number(*new_line, new_number, y, style);
                    code.cells
                        .push(painter.code(cell, *hunk_key, code_span, y, style));
                }
                (
                    HunkRow::Split { hunk_key, old, new },
                    RowGeometry::Split {
                        old_number,
                        old_code,
                        new_number,
                        new_code,
                    },
                ) => {
                    let sides = [(old, old_number, old_code), (new, new_number, new_code)];
                    for (cell, number_span, code_span) in sides {
                        let start = number_span.map(|s| s.x).unwrap_or(code_span.x);
                        let side_span = ColumnSpan::new(start, code_span.right() - start);
                        let Some(cell) = cell else {
                            let style = painter.empty_style();
                            painter.fill(side_span, y, style);
                            continue;
                        };
                        let style = painter.row_style(cell);
                        painter.fill(side_span, y, style);
                        painter.number(Some(cell.line), number_span, y, style);
                        code.cells
                            .push(painter.code(cell, *hunk_key, code_span, y, style));
                    }
                }
                // Rows always come from the renderer matching the geometry.
                _ => {}
            }
        }

        RenderedTable {
            container,
            code: Some(code),
            layout,
        }
    }
}

impl Widget for DiffTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_table(area, buf);
    }
}

struct RowPainter<'t, 'b> {
    theme: &'t dyn ThemeProvider,
    buf: &'b mut Buffer,
}

impl RowPainter<'_, '_> {
    fn header(&mut self, text: &str, x: u16, y: u16, width: u16) {
        let style = Style::default()
            .fg(self.theme.hunk_header_foreground())
            .bg(self.theme.hunk_header_background());
        self.fill(ColumnSpan::new(x, width), y, style);
        if width > 0 {
            self.buf.set_stringn(x, y, text, width as usize, style);
        }
    }

    fn empty_style(&self) -> Style {
        Style::default().bg(self.theme.context_background())
    }

    /// Kind background, overridden by the first decoration that sets one.
    fn row_style(&self, cell: &SideCell) -> Style {
        let decorated = cell.decorations.iter().find_map(|d| d.background_color);
        let bg = decorated.unwrap_or_else(|| match cell.kind {
            LineKind::Addition => self.theme.addition_background(),
            LineKind::Deletion => self.theme.deletion_background(),
            LineKind::Context => self.theme.context_background(),
        });
        Style::default().bg(bg)
    }

    fn fill(&mut self, span: ColumnSpan, y: u16, style: Style) {
        if span.width > 0 {
            self.buf.set_style(Rect::new(span.x, y, span.width, 1), style);
        }
    }

    fn number(&mut self, number: Option<u32>, span: Option<ColumnSpan>, y: u16, style: Style) {
        let (Some(number), Some(span)) = (number, span) else {
            return;
        };
        if span.width == 0 {
            return;
        }
        let text = format!("{:>width$}", number, width = span.width as usize);
        self.buf.set_stringn(
            span.x,
            y,
            text,
            span.width as usize,
            style.fg(self.theme.line_number_foreground()),
        );
    }

    fn code(
        &mut self,
        cell: &SideCell,
        hunk_key: u32,
        span: ColumnSpan,
        y: u16,
        style: Style,
    ) -> CellTarget {
        let target = CellTarget {
            area: Rect::new(span.x, y, span.width, 1),
            hunk_key,
            part: cell.part,
            line: cell.line,
            anchor: cell.anchor.clone(),
            code_x: span.x + 1,
            text: cell.content.clone(),
        };
        if span.width == 0 {
            return target;
        }

        let prefix_style = match cell.kind.prefix_color() {
            Some(color) => style.fg(color),
            None => style,
        };
        self.buf
            .set_stringn(span.x, y, cell.kind.prefix().to_string(), 1, prefix_style);
        if span.width == 1 {
            return target;
        }

        let (mut x, _) = self.buf.set_stringn(
            span.x + 1,
            y,
            display_text(&cell.content),
            (span.width - 1) as usize,
            style,
        );
        for attachment in cell.decorations.iter().filter_map(|d| d.after.as_ref()) {
            let Some(text) = attachment.content_text.as_deref() else {
                continue;
            };
            // One cell of padding before each attachment.
            x = x.saturating_add(1);
            if x >= span.right() {
                break;
            }
            let mut attachment_style =
                style.fg(attachment.color.unwrap_or(self.theme.attachment_foreground()));
            if let Some(bg) = attachment.background_color {
                attachment_style = attachment_style.bg(bg);
            }
            let (end, _) = self.buf.set_stringn(
                x,
                y,
                text,
                (span.right() - x) as usize,
                attachment_style,
            );
            x = end;
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DiffSide, TextDecoration};
    use pretty_assertions::assert_eq;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn sample_hunks() -> Vec<Hunk> {
        vec![Hunk::from_prefixed_lines(
            1,
            1,
            &[" fn main() {", "-    old();", "+    new();", " }"],
        )]
    }

    #[test]
    fn test_empty_state_has_no_table() {
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let decorations = DecorationState::default();

        let rendered = DiffTable::new(&[], &decorations)
            .file_anchor("diff-a-")
            .render_table(area, &mut buf);

        assert!(rendered.code.is_none());
        assert!(row_text(&buf, 2).contains(EMPTY_STATE_MESSAGE));
        assert_eq!(rendered.container.anchor, "diff-a-");
    }

    #[test]
    fn test_unified_rows_and_cells() {
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let hunks = sample_hunks();
        let decorations = DecorationState::default();

        let rendered = DiffTable::new(&hunks, &decorations)
            .title(Some("src/main.rs"))
            .render_table(area, &mut buf);

        assert!(row_text(&buf, 0).contains(" src/main.rs "));
        assert!(row_text(&buf, 1).starts_with("│@@ -1,3 +1,3 @@"));
        assert!(row_text(&buf, 3).starts_with("│  2     -    old();"));
        assert!(row_text(&buf, 4).starts_with("│      2 +    new();"));

        let code = rendered.code.unwrap();
        assert_eq!(code.cells.len(), 4);
        let deleted = &code.cells[1];
        assert_eq!((deleted.line, deleted.part, deleted.code_x), (2, DiffSide::Base, 10));
        assert_eq!(rendered.layout.column_count(), 3);
    }

    #[test]
    fn test_split_rows_pair_sides() {
        let area = Rect::new(0, 0, 42, 8);
        let mut buf = Buffer::empty(area);
        let hunks = sample_hunks();
        let decorations = DecorationState::default();

        let rendered = DiffTable::new(&hunks, &decorations)
            .mode(DiffMode::Split)
            .render_table(area, &mut buf);

        let code = rendered.code.unwrap();
        // Context lines appear on both sides, the change pair on one row.
        assert_eq!(code.cells.len(), 6);
        let changed: Vec<_> = code.cells.iter().filter(|c| c.area.y == 3).collect();
        assert_eq!(changed.len(), 2);
        assert_eq!(changed[0].part, DiffSide::Base);
        assert_eq!(changed[1].part, DiffSide::Head);
        assert!(changed[1].area.x > changed[0].area.right() - 1);
        assert_eq!(rendered.layout.column_count(), 4);
    }

    #[test]
    fn test_decorations_paint_background_and_after_text() {
        let area = Rect::new(0, 0, 50, 8);
        let mut buf = Buffer::empty(area);
        let hunks = sample_hunks();
        let decorations = DecorationState::from_lists(
            None,
            Some(&[TextDecoration::on_line(1)
                .with_background(Color::Yellow)
                .with_after_text("covered")]),
        );

        DiffTable::new(&hunks, &decorations)
            .line_numbers(false)
            .render_table(area, &mut buf);

        let text = row_text(&buf, 4);
        assert!(text.starts_with("│+    new(); covered"), "{text}");
        assert_eq!(buf[(5, 4)].bg, Color::Yellow);
        // Other rows keep their kind background.
        assert_ne!(buf[(5, 3)].bg, Color::Yellow);
    }

    #[test]
    fn test_persisted_anchors_and_scroll() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let hunks = sample_hunks();
        let decorations = DecorationState::default();

        let rendered = DiffTable::new(&hunks, &decorations)
            .file_anchor("diff-f1-")
            .persist_lines(true)
            .scroll_offset(2)
            .render_table(area, &mut buf);

        let code = rendered.code.unwrap();
        assert_eq!(code.scroll_offset, 2);
        let anchors: Vec<_> = code.cells.iter().map(|c| c.anchor.as_deref()).collect();
        assert_eq!(anchors, vec![Some("diff-f1-L2"), Some("diff-f1-R2")]);
    }

    #[test]
    fn test_row_count_matches_rows() {
        let hunks = vec![
            Hunk::from_prefixed_lines(1, 1, &[" a", "-b", "-c", "+B", " d", "+e", "-f", "+F"]),
            Hunk::from_prefixed_lines(40, 41, &["-x", "+y", "+z"]),
        ];
        let decorations = DecorationState::default();

        for mode in [DiffMode::Unified, DiffMode::Split] {
            let table = DiffTable::new(&hunks, &decorations).mode(mode);
            assert_eq!(table.row_count(), table.rows().len(), "{mode:?}");
        }
        assert_eq!(DiffTable::new(&[], &decorations).row_count(), 0);
    }

    #[test]
    fn test_tabs_are_expanded_when_painted() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        let hunks = vec![Hunk::from_prefixed_lines(1, 1, &["+\tfoo();"])];
        let decorations = DecorationState::default();

        let rendered = DiffTable::new(&hunks, &decorations)
            .line_numbers(false)
            .render_table(area, &mut buf);

        assert!(row_text(&buf, 2).starts_with("│+    foo();"), "{}", row_text(&buf, 2));
        let cell = &rendered.code.unwrap().cells[0];
        assert_eq!(cell.text, "\tfoo();");
    }

    #[test]
    fn test_light_theme_backgrounds() {
        let area = Rect::new(0, 0, 40, 8);
        let hunks = sample_hunks();
        let decorations = DecorationState::default();

        let mut dark = Buffer::empty(area);
        DiffTable::new(&hunks, &decorations).render_table(area, &mut dark);
        let mut light = Buffer::empty(area);
        DiffTable::new(&hunks, &decorations)
            .light_theme(true)
            .render_table(area, &mut light);

        assert_eq!(dark[(10, 4)].bg, DefaultTheme.addition_background());
        assert_eq!(light[(10, 4)].bg, LightTheme.addition_background());
    }
}
