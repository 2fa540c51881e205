//! The file diff hunks component.
//!
//! Owns the extension-info signal, the decoration state and the element
//! handles, and keeps the pipelines running for as long as it is mounted.

mod props;

pub use props::FileDiffHunksProps;

use crate::action::ViewAction;
use crate::dom::{CodeElement, ElementRef};
use crate::event::PointerEvent;
use crate::model::{duplicate_hunk_keys, DecorationState, ExtensionInfo};
use crate::pipeline::{follow_extension_info, HoverSources, HoverWiring};
use crate::reactive::{Signal, SwitchTask};
use crate::widget::{DiffTable, RenderedTable};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

const POINTER_EVENT_CAPACITY: usize = 64;

/// Errors when mounting the component.
#[derive(Debug, Error)]
pub enum MountError {
    /// The pipelines need a tokio runtime to spawn on.
    #[error("FileDiffHunks must be mounted from within a tokio runtime")]
    NoRuntime,
}

/// Renders a file's hunks and keeps their decorations and hovers in sync with
/// the extension host.
pub struct FileDiffHunks {
    props: FileDiffHunksProps,
    extension_info: Signal<Option<ExtensionInfo>>,
    decorations: Signal<DecorationState>,
    sources: HoverSources,
    hover: HoverWiring,
    pipeline: SwitchTask,
    lifetime: CancellationToken,
    scroll_offset: usize,
    viewport_height: usize,
    disposed: bool,
}

impl FileDiffHunks {
    /// Mount the component and start following its extension info.
    pub fn mount(props: FileDiffHunksProps) -> Result<Self, MountError> {
        let handle = Handle::try_current().map_err(|_| MountError::NoRuntime)?;
        let lifetime = CancellationToken::new();
        let extension_info = Signal::new(None);
        let decorations = Signal::new(DecorationState::default());

        let mut pipeline = SwitchTask::new("extension-info", handle.clone(), &lifetime);
        let infos = extension_info.changes();
        let states = decorations.clone();
        pipeline.switch_to(move |token| follow_extension_info(infos, states, handle, token));

        let (pointer_events, _) = broadcast::channel(POINTER_EVENT_CAPACITY);
        let mut view = Self {
            props: FileDiffHunksProps::default(),
            extension_info,
            decorations,
            sources: HoverSources {
                container: ElementRef::new(),
                code: ElementRef::new(),
                pointer_events,
            },
            hover: HoverWiring::new(),
            pipeline,
            lifetime,
            scroll_offset: 0,
            viewport_height: 0,
            disposed: false,
        };
        log::debug!("Mounting diff hunks for {}", props.file_anchor);
        view.set_props(props);
        Ok(view)
    }

    pub fn props(&self) -> &FileDiffHunksProps {
        &self.props
    }

    /// Replace all props. Extension info is applied as by
    /// [`set_extension_info`](Self::set_extension_info).
    pub fn set_props(&mut self, props: FileDiffHunksProps) {
        if props.hunks != self.props.hunks {
            let duplicates = duplicate_hunk_keys(&props.hunks);
            if !duplicates.is_empty() {
                log::warn!(
                    "Hunks of {} share start lines {:?}; rows may be ambiguous",
                    props.file_anchor,
                    duplicates
                );
            }
        }
        let info = props.extension_info.clone();
        self.props = props;
        self.clamp_scroll();
        self.set_extension_info(info);
    }

    /// Publish new extension info.
    ///
    /// Returns `false` when the value equals the current one, in which case
    /// nothing is re-run. A new value restarts viewer resolution and, if
    /// present, rewires hovers. After disposal this does nothing.
    pub fn set_extension_info(&mut self, info: Option<ExtensionInfo>) -> bool {
        if self.disposed {
            log::debug!("Ignoring extension info after dispose");
            return false;
        }
        self.props.extension_info = info.clone();
        if !self.extension_info.set(info.clone()) {
            return false;
        }
        if let Some(info) = &info {
            self.hover.wire(info, &self.sources);
        }
        true
    }

    /// Latest decoration state.
    pub fn decorations(&self) -> DecorationState {
        self.decorations.get()
    }

    /// Notified whenever the decoration state is replaced.
    pub fn decoration_changes(&self) -> watch::Receiver<DecorationState> {
        self.decorations.subscribe()
    }

    pub fn hover_sources(&self) -> &HoverSources {
        &self.sources
    }

    pub fn is_hover_active(&self) -> bool {
        self.hover.is_active()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Forward a raw pointer event to hover wiring.
    pub fn handle_pointer(&self, event: PointerEvent) {
        // No receivers until hovers are wired.
        let _ = self.sources.pointer_events.send(event);
    }

    /// Apply a host action. Returns whether the table needs a redraw.
    pub fn handle_action(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::ScrollDown(rows) => {
                let previous = self.scroll_offset;
                self.scroll_offset = self.scroll_offset.saturating_add(rows);
                self.clamp_scroll();
                self.scroll_offset != previous
            }
            ViewAction::ScrollUp(rows) => {
                let previous = self.scroll_offset;
                self.scroll_offset = self.scroll_offset.saturating_sub(rows);
                self.scroll_offset != previous
            }
            ViewAction::ScrollTop => std::mem::take(&mut self.scroll_offset) != 0,
            ViewAction::SetDiffMode(mode) => {
                let changed = self.props.diff_mode != mode;
                self.props.diff_mode = mode;
                self.clamp_scroll();
                changed
            }
            ViewAction::ToggleDiffMode => {
                self.props.diff_mode = self.props.diff_mode.toggled();
                self.clamp_scroll();
                true
            }
            ViewAction::ToggleLineNumbers => {
                self.props.line_numbers = !self.props.line_numbers;
                true
            }
            ViewAction::Pointer(event) => {
                self.handle_pointer(event);
                false
            }
        }
    }

    fn table<'a>(&'a self, decorations: &'a DecorationState) -> DiffTable<'a> {
        DiffTable::new(&self.props.hunks, decorations)
            .mode(self.props.diff_mode)
            .line_numbers(self.props.line_numbers)
            .persist_lines(self.props.persist_lines)
            .light_theme(self.props.is_light_theme)
            .file_anchor(&self.props.file_anchor)
            .title(self.props.class_name.as_deref())
            .scroll_offset(self.scroll_offset)
    }

    fn row_count(&self) -> usize {
        let decorations = DecorationState::default();
        self.table(&decorations).row_count()
    }

    fn clamp_scroll(&mut self) {
        let visible = self.viewport_height.max(1);
        let max_offset = self.row_count().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Render the table and attach its elements for hover hit-testing.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) -> RenderedTable {
        let decorations = self.decorations.get();
        let rendered = self.table(&decorations).render_table(area, buf);
        if self.disposed {
            return rendered;
        }

        self.viewport_height = match &rendered.code {
            Some(code) => code.area.height as usize,
            None => 0,
        };
        self.sources.container.attach(rendered.container.clone());
        match &rendered.code {
            Some(code) => self.sources.code.attach(code.clone()),
            None => self.sources.code.detach(),
        }
        rendered
    }

    /// The code element attached by the last render.
    pub fn code_element(&self) -> Option<CodeElement> {
        self.sources.code.current()
    }

    /// Release every subscription. No decoration updates are published
    /// afterwards. Also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        log::debug!("Disposing diff hunks for {}", self.props.file_anchor);
        self.hover.teardown();
        self.decorations.close_with(&self.lifetime);
        self.pipeline.cancel();
        self.sources.code.detach();
        self.sources.container.detach();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for FileDiffHunks {
    fn drop(&mut self) {
        self.dispose();
    }
}
