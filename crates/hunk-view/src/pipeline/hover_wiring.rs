//! Wires the hover engine to the rendered table.

use crate::dom::{
    find_positions_from_events, CodeElement, ContainerElement, DiffDomFunctions, ElementRef,
};
use crate::event::PointerEvent;
use crate::model::{DiffSide, ExtensionInfo};
use crate::traits::{
    ContextResolver, HoverContextError, HoverSubscription, HoveredToken, HoverifyConfig, RepoSpec,
};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Element handles and raw events the hover engine follows.
#[derive(Debug, Clone)]
pub struct HoverSources {
    pub container: ElementRef<ContainerElement>,
    pub code: ElementRef<CodeElement>,
    pub pointer_events: broadcast::Sender<PointerEvent>,
}

/// Keeps at most one hover subscription alive.
///
/// Wiring runs once per distinct extension-info value; wiring a new value
/// tears the previous subscription down first.
#[derive(Debug, Default)]
pub struct HoverWiring {
    active: Option<HoverSubscription>,
    wired_for: Option<ExtensionInfo>,
}

impl HoverWiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hoverify the table for `info`. Returns `false` if it is already wired
    /// for an equal value.
    pub fn wire(&mut self, info: &ExtensionInfo, sources: &HoverSources) -> bool {
        if self.wired_for.as_ref() == Some(info) {
            return false;
        }
        self.teardown();

        let dom = Arc::new(DiffDomFunctions);
        let config = HoverifyConfig {
            dom: dom.clone(),
            position_events: find_positions_from_events(
                dom,
                sources.code.watch(),
                sources.pointer_events.subscribe(),
            ),
            position_jumps: None,
            relative_elements: sources.container.elements(),
            resolve_context: context_resolver(info),
        };
        log::debug!("Hoverifying diff table for {:?}", info.head.file_path);
        self.active = Some(info.hoverifier.hoverify(config));
        self.wired_for = Some(info.clone());
        true
    }

    /// Unsubscribe the active wiring. A later `wire` call sets it up again.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.active.take() {
            log::debug!("Tearing down hover wiring");
            subscription.unsubscribe();
        }
        self.wired_for = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Resolve hovered tokens against the side they were found on (head by
/// default).
pub fn context_resolver(info: &ExtensionInfo) -> ContextResolver {
    let base = info.base.clone();
    let head = info.head.clone();
    Arc::new(move |token: &HoveredToken| {
        let part = token.part.unwrap_or_default();
        let side = match part {
            DiffSide::Base => &base,
            DiffSide::Head => &head,
        };
        let file_path = side
            .file_path
            .clone()
            .ok_or(HoverContextError::MissingFilePath(part))?;
        Ok(RepoSpec {
            repo_name: side.repo_name.clone(),
            file_path,
            revision: side.revision.clone(),
            commit_id: side.commit_id.clone(),
        })
    })
}
