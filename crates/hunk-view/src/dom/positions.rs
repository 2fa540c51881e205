//! Maps raw pointer events to positions in the rendered table.

use super::{character_at, CellTarget, CodeElement, DomFunctions};
use crate::event::{PointerEvent, PointerEventKind};
use crate::traits::HoveredToken;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// A pointer event located on a code cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionEvent {
    pub kind: PointerEventKind,
    pub target: CellTarget,
    /// The token under the pointer; `None` over the diff indicator or past
    /// the end of the text.
    pub position: Option<HoveredToken>,
}

/// Locate raw pointer events in the current code element.
///
/// Events are hit-tested against whatever element is attached when they
/// arrive. Events while no element is attached, or outside any code cell,
/// are dropped.
pub fn find_positions_from_events(
    dom: Arc<dyn DomFunctions>,
    elements: watch::Receiver<Option<CodeElement>>,
    events: broadcast::Receiver<PointerEvent>,
) -> BoxStream<'static, PositionEvent> {
    stream::unfold((events, elements), move |(mut events, elements)| {
        let dom = dom.clone();
        async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        let element = elements.borrow().clone();
                        let located =
                            element.and_then(|element| locate(dom.as_ref(), &element, event));
                        if let Some(position) = located {
                            return Some((position, (events, elements)));
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        log::debug!("Dropped {} pointer events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        }
    })
    .boxed()
}

fn locate(dom: &dyn DomFunctions, element: &CodeElement, event: PointerEvent) -> Option<PositionEvent> {
    let target = dom.code_cell_at(element, event.column, event.row)?;
    let content_start = if dom.is_first_character_diff_indicator() {
        target.code_x
    } else {
        target.area.x
    };
    let position = event
        .column
        .checked_sub(content_start)
        .and_then(|column| character_at(&target.text, usize::from(column)))
        .map(|character| HoveredToken {
            line: dom.line_number_of(&target),
            character,
            part: dom.diff_part_of(&target),
        });
    Some(PositionEvent {
        kind: event.kind,
        target,
        position,
    })
}
