//! Rendered-table geometry and the adapters the hover engine uses on it.
//!
//! The table records where every code cell was drawn. The records play the
//! part of DOM nodes: the hover engine hit-tests pointer events against them
//! and asks which line and side a cell belongs to.

mod columns;
mod element;
mod functions;
mod geometry;
mod positions;

pub use columns::{character_at, display_text, TAB_WIDTH};
pub use element::ElementRef;
pub use functions::{DiffDomFunctions, DomFunctions};
pub use geometry::{CellTarget, CodeElement, ContainerElement};
pub use positions::{find_positions_from_events, PositionEvent};
