//! Raw input events delivered by the host application.

mod pointer;

pub use pointer::{PointerEvent, PointerEventKind};
