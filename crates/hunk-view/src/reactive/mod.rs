//! Small reactive building blocks: latest-value signals, latest-wins task
//! slots and stream combinators.

mod combine;
mod signal;
mod switch;

pub use combine::{constant, try_combine_latest};
pub use signal::Signal;
pub use switch::SwitchTask;
