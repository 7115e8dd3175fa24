//! Framework-independent core of the search box: state, the input/fetch/
//! navigation state machine, and query emphasis.
//!
//! Nothing in here sleeps or performs I/O. Delays and requests are handed
//! back to the runtime as [`Effect`]s and [`Request`]s, and their outcomes
//! come back in tagged with the [`Ticket`] they were issued under.

mod controller;
mod highlight;
mod state;

pub use controller::{Direction, Effect, OnSelect, Request, Search, Ticket};
pub use highlight::{emphasize, Emphasizer, Segment};
pub use state::{SearchState, SearchUpdate};
