//! # mascot-events
//!
//! Calendar-bound events and the resolver that picks the active one.
//!
//! An [`EventTable`] is an ordered list of named [`EventWindow`]s. A window is
//! either yearly (month-day boundaries, re-evaluated every year, may wrap past
//! December 31) or pinned to literal years. [`resolve`] returns the first
//! window in table order that contains the given day.
//!
//! ```text
//!  config boundaries ──EventWindow::new()──▶ EventWindow ──┐
//!                                                          ├─▶ EventTable ──resolve(today)──▶ Option<EventIdentity>
//!  config boundaries ──EventWindow::new()──▶ EventWindow ──┘                      ▲
//!                                                                          Clock::today()
//! ```
//!
//! All validation happens while building windows and tables and fails with
//! [`ConfigurationError`]; resolution never fails.

mod clock;
mod error;
mod resolve;
mod table;
mod window;

pub use clock::{Clock, FixedClock};
pub use error::ConfigurationError;
pub use resolve::{EventIdentity, EventResolver, active_window, resolve};
pub use table::EventTable;
pub use window::{Boundary, EventWindow, Span};
