//! Named event dispatch for canvas input and board setup.
//!
//! Entities do not listen for input themselves. An input driver receives raw
//! canvas pointer events and hands them to [`EventRegistry::dispatch_click`],
//! which invokes every handler installed under [`CANVAS_CLICK`]. Each entity's
//! handler hit-tests the click against its own rectangle.
//!
//! Board setup works the same way: [`EventRegistry::prepare_board`] runs every
//! [`BOARD_PREPARE`] hook against the board being prepared.
//!
//! Handlers return a [`HandlerStatus`]; returning `Remove` uninstalls the
//! handler after the current dispatch.
//!
//! ## Key Components
//!
//! - [`EventRegistry`]: Per-topic handler tables, entity ID issuance
//! - [`HandlerTable`]: Ordered handlers for one topic, keyed by name
//! - [`ClickEvent`]: Canvas bounds plus the raw pointer event
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use grid_cards::events::{ClickEvent, EventRegistry, HandlerStatus};
//!
//! let mut registry = EventRegistry::new();
//! let clicks = Rc::new(Cell::new(0));
//!
//! let counter = Rc::clone(&clicks);
//! registry.click_handlers_mut().set(
//!     "counter",
//!     Box::new(move |_: &ClickEvent| {
//!         counter.set(counter.get() + 1);
//!         HandlerStatus::Keep
//!     }),
//! );
//!
//! registry.dispatch_click(&ClickEvent::at(10.0, 10.0));
//! assert_eq!(clicks.get(), 1);
//! ```

mod pointer;
mod registry;
mod table;

pub use pointer::{get_mouse_pos, CanvasBounds, ClickEvent, RawPointerEvent};
pub use registry::{ClickHandler, EventRegistry, HandlerStatus, PrepareHandler};
pub use table::HandlerTable;

/// Topic for pointer clicks on the canvas.
pub const CANVAS_CLICK: &str = "canvas.click";

/// Topic for the board preparation phase.
pub const BOARD_PREPARE: &str = "board.prepare";
