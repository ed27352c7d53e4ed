//! Pointer input as delivered by the canvas.

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

/// Client-space bounding box of the canvas element.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
}

impl CanvasBounds {
    /// Create canvas bounds from the top-left corner.
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// A raw pointer event in client (window) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RawPointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl RawPointerEvent {
    /// Create a raw event at a client position.
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Payload of the `canvas.click` topic.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ClickEvent {
    /// The canvas that received the click.
    pub canvas: CanvasBounds,
    /// The raw event.
    pub event: RawPointerEvent,
}

impl ClickEvent {
    /// Create a click event.
    #[must_use]
    pub const fn new(canvas: CanvasBounds, event: RawPointerEvent) -> Self {
        Self { canvas, event }
    }

    /// A click on a canvas anchored at the client origin.
    ///
    /// Client and canvas coordinates coincide, which is what headless
    /// drivers and tests want.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(CanvasBounds::new(0.0, 0.0), RawPointerEvent::new(x, y))
    }

    /// Canvas-local cursor position.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        get_mouse_pos(&self.canvas, &self.event)
    }
}

/// Translate a raw pointer event into canvas-local coordinates.
#[must_use]
pub fn get_mouse_pos(canvas: &CanvasBounds, event: &RawPointerEvent) -> Vec2 {
    Vec2::new(event.client_x - canvas.left, event.client_y - canvas.top)
}
