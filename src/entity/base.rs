//! Shared entity state: identity, visibility, geometry, click gating.

use std::rc::Rc;

use crate::core::{EntityError, EntityId, Vec2};

/// Whether a new entity reacts to clicks. Entities opt in explicitly.
pub const DEFAULT_HANDLE_CLICK: bool = false;

/// Callback run when a click lands on an entity.
///
/// Runs after the entity's `RefCell` borrow is released, so it may borrow
/// the entity again. Capture a `Weak` handle rather than an `Rc` to avoid a
/// reference cycle through the entity's own base.
pub type ClickCallback = Rc<dyn Fn(EntityId, Vec2)>;

/// State common to every entity.
///
/// `position` and `size` describe the screen rectangle used for hit testing.
/// They are `None` until a concrete entity sets them; hit testing an entity
/// without geometry reports [`EntityError::HitTestUnavailable`].
#[derive(Clone)]
pub struct EntityBase {
    /// Identity.
    pub id: EntityId,

    /// Handler key in the click table.
    pub name: String,

    /// Whether a draw pass renders this entity.
    pub visible: bool,

    /// Draw priority, lower draws first.
    pub z_order: i32,

    /// Top-left corner in screen space.
    pub position: Option<Vec2>,

    /// Rectangle size in screen space.
    pub size: Option<Vec2>,

    /// Gate for click dispatch. Off by default.
    pub handle_click: bool,

    on_click: Option<ClickCallback>,
}

impl EntityBase {
    /// Create an entity without geometry.
    ///
    /// The name is derived from the ID.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            name: id.default_name(),
            visible: true,
            z_order: 0,
            position: None,
            size: None,
            handle_click: DEFAULT_HANDLE_CLICK,
            on_click: None,
        }
    }

    /// Override the derived name (builder pattern).
    ///
    /// Must happen before the entity is spawned, since the name is the
    /// handler key.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set position and size (builder pattern).
    #[must_use]
    pub fn with_geometry(mut self, position: Vec2, size: Vec2) -> Self {
        self.position = Some(position);
        self.size = Some(size);
        self
    }

    /// Set visibility (builder pattern).
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set z-order (builder pattern).
    #[must_use]
    pub fn with_z_order(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    /// Enable or disable click handling (builder pattern).
    #[must_use]
    pub fn with_click_handling(mut self, enabled: bool) -> Self {
        self.handle_click = enabled;
        self
    }

    /// Set the click callback (builder pattern).
    #[must_use]
    pub fn with_on_click(mut self, callback: ClickCallback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Replace the click callback.
    pub fn set_on_click(&mut self, callback: Option<ClickCallback>) {
        self.on_click = callback;
    }

    /// The click callback, if any.
    #[must_use]
    pub fn on_click(&self) -> Option<&ClickCallback> {
        self.on_click.as_ref()
    }

    /// Position and size, if both are set.
    #[must_use]
    pub fn rect(&self) -> Option<(Vec2, Vec2)> {
        Some((self.position?, self.size?))
    }

    /// Check whether a point lies strictly inside the rectangle.
    ///
    /// All four edges are exclusive: a point on an edge is a miss.
    pub fn hit_test(&self, point: Vec2) -> Result<bool, EntityError> {
        let (pos, size) = self
            .rect()
            .ok_or(EntityError::HitTestUnavailable { entity: self.id })?;

        Ok(point.x > pos.x
            && point.x < pos.x + size.x
            && point.y > pos.y
            && point.y < pos.y + size.y)
    }
}

impl std::fmt::Debug for EntityBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("z_order", &self.z_order)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("handle_click", &self.handle_click)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}
