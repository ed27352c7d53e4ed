//! Plain filled-rectangle scenery.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{EntityId, RegistryError, Vec2};
use crate::events::EventRegistry;
use crate::render::RenderContext;

use super::{spawn, Entity, EntityBase};

/// A filled rectangle that is not a card.
#[derive(Clone, Debug)]
pub struct RenderableEntity {
    pub base: EntityBase,
    pub fill_style: String,
}

impl RenderableEntity {
    /// Create an unregistered rectangle.
    pub fn new(id: EntityId, position: Vec2, size: Vec2, fill_style: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id).with_geometry(position, size),
            fill_style: fill_style.into(),
        }
    }

    /// Create a rectangle and register its click handler.
    pub fn spawn(
        position: Vec2,
        size: Vec2,
        fill_style: impl Into<String>,
        registry: &mut EventRegistry,
    ) -> Result<Rc<RefCell<Self>>, RegistryError> {
        let id = registry.issue_id()?;
        Ok(spawn(Self::new(id, position, size, fill_style), registry))
    }
}

impl Entity for RenderableEntity {
    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase {
        &mut self.base
    }

    /// Fills with the far corner passed as an absolute point.
    fn draw(&self, ctx: &mut dyn RenderContext) {
        let Some((pos, size)) = self.base.rect() else {
            return;
        };
        ctx.set_fill_style(&self.fill_style);
        ctx.fill_rect(pos.x, pos.y, pos.x + size.x, pos.y + size.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandBuffer, DrawCommand};

    #[test]
    fn test_draw_uses_far_corner() {
        let rect = RenderableEntity::new(
            EntityId(0),
            Vec2::new(10.0, 20.0),
            Vec2::new(30.0, 40.0),
            "#123",
        );

        let mut buffer = CommandBuffer::new();
        rect.draw(&mut buffer);

        assert_eq!(
            buffer.commands(),
            &[
                DrawCommand::SetFillStyle("#123".into()),
                DrawCommand::FillRect { x: 10.0, y: 20.0, a: 40.0, b: 60.0 },
            ]
        );
    }

    #[test]
    fn test_spawn_registers() {
        let mut registry = EventRegistry::new();
        let rect = RenderableEntity::spawn(Vec2::ZERO, Vec2::splat(5.0), "#000", &mut registry).unwrap();

        let name = rect.borrow().base.name.clone();
        assert_eq!(name, "base_game_object_0");
        assert!(registry.click_handlers().contains(&name));
        assert!(!rect.borrow().base.handle_click);
    }

    #[test]
    fn test_spawn_fails_when_ids_run_out() {
        let mut registry = EventRegistry::new();
        registry.reserve_id(EntityId(u32::MAX));

        let result = RenderableEntity::spawn(Vec2::ZERO, Vec2::splat(5.0), "#000", &mut registry);
        assert_eq!(result.unwrap_err(), RegistryError::IdsExhausted);
        assert!(registry.click_handlers().is_empty());
    }
}
