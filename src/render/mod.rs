//! Rendering surface.
//!
//! The canvas itself lives outside this crate. Entities draw through
//! [`RenderContext`], which exposes just the two primitives they use: setting
//! the fill style and filling a rectangle.
//!
//! `fill_rect` takes four numbers whose meaning depends on the caller.
//! Scenery passes the far corner as an absolute point, cards pass width and
//! height. Both conventions are kept as-is.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A 2D drawing target.
pub trait RenderContext {
    /// Set the style used by subsequent fills.
    fn set_fill_style(&mut self, style: &str);

    /// Fill a rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, a: f64, b: f64);
}

/// A recorded drawing call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    SetFillStyle(String),
    FillRect { x: f64, y: f64, a: f64, b: f64 },
}

/// A render context that records commands instead of drawing.
///
/// Useful for headless runs and for replaying a frame onto a real canvas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay onto another context.
    pub fn replay(&self, ctx: &mut dyn RenderContext) {
        for command in &self.commands {
            match command {
                DrawCommand::SetFillStyle(style) => ctx.set_fill_style(style),
                DrawCommand::FillRect { x, y, a, b } => ctx.fill_rect(*x, *y, *a, *b),
            }
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderContext for CommandBuffer {
    fn set_fill_style(&mut self, style: &str) {
        self.commands.push(DrawCommand::SetFillStyle(style.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, a: f64, b: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, a, b });
    }
}

/// Draw visible entities in ascending z-order.
///
/// Ties keep their input order. Invisible entities are skipped.
pub fn draw_pass(entities: &[&dyn Entity], ctx: &mut dyn RenderContext) {
    let mut visible: Vec<&dyn Entity> = entities
        .iter()
        .copied()
        .filter(|e| e.base().visible)
        .collect();
    visible.sort_by_key(|e| e.base().z_order);

    for entity in visible {
        entity.draw(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind};
    use crate::core::{BoardConfig, EntityId, Vec2};
    use crate::entity::RenderableEntity;

    #[test]
    fn test_command_buffer_records() {
        let mut buffer = CommandBuffer::new();
        buffer.set_fill_style("#fff");
        buffer.fill_rect(1.0, 2.0, 3.0, 4.0);

        assert_eq!(
            buffer.commands(),
            &[
                DrawCommand::SetFillStyle("#fff".into()),
                DrawCommand::FillRect { x: 1.0, y: 2.0, a: 3.0, b: 4.0 },
            ]
        );
    }

    #[test]
    fn test_replay() {
        let mut buffer = CommandBuffer::new();
        buffer.set_fill_style("#000");
        buffer.fill_rect(0.0, 0.0, 1.0, 1.0);

        let mut copy = CommandBuffer::new();
        buffer.replay(&mut copy);
        assert_eq!(buffer, copy);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_draw_pass_orders_and_filters() {
        let config = BoardConfig::default();
        let scenery = RenderableEntity::new(
            EntityId(0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            "#aaa",
        );
        // Cards sit at z -10, below scenery at 0
        let enemy = Card::new(CardKind::Enemy, EntityId(1), &config);
        // Viruses start hidden
        let virus = Card::new(CardKind::Virus, EntityId(2), &config);

        let mut buffer = CommandBuffer::new();
        draw_pass(&[&scenery, &enemy, &virus], &mut buffer);

        let styles: Vec<_> = buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::SetFillStyle(s) => Some(s.as_str()),
                DrawCommand::FillRect { .. } => None,
            })
            .collect();
        assert_eq!(styles, vec!["#f44", "#aaa"]);
    }

    #[test]
    fn test_serialization() {
        let mut buffer = CommandBuffer::new();
        buffer.set_fill_style("#f4f");
        buffer.fill_rect(0.0, 0.0, 50.0, 50.0);

        let json = serde_json::to_string(&buffer).unwrap();
        let back: CommandBuffer = serde_json::from_str(&json).unwrap();
        assert_eq!(buffer, back);
    }
}
