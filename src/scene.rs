//! Contract with the host 2D scene/physics framework
//!
//! The framework owns rendering, collision detection, impulse resolution
//! and input dispatch. The controller only issues the commands below.
//! Implementations must never hand out the same entity handle twice
//! within one scene lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a scene node with an optional physics body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityHandle(pub u32);

/// Opaque identifier of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelHandle(pub u32);

/// Axis-aligned rectangle, stored as center + size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Rectangle centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }
}

/// Visual/collision shape of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Rect { size: Vec2 },
    /// Hollow boundary around a rectangle of the given size
    EdgeLoop { size: Vec2 },
    Sprite { texture: String, size: Vec2 },
}

/// Physics body parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Static bodies ignore forces and impulses
    pub dynamic: bool,
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
    pub allows_rotation: bool,
    pub precise_collision: bool,
}

impl BodySpec {
    /// Immovable body (paddle, bricks, lose zone, walls)
    pub fn fixed() -> Self {
        Self {
            dynamic: false,
            restitution: 0.0,
            friction: 0.0,
            linear_damping: 0.0,
            allows_rotation: false,
            precise_collision: false,
        }
    }

    /// Perfectly elastic, frictionless ball body. Starts non-dynamic until launched.
    pub fn ball() -> Self {
        Self {
            dynamic: false,
            restitution: 1.0,
            friction: 0.0,
            linear_damping: 0.0,
            allows_rotation: false,
            precise_collision: true,
        }
    }
}

/// Everything needed to create one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub shape: Shape,
    pub position: Vec2,
    pub z: f32,
    /// `None` for purely visual nodes
    pub body: Option<BodySpec>,
}

/// Everything needed to create one text label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
    pub alpha: f32,
}

/// Commands the game controller issues to the host framework
pub trait Scene {
    /// Playfield rectangle in scene coordinates
    fn frame(&self) -> Rect;

    fn set_gravity(&mut self, gravity: Vec2);

    fn create_entity(&mut self, spec: &EntitySpec) -> EntityHandle;

    fn remove_entity(&mut self, entity: EntityHandle);

    fn set_position(&mut self, entity: EntityHandle, position: Vec2);

    fn apply_impulse(&mut self, entity: EntityHandle, impulse: Vec2);

    fn set_body_dynamic(&mut self, entity: EntityHandle, dynamic: bool);

    fn create_label(&mut self, spec: &LabelSpec) -> LabelHandle;

    fn set_text(&mut self, label: LabelHandle, text: &str);

    fn set_alpha(&mut self, label: LabelHandle, alpha: f32);

    /// Hit test against the rendered extent of a label
    fn label_contains(&self, label: LabelHandle, point: Vec2) -> bool;

    /// Native size of a texture asset
    fn texture_size(&self, texture: &str) -> Vec2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::centered(600.0, 800.0);
        assert_eq!(rect.min_x(), -300.0);
        assert_eq!(rect.max_x(), 300.0);
        assert_eq!(rect.min_y(), -400.0);
        assert_eq!(rect.max_y(), 400.0);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0));
        assert!(rect.contains(Vec2::new(0.0, 5.0)));
        assert!(rect.contains(Vec2::new(20.0, 15.0)));
        assert!(!rect.contains(Vec2::new(21.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.0, 4.0)));
    }
}
