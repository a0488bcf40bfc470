//! In-memory scene without rendering or physics
//!
//! Records every entity, label and command so sessions can run without a
//! host framework. Contacts are never generated here; callers feed them in.

use std::collections::{BTreeMap, HashMap};

use glam::Vec2;

use crate::scene::{EntityHandle, EntitySpec, LabelHandle, LabelSpec, Rect, Scene};

/// Glyph advance as a fraction of font size, for label hit testing
const GLYPH_ASPECT: f32 = 0.6;

/// Texture size reported for unknown assets
const DEFAULT_TEXTURE_SIZE: Vec2 = Vec2::new(1024.0, 1024.0);

#[derive(Debug, Clone)]
pub struct HeadlessEntity {
    pub spec: EntitySpec,
    pub position: Vec2,
    pub dynamic: bool,
    /// Impulses applied since creation, oldest first
    pub impulses: Vec<Vec2>,
}

#[derive(Debug, Clone)]
pub struct HeadlessLabel {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
    pub alpha: f32,
}

impl HeadlessLabel {
    /// Approximate rendered extent
    pub fn bounds(&self) -> Rect {
        let width = self.text.chars().count() as f32 * self.font_size * GLYPH_ASPECT;
        Rect::new(self.position, Vec2::new(width, self.font_size))
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessScene {
    frame: Rect,
    gravity: Vec2,
    entities: BTreeMap<EntityHandle, HeadlessEntity>,
    labels: HashMap<LabelHandle, HeadlessLabel>,
    textures: HashMap<String, Vec2>,
    removed: Vec<EntityHandle>,
    next_id: u32,
}

impl HeadlessScene {
    /// Scene with a playfield of the given size centered on the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_frame(Rect::centered(width, height))
    }

    pub fn with_frame(frame: Rect) -> Self {
        Self {
            frame,
            gravity: Vec2::new(0.0, -9.8),
            entities: BTreeMap::new(),
            labels: HashMap::new(),
            textures: HashMap::new(),
            removed: Vec::new(),
            next_id: 1,
        }
    }

    pub fn set_texture_size(&mut self, texture: &str, size: Vec2) {
        self.textures.insert(texture.to_string(), size);
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn entity(&self, entity: EntityHandle) -> Option<&HeadlessEntity> {
        self.entities.get(&entity)
    }

    pub fn is_alive(&self, entity: EntityHandle) -> bool {
        self.entities.contains_key(&entity)
    }

    pub fn position(&self, entity: EntityHandle) -> Option<Vec2> {
        self.entities.get(&entity).map(|e| e.position)
    }

    pub fn impulses(&self, entity: EntityHandle) -> &[Vec2] {
        self.entities
            .get(&entity)
            .map(|e| e.impulses.as_slice())
            .unwrap_or_default()
    }

    /// Live entities in creation order
    pub fn entities(&self) -> impl Iterator<Item = (EntityHandle, &HeadlessEntity)> {
        self.entities.iter().map(|(h, e)| (*h, e))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Handles removed so far, in removal order
    pub fn removed(&self) -> &[EntityHandle] {
        &self.removed
    }

    pub fn label(&self, label: LabelHandle) -> Option<&HeadlessLabel> {
        self.labels.get(&label)
    }

    pub fn label_text(&self, label: LabelHandle) -> Option<&str> {
        self.labels.get(&label).map(|l| l.text.as_str())
    }
}

impl Scene for HeadlessScene {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn create_entity(&mut self, spec: &EntitySpec) -> EntityHandle {
        let handle = EntityHandle(self.next_id());
        self.entities.insert(
            handle,
            HeadlessEntity {
                spec: spec.clone(),
                position: spec.position,
                dynamic: spec.body.is_some_and(|b| b.dynamic),
                impulses: Vec::new(),
            },
        );
        handle
    }

    fn remove_entity(&mut self, entity: EntityHandle) {
        if self.entities.remove(&entity).is_some() {
            self.removed.push(entity);
        } else {
            log::debug!("remove of unknown entity {:?}", entity);
        }
    }

    fn set_position(&mut self, entity: EntityHandle, position: Vec2) {
        if let Some(e) = self.entities.get_mut(&entity) {
            e.position = position;
        }
    }

    fn apply_impulse(&mut self, entity: EntityHandle, impulse: Vec2) {
        if let Some(e) = self.entities.get_mut(&entity) {
            // static bodies ignore impulses
            if e.dynamic {
                e.impulses.push(impulse);
            }
        }
    }

    fn set_body_dynamic(&mut self, entity: EntityHandle, dynamic: bool) {
        if let Some(e) = self.entities.get_mut(&entity) {
            if e.spec.body.is_some() {
                e.dynamic = dynamic;
            }
        }
    }

    fn create_label(&mut self, spec: &LabelSpec) -> LabelHandle {
        let handle = LabelHandle(self.next_id());
        self.labels.insert(
            handle,
            HeadlessLabel {
                text: spec.text.clone(),
                position: spec.position,
                font_size: spec.font_size,
                alpha: spec.alpha,
            },
        );
        handle
    }

    fn set_text(&mut self, label: LabelHandle, text: &str) {
        if let Some(l) = self.labels.get_mut(&label) {
            l.text = text.to_string();
        }
    }

    fn set_alpha(&mut self, label: LabelHandle, alpha: f32) {
        if let Some(l) = self.labels.get_mut(&label) {
            l.alpha = alpha;
        }
    }

    fn label_contains(&self, label: LabelHandle, point: Vec2) -> bool {
        self.labels
            .get(&label)
            .is_some_and(|l| l.bounds().contains(point))
    }

    fn texture_size(&self, texture: &str) -> Vec2 {
        self.textures
            .get(texture)
            .copied()
            .unwrap_or(DEFAULT_TEXTURE_SIZE)
    }
}
