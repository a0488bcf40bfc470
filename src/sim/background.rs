//! Scrolling starfield behind the playfield
//!
//! Two stacked tiles slide down by one tile height per period, then snap
//! back up, so the pair covers the view continuously.

use glam::Vec2;

use crate::consts::STAR_Z;
use crate::scene::{EntityHandle, EntitySpec, Scene, Shape};

pub const STAR_TILES: usize = 2;

#[derive(Debug, Clone)]
pub struct Starfield {
    tiles: [EntityHandle; STAR_TILES],
    tile_height: f32,
    period: f32,
    elapsed: f32,
}

impl Starfield {
    /// Create the tiles in `scene`
    pub fn spawn(scene: &mut impl Scene, texture: &str, period: f32) -> Self {
        let size = scene.texture_size(texture);
        let tiles = std::array::from_fn(|i| {
            scene.create_entity(&EntitySpec {
                shape: Shape::Sprite {
                    texture: texture.to_string(),
                    size,
                },
                position: Self::rest_position(i, size.y),
                z: STAR_Z,
                body: None,
            })
        });

        Self {
            tiles,
            tile_height: size.y,
            period,
            elapsed: 0.0,
        }
    }

    fn rest_position(index: usize, tile_height: f32) -> Vec2 {
        Vec2::new(0.0, tile_height * index as f32)
    }

    pub fn tiles(&self) -> &[EntityHandle; STAR_TILES] {
        &self.tiles
    }

    /// Downward offset of every tile in the current period
    pub fn scroll_offset(&self) -> f32 {
        self.tile_height * (self.elapsed / self.period)
    }

    /// Advance the scroll and push tile positions to the scene
    pub fn advance(&mut self, scene: &mut impl Scene, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.elapsed = (self.elapsed + dt) % self.period;

        let offset = self.scroll_offset();
        for (i, &tile) in self.tiles.iter().enumerate() {
            let pos = Self::rest_position(i, self.tile_height) - Vec2::new(0.0, offset);
            scene.set_position(tile, pos);
        }
    }
}
