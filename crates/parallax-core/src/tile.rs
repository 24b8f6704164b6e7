use crate::constants::ALPHA_TEST;
use glam::{Mat4, Quat, Vec3};

/// Stable handle a renderer uses to look up a tile's texture instance.
///
/// Ids are assigned at scene construction and survive role swaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Surface flags every tile is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileMaterial {
    pub repeat_wrap_s: bool,
    pub double_sided: bool,
    pub transparent: bool,
    pub alpha_test: f32,
}

impl Default for TileMaterial {
    fn default() -> Self {
        Self {
            repeat_wrap_s: true,
            double_sided: true,
            transparent: true,
            alpha_test: ALPHA_TEST,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualTile {
    pub id: TileId,
    pub position: Vec3,
    pub geometry: PlaneGeometry,
    pub material: TileMaterial,
}

impl VisualTile {
    /// Unit quad -> world transform.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.geometry.width, self.geometry.height, 1.0),
            Quat::IDENTITY,
            self.position,
        )
    }
}

/// Two tiles showing the same image side by side.
///
/// Slot 0 is the left (leading) tile and slot 1 the right (trailing) one.
/// A wrap exchanges the slots instead of recreating either tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePair {
    tiles: [VisualTile; 2],
}

impl TilePair {
    pub fn new(left: VisualTile, right: VisualTile) -> Self {
        Self {
            tiles: [left, right],
        }
    }

    #[inline]
    pub fn left(&self) -> &VisualTile {
        &self.tiles[0]
    }

    #[inline]
    pub fn right(&self) -> &VisualTile {
        &self.tiles[1]
    }

    #[inline]
    pub fn left_mut(&mut self) -> &mut VisualTile {
        &mut self.tiles[0]
    }

    #[inline]
    pub fn right_mut(&mut self) -> &mut VisualTile {
        &mut self.tiles[1]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &VisualTile> {
        self.tiles.iter()
    }

    #[inline]
    pub fn swap(&mut self) {
        self.tiles.swap(0, 1);
    }

    #[inline]
    pub fn separation(&self) -> f32 {
        self.right().position.x - self.left().position.x
    }

    /// Both tiles always move by the same delta.
    pub fn translate_x(&mut self, dx: f32) {
        for tile in &mut self.tiles {
            tile.position.x += dx;
        }
    }

    pub fn set_y(&mut self, y: f32) {
        for tile in &mut self.tiles {
            tile.position.y = y;
        }
    }

    /// Move the left tile behind the right one once it has fully left the
    /// viewport, then swap roles. Returns whether a wrap happened.
    ///
    /// Only the left tile is tested; since roles alternate on every wrap
    /// both physical tiles get checked in turn.
    pub fn wrap(&mut self, viewport_width: f32) -> bool {
        if self.left().position.x > -viewport_width {
            return false;
        }
        let next_x = self.right().position.x + viewport_width;
        self.left_mut().position.x = next_x;
        self.swap();
        true
    }

    /// Value form of [`TilePair::wrap`].
    pub fn wrapped(mut self, viewport_width: f32) -> Self {
        self.wrap(viewport_width);
        self
    }

    pub fn replace_geometry(&mut self, geometry: PlaneGeometry) {
        for tile in &mut self.tiles {
            tile.geometry = geometry;
        }
    }

    /// One-shot correction applied after a resize.
    #[allow(clippy::float_cmp)]
    pub fn enforce_separation(&mut self, width: f32) {
        if self.separation() != width {
            let x = self.left().position.x + width;
            self.right_mut().position.x = x;
        }
    }
}
