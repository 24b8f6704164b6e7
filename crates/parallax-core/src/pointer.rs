use crate::viewport::ViewportState;
use glam::Vec2;

/// Latest pointer sample as an offset from the viewport centre.
///
/// Overwritten on every pointer move; nothing accumulates between samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Normalize raw client coordinates against a window of the given pixel size.
    pub fn from_client_px(
        client_x: f32,
        client_y: f32,
        pixel_width: f32,
        pixel_height: f32,
        scale: f32,
    ) -> Self {
        Self {
            x: (client_x - pixel_width / 2.0) * scale,
            y: (client_y - pixel_height / 2.0) * scale,
        }
    }

    pub fn from_client(client_x: f32, client_y: f32, viewport: &ViewportState, scale: f32) -> Self {
        Self::from_client_px(
            client_x,
            client_y,
            viewport.pixel_width as f32,
            viewport.pixel_height as f32,
            scale,
        )
    }

    /// Parallax displacement for a layer with the given weight.
    ///
    /// Note the sign flip on x: moving the pointer right pushes layers left.
    #[inline]
    pub fn parallax_offset(&self, weight: f32, strength: f32) -> Vec2 {
        Vec2::new(-self.x * weight * strength, self.y * weight * strength)
    }
}
