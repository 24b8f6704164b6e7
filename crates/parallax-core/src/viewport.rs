//! Viewport sizing and the orthographic camera derived from it.
//!
//! World-space width follows the window aspect ratio while the height stays
//! pinned to the frustum size, so resizing a window wider reveals more of
//! each layer instead of stretching it.

use crate::error::{ParallaxError, Result};
use glam::{Mat4, Vec3};

/// Window size in pixels plus the matching world-space extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn from_pixels(pixel_width: u32, pixel_height: u32, frustum_size: f32) -> Result<Self> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ParallaxError::EmptyViewport {
                width: pixel_width,
                height: pixel_height,
            });
        }
        let aspect = pixel_width as f32 / pixel_height as f32;
        Ok(Self {
            pixel_width,
            pixel_height,
            width: frustum_size * aspect,
            height: frustum_size,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.pixel_width as f32 / self.pixel_height as f32
    }
}

/// Orthographic camera looking down -Z from `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrthoCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl OrthoCamera {
    pub fn new(viewport: &ViewportState, camera_z: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            near,
            far,
            position: Vec3::new(0.0, 0.0, camera_z),
            projection: Mat4::IDENTITY,
        };
        camera.fit(viewport);
        camera
    }

    /// Recenter the bounds on the new viewport and rebuild the projection.
    pub fn fit(&mut self, viewport: &ViewportState) {
        self.left = -viewport.width / 2.0;
        self.right = viewport.width / 2.0;
        self.top = viewport.height / 2.0;
        self.bottom = -viewport.height / 2.0;
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view transform; the camera never rotates.
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}
