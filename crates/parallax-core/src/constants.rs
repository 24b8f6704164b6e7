// Shared scene and motion tuning constants used by both web and native frontends.

// Camera
pub const FRUSTUM_SIZE: f32 = 10.0; // vertical extent of the orthographic view, world units
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Motion
pub const BASE_SPEED: f32 = 0.05; // world units per frame before the layer multiplier
pub const PARALLAX_STRENGTH: f32 = 0.1;
pub const POINTER_SCALE: f32 = 0.001; // pixels -> normalized pointer offset

// Output
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Tile material
pub const ALPHA_TEST: f32 = 0.1;

// Default layer table: (image, depth, speed), back to front
pub const DEFAULT_LAYERS: [(&str, f32, f32); 2] = [("bg.png", -4.0, 0.1), ("fg.png", -2.0, 0.3)];
