// Native window defaults

pub const WINDOW_TITLE: &str = "Parallax (native)";
pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 450.0;

// Directory layer images are read from when no argument is given
pub const DEFAULT_ASSET_DIR: &str = "assets";
