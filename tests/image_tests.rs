// Host-side tests for tile image decoding and surface sizing.

use parallax_render::{logical_size, physical_size, window_surface_size, TileImage};
use std::io::Cursor;

fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(px));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decodes_png_to_rgba8() {
    let bytes = png_bytes(3, 2, [255, 0, 0, 128]);
    let img = TileImage::decode(&bytes).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.rgba.len(), 3 * 2 * 4);
    assert_eq!(&img.rgba[..4], &[255, 0, 0, 128]);
}

#[test]
fn garbage_falls_back_to_blank_tile() {
    assert!(TileImage::decode(b"not a png").is_err());
    let img = TileImage::decode_or_blank("broken.png", b"not a png");
    assert_eq!(img, TileImage::blank());
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(img.rgba, vec![0, 0, 0, 0]);
}

#[test]
fn physical_size_applies_pixel_ratio() {
    assert_eq!(physical_size(800, 450, 1.0), (800, 450));
    assert_eq!(physical_size(800, 450, 2.0), (1600, 900));
    assert_eq!(physical_size(801, 451, 1.5), (1202, 677));
    assert_eq!(physical_size(0, 0, 1.0), (1, 1));
}

#[test]
fn native_surface_matches_window_at_any_scale() {
    // (physical window, scale factor)
    let cases = [((1003, 601), 1.5), ((2400, 1350), 3.0), ((1280, 720), 1.25), ((800, 450), 1.0)];
    for ((pw, ph), scale) in cases {
        assert_eq!(window_surface_size(pw, ph), (pw, ph), "{}x{} @{}", pw, ph, scale);
    }
    // Going through a rounded logical size would not get back to the window.
    let (lw, lh) = logical_size(1003, 601, 1.5);
    assert_eq!((lw, lh), (669, 401));
    assert_ne!(physical_size(lw, lh, 1.5), (1003, 601));
}

#[test]
fn logical_size_divides_by_scale_factor() {
    assert_eq!(logical_size(1600, 900, 2.0), (800, 450));
    assert_eq!(logical_size(2400, 1350, 3.0), (800, 450));
    assert_eq!(logical_size(800, 450, 1.0), (800, 450));
    assert_eq!(logical_size(800, 450, 0.0), (800, 450));
    assert_eq!(logical_size(800, 450, f64::NAN), (800, 450));
    assert_eq!(logical_size(0, 0, 2.0), (0, 0));
}

#[test]
fn window_surface_size_never_collapses_to_zero() {
    assert_eq!(window_surface_size(0, 0), (1, 1));
    assert_eq!(window_surface_size(0, 720), (1, 720));
}
