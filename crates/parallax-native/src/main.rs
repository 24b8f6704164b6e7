use std::path::{Path, PathBuf};
use std::sync::Arc;

use parallax_core::{default_layers, AnimationDriver, ParallaxConfig, ParallaxScene, PointerState};
use parallax_render::{logical_size, GpuState, TileImage};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

mod constants;

use constants::*;

struct App {
    window: Arc<Window>,
    gpu: GpuState<'static>,
    scene: ParallaxScene,
    driver: AnimationDriver,
    pointer: PointerState,
}

impl App {
    // Scene and pointer work in logical pixels; the surface follows the window's physical size.
    fn resize(&mut self, size: PhysicalSize<u32>) {
        let (w, h) = logical_size(size.width, size.height, self.window.scale_factor());
        if let Err(e) = self.scene.resize(w, h) {
            log::warn!("[resize] ignored: {}", e);
            return;
        }
        self.gpu.resize_physical(size.width, size.height);
    }

    fn frame(&mut self) {
        match self.driver.tick(&mut self.scene, self.pointer, &mut self.gpu) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn load_layer_image(dir: &Path, name: &str) -> TileImage {
    let path = dir.join(name);
    match std::fs::read(&path) {
        Ok(bytes) => TileImage::decode_or_blank(name, &bytes),
        Err(e) => {
            log::warn!("[assets] {}: {}, using blank tile", path.display(), e);
            TileImage::blank()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let asset_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    let size = window.inner_size();
    let (width, height) = logical_size(size.width, size.height, window.scale_factor());
    let scene = ParallaxScene::new(default_layers(), width, height, ParallaxConfig::default())?;

    let mut gpu = pollster::block_on(GpuState::new(
        window.clone(),
        size.width,
        size.height,
        1.0,
    ))?;
    for (pair, layer) in scene.pairs().iter().zip(scene.layers()) {
        for tile in pair.tiles() {
            // Each tile gets its own texture instance, even for the same image.
            let image = load_layer_image(&asset_dir, &layer.image);
            gpu.upload_tile(tile, &image);
        }
    }

    let mut app = App {
        window,
        gpu,
        scene,
        driver: AnimationDriver::new(),
        pointer: PointerState::default(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = app.window.inner_size();
                app.resize(size);
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f64>(app.window.scale_factor());
                app.pointer = app.scene.pointer_from_client(p.x as f32, p.y as f32);
            }
            WindowEvent::RedrawRequested => app.frame(),
            _ => {}
        },
        Event::AboutToWait => app.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
