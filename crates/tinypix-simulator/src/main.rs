//! Desktop host for the tinypix toolbar UI.
//!
//! Renders a tinypix view tree in an SDL2 window via
//! `embedded-graphics-simulator`. The window stands in for the drawing
//! surface: its pixels are the backing store, and mouse input is converted
//! back to logical coordinates before it reaches the UI.
//!
//! # Configuration
//!
//! Read from the environment (a `.env` file is loaded first if present):
//!
//! | Variable              | Default | Meaning                       |
//! |-----------------------|---------|-------------------------------|
//! | `TINYPIX_WIDTH`       | 320     | Logical surface width         |
//! | `TINYPIX_HEIGHT`      | 240     | Logical surface height        |
//! | `TINYPIX_PIXEL_RATIO` | 2.0     | Physical pixels per logical   |
//!
//! Hold Ctrl while scrolling to zoom instead of pan. Q or Esc quits.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info, warn};

use tinypix::assets::{AssetCatalog, AssetProvider, load_all};
use tinypix::bitmap::Bitmap;
use tinypix::config::{SurfaceConfig, UiConfig};
use tinypix::framebuffer::FrameBuffer;
use tinypix::host::{Host, HostInput};
use tinypix::surface::Surface;
use tinypix::ui::{
    Action, Alignment, ColorButton, ColorSpec, HorizontalAlignment, ImageButton, Stack, Ui,
    VerticalAlignment,
};
use tinypix::Error;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Target frame duration (~60 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(16);

const SPRITE_ID: &str = "/sprite.png";
const SPRITE_SCALE: u32 = 4;

const ACTION_RED: u16 = 1;
const ACTION_IMAGE: u16 = 2;
const ACTION_BLUE: u16 = 3;
const ACTION_YELLOW: u16 = 4;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {}={:?}", key, raw);
            default
        }),
        Err(_) => default,
    }
}

fn surface_config() -> SurfaceConfig {
    let defaults = SurfaceConfig::default();
    SurfaceConfig::new(
        Size::new(
            env_or("TINYPIX_WIDTH", defaults.logical_size.width),
            env_or("TINYPIX_HEIGHT", defaults.logical_size.height),
        ),
        env_or("TINYPIX_PIXEL_RATIO", 2.0f32),
    )
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Built-in 12x12 pencil-ish sprite so the simulator runs without files.
fn builtin_sprite() -> Result<Bitmap, Error> {
    const SIZE: u32 = 12;
    let pixels = (0..SIZE * SIZE)
        .map(|i| {
            let (x, y) = (i % SIZE, i / SIZE);
            if x == y || x + 1 == y {
                Rgb565::CSS_ORANGE
            } else if x + y == SIZE - 1 {
                Rgb565::CSS_DARK_SLATE_GRAY
            } else if x == 0 || y == 0 || x == SIZE - 1 || y == SIZE - 1 {
                Rgb565::CSS_LIGHT_GRAY
            } else {
                Rgb565::CSS_DIM_GRAY
            }
        })
        .collect();
    Bitmap::new(Size::new(SIZE, SIZE), pixels)
}

fn asset_catalog() -> Result<AssetCatalog, Error> {
    Ok(AssetCatalog::new().with_image(SPRITE_ID, builtin_sprite()?))
}

// ---------------------------------------------------------------------------
// Application assembly
// ---------------------------------------------------------------------------

/// Build the toolbar (left edge) and the menu bar (top center).
fn build_ui<P: AssetProvider>(ui: &mut Ui, assets: &mut P) -> Result<(), Error> {
    let mut images = load_all(assets, &[SPRITE_ID])?.into_iter();
    let sprite = images
        .next()
        .ok_or_else(|| Error::AssetNotFound { id: SPRITE_ID.into() })?;
    info!("Loaded all assets");

    let sprite_size = sprite.size();
    let tools = Stack::vertical(Point::zero())
        .with(ColorButton::new(
            Rectangle::new(Point::zero(), Size::new(48, 48)),
            ColorSpec::Hover {
                hover: Rgb565::RED,
                rest: Rgb565::GREEN,
            },
            Action::Clicked(ACTION_RED),
        ))
        .with(
            ImageButton::new(Point::zero(), sprite, Action::Clicked(ACTION_IMAGE)).with_size(
                Size::new(
                    sprite_size.width * SPRITE_SCALE,
                    sprite_size.height * SPRITE_SCALE,
                ),
            ),
        );
    ui.add(
        tools,
        Some(Alignment::new(
            HorizontalAlignment::Left,
            VerticalAlignment::Center,
        )),
    );

    let menu = Stack::horizontal(Point::zero())
        .with(ColorButton::new(
            Rectangle::new(Point::zero(), Size::new(64, 64)),
            Rgb565::BLUE,
            Action::Clicked(ACTION_BLUE),
        ))
        .with(ColorButton::new(
            Rectangle::new(Point::zero(), Size::new(48, 48)),
            Rgb565::YELLOW,
            Action::Clicked(ACTION_YELLOW),
        ));
    ui.add(
        menu,
        Some(Alignment::new(
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
        )),
    );
    Ok(())
}

fn describe(action: Action) -> &'static str {
    match action {
        Action::Clicked(ACTION_RED) => "Clicked red.",
        Action::Clicked(ACTION_IMAGE) => "Clicked image.",
        Action::Clicked(ACTION_BLUE) => "Clicked blue.",
        Action::Clicked(ACTION_YELLOW) => "Clicked yellow.",
        Action::Clicked(_) => "Clicked an unknown button.",
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// SDL window host. The window shows the framebuffer's backing store 1:1.
struct SimulatorHost {
    framebuffer: FrameBuffer,
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    zoom_modifier: bool,
    frame_start: Instant,
}

impl SimulatorHost {
    fn new(config: SurfaceConfig) -> Self {
        let framebuffer = FrameBuffer::new(config);
        let display = SimulatorDisplay::<Rgb565>::new(framebuffer.target_backing_size());
        let output_settings = OutputSettingsBuilder::new().scale(1).build();
        let mut window = Window::new("tinypix", &output_settings);

        // The SDL window is lazily initialized on the first `update()` call.
        // We must call `update()` once before `events()` or it will panic.
        window.update(&display);

        Self {
            framebuffer,
            display,
            window,
            zoom_modifier: false,
            frame_start: Instant::now(),
        }
    }

    /// Window pixels to logical surface coordinates.
    fn to_logical(&self, point: Point) -> Point {
        let ratio = self.framebuffer.device_pixel_ratio();
        Point::new(
            (point.x as f32 / ratio) as i32,
            (point.y as f32 / ratio) as i32,
        )
    }
}

impl Host for SimulatorHost {
    type Surface = FrameBuffer;

    fn surface(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }

    fn next_frame(&mut self, input: &mut Vec<HostInput>) -> bool {
        let elapsed = self.frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
        self.frame_start = Instant::now();

        let events: Vec<SimulatorEvent> = self.window.events().collect();
        for event in events {
            match event {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => return false,
                    Keycode::LCtrl | Keycode::RCtrl => self.zoom_modifier = true,
                    _ => {}
                },
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if matches!(keycode, Keycode::LCtrl | Keycode::RCtrl) {
                        self.zoom_modifier = false;
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    input.push(HostInput::PointerDown(self.to_logical(point)));
                }
                SimulatorEvent::MouseMove { point } => {
                    input.push(HostInput::PointerMove(self.to_logical(point)));
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    input.push(HostInput::PointerUp(self.to_logical(point)));
                }
                SimulatorEvent::MouseWheel { scroll_delta, .. } => {
                    input.push(HostInput::Wheel {
                        delta_x: scroll_delta.x as f32,
                        delta_y: scroll_delta.y as f32,
                        zoom_modifier: self.zoom_modifier,
                    });
                }
                _ => {}
            }
        }
        true
    }

    fn present(&mut self) -> Result<(), Error> {
        self.framebuffer.flush(&mut self.display)?;
        self.window.update(&self.display);
        Ok(())
    }

    fn on_action(&mut self, action: Action) {
        info!("{}", describe(action));
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = surface_config();
    info!("Starting tinypix simulator");
    info!(
        "Surface: {}×{} logical at ratio {}",
        config.logical_size.width, config.logical_size.height, config.device_pixel_ratio
    );

    let mut ui = Ui::new(UiConfig::default().with_clear_color(Rgb565::BLACK));
    let built = asset_catalog().and_then(|mut assets| build_ui(&mut ui, &mut assets));
    if let Err(e) = built {
        error!("Could not load assets: {}", e);
        std::process::exit(1);
    }

    let mut host = SimulatorHost::new(config);
    if let Err(e) = ui.run(&mut host) {
        error!("Frame loop failed: {}", e);
        std::process::exit(1);
    }

    info!("Simulator exiting");
}
