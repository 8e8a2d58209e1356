use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;

mod carousel;
mod constants;
mod controls;
mod error;
mod pagination;
mod slide;
mod source;
mod state;
mod surface;
mod texture_loader;
mod timer;

use crate::carousel::{Carousel, CarouselConfig};
use crate::constants::*;
use crate::controls::{Control, ControlsBar};
use crate::slide::Slide;
use crate::source::{Catalog, ImageSource};
use crate::surface::Canvas;
use crate::texture_loader::{load_image_with_exif_rotation, placeholder_image};

/// Image carousel with manual and timed navigation.
#[derive(Parser, Debug)]
#[command(name = "carousel", version)]
struct Args {
    /// Image identifiers, relative ones are looked up under --base
    images: Vec<String>,

    /// Show every image in this directory instead of an explicit list
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Folder prefixed to relative identifiers
    #[arg(long, default_value = DEFAULT_BASE)]
    base: String,

    /// Directory the resolved identifiers are loaded from
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[arg(long, default_value_t = CAROUSEL_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    #[arg(long, default_value_t = CAROUSEL_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Seconds without interaction before the next image is shown
    #[arg(long, default_value_t = AUTO_ADVANCE.as_secs())]
    interval: u64,

    /// Page opened when the image is clicked
    #[arg(long, default_value = DEFAULT_DETAIL_PAGE)]
    detail_page: String,

    #[arg(long, default_value_t = FPS)]
    fps: u32,
}

// --- Load one slot per catalog entry, keeping failures as empty slots ---
fn load_slides(catalog: &Catalog, root: &Path, width: i32, height: i32) -> Vec<Option<Slide>> {
    catalog
        .load_paths(root)
        .into_iter()
        .map(|path| match path {
            None => Some(Slide::new(placeholder_image(width, height))),
            Some(path) => match load_image_with_exif_rotation(&path) {
                Ok(image) => Some(Slide::new(image)),
                Err(e) => {
                    log::warn!("Skipping image: {}", e);
                    None
                }
            },
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let source = ImageSource::select(args.images, args.dir);
    let catalog = source
        .catalog(&args.base, FALLBACK_COUNT)
        .context("failed to resolve the image list")?;
    if catalog.is_empty() {
        log::warn!("Image source {:?} is empty, showing placeholder", source);
    } else {
        log::info!("Using {:?} source with {} images", source, catalog.len());
    }

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height + CONTROLS_HEIGHT)
        .title("Carousel")
        .vsync()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let config = CarouselConfig {
        auto_advance: Duration::from_secs(args.interval),
        detail_page: args.detail_page,
    };
    let mut carousel = Carousel::new(config);
    carousel.initialize(load_slides(&catalog, &args.root, args.width, args.height));
    carousel.preprocess(args.width as u32, args.height as u32);
    for slide in carousel.images_mut() {
        if let Err(e) = slide.upload(&mut rl, &thread) {
            log::warn!("{}", e);
        }
    }

    if let Some(timer) = carousel.timer() {
        log::info!("Auto-advancing every {:?}", timer.interval());
    }

    let controls = ControlsBar::new(args.width, args.height, carousel.pagination());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match controls.hit(rl.get_mouse_position()) {
                Some(Control::Previous) => carousel.on_previous(),
                Some(Control::Next) => carousel.on_next(),
                Some(Control::Dot(marker)) => carousel.on_activate(marker),
                Some(Control::Canvas) => {
                    if let Some(request) = carousel.on_surface_click(&catalog) {
                        log::info!("Opening {}", request.url);
                        println!("navigate: {}", request.url);
                    }
                }
                None => {}
            }
            log::debug!(
                "State {:?}, active dot {:?}, next advance in {:?}",
                carousel.state(),
                carousel.pagination().active(),
                carousel.timer().map(|t| t.remaining())
            );
        }

        carousel.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        carousel.render(&mut Canvas::new(&mut d, args.width, args.height));
        controls.draw(&mut d, carousel.pagination());
    }

    carousel.teardown();
    Ok(())
}
