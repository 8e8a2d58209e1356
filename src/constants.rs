use std::time::Duration;
use raylib::prelude::Color;

pub const CAROUSEL_WIDTH: i32 = 640;          // Default canvas width
pub const CAROUSEL_HEIGHT: i32 = 360;         // Default canvas height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE: Duration = Duration::from_secs(30); // Idle time before the next image
pub const FALLBACK_COUNT: usize = 5;          // Placeholder images when nothing is configured

pub const DEFAULT_BASE: &str = "images";
pub const DEFAULT_DETAIL_PAGE: &str = "photo.html";

pub const BACKGROUND: Color = Color::new(220, 220, 220, 255);
pub const PLACEHOLDER_FILL: Color = Color::new(100, 100, 100, 255);
pub const PLACEHOLDER_TEXT_COLOR: Color = Color::WHITE;
pub const PLACEHOLDER_TEXT: &str = "No images loaded";
pub const PLACEHOLDER_TEXT_SIZE: i32 = 18;

pub const CONTROLS_HEIGHT: i32 = 48;          // Height of the bar under the canvas
pub const BUTTON_SIZE: i32 = 32;
pub const DOT_RADIUS: f32 = 6.0;
pub const DOT_SPACING: f32 = 20.0;
