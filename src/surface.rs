use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::slide::Slide;

/// A decoded image the carousel can show and shrink.
pub trait Bitmap {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn resize(&mut self, width: u32, height: u32);

    /// False while the pixels are not yet available for drawing.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Drawing target for one carousel frame.
pub trait Surface<B: ?Sized> {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn draw_label(&mut self, text: &str, center_x: i32, center_y: i32, size: i32, color: Color);
    fn draw_image(&mut self, image: &B, x: f32, y: f32);
}

/// The carousel's region of the window, drawn through raylib.
pub struct Canvas<'a, D: RaylibDraw> {
    d: &'a mut D,
    width: i32,
    height: i32,
}

impl<'a, D: RaylibDraw> Canvas<'a, D> {
    pub fn new(d: &'a mut D, width: i32, height: i32) -> Self {
        Self { d, width, height }
    }
}

impl<D: RaylibDraw> Surface<Slide> for Canvas<'_, D> {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        // Only the canvas area, the controls bar below is drawn separately
        self.d.draw_rectangle(0, 0, self.width, self.height, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.d.draw_rectangle(x, y, width, height, color);
    }

    fn draw_label(&mut self, text: &str, center_x: i32, center_y: i32, size: i32, color: Color) {
        let text_width = measure_text(text, size);
        self.d.draw_text(text, center_x - text_width / 2, center_y - size / 2, size, color);
    }

    fn draw_image(&mut self, image: &Slide, x: f32, y: f32) {
        if let Some(texture) = image.texture() {
            self.d.draw_texture_v(texture, Vector2::new(x, y), Color::WHITE);
        }
    }
}
