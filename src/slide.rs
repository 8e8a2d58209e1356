use raylib::prelude::*;

use crate::error::LoadError;
use crate::surface::Bitmap;

/// One carousel image: the CPU bitmap used for resizing and its GPU copy.
pub struct Slide {
    image: Image,
    texture: Option<Texture2D>,
}

impl Slide {
    pub fn new(image: Image) -> Self {
        Self { image, texture: None }
    }

    /// Uploads the (possibly resized) bitmap. Must run after preprocessing,
    /// resizing drops the texture again.
    pub fn upload(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<(), LoadError> {
        let texture = rl
            .load_texture_from_image(thread, &self.image)
            .map_err(|e| LoadError::Texture(e.to_string()))?;
        self.texture = Some(texture);
        Ok(())
    }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }
}

impl Bitmap for Slide {
    fn width(&self) -> u32 {
        self.image.width().max(0) as u32
    }

    fn height(&self) -> u32 {
        self.image.height().max(0) as u32
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.image.resize(width as i32, height as i32);
        self.texture = None;
    }

    fn is_ready(&self) -> bool {
        self.texture.is_some()
    }
}
