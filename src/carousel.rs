use std::time::Duration;

use crate::constants::*;
use crate::pagination::{MarkerId, Pagination};
use crate::source::PathResolver;
use crate::state::CarouselState;
use crate::surface::{Bitmap, Surface};
use crate::timer::AutoAdvance;

#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub auto_advance: Duration,
    pub detail_page: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: AUTO_ADVANCE,
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
        }
    }
}

/// Request to open the detail page of the image on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub url: String,
}

impl NavigationRequest {
    pub fn detail(page: &str, path: &str) -> Self {
        Self { url: format!("{}?img={}", page, urlencoding::encode(path)) }
    }
}

/// Size an image should be shrunk to so it fits the surface, or `None`
/// when it already fits. Never upscales.
pub fn fit_within(width: u32, height: u32, surface_width: u32, surface_height: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }
    let scale = 1.0_f64
        .min(surface_width as f64 / width as f64)
        .min(surface_height as f64 / height as f64);
    if scale < 1.0 {
        let new_width = ((width as f64 * scale).round() as u32).max(1);
        let new_height = ((height as f64 * scale).round() as u32).max(1);
        Some((new_width, new_height))
    } else {
        None
    }
}

/// Carousel controller. Slots that failed to load stay in place as `None`
/// so indices keep matching the configured list.
pub struct Carousel<B: Bitmap> {
    config: CarouselConfig,
    images: Vec<Option<B>>,
    state: CarouselState,
    pagination: Pagination,
    timer: Option<AutoAdvance>,
}

impl<B: Bitmap> Carousel<B> {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            images: Vec::new(),
            state: CarouselState::Empty,
            pagination: Pagination::default(),
            timer: None,
        }
    }

    pub fn initialize(&mut self, images: Vec<Option<B>>) {
        self.pagination = Pagination::new(images.len());
        self.images = images;
        if self.images.is_empty() {
            log::info!("Carousel has no images, showing placeholder");
            return;
        }
        self.state = CarouselState::Active { current: 0 };
        self.pagination.sync(self.state.current());
        self.reset_auto_advance();
        log::info!("Carousel initialized with {} images", self.images.len());
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn timer(&self) -> Option<&AutoAdvance> {
        self.timer.as_ref()
    }

    pub fn images_mut(&mut self) -> impl Iterator<Item = &mut B> {
        self.images.iter_mut().flatten()
    }

    pub fn next(&mut self) {
        if let CarouselState::Active { current } = self.state {
            let count = self.images.len();
            self.set_current((current + 1) % count);
        }
    }

    pub fn previous(&mut self) {
        if let CarouselState::Active { current } = self.state {
            let count = self.images.len();
            // Out-of-range indices left by jump_to wrap back into range
            self.set_current((current % count + count - 1) % count);
        }
    }

    /// Selects `index` without a bounds check. An out-of-range index
    /// renders the placeholder until the next navigation.
    pub fn jump_to(&mut self, index: usize) {
        if matches!(self.state, CarouselState::Active { .. }) {
            self.set_current(index);
        }
    }

    fn set_current(&mut self, index: usize) {
        self.state = CarouselState::Active { current: index };
        self.pagination.sync(Some(index));
    }

    pub fn reset_auto_advance(&mut self) {
        self.timer = Some(AutoAdvance::new(self.config.auto_advance));
    }

    /// Feeds frame time to the timer and advances once per elapsed interval.
    pub fn update(&mut self, dt: Duration) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => 0,
        };
        for _ in 0..fired {
            log::debug!("Auto-advancing carousel");
            self.next();
        }
    }

    pub fn on_previous(&mut self) {
        self.previous();
        self.reset_auto_advance();
    }

    pub fn on_next(&mut self) {
        self.next();
        self.reset_auto_advance();
    }

    pub fn on_activate(&mut self, marker: MarkerId) {
        if let Some(index) = self.pagination.index_of(marker) {
            self.jump_to(index);
            self.reset_auto_advance();
        }
    }

    pub fn on_surface_click(&self, resolver: &impl PathResolver) -> Option<NavigationRequest> {
        let current = self.state.current()?;
        let path = resolver.resolve(current)?;
        Some(NavigationRequest::detail(&self.config.detail_page, &path))
    }

    /// Shrinks every oversized image to fit the surface. Run once after loading.
    pub fn preprocess(&mut self, surface_width: u32, surface_height: u32) {
        for image in self.images.iter_mut().flatten() {
            if let Some((width, height)) = fit_within(image.width(), image.height(), surface_width, surface_height) {
                log::debug!("Resizing {}x{} image to {}x{}", image.width(), image.height(), width, height);
                image.resize(width, height);
            }
        }
    }

    fn current_image(&self) -> Option<&B> {
        let current = self.state.current()?;
        self.images.get(current)?.as_ref().filter(|image| image.is_ready())
    }

    pub fn render<S: Surface<B>>(&self, surface: &mut S) {
        surface.clear(BACKGROUND);
        let (width, height) = (surface.width(), surface.height());

        match self.current_image() {
            Some(image) => {
                let dx = (width as f32 - image.width() as f32) / 2.0;
                let dy = (height as f32 - image.height() as f32) / 2.0;
                surface.draw_image(image, dx, dy);
            }
            None => {
                surface.fill_rect(0, 0, width, height, PLACEHOLDER_FILL);
                surface.draw_label(PLACEHOLDER_TEXT, width / 2, height / 2, PLACEHOLDER_TEXT_SIZE, PLACEHOLDER_TEXT_COLOR);
            }
        }
    }

    pub fn teardown(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("Auto-advance timer cancelled");
        }
    }
}
