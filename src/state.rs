#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CarouselState {
    Empty,                     // No images configured, render shows the placeholder
    Active { current: usize }, // One image selected
}

impl CarouselState {
    pub fn current(&self) -> Option<usize> {
        match self {
            CarouselState::Empty => None,
            CarouselState::Active { current } => Some(*current),
        }
    }
}
