/// Identity of one pagination dot. Click handlers carry this instead of
/// capturing an index.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct MarkerId(usize);

#[derive(Debug, Clone)]
pub struct Marker {
    pub id: MarkerId,
    pub active: bool,
    index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Pagination {
    markers: Vec<Marker>,
}

impl Pagination {
    /// One marker per image, in image order.
    pub fn new(count: usize) -> Self {
        let markers = (0..count)
            .map(|i| Marker { id: MarkerId(i), active: false, index: i })
            .collect();
        Self { markers }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn index_of(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().find(|m| m.id == id).map(|m| m.index)
    }

    pub fn active(&self) -> Option<usize> {
        self.markers.iter().find(|m| m.active).map(|m| m.index)
    }

    /// Marks the marker for `current` active and clears every other one.
    pub fn sync(&mut self, current: Option<usize>) {
        for marker in self.markers.iter_mut() {
            marker.active = Some(marker.index) == current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_per_image_in_order() {
        assert!(Pagination::new(0).is_empty());
        let pagination = Pagination::new(4);
        assert!(!pagination.is_empty());
        assert_eq!(pagination.len(), 4);
        for (i, marker) in pagination.markers().iter().enumerate() {
            assert_eq!(pagination.index_of(marker.id), Some(i));
        }
    }

    #[test]
    fn sync_leaves_exactly_one_active() {
        let mut pagination = Pagination::new(3);
        pagination.sync(Some(0));
        pagination.sync(Some(2));
        let active: Vec<_> = pagination.markers().iter().filter(|m| m.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(pagination.active(), Some(2));
    }

    #[test]
    fn sync_out_of_range_clears_all() {
        let mut pagination = Pagination::new(3);
        pagination.sync(Some(1));
        pagination.sync(Some(7));
        assert_eq!(pagination.active(), None);
    }

    #[test]
    fn unknown_marker_has_no_index() {
        let pagination = Pagination::new(2);
        assert_eq!(pagination.index_of(MarkerId(5)), None);
    }
}
