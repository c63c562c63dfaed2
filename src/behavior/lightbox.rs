/// Tracks which image of a fixed gallery is shown full screen, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selects the image at `index`.
    ///
    /// The gallery is fixed when the page is built, so an out of range index
    /// is a programming error and panics.
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.len,
            "lightbox index {index} out of range for {} images",
            self.len
        );
        self.selected = Some(index);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let lb = Lightbox::new(4);
        assert_eq!(lb.selected(), None);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_select_then_clear() {
        let mut lb = Lightbox::new(4);
        lb.select(2);
        assert_eq!(lb.selected(), Some(2));
        assert!(lb.is_open());

        lb.clear();
        assert_eq!(lb.selected(), None);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_clear_for_every_index() {
        let mut lb = Lightbox::new(4);
        for i in 0..lb.len() {
            lb.select(i);
            assert_eq!(lb.selected(), Some(i));
            lb.clear();
            assert!(!lb.is_open());
        }
        // clearing an already closed lightbox is fine
        lb.clear();
        assert!(!lb.is_open());
    }

    #[test]
    fn test_reselect_replaces() {
        let mut lb = Lightbox::new(4);
        lb.select(0);
        lb.select(3);
        assert_eq!(lb.selected(), Some(3));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics() {
        let mut lb = Lightbox::new(4);
        lb.select(4);
    }
}
