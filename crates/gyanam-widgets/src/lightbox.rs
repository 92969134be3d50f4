//! Full-screen image viewer state.

use serde::Serialize;

/// Index value while no slide is open.
pub const CLOSED: isize = -1;

/// A single-instance lightbox over a fixed list of slides.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Lightbox {
    index: isize,
    slides: usize,
}

impl Lightbox {
    /// A closed viewer over `slides` images.
    pub fn new(slides: usize) -> Self {
        Self {
            index: CLOSED,
            slides,
        }
    }

    /// Current index, or [`CLOSED`].
    pub fn index(&self) -> isize {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.index >= 0
    }

    /// The open slide, if any.
    pub fn current(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }

    pub fn slides(&self) -> usize {
        self.slides
    }

    /// Open at thumbnail `k`. Replaces any slide already open.
    ///
    /// Returns `false` and leaves the state untouched when `k` is out of range.
    pub fn open(&mut self, k: usize) -> bool {
        if k >= self.slides {
            return false;
        }
        match isize::try_from(k) {
            Ok(index) => {
                self.index = index;
                true
            }
            Err(_) => false,
        }
    }

    pub fn close(&mut self) {
        self.index = CLOSED;
    }

    /// Move to the next slide, wrapping. No-op while closed.
    pub fn next(&mut self) {
        if let Some(current) = self.current() {
            self.index = ((current + 1) % self.slides) as isize;
        }
    }

    /// Move to the previous slide, wrapping. No-op while closed.
    pub fn prev(&mut self) {
        if let Some(current) = self.current() {
            self.index = ((current + self.slides - 1) % self.slides) as isize;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let lightbox = Lightbox::new(7);

        assert_eq!(lightbox.index(), CLOSED);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn click_opens_at_thumbnail() {
        for k in 0..7 {
            let mut lightbox = Lightbox::new(7);

            assert!(lightbox.open(k));
            assert_eq!(lightbox.index(), k as isize);
            assert!(lightbox.is_open());
        }
    }

    #[test]
    fn close_resets_from_any_state() {
        let mut lightbox = Lightbox::new(7);

        lightbox.close();
        assert_eq!(lightbox.index(), CLOSED);

        lightbox.open(5);
        lightbox.next();
        lightbox.close();
        assert_eq!(lightbox.index(), CLOSED);
    }

    #[test]
    fn only_one_slide_is_open() {
        let mut lightbox = Lightbox::new(3);

        lightbox.open(0);
        lightbox.open(2);

        assert_eq!(lightbox.current(), Some(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut lightbox = Lightbox::new(3);

        assert!(!lightbox.open(3));
        assert_eq!(lightbox.index(), CLOSED);
        assert!(!Lightbox::new(0).open(0));
    }

    #[test]
    fn navigation_wraps() {
        let mut lightbox = Lightbox::new(3);

        lightbox.next();
        assert_eq!(lightbox.index(), CLOSED);

        lightbox.open(2);
        lightbox.next();
        assert_eq!(lightbox.current(), Some(0));
        lightbox.prev();
        assert_eq!(lightbox.current(), Some(2));
    }
}
