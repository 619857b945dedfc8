//! Slideshow and lightbox navigation state.
//!
//! Both viewers walk a list of image references with a cursor that wraps
//! at either end. Rendering is left to the front end.

use std::time::Duration;

use crate::config::ViewerConfig;

/// Wrap-around cursor over a list of `len` images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current position, `None` when there is nothing to show.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Moves to `index`; out-of-range positions are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Updates the list length as more images arrive, keeping the cursor
    /// in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    /// One-based position text such as `"3 / 45"`.
    pub fn counter(&self) -> String {
        match self.index() {
            Some(index) => format!("{} / {}", index + 1, self.len),
            None => format!("0 / {}", self.len),
        }
    }

    /// Picks the current element out of `images`.
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a String> {
        self.index().and_then(|index| images.get(index))
    }
}

/// Auto-advancing slideshow over every loaded image.
#[derive(Debug, Clone)]
pub struct Slideshow {
    carousel: Carousel,
    playing: bool,
    interval: Duration,
}

impl Slideshow {
    pub fn new(len: usize, config: &ViewerConfig) -> Self {
        Self {
            carousel: Carousel::new(len),
            playing: config.autoplay,
            interval: config.slideshow_interval,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Delay between two ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Advances one image if playing and there is something to show.
    ///
    /// Returns whether the cursor moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing || self.carousel.is_empty() {
            return false;
        }
        self.carousel.next();
        true
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl ViewerKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Escape" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Full-size viewer opened from a category grid.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    carousel: Carousel,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            carousel: Carousel::new(len),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Opens on the clicked image. Out-of-range indices leave it closed.
    pub fn open_at(&mut self, index: usize) {
        if index < self.carousel.len() {
            self.carousel.jump_to(index);
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Tracks the grid as further pages are appended.
    pub fn set_len(&mut self, len: usize) {
        self.carousel.set_len(len);
        if len == 0 {
            self.open = false;
        }
    }

    /// Applies a key press; keys are ignored while closed.
    pub fn handle_key(&mut self, key: ViewerKey) {
        if !self.open {
            return;
        }
        match key {
            ViewerKey::ArrowRight => self.carousel.next(),
            ViewerKey::ArrowLeft => self.carousel.prev(),
            ViewerKey::Escape => self.close(),
        }
    }
}
