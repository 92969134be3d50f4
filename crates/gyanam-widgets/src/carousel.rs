//! Background carousel behavior.
//!
//! The hero carousel advances one slide per interval, loops forever and
//! pauses while the pointer is over it. [`Carousel`] is the reference model of
//! that behavior; the client runtime reads [`CarouselConfig`] from data
//! attributes and follows the same rules.

use std::time::Duration;

use serde::Serialize;

/// Milliseconds between automatic slide changes.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Carousel options emitted into the page markup.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CarouselConfig {
    pub interval_ms: u64,
    /// Wrap from the last slide back to the first
    #[serde(rename = "loop")]
    pub loop_slides: bool,
    /// Dragging leaves the track where it was released
    pub drag_free: bool,
    pub pause_on_hover: bool,
    /// Stop autoplay for good after the user drags
    pub stop_on_interaction: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            loop_slides: true,
            drag_free: true,
            pause_on_hover: true,
            stop_on_interaction: false,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Carousel state for one page view.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    slides: usize,
    /// Track position in slides; fractional while scrubbing
    position: f64,
    elapsed: Duration,
    hovered: bool,
    stopped: bool,
}

impl Carousel {
    pub fn new(slides: usize) -> Self {
        Self::with_config(slides, CarouselConfig::default())
    }

    pub fn with_config(slides: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            slides,
            position: 0.0,
            elapsed: Duration::ZERO,
            hovered: false,
            stopped: false,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Index of the slide nearest the current position.
    pub fn index(&self) -> usize {
        if self.slides == 0 {
            return 0;
        }
        (self.position.round() as usize) % self.slides
    }

    /// Exact track position, fractional after a drag.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether the autoplay timer is currently running.
    pub fn is_playing(&self) -> bool {
        self.slides > 1 && !self.stopped && !(self.hovered && self.config.pause_on_hover)
    }

    /// Let time pass. Returns the number of slides advanced.
    pub fn tick(&mut self, dt: Duration) -> usize {
        if !self.is_playing() {
            return 0;
        }

        self.elapsed += dt;
        let interval = self.config.interval();
        if interval.is_zero() {
            return 0;
        }

        let mut steps = 0;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            if !self.step() {
                break;
            }
            steps += 1;
        }
        steps
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left; autoplay resumes with a fresh interval.
    pub fn pointer_leave(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Programmatic advance to the next slide. Restarts the interval.
    pub fn advance(&mut self) {
        self.step();
        self.elapsed = Duration::ZERO;
    }

    /// Drag the track by `delta` slides without snapping.
    pub fn scrub(&mut self, delta: f64) {
        if self.slides == 0 || !delta.is_finite() {
            return;
        }

        let len = self.slides as f64;
        self.position = if self.config.loop_slides {
            (self.position + delta).rem_euclid(len)
        } else {
            (self.position + delta).clamp(0.0, len - 1.0)
        };
        self.elapsed = Duration::ZERO;

        if self.config.stop_on_interaction {
            self.stopped = true;
        }
    }

    fn step(&mut self) -> bool {
        if self.slides < 2 {
            return false;
        }

        let next = self.index() + 1;
        if next >= self.slides {
            if !self.config.loop_slides {
                return false;
            }
            self.position = 0.0;
        } else {
            self.position = next as f64;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(DEFAULT_INTERVAL_MS);

    #[test]
    fn cycles_through_three_slides() {
        let mut carousel = Carousel::new(3);
        let mut seen = vec![carousel.index()];

        for _ in 0..4 {
            carousel.tick(INTERVAL);
            seen.push(carousel.index());
        }

        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn waits_for_a_full_interval() {
        let mut carousel = Carousel::new(3);

        assert_eq!(carousel.tick(Duration::from_millis(4999)), 0);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.tick(Duration::from_millis(1)), 1);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn hover_suspends_and_leave_resumes() {
        let mut carousel = Carousel::new(3);

        carousel.pointer_enter();
        assert!(!carousel.is_playing());
        assert_eq!(carousel.tick(INTERVAL * 3), 0);
        assert_eq!(carousel.index(), 0);

        carousel.pointer_leave();
        assert!(carousel.is_playing());
        carousel.tick(INTERVAL);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn leave_restarts_the_interval() {
        let mut carousel = Carousel::new(3);

        carousel.tick(Duration::from_millis(4000));
        carousel.pointer_enter();
        carousel.pointer_leave();

        assert_eq!(carousel.tick(Duration::from_millis(1000)), 0);
        assert_eq!(carousel.tick(Duration::from_millis(4000)), 1);
    }

    #[test]
    fn advance_moves_and_resets_timer() {
        let mut carousel = Carousel::new(3);

        carousel.tick(Duration::from_millis(4500));
        carousel.advance();
        assert_eq!(carousel.index(), 1);

        assert_eq!(carousel.tick(Duration::from_millis(4500)), 0);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn scrub_does_not_snap() {
        let mut carousel = Carousel::new(3);

        carousel.scrub(0.4);
        assert_eq!(carousel.position(), 0.4);
        assert_eq!(carousel.index(), 0);

        carousel.scrub(-0.9);
        assert!((carousel.position() - 2.5).abs() < 1e-9);

        // Autoplay keeps running after a drag.
        assert!(carousel.is_playing());
    }

    #[test]
    fn single_slide_never_advances() {
        let mut carousel = Carousel::new(1);

        assert_eq!(carousel.tick(INTERVAL * 10), 0);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
        assert_eq!(Carousel::new(0).index(), 0);
    }

    #[test]
    fn serializes_loop_flag() {
        let json = serde_json::to_string(&CarouselConfig::default()).unwrap();

        assert!(json.contains(r#""loop":true"#));
        assert!(json.contains(r#""interval_ms":5000"#));
    }
}
