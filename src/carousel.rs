pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
pub const TABLET_MIN_WIDTH: f64 = 768.0;
/// Quiet period after the last `resize` event before the carousel re-lays itself out.
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;

/// Number of whole slides shown side by side at the given viewport width.
pub fn visible_slide_count(width: f64) -> usize {
    if width >= DESKTOP_MIN_WIDTH {
        3
    } else if width >= TABLET_MIN_WIDTH {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn step(self, from: usize) -> usize {
        match self {
            Direction::Prev => from.saturating_sub(1),
            Direction::Next => from + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub slide_width_percent: f64,
    pub offset_percent: f64,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl CarouselLayout {
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current_slide: usize,
    total_slides: usize,
}

impl Carousel {
    pub fn new(total_slides: usize) -> Self {
        Self {
            current_slide: 0,
            total_slides,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Highest valid leftmost index. Zero when the slides don't fill the window.
    pub fn max_slide(&self, width: f64) -> usize {
        self.total_slides
            .saturating_sub(visible_slide_count(width))
    }

    pub fn move_by(&mut self, direction: Direction, width: f64) {
        self.current_slide = direction
            .step(self.current_slide)
            .min(self.max_slide(width));
    }

    /// Pulls the index back inside the window after a breakpoint change.
    pub fn reclamp(&mut self, width: f64) {
        self.current_slide = self.current_slide.min(self.max_slide(width));
    }

    pub fn layout(&self, width: f64) -> CarouselLayout {
        let visible = visible_slide_count(width);
        let slide_width_percent = 100.0 / visible as f64;
        CarouselLayout {
            slide_width_percent,
            offset_percent: self.current_slide as f64 * slide_width_percent,
            prev_disabled: self.current_slide == 0,
            next_disabled: self.current_slide + visible >= self.total_slides,
        }
    }
}
