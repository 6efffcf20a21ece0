/// The two pages of the horizontal surface, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageIndex {
    Timer,
    History,
}

/// Headless model of the two-page horizontal scroll container.
///
/// The content extent is twice the viewport width with the history page at
/// `x = viewport_width`. The rendering layer owns the animation; reveal
/// transitions here jump straight to the target offset.
#[derive(Debug)]
pub struct PagedSurface {
    viewport_width: f64,
    offset_x: f64,
    scroll_enabled: bool,
}

impl PagedSurface {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            offset_x: 0.0,
            scroll_enabled: false,
        }
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f64 {
        self.viewport_width * 2.0
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    /// Record a user scroll position, clamped to the content range.
    pub fn set_offset(&mut self, offset_x: f64) {
        self.offset_x = offset_x.clamp(0.0, self.viewport_width);
    }

    pub fn reveal(&mut self, page: PageIndex) {
        self.offset_x = match page {
            PageIndex::Timer => 0.0,
            PageIndex::History => self.viewport_width,
        };
    }

    /// The page the surface currently rests on (nearest page wins).
    pub fn current_page(&self) -> PageIndex {
        if self.offset_x >= self.viewport_width / 2.0 {
            PageIndex::History
        } else {
            PageIndex::Timer
        }
    }
}
