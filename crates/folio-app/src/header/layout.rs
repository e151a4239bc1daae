//! Page geometry as seen by the header controller

/// Vertical extent of a `section[id]` element, in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// `top <= y < top + height`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Window scroll state at the time of an event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    /// Full document height
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Scroll progress in percent, `0.0..=100.0`.
    ///
    /// Documents no taller than the viewport have nothing to scroll and
    /// report 0.
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scroll_height - self.viewport_height;
        let percent = self.scroll_y / scrollable * 100.0;
        if scrollable <= 0.0 || !percent.is_finite() {
            return 0.0;
        }
        percent.clamp(0.0, 100.0)
    }
}

/// Read access to the rendered page.
///
/// The website implements this over the DOM; tests use a fixed layout.
/// Missing elements are reported as absent, never as errors.
pub trait PageLayout {
    fn metrics(&self) -> ScrollMetrics;

    /// All sections in document order
    fn sections(&self) -> Vec<SectionBounds>;

    /// Rendered height of the sticky header, 0 when there is none
    fn header_height(&self) -> f64;

    fn section(&self, id: &str) -> Option<SectionBounds> {
        self.sections().into_iter().find(|s| s.id == id)
    }
}

/// The section containing `scroll_y + offset`.
///
/// If sections overlap, the last one in document order wins.
pub fn section_at(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&SectionBounds> {
    let probe = scroll_y + offset;
    sections.iter().rev().find(|s| s.contains(probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_midway() {
        let m = ScrollMetrics {
            scroll_y: 500.0,
            scroll_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(m.progress_percent(), 50.0);
    }

    #[test]
    fn test_progress_short_document_is_zero() {
        let m = ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(m.progress_percent(), 0.0);

        let m = ScrollMetrics {
            scroll_y: 0.0,
            scroll_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(m.progress_percent(), 0.0);
    }

    #[test]
    fn test_progress_is_clamped_during_overscroll() {
        let m = ScrollMetrics {
            scroll_y: 1200.0,
            scroll_height: 2000.0,
            viewport_height: 1000.0,
        };
        assert_eq!(m.progress_percent(), 100.0);
    }

    #[test]
    fn test_section_bounds_are_half_open() {
        let s = SectionBounds::new("about", 100.0, 400.0);
        assert!(s.contains(100.0));
        assert!(s.contains(499.9));
        assert!(!s.contains(500.0));
        assert!(!s.contains(99.0));
    }

    #[test]
    fn test_section_at_uses_offset() {
        let sections = vec![
            SectionBounds::new("about", 0.0, 500.0),
            SectionBounds::new("skills", 500.0, 500.0),
        ];
        assert_eq!(section_at(&sections, 350.0, 100.0).map(|s| s.id.as_str()), Some("skills"));
        assert_eq!(section_at(&sections, 350.0, 0.0).map(|s| s.id.as_str()), Some("about"));
        assert!(section_at(&sections, 2000.0, 100.0).is_none());
    }
}
