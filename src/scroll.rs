use crate::era::Era;

/// Vertical scroll position as a percentage in `[0, 100]`. A page with no
/// scrollable range reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let range = scroll_height - client_height;
    if range.is_nan() || range <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / range * 100.0).clamp(0.0, 100.0)
}

/// Viewport-relative bounds of a `[data-section]` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub name: String,
    pub era: Option<Era>,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// The last section straddling the viewport's vertical midpoint.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> Option<&SectionBounds> {
    let mid = viewport_height / 2.0;
    sections.iter().filter(|s| s.contains(mid)).last()
}
