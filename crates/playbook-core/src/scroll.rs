//! Scroll math for the page view and the navigation highlight band.
//!
//! Offsets and heights are in rendered document rows. All functions are pure
//! so the page view and the nav highlight recompute them on every scroll and
//! resize notification without keeping derived state around.

/// Fraction of the viewport height where the highlight band starts.
pub const NAV_BAND_TOP: f64 = 0.30;

/// Fraction of the viewport height where the highlight band ends.
///
/// Together with [`NAV_BAND_TOP`] this puts the band over the middle ~30% of
/// the viewport. An implementation constant, not derived from content.
pub const NAV_BAND_BOTTOM: f64 = 0.60;

/// Snapshot of the page scroll position, recomputed per notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    /// Current vertical offset (first visible document row).
    pub offset: usize,
    /// Total rendered document height.
    pub content_rows: usize,
    /// Height of the visible content area.
    pub viewport_rows: usize,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(offset: usize, content_rows: usize, viewport_rows: usize) -> Self {
        Self {
            offset,
            content_rows,
            viewport_rows,
        }
    }

    /// Total scrollable distance; zero when the document fits the viewport.
    #[must_use]
    pub const fn scrollable(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// Percentage scrolled in `[0, 100]`.
    ///
    /// When there is nothing to scroll this is 0, never NaN.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let total = self.scrollable();
        if total == 0 {
            return 0.0;
        }
        (self.offset.min(total) as f64) * 100.0 / (total as f64)
    }

    /// Clamp an offset candidate to the valid scroll range.
    #[must_use]
    pub const fn clamp_offset(&self, candidate: usize) -> usize {
        let max = self.scrollable();
        if candidate > max { max } else { candidate }
    }
}

/// Row range one section occupies in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// First document row of the section heading.
    pub start: usize,
    /// Number of rows the section occupies.
    pub rows: usize,
}

impl SectionSpan {
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.rows
    }
}

/// Which section currently intersects the highlight band.
///
/// The band spans viewport rows `[NAV_BAND_TOP, NAV_BAND_BOTTOM)`. Sections
/// are checked in document order and the last intersecting one wins; that is
/// the documented tie-break when several sections cross the band at once.
#[must_use]
pub fn active_section(spans: &[SectionSpan], offset: usize, viewport_rows: usize) -> Option<usize> {
    if viewport_rows == 0 {
        return None;
    }
    let band_top = offset + ((viewport_rows as f64) * NAV_BAND_TOP) as usize;
    let band_bottom = offset + ((viewport_rows as f64) * NAV_BAND_BOTTOM).max(1.0) as usize;

    let mut active = None;
    for (idx, span) in spans.iter().enumerate() {
        if span.rows == 0 {
            continue;
        }
        if span.start < band_bottom && span.end() > band_top {
            active = Some(idx);
        }
    }
    active
}

/// Offset that places a section's first row at the top of the band.
#[must_use]
pub fn offset_for_section(span: SectionSpan, metrics: ScrollMetrics) -> usize {
    let band_rows = ((metrics.viewport_rows as f64) * NAV_BAND_TOP) as usize;
    metrics.clamp_offset(span.start.saturating_sub(band_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percent_is_zero_when_content_fits() {
        let m = ScrollMetrics::new(0, 20, 40);
        assert_eq!(m.scrollable(), 0);
        assert_eq!(m.percent(), 0.0);
    }

    #[test]
    fn percent_spans_full_range() {
        let m = ScrollMetrics::new(0, 200, 40);
        assert_eq!(m.percent(), 0.0);
        let m = ScrollMetrics::new(160, 200, 40);
        assert_eq!(m.percent(), 100.0);
        let m = ScrollMetrics::new(80, 200, 40);
        assert_eq!(m.percent(), 50.0);
    }

    #[test]
    fn clamp_offset_limits_to_scrollable() {
        let m = ScrollMetrics::new(0, 100, 40);
        assert_eq!(m.clamp_offset(1000), 60);
        assert_eq!(m.clamp_offset(10), 10);
    }

    #[test]
    fn middle_section_is_active_when_band_covers_it() {
        // Three stacked sections, viewport scrolled so the second one sits in
        // the middle band.
        let spans = [
            SectionSpan { start: 0, rows: 30 },
            SectionSpan { start: 30, rows: 30 },
            SectionSpan { start: 60, rows: 30 },
        ];
        // Band for offset 25, viewport 20: rows [31, 37).
        assert_eq!(active_section(&spans, 25, 20), Some(1));
    }

    #[test]
    fn later_section_wins_when_two_intersect() {
        let spans = [
            SectionSpan { start: 0, rows: 10 },
            SectionSpan { start: 10, rows: 2 },
            SectionSpan { start: 12, rows: 50 },
        ];
        // Band [10, 16) crosses both the tiny section and the one after it.
        assert_eq!(active_section(&spans, 4, 20), Some(2));
    }

    #[test]
    fn no_active_section_for_empty_page() {
        assert_eq!(active_section(&[], 0, 40), None);
    }

    #[test]
    fn offset_for_section_aligns_to_band_top() {
        let m = ScrollMetrics::new(0, 200, 40);
        let span = SectionSpan {
            start: 100,
            rows: 20,
        };
        // Band top is 12 rows into a 40-row viewport.
        assert_eq!(offset_for_section(span, m), 88);
    }

    proptest! {
        #[test]
        fn percent_always_in_range(
            offset in 0usize..10_000,
            content in 0usize..10_000,
            viewport in 0usize..500,
        ) {
            let m = ScrollMetrics::new(offset, content, viewport);
            let p = m.percent();
            prop_assert!(p >= 0.0);
            prop_assert!(p <= 100.0);
            if m.scrollable() == 0 {
                prop_assert_eq!(p, 0.0);
            }
        }
    }
}
