//! Scroll-linked motion math.
//!
//! Every value here is a pure function of scroll geometry. The UI layer feeds
//! in measurements from the browser on each scroll tick and binds the result
//! to a style property.

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Piecewise-linear map from `stops` to `outputs`, clamped at both ends.
///
/// `stops` must be ascending and the same length as `outputs`. A zero-width
/// segment jumps straight to its right-hand output.
pub fn interpolate(input: f64, stops: &[f64], outputs: &[f64]) -> f64 {
    debug_assert_eq!(stops.len(), outputs.len());
    let (Some(&first), Some(&last)) = (stops.first(), stops.last()) else {
        return 0.0;
    };
    if input.is_nan() || input <= first {
        return outputs[0];
    }
    if input >= last {
        return outputs[outputs.len() - 1];
    }
    for i in 1..stops.len() {
        let (x0, x1) = (stops[i - 1], stops[i]);
        if input > x1 {
            continue;
        }
        let (y0, y1) = (outputs[i - 1], outputs[i]);
        let span = x1 - x0;
        if span <= 0.0 {
            return y1;
        }
        return y0 + (y1 - y0) * (input - x0) / span;
    }
    outputs[outputs.len() - 1]
}

/// Fraction of the document scrolled.
///
/// Zero when the content fits in the viewport.
pub fn document_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_top / max_scroll)
}

/// A point where an element edge meets a viewport line.
///
/// `target` is a fraction of the element's height measured from its top,
/// `viewport` a fraction of the viewport height measured from its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub target: f64,
    pub viewport: f64,
}

impl ScrollOffset {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }

    /// The element's bounding `top` at which this offset is reached.
    fn top_at(&self, element_height: f64, viewport_height: f64) -> f64 {
        self.viewport * viewport_height - self.target * element_height
    }
}

/// The stretch of scrolling over which an element's progress runs from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBand {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollBand {
    /// Element top passes from 80% down the viewport to 20% down.
    pub const REVEAL: ScrollBand = ScrollBand {
        start: ScrollOffset::new(0.0, 0.8),
        end: ScrollOffset::new(0.0, 0.2),
    };

    /// Element top hits viewport top, until element bottom hits viewport bottom.
    pub const PINNED: ScrollBand = ScrollBand {
        start: ScrollOffset::new(0.0, 0.0),
        end: ScrollOffset::new(1.0, 1.0),
    };

    /// Element top at viewport top, until its bottom passes the viewport top.
    pub const EXIT: ScrollBand = ScrollBand {
        start: ScrollOffset::new(0.0, 0.0),
        end: ScrollOffset::new(1.0, 0.0),
    };

    /// Element top enters at the bottom, until its bottom leaves at the top.
    pub const THROUGH: ScrollBand = ScrollBand {
        start: ScrollOffset::new(0.0, 1.0),
        end: ScrollOffset::new(1.0, 0.0),
    };

    /// Progress given the element's current bounding-rect top and height.
    pub fn progress(&self, top: f64, element_height: f64, viewport_height: f64) -> f64 {
        if viewport_height <= 0.0 || top.is_nan() {
            return 0.0;
        }
        let from = self.start.top_at(element_height, viewport_height);
        let to = self.end.top_at(element_height, viewport_height);
        // scrolling down moves `top` from `from` towards `to`
        let travel = from - to;
        if travel <= 0.0 {
            return if top <= to { 1.0 } else { 0.0 };
        }
        clamp_unit((from - top) / travel)
    }
}

/// Progress sub-range owned by a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRange {
    pub start: f64,
    pub end: f64,
}

impl RevealRange {
    pub const MIN_OPACITY: f64 = 0.2;

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn opacity(&self, progress: f64) -> f64 {
        interpolate(
            progress,
            &[self.start, self.end],
            &[Self::MIN_OPACITY, 1.0],
        )
    }
}

/// A text block split into words that light up left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct WordReveal {
    words: Vec<(String, RevealRange)>,
}

impl WordReveal {
    pub fn new(text: &str) -> Self {
        let words = text.split_whitespace().collect::<Vec<_>>();
        let n = words.len() as f64;
        let words = words
            .into_iter()
            .enumerate()
            .map(|(i, word)| {
                let start = i as f64 / n;
                let range = RevealRange {
                    start,
                    end: (i + 1) as f64 / n,
                };
                (word.to_string(), range)
            })
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, RevealRange)> {
        self.words.iter().map(|(w, r)| (w.as_str(), *r))
    }
}

/// Horizontal layout of a showcase strip, in pixels.
///
/// The strip carries no padding: its first and last cards are its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub item_width: f64,
    pub gap: f64,
}

impl StripLayout {
    pub fn content_width(&self, items: usize) -> f64 {
        if items == 0 {
            return 0.0;
        }
        let k = items as f64;
        k * self.item_width + (k - 1.0) * self.gap
    }

    /// Leading edge of item `index` before any translation.
    pub fn item_start(&self, index: usize) -> f64 {
        index as f64 * (self.item_width + self.gap)
    }
}

/// Translation of a pinned horizontal strip as a function of scroll progress.
///
/// The end offset is derived from the strip's real width so the last card
/// lands flush with the stage's trailing edge at progress 1, whatever the
/// number of cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseTrack {
    content_width: f64,
    viewport_width: f64,
}

impl ShowcaseTrack {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width: content_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
        }
    }

    pub fn from_layout(layout: &StripLayout, items: usize, viewport_width: f64) -> Self {
        Self::new(layout.content_width(items), viewport_width)
    }

    /// Translation at progress 1, in pixels. Negative moves the strip left.
    pub fn end_offset(&self) -> f64 {
        if self.content_width == 0.0 {
            return 0.0;
        }
        self.viewport_width - self.content_width
    }

    pub fn offset_at(&self, progress: f64) -> f64 {
        interpolate(progress, &[0.0, 1.0], &[0.0, self.end_offset()])
    }
}

/// Style values for a project card travelling through the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl CardMotion {
    pub fn at(progress: f64) -> Self {
        const FADE: [f64; 4] = [0.0, 0.2, 0.9, 1.0];
        Self {
            y: interpolate(progress, &[0.0, 1.0], &[100.0, -100.0]),
            opacity: interpolate(progress, &FADE, &[0.0, 1.0, 1.0, 0.0]),
            scale: interpolate(progress, &FADE, &[0.8, 1.0, 1.0, 0.8]),
            rotate: interpolate(progress, &[0.0, 0.5, 1.0], &[3.0, 0.0, -3.0]),
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "transform: translateY({:.1}px) scale({:.3}) rotate({:.2}deg); opacity: {:.3}",
            self.y, self.scale, self.rotate, self.opacity
        )
    }
}

/// Frames a stat counter takes to reach its value.
pub const COUNTER_STEPS: u32 = 60;
/// Total duration of a stat counter, in milliseconds.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Value shown by a counter after `step` of `steps` ticks.
pub fn counter_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    ((target as u64 * step as u64) / steps as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_interpolate_clamps_and_blends() {
        let stops = [0.0, 0.2, 0.9, 1.0];
        let out = [0.0, 1.0, 1.0, 0.0];
        assert_close(interpolate(-1.0, &stops, &out), 0.0);
        assert_close(interpolate(0.1, &stops, &out), 0.5);
        assert_close(interpolate(0.5, &stops, &out), 1.0);
        assert_close(interpolate(0.95, &stops, &out), 0.5);
        assert_close(interpolate(2.0, &stops, &out), 0.0);
        assert_close(interpolate(f64::NAN, &stops, &out), 0.0);
    }

    #[test]
    fn test_interpolate_zero_width_segment() {
        assert_close(interpolate(0.5, &[0.5, 0.5], &[0.2, 1.0]), 0.2);
        assert_close(interpolate(0.6, &[0.5, 0.5], &[0.2, 1.0]), 1.0);
        assert_close(interpolate(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn test_document_progress_bounded_and_monotonic() {
        let (height, viewport) = (5000.0, 800.0);
        let max_scroll = height - viewport;
        let mut last = 0.0;
        for i in 0..=420 {
            let s = max_scroll * i as f64 / 420.0;
            let p = document_progress(s, height, viewport);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
        }
        assert_close(document_progress(max_scroll, height, viewport), 1.0);
        assert_close(document_progress(max_scroll + 50.0, height, viewport), 1.0);
        assert_close(document_progress(-10.0, height, viewport), 0.0);
    }

    #[test]
    fn test_document_progress_short_content() {
        assert_close(document_progress(0.0, 600.0, 800.0), 0.0);
        assert_close(document_progress(100.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_reveal_band() {
        let vh = 1000.0;
        let band = ScrollBand::REVEAL;
        // not yet reached 80% line
        assert_close(band.progress(900.0, 200.0, vh), 0.0);
        assert_close(band.progress(800.0, 200.0, vh), 0.0);
        assert_close(band.progress(500.0, 200.0, vh), 0.5);
        assert_close(band.progress(200.0, 200.0, vh), 1.0);
        assert_close(band.progress(-300.0, 200.0, vh), 1.0);
    }

    #[test]
    fn test_pinned_band() {
        let vh = 1000.0;
        let h = 3000.0;
        let band = ScrollBand::PINNED;
        assert_close(band.progress(0.0, h, vh), 0.0);
        assert_close(band.progress(-1000.0, h, vh), 0.5);
        assert_close(band.progress(-2000.0, h, vh), 1.0);
    }

    #[test]
    fn test_exit_band() {
        let band = ScrollBand::EXIT;
        assert_close(band.progress(0.0, 800.0, 1000.0), 0.0);
        assert_close(band.progress(-400.0, 800.0, 1000.0), 0.5);
        assert_close(band.progress(-900.0, 800.0, 1000.0), 1.0);
    }

    #[test]
    fn test_degenerate_band() {
        // element exactly viewport height: pinned band has no travel
        let band = ScrollBand::PINNED;
        assert_close(band.progress(10.0, 1000.0, 1000.0), 0.0);
        assert_close(band.progress(0.0, 1000.0, 1000.0), 1.0);
        assert_close(band.progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_word_ranges_partition_unit_interval() {
        let reveal = WordReveal::new("Some of my most impactful work shipped this year");
        assert_eq!(reveal.len(), 9);
        let ranges = reveal.words().map(|(_, r)| r).collect::<Vec<_>>();
        assert_close(ranges[0].start, 0.0);
        assert_close(ranges[ranges.len() - 1].end, 1.0);
        for pair in ranges.windows(2) {
            assert_close(pair[0].end, pair[1].start);
        }
        let total = ranges.iter().map(RevealRange::width).sum::<f64>();
        assert_close(total, 1.0);
    }

    #[test]
    fn test_word_opacity_curve() {
        let reveal = WordReveal::new("one two");
        let at = |p: f64| reveal.words().map(|(_, r)| r.opacity(p)).collect::<Vec<_>>();
        assert_eq!(at(0.0), vec![0.2, 0.2]);
        let mid = at(0.25);
        assert_close(mid[0], 0.6);
        assert_close(mid[1], 0.2);
        assert_eq!(at(1.0), vec![1.0, 1.0]);
    }

    #[test]
    fn test_word_reveal_degenerate_input() {
        assert!(WordReveal::new("").is_empty());
        assert!(WordReveal::new("   \n ").is_empty());
        let single = WordReveal::new("  hello ");
        let (word, range) = single.words().next().unwrap();
        assert_eq!(word, "hello");
        assert_eq!(range, RevealRange { start: 0.0, end: 1.0 });
    }

    fn check_alignment(items: usize) {
        let layout = StripLayout {
            item_width: 720.0,
            gap: 32.0,
        };
        let viewport = 1200.0;
        let track = ShowcaseTrack::from_layout(&layout, items, viewport);

        let first_leading = layout.item_start(0) + track.offset_at(0.0);
        assert_close(first_leading, 0.0);

        let last_trailing = layout.item_start(items - 1) + layout.item_width + track.offset_at(1.0);
        assert_close(last_trailing, viewport);
    }

    #[test]
    fn test_showcase_edges_align_for_any_item_count() {
        for k in [1, 2, 7] {
            check_alignment(k);
        }
    }

    #[test]
    fn test_measured_strip_edges_are_flush() {
        // what use_element_size reports for four 600px cards with 32px gaps
        let measured = 4.0 * 600.0 + 3.0 * 32.0;
        let layout = StripLayout {
            item_width: 600.0,
            gap: 32.0,
        };
        let track = ShowcaseTrack::new(measured, 1000.0);
        assert_eq!(track, ShowcaseTrack::from_layout(&layout, 4, 1000.0));

        assert_close(layout.item_start(0) + track.offset_at(0.0), 0.0);
        let trailing = layout.item_start(3) + layout.item_width + track.offset_at(1.0);
        assert_close(trailing, 1000.0);
        // no overshoot past the end of the band
        assert_close(track.offset_at(1.5), track.offset_at(1.0));
    }

    #[test]
    fn test_showcase_travel_depends_on_content() {
        let two = ShowcaseTrack::new(2000.0, 1000.0);
        let four = ShowcaseTrack::new(4000.0, 1000.0);
        assert_close(two.end_offset(), -1000.0);
        assert_close(four.end_offset(), -3000.0);
        assert_close(ShowcaseTrack::new(0.0, 1000.0).offset_at(1.0), 0.0);
    }

    #[test]
    fn test_card_motion_curve() {
        let start = CardMotion::at(0.0);
        assert_close(start.y, 100.0);
        assert_close(start.opacity, 0.0);
        assert_close(start.scale, 0.8);
        assert_close(start.rotate, 3.0);

        let middle = CardMotion::at(0.5);
        assert_close(middle.y, 0.0);
        assert_close(middle.opacity, 1.0);
        assert_close(middle.scale, 1.0);
        assert_close(middle.rotate, 0.0);
        assert!(middle.to_style().contains("opacity: 1.000"));
    }

    #[test]
    fn test_counter_value() {
        assert_eq!(counter_value(300, 0, COUNTER_STEPS), 0);
        assert_eq!(counter_value(300, 30, COUNTER_STEPS), 150);
        assert_eq!(counter_value(2500, 59, COUNTER_STEPS), 2458);
        assert_eq!(counter_value(2500, 60, COUNTER_STEPS), 2500);
        assert_eq!(counter_value(2, 99, COUNTER_STEPS), 2);
        assert_eq!(counter_value(7, 0, 0), 7);
    }
}
