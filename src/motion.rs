//! Scroll-driven effects: header style, progress bar, reveal, back-to-top and
//! the desktop parallax layers.
//!
//! Everything here is a pure function of the scroll offset, the viewport and
//! an element's bounding rectangle, so the browser shell only has to measure
//! and write styles.

pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
pub const REVEAL_OFFSET: f64 = 100.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const HOVER_LIFT: f64 = 8.0;
pub const HOVER_SCALE: f64 = 1.02;

pub const LOADER_HIDE_DELAY_MS: u32 = 500;
pub const LOADER_REMOVE_DELAY_MS: u32 = 500;
pub const INTRO_OFFSET: f64 = 60.0;
pub const INTRO_DURATION_MS: u32 = 1_000;

/// Viewport-relative bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

pub fn header_scrolled(scroll_top: f64) -> bool {
    scroll_top > HEADER_SCROLL_THRESHOLD
}

pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top > BACK_TO_TOP_THRESHOLD
}

/// Percentage of the scrollable distance covered, clamped to `0..=100`.
/// A page shorter than the viewport reports 0.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET
}

pub fn parallax_enabled(viewport_width: f64) -> bool {
    viewport_width > MOBILE_MAX_WIDTH
}

pub fn in_viewport(rect: Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height && rect.top + rect.height > 0.0
}

/// Travel of an element through the viewport: 0 as it enters at the bottom,
/// 1 as it leaves at the top.
fn travel(rect: Rect, viewport_height: f64) -> f64 {
    (viewport_height - rect.top) / (viewport_height + rect.height)
}

pub fn orb_offset(scroll_top: f64, index: usize) -> (f64, f64) {
    let speed = 0.3 + index as f64 * 0.1;
    (scroll_top * speed, scroll_top * speed * 0.5)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub translate_y: f64,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
}

impl LayerStyle {
    fn translate(translate_y: f64) -> Self {
        Self {
            translate_y,
            opacity: None,
            scale: None,
        }
    }

    pub fn transform(&self) -> String {
        match self.scale {
            Some(scale) => format!("translateY({:.2}px) scale({scale})", self.translate_y),
            None => format!("translateY({:.2}px)", self.translate_y),
        }
    }
}

pub fn hero_style(scroll_top: f64, viewport_height: f64) -> LayerStyle {
    let fade = if viewport_height > 0.0 {
        1.0 - scroll_top / (viewport_height * 0.8)
    } else {
        1.0
    };

    LayerStyle {
        translate_y: scroll_top * 0.5,
        opacity: Some(fade.max(0.0)),
        scale: None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Background,
    Section,
    Text,
    AboutImage,
    ProjectCard { index: usize, hovered: bool },
    SkillCard { index: usize, hovered: bool },
}

impl Layer {
    pub fn selector(self) -> &'static str {
        match self {
            Self::Background => ".parallax-bg",
            Self::Section => ".parallax-section",
            Self::Text => ".parallax-text",
            Self::AboutImage => ".about-image-wrapper",
            Self::ProjectCard { .. } => ".project-card",
            Self::SkillCard { .. } => ".skill-card-interactive",
        }
    }

    /// Cards pick up the `parallax-active` class once a frame has moved them.
    pub fn marks_active(self) -> bool {
        matches!(self, Self::ProjectCard { .. } | Self::SkillCard { .. })
    }
}

/// Style for a layer element, or `None` when it is outside the viewport and
/// should be left untouched.
pub fn layer_style(layer: Layer, rect: Rect, viewport_height: f64) -> Option<LayerStyle> {
    if !in_viewport(rect, viewport_height) {
        return None;
    }

    let progress = travel(rect, viewport_height) - 0.5;
    let style = match layer {
        Layer::Background => LayerStyle::translate(progress * 100.0),
        Layer::Section => LayerStyle::translate(progress * 50.0 * 0.3),
        Layer::Text => {
            let raw = progress + 0.5;
            LayerStyle {
                translate_y: -(progress * 30.0),
                opacity: Some((raw * 2.0 - 0.3).clamp(0.0, 1.0)),
                scale: None,
            }
        }
        Layer::AboutImage => LayerStyle::translate(-(progress * 40.0) * 0.5),
        Layer::ProjectCard { index, hovered } => {
            let drift = -(progress * 20.0) * 0.3 + index as f64 * 2.0;
            LayerStyle::translate(drift - if hovered { HOVER_LIFT } else { 0.0 })
        }
        Layer::SkillCard { index, hovered } => {
            let drift = -(progress * 15.0) * 0.4 + index as f64 * 1.5;
            LayerStyle {
                translate_y: drift - if hovered { HOVER_LIFT } else { 0.0 },
                opacity: None,
                scale: Some(if hovered { HOVER_SCALE } else { 1.0 }),
            }
        }
    };

    Some(style)
}

/// Coalesces scroll events into at most one pending animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should request a frame; false while one is pending.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Start delay of the load-in animation for the `index`-th non-hero section.
pub fn intro_delay_ms(index: usize) -> u32 {
    100 + 150 * index as u32
}

/// When the intro transition of the `index`-th section has run its course and
/// the inline `transition` must be cleared, so later parallax writes track the
/// scroll directly.
pub fn intro_settled_ms(index: usize) -> u32 {
    intro_delay_ms(index) + INTRO_DURATION_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            viewport_height: 800.0,
            document_height: 3_000.0,
        }
    }

    #[test]
    fn progress_reaches_and_clamps_at_hundred() {
        assert_eq!(scroll_progress(metrics(2_200.0)), 100.0);
        assert_eq!(scroll_progress(metrics(5_000.0)), 100.0);
        assert_eq!(scroll_progress(metrics(1_100.0)), 50.0);
        assert_eq!(scroll_progress(metrics(0.0)), 0.0);
    }

    #[test]
    fn short_page_reports_zero_progress() {
        let short = ScrollMetrics {
            scroll_top: 0.0,
            viewport_height: 800.0,
            document_height: 600.0,
        };
        assert_eq!(scroll_progress(short), 0.0);
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(51.0));
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(501.0));
        assert!(should_reveal(599.0, 700.0));
        assert!(!should_reveal(600.0, 700.0));
    }

    #[test]
    fn mobile_width_disables_parallax() {
        assert!(!parallax_enabled(768.0));
        assert!(parallax_enabled(769.0));
    }

    #[test]
    fn offscreen_elements_are_skipped() {
        let below = Rect {
            top: 900.0,
            height: 200.0,
            ..Rect::default()
        };
        let above = Rect {
            top: -300.0,
            height: 200.0,
            ..Rect::default()
        };

        assert_eq!(layer_style(Layer::Background, below, 800.0), None);
        assert_eq!(layer_style(Layer::Background, above, 800.0), None);
    }

    #[test]
    fn centred_element_has_no_background_offset() {
        // travel is exactly one half when (vh - top) == (vh + h) / 2
        let rect = Rect {
            top: 300.0,
            height: 200.0,
            ..Rect::default()
        };
        let style = layer_style(Layer::Background, rect, 800.0).expect("visible");
        assert!(style.translate_y.abs() < 1e-9);
    }

    #[test]
    fn hovered_skill_card_lifts_and_scales() {
        let rect = Rect {
            top: 300.0,
            height: 200.0,
            ..Rect::default()
        };
        let idle = layer_style(Layer::SkillCard { index: 0, hovered: false }, rect, 800.0)
            .expect("visible");
        let hovered = layer_style(Layer::SkillCard { index: 0, hovered: true }, rect, 800.0)
            .expect("visible");

        assert!((idle.translate_y - hovered.translate_y - HOVER_LIFT).abs() < 1e-9);
        assert_eq!(hovered.scale, Some(HOVER_SCALE));
        assert_eq!(idle.transform(), "translateY(0.00px) scale(1)");
    }

    #[test]
    fn text_opacity_is_clamped() {
        let entering = Rect {
            top: 790.0,
            height: 100.0,
            ..Rect::default()
        };
        let style = layer_style(Layer::Text, entering, 800.0).expect("visible");
        assert_eq!(style.opacity, Some(0.0));
    }

    #[test]
    fn hero_fades_out_and_never_goes_negative() {
        assert_eq!(hero_style(0.0, 1_000.0).opacity, Some(1.0));
        assert_eq!(hero_style(2_000.0, 1_000.0).opacity, Some(0.0));
        assert_eq!(hero_style(100.0, 1_000.0).translate_y, 50.0);
    }

    #[test]
    fn orbs_move_faster_with_index() {
        let (first, first_y) = orb_offset(100.0, 0);
        assert!((first - 30.0).abs() < 1e-9);
        assert!((first_y - 15.0).abs() < 1e-9);
        let (third, _) = orb_offset(100.0, 2);
        assert!(third > first);
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn intro_delays_are_staggered() {
        assert_eq!(intro_delay_ms(0), 100);
        assert_eq!(intro_delay_ms(3), 550);
    }

    #[test]
    fn intro_transition_is_cleared_after_it_finishes() {
        for index in 0..5 {
            assert_eq!(intro_settled_ms(index), intro_delay_ms(index) + INTRO_DURATION_MS);
        }
        assert_eq!(intro_settled_ms(1), 1_250);
    }

    #[test]
    fn both_card_kinds_are_marked_parallax_active() {
        assert!(Layer::ProjectCard { index: 2, hovered: false }.marks_active());
        assert!(Layer::SkillCard { index: 0, hovered: true }.marks_active());
        for layer in [Layer::Background, Layer::Section, Layer::Text, Layer::AboutImage] {
            assert!(!layer.marks_active());
        }
    }
}
