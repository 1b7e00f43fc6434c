use super::dom;
use crate::motion::{
    self, hero_style, intro_delay_ms, intro_settled_ms, layer_style, orb_offset, FrameGate, Layer,
    ScrollMetrics, INTRO_DURATION_MS, INTRO_OFFSET,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub struct ScrollFlags {
    pub header_scrolled: bool,
    pub back_to_top: bool,
    /// Latched once the skills section has scrolled into view.
    pub skills_armed: bool,
}

/// Header state, back-to-top visibility, the progress bar and one-shot reveals,
/// recomputed on every scroll event.
#[hook]
pub fn use_scroll_effects() -> ScrollFlags {
    let flags = use_state_eq(ScrollFlags::default);

    {
        let flags = flags.clone();
        use_effect_with((), move |_| {
            let skills_seen = Rc::new(Cell::new(false));
            let update = move || {
                let scroll_top = dom::scroll_y();
                let (_, viewport_height) = dom::viewport_size();

                if let Some(bar) = dom::query(".scroll-progress-bar") {
                    let progress = motion::scroll_progress(ScrollMetrics {
                        scroll_top,
                        viewport_height,
                        document_height: dom::document_height(),
                    });
                    dom::set_style(&bar, "width", &format!("{progress:.2}%"));
                }

                for element in dom::query_all(".reveal") {
                    if motion::should_reveal(dom::rect(&element).top, viewport_height) {
                        dom::add_class(&element, "active");
                    }
                }

                let skills_in_view = dom::by_id("skills")
                    .map(|section| motion::should_reveal(dom::rect(&section).top, viewport_height))
                    .unwrap_or(false);
                skills_seen.set(skills_seen.get() || skills_in_view);

                flags.set(ScrollFlags {
                    header_scrolled: motion::header_scrolled(scroll_top),
                    back_to_top: motion::back_to_top_visible(scroll_top),
                    skills_armed: skills_seen.get(),
                });
            };

            update();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| update()));

            move || drop(listener)
        });
    }

    *flags
}

fn apply_layer(element: &Element, layer: Layer, viewport_height: f64) -> bool {
    let Some(style) = layer_style(layer, dom::rect(element), viewport_height) else {
        return false;
    };

    dom::set_style(element, "transform", &style.transform());
    if let Some(opacity) = style.opacity {
        dom::set_style(element, "opacity", &format!("{opacity:.3}"));
    }
    true
}

fn apply_card(card: &Element, layer: Layer, viewport_height: f64) {
    if apply_layer(card, layer, viewport_height) && layer.marks_active() {
        dom::add_class(card, "parallax-active");
    }
}

fn update_parallax() {
    let scroll_top = dom::scroll_y();
    let (_, viewport_height) = dom::viewport_size();

    for (index, orb) in dom::query_all(".gradient-orb").iter().enumerate() {
        let (x, y) = orb_offset(scroll_top, index);
        dom::set_style(orb, "transform", &format!("translate({x:.2}px, {y:.2}px)"));
    }

    if let Some(hero) = dom::query(".hero-content") {
        let style = hero_style(scroll_top, viewport_height);
        dom::set_style(&hero, "transform", &style.transform());
        if let Some(opacity) = style.opacity {
            dom::set_style(&hero, "opacity", &format!("{opacity:.3}"));
        }
    }

    for layer in [Layer::Background, Layer::Section, Layer::Text, Layer::AboutImage] {
        for element in dom::query_all(layer.selector()) {
            apply_layer(&element, layer, viewport_height);
        }
    }

    for (index, card) in dom::query_all(".project-card").iter().enumerate() {
        let layer = Layer::ProjectCard {
            index,
            hovered: dom::is_hovered(card),
        };
        apply_card(card, layer, viewport_height);
    }

    for (index, card) in dom::query_all(".skill-card-interactive").iter().enumerate() {
        let layer = Layer::SkillCard {
            index,
            hovered: dom::is_hovered(card),
        };
        apply_card(card, layer, viewport_height);
    }
}

/// Scroll-linked layer offsets, at most once per animation frame. Disabled on
/// narrow viewports, decided once at mount.
#[hook]
pub fn use_parallax() {
    use_effect_with((), |_| {
        let (viewport_width, _) = dom::viewport_size();
        let listener = if motion::parallax_enabled(viewport_width) {
            update_parallax();

            let gate = Rc::new(RefCell::new(FrameGate::default()));
            web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    if !gate.borrow_mut().request() {
                        return;
                    }

                    let pending = gate.clone();
                    let requested = dom::request_animation_frame(move || {
                        update_parallax();
                        pending.borrow_mut().complete();
                    });
                    if !requested {
                        gate.borrow_mut().complete();
                    }
                })
            })
        } else {
            None
        };

        move || drop(listener)
    });
}

/// Fades every section below the hero in from below, staggered by position.
#[hook]
pub fn use_section_intro() {
    use_effect_with((), |_| {
        let mut pending = Vec::new();

        for (index, section) in dom::query_all("section").into_iter().enumerate() {
            if section.id() == "home" {
                continue;
            }

            dom::set_style(&section, "opacity", "0");
            dom::set_style(&section, "transform", &format!("translateY({INTRO_OFFSET}px)"));

            let settled = section.clone();
            pending.push(Timeout::new(intro_delay_ms(index), move || {
                dom::set_style(
                    &section,
                    "transition",
                    &format!("opacity {INTRO_DURATION_MS}ms ease, transform {INTRO_DURATION_MS}ms ease"),
                );
                dom::set_style(&section, "opacity", "1");
                dom::set_style(&section, "transform", "translateY(0)");
            }));
            pending.push(Timeout::new(intro_settled_ms(index), move || {
                dom::set_style(&settled, "transition", "");
            }));
        }

        move || drop(pending)
    });
}
