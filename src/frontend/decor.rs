use super::dom;
use crate::motion::{LOADER_HIDE_DELAY_MS, LOADER_REMOVE_DELAY_MS};
use gloo_events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const PARTICLE_SPAWN_MS: u32 = 500;
const BLOB_RADIUS: f64 = 150.0;

#[derive(Clone, Copy, PartialEq)]
enum LoaderPhase {
    Visible,
    Hidden,
    Removed,
}

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    let phase = use_state_eq(|| LoaderPhase::Visible);

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let hide = {
                let phase = phase.clone();
                Timeout::new(LOADER_HIDE_DELAY_MS, move || phase.set(LoaderPhase::Hidden))
            };
            let remove = Timeout::new(LOADER_HIDE_DELAY_MS + LOADER_REMOVE_DELAY_MS, move || {
                phase.set(LoaderPhase::Removed)
            });

            move || drop((hide, remove))
        });
    }

    if *phase == LoaderPhase::Removed {
        return html! {};
    }

    html! {
        <div
            id="pageLoader"
            class={classes!("page-loader", (*phase == LoaderPhase::Hidden).then_some("hidden"))}
            aria-hidden="true"
        >
            <div class="loader-ring"></div>
        </div>
    }
}

#[derive(Clone, PartialEq)]
struct Particle {
    id: u64,
    size: f64,
    left: f64,
    duration: f64,
    delay: f64,
}

impl Particle {
    fn random(id: u64, viewport_width: f64) -> Self {
        Self {
            id,
            size: dom::random() * 4.0 + 2.0,
            left: dom::random() * viewport_width,
            duration: dom::random() * 20.0 + 15.0,
            delay: dom::random() * 5.0,
        }
    }

    fn lifetime_ms(&self) -> u32 {
        ((self.duration + self.delay) * 1_000.0) as u32
    }

    fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

#[derive(Default, PartialEq)]
struct ParticleSet {
    live: Vec<Particle>,
}

enum ParticleAction {
    Spawn(Particle),
    Expire(u64),
}

impl Reducible for ParticleSet {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: ParticleAction) -> Rc<Self> {
        let live = match action {
            ParticleAction::Spawn(particle) => {
                let mut live = self.live.clone();
                live.push(particle);
                live
            }
            ParticleAction::Expire(id) => self
                .live
                .iter()
                .filter(|particle| particle.id != id)
                .cloned()
                .collect(),
        };

        Rc::new(Self { live })
    }
}

/// Small glowing dots drifting up the page; one spawns every half second and
/// is dropped once its animation has run.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let particles = use_reducer(ParticleSet::default);

    {
        let dispatcher = particles.dispatcher();
        use_effect_with((), move |_| {
            let mut next_id = 0_u64;
            let spawner = Interval::new(PARTICLE_SPAWN_MS, move || {
                let (width, _) = dom::viewport_size();
                let particle = Particle::random(next_id, width);
                next_id += 1;

                let (id, lifetime) = (particle.id, particle.lifetime_ms());
                dispatcher.dispatch(ParticleAction::Spawn(particle));

                let dispatcher = dispatcher.clone();
                Timeout::new(lifetime, move || dispatcher.dispatch(ParticleAction::Expire(id))).forget();
            });

            move || drop(spawner)
        });
    }

    html! {
        <div class="particle-container" aria-hidden="true">
            { for particles.live.iter().map(|particle| html! {
                <div key={particle.id} class="particle" style={particle.style()}></div>
            }) }
        </div>
    }
}

#[function_component(InteractiveBlob)]
pub fn interactive_blob() -> Html {
    let blob_ref = use_node_ref();

    {
        let blob_ref = blob_ref.clone();
        use_effect_with((), move |_| {
            let listener = dom::document().map(|document| {
                EventListener::new(&document, "mousemove", move |event| {
                    let (Some(event), Some(blob)) = (
                        event.dyn_ref::<MouseEvent>(),
                        blob_ref.cast::<web_sys::Element>(),
                    ) else {
                        return;
                    };

                    dom::set_style(&blob, "left", &format!("{}px", f64::from(event.client_x()) - BLOB_RADIUS));
                    dom::set_style(&blob, "top", &format!("{}px", f64::from(event.client_y()) - BLOB_RADIUS));
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="interactive-blob" ref={blob_ref} aria-hidden="true"></div>
    }
}
