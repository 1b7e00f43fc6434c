mod contact;
mod decor;
mod dom;
mod effects;
mod showcase;
mod skills;
mod theme;

use crate::config::SiteConfig;
use crate::motion;
use crate::showcase::{arrow_navigation, Direction, Overlay, ANNOUNCEMENT_TTL_MS, REOPEN_DELAY_MS};
use crate::state::{UiAction, UiState};
use crate::telemetry::Logger;
use crate::theme::{load_theme, persist_theme, Theme, TransitionStep, TRANSITION_SCHEDULE};
use crate::timers::TimerSlots;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: UiAction) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Pending timeouts owned by one component; dropping the last clone cancels them.
#[derive(Clone, Default)]
pub struct Timers(Rc<RefCell<TimerSlots<&'static str, Timeout>>>);

impl PartialEq for Timers {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Timers {
    /// Runs `callback` once after `delay_ms`, replacing whatever was pending
    /// under `key`. The slot is vacated as the callback fires.
    pub fn after(&self, key: &'static str, delay_ms: u32, callback: impl FnOnce() + 'static) {
        let slots = Rc::downgrade(&self.0);
        let timeout = Timeout::new(delay_ms, move || {
            let fired = slots.upgrade().and_then(|slots| slots.borrow_mut().take(&key));
            callback();
            drop(fired);
        });
        self.0.borrow_mut().schedule(key, timeout);
    }

    pub fn cancel(&self, key: &'static str) {
        self.0.borrow_mut().cancel(&key);
    }

    pub fn is_pending(&self, key: &'static str) -> bool {
        self.0.borrow().is_pending(&key)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().cancel_all();
    }
}

pub fn project_card_id(project_id: &str) -> String {
    format!("project-card-{project_id}")
}

/// Focus and logging that follow an overlay closing; `before` is the state
/// from just before the close.
fn after_overlay_closed(overlay: Overlay, before: &UiState, logger: Logger) {
    match overlay {
        Overlay::ProjectModal => {
            logger.debug("project_modal_closed", json!({ "projectId": before.open_project }));
            if let Some(id) = before.focus_return_on_close() {
                dom::focus_by_id(&project_card_id(id));
            }
        }
        Overlay::ThemePanel => {
            logger.debug("theme_panel_closed", json!({}));
            if before.keyboard_user {
                dom::focus_by_id("themeToggle");
            }
        }
    }
}

fn close_project(ui: &UseReducerHandle<UiState>, logger: Logger) {
    if !ui.modal_open() {
        return;
    }

    let before = (**ui).clone();
    ui.dispatch(UiAction::CloseProject);
    after_overlay_closed(Overlay::ProjectModal, &before, logger);
}

fn navigate_project(
    ui: &UseReducerHandle<UiState>,
    timers: &Timers,
    direction: Direction,
    logger: Logger,
) {
    if !ui.modal_open() {
        return;
    }

    let next = ui.adjacent_project(direction);
    close_project(ui, logger);

    let ui = ui.clone();
    timers.after("modal-reopen", REOPEN_DELAY_MS, move || {
        ui.dispatch(UiAction::OpenProject(next.to_string()));
    });
}

fn close_theme_panel(ui: &UseReducerHandle<UiState>, logger: Logger) {
    if !ui.theme_panel_open {
        return;
    }

    let before = (**ui).clone();
    ui.dispatch(UiAction::CloseThemePanel);
    after_overlay_closed(Overlay::ThemePanel, &before, logger);
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::from_build_env());
    let logger = Logger::new(config.log_level);
    let ui = use_reducer(|| UiState::with_theme(load_theme(&dom::LocalThemeStore)));
    let timers = use_state(Timers::default);
    let announcement = use_state(|| None::<String>);
    let theme_mask = use_state(|| None::<f64>);
    let nav_open = use_state(|| false);
    let scroll = effects::use_scroll_effects();

    effects::use_parallax();
    effects::use_section_intro();

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            let (width, height) = dom::viewport_size();
            logger.info(
                "app_mounted",
                json!({ "viewportWidth": width, "viewportHeight": height }),
            );

            if let Err(err) = &config.contact_endpoint {
                logger.warn("contact_endpoint_invalid", json!({ "error": err.to_string() }));
            }
            || ()
        });
    }

    {
        use_effect_with(ui.theme, move |theme| {
            dom::apply_theme_attribute(*theme);
            persist_theme(&dom::LocalThemeStore, *theme);
            logger.info("theme_applied", json!({ "theme": theme.as_str() }));
            || ()
        });
    }

    {
        use_effect_with(ui.scroll_locked(), |locked| {
            dom::set_body_scroll_locked(*locked);
            || ()
        });
    }

    {
        use_effect_with(ui.keyboard_user, |keyboard_user| {
            dom::set_body_class("keyboard-nav", *keyboard_user);
            || ()
        });
    }

    {
        let dispatcher = ui.dispatcher();
        use_effect_with((), move |_| {
            let listeners = dom::document().map(|document| {
                let on_key = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "keydown", move |event| {
                        let is_tab = event
                            .dyn_ref::<KeyboardEvent>()
                            .map(|event| event.key() == "Tab")
                            .unwrap_or(false);
                        if is_tab {
                            dispatcher.dispatch(UiAction::SetKeyboardUser(true));
                        }
                    })
                };
                let on_pointer = EventListener::new(&document, "mousedown", move |_| {
                    dispatcher.dispatch(UiAction::SetKeyboardUser(false));
                });
                [on_key, on_pointer]
            });

            move || drop(listeners)
        });
    }

    {
        let snapshot = (*ui).clone();
        let ui = ui.clone();
        let timers = (*timers).clone();
        use_effect_with(snapshot, move |state| {
            let state = state.clone();
            let listener = dom::document().map(|document| {
                EventListener::new_with_options(
                    &document,
                    "keydown",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let key = key_event.key();

                        if key == "Escape" {
                            if let Some(overlay) = state.escape_target() {
                                ui.dispatch(UiAction::Escape);
                                after_overlay_closed(overlay, &state, logger);
                            }
                            return;
                        }

                        if let Some(direction) = arrow_navigation(&key, state.modal_open()) {
                            event.prevent_default();
                            navigate_project(&ui, &timers, direction, logger);
                        }
                    },
                )
            });

            move || drop(listener)
        });
    }

    let announce = {
        let announcement = announcement.clone();
        let timers = (*timers).clone();
        Callback::from(move |message: String| {
            announcement.set(Some(message));
            let announcement = announcement.clone();
            timers.after("announcement", ANNOUNCEMENT_TTL_MS, move || announcement.set(None));
        })
    };

    let on_close_project = {
        let ui = ui.clone();
        Callback::from(move |_: ()| close_project(&ui, logger))
    };

    let on_navigate = {
        let ui = ui.clone();
        let timers = (*timers).clone();
        Callback::from(move |direction: Direction| navigate_project(&ui, &timers, direction, logger))
    };

    let on_open_theme_panel = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::OpenThemePanel))
    };

    let on_close_theme_panel = {
        let ui = ui.clone();
        Callback::from(move |_: ()| close_theme_panel(&ui, logger))
    };

    let on_select_theme = {
        let ui = ui.clone();
        let timers = (*timers).clone();
        let theme_mask = theme_mask.clone();
        Callback::from(move |theme: Theme| {
            if dom::prefers_reduced_motion() {
                ui.dispatch(UiAction::ApplyTheme(theme));
                return;
            }

            dom::set_body_class("theme-transitioning", true);
            for (delay_ms, step) in TRANSITION_SCHEDULE {
                let ui = ui.clone();
                let theme_mask = theme_mask.clone();
                let key = match step {
                    TransitionStep::MaskIn => "theme-mask-in",
                    TransitionStep::Swap => "theme-swap",
                    TransitionStep::MaskOut => "theme-mask-out",
                    TransitionStep::Remove => "theme-remove",
                };

                timers.after(key, delay_ms, move || match step {
                    TransitionStep::MaskIn => {
                        theme_mask.set(Some(0.0));
                        let raised = theme_mask.clone();
                        let shown = dom::request_animation_frame(move || {
                            raised.set(step.overlay_opacity());
                        });
                        if !shown {
                            theme_mask.set(step.overlay_opacity());
                        }
                    }
                    TransitionStep::Swap => ui.dispatch(UiAction::ApplyTheme(theme)),
                    TransitionStep::MaskOut => theme_mask.set(step.overlay_opacity()),
                    TransitionStep::Remove => {
                        theme_mask.set(None);
                        dom::set_body_class("theme-transitioning", false);
                    }
                });
            }
        })
    };

    let on_nav_toggle = {
        let nav_open = nav_open.clone();
        Callback::from(move |_: Event| nav_open.set(!*nav_open))
    };

    let on_anchor = {
        let nav_open = nav_open.clone();
        Callback::from(move |event: MouseEvent| {
            let href = event
                .target_dyn_into::<web_sys::Element>()
                .and_then(|target| target.closest("a[href^=\"#\"]").ok().flatten())
                .and_then(|anchor| anchor.get_attribute("href"));
            let Some(section) = href.as_deref().and_then(|href| href.strip_prefix('#')) else {
                return;
            };

            if dom::scroll_to_section(section) {
                event.prevent_default();
                nav_open.set(false);
            }
        })
    };

    let on_back_to_top = Callback::from(|_: MouseEvent| dom::scroll_to_top());

    let header_class = classes!("main-header", scroll.header_scrolled.then_some("scrolled"));
    let back_to_top_class = classes!("back-to-top", scroll.back_to_top.then_some("visible"));
    let mask_style = theme_mask
        .map(|opacity| format!("opacity: {opacity};"))
        .unwrap_or_default();
    let (viewport_width, _) = dom::viewport_size();
    let desktop = motion::parallax_enabled(viewport_width);

    html! {
        <>
            <decor::PageLoader />
            if desktop {
                <>
                    <decor::ParticleField />
                    <decor::InteractiveBlob />
                </>
            }
            <div class="scroll-progress" aria-hidden="true">
                <div class="scroll-progress-bar" id="scrollProgressBar"></div>
            </div>

            <header class={header_class}>
                <nav class="nav" aria-label="Primary" onclick={on_anchor.clone()}>
                    <a class="logo" href="#home">{"Divyansh"}<span class="logo-dot">{"."}</span></a>
                    <input
                        type="checkbox"
                        id="nav-toggle"
                        class="nav-toggle"
                        checked={*nav_open}
                        onchange={on_nav_toggle}
                    />
                    <label for="nav-toggle" class="nav-toggle-label" aria-label="Toggle navigation">
                        <span></span>
                    </label>
                    <ul class="nav-links">
                        <li><a href="#home">{"Home"}</a></li>
                        <li><a href="#about">{"About"}</a></li>
                        <li><a href="#projects">{"Projects"}</a></li>
                        <li><a href="#skills">{"Skills"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                    </ul>
                    <button
                        id="themeToggle"
                        class="theme-toggle"
                        type="button"
                        aria-label="Choose color theme"
                        aria-haspopup="dialog"
                        aria-expanded={ui.theme_panel_open.to_string()}
                        onclick={on_open_theme_panel}
                    >
                        <span aria-hidden="true">{"◐"}</span>
                    </button>
                </nav>
            </header>

            <main id="content" onclick={on_anchor}>
                <section id="home" class="hero parallax-section">
                    <div class="gradient-orb orb-1" aria-hidden="true"></div>
                    <div class="gradient-orb orb-2" aria-hidden="true"></div>
                    <div class="gradient-orb orb-3" aria-hidden="true"></div>
                    <div class="hero-content">
                        <p class="hero-kicker">{"Hi, I'm"}</p>
                        <h1 class="hero-title">{"Divyansh"}</h1>
                        <p class="hero-subtitle">{"Front-end developer building fast, accessible and animated web experiences."}</p>
                        <div class="hero-actions">
                            <a class="btn btn-primary" href="#projects">{"View my work"}</a>
                            <a class="btn btn-ghost" href="#contact">{"Get in touch"}</a>
                        </div>
                    </div>
                </section>

                <section id="about" class="about parallax-section">
                    <div class="parallax-bg" aria-hidden="true"></div>
                    <div class="section-inner about-grid">
                        <div class="about-image-wrapper reveal">
                            <img src="Media/profile.png" alt="Portrait of Divyansh" loading="lazy" />
                        </div>
                        <div class="about-copy">
                            <h2 class="section-title parallax-text">{"About me"}</h2>
                            <p class="reveal">
                                {"I design and build websites that feel quick and look sharp on any screen. Most of my work lives in HTML, CSS and JavaScript, with Python and Java for the tooling around it."}
                            </p>
                            <p class="reveal">
                                {"I care about motion that helps rather than distracts, keyboard access everywhere, and pages that still work when a script fails to load."}
                            </p>
                        </div>
                    </div>
                </section>

                <section id="projects" class="projects parallax-section">
                    <div class="section-inner">
                        <h2 class="section-title parallax-text">{"Projects"}</h2>
                        <showcase::ProjectGrid ui={ui.clone()} />
                    </div>
                </section>

                <section id="skills" class="skills parallax-section">
                    <div class="section-inner">
                        <h2 class="section-title parallax-text">{"Skills"}</h2>
                        if scroll.skills_armed {
                            <skills::SkillsPanel ui={ui.clone()} logger={logger} />
                        } else {
                            <div id="skillsContainer" class="skills-grid" aria-busy="true"></div>
                        }
                    </div>
                </section>

                <section id="contact" class="contact parallax-section">
                    <div class="section-inner">
                        <h2 class="section-title parallax-text">{"Contact"}</h2>
                        <p class="section-lead reveal">{"Have a project in mind or just want to say hi? My inbox is open."}</p>
                        <contact::ContactForm config={config.clone()} logger={logger} />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <p>{"© Divyansh. Built with Rust and WebAssembly."}</p>
                <ul class="footer-links">
                    <li><a href="https://github.com/Divyansh3105" target="_blank" rel="noopener noreferrer">{"GitHub"}</a></li>
                </ul>
            </footer>

            <button
                id="backToTop"
                class={back_to_top_class}
                type="button"
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>

            <showcase::ProjectModal
                ui={ui.clone()}
                logger={logger}
                announce={announce}
                on_close={on_close_project}
                on_navigate={on_navigate}
            />

            <theme::ThemePanel
                ui={ui.clone()}
                logger={logger}
                on_select={on_select_theme}
                on_close={on_close_theme_panel}
            />

            if theme_mask.is_some() {
                <div class="theme-transition-overlay" style={mask_style} aria-hidden="true"></div>
            }

            <div class="sr-only" role="status" aria-live="polite" aria-atomic="true">
                {(*announcement).clone().unwrap_or_default()}
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        dom::by_id("app").expect("missing #app mount point"),
    )
    .render();
}
