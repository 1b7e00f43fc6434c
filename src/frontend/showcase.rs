use super::{dom, project_card_id, Timers};
use crate::catalog::{self, ProjectRecord, PROJECTS};
use crate::showcase::{
    focus_trap_target, is_activation_key, open_announcement, Direction,
    CONTENT_FOCUS_DELAY_MS, FOCUSABLE_SELECTOR,
};
use crate::state::{UiAction, UiState};
use crate::telemetry::Logger;
use serde_json::json;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub ui: UseReducerHandle<UiState>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <div class="projects-grid">
            { for PROJECTS.iter().map(|project| html! {
                <ProjectCard key={project.id} project={project} ui={props.ui.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
    ui: UseReducerHandle<UiState>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    let onclick = {
        let ui = props.ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(UiAction::OpenProject(project.id.to_string())))
    };

    let onkeydown = {
        let ui = props.ui.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                ui.dispatch(UiAction::OpenProject(project.id.to_string()));
            }
        })
    };

    let onmouseenter = Callback::from(|event: MouseEvent| {
        if let Some(card) = event.target_dyn_into::<Element>() {
            dom::set_style(&card, "z-index", "10");
        }
    });

    let onmouseleave = Callback::from(|event: MouseEvent| {
        if let Some(card) = event.target_dyn_into::<Element>() {
            dom::set_style(&card, "z-index", "1");
        }
    });

    html! {
        <article
            id={project_card_id(project.id)}
            class="project-card reveal"
            data-project={project.id}
            tabindex="0"
            role="button"
            aria-label={format!("View details for {}", project.title)}
            {onclick}
            {onkeydown}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-info">
                <h3>{project.title}</h3>
                <ul class="project-tags">
                    { for project.tech.iter().take(3).map(|tech| html! { <li>{*tech}</li> }) }
                </ul>
                <span class="project-more">{"View details →"}</span>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub ui: UseReducerHandle<UiState>,
    pub logger: Logger,
    pub announce: Callback<String>,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<Direction>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let modal_ref = use_node_ref();
    let content_ref = use_node_ref();
    let timers = use_state(Timers::default);
    let last_shown = use_mut_ref(|| None::<&'static str>);

    let open = props.ui.open_project;
    if let Some(id) = open {
        *last_shown.borrow_mut() = Some(id);
    }
    let shown = (*last_shown.borrow()).and_then(catalog::project);

    {
        let logger = props.logger;
        let announce = props.announce.clone();
        let content_ref = content_ref.clone();
        let timers = (*timers).clone();
        use_effect_with(open, move |open| {
            match open.and_then(catalog::project) {
                Some(project) => {
                    announce.emit(open_announcement(project.title));
                    logger.info("project_modal_opened", json!({ "projectId": project.id }));
                    timers.after("content-focus", CONTENT_FOCUS_DELAY_MS, move || {
                        if let Some(content) = content_ref.cast::<HtmlElement>() {
                            let _ = content.focus();
                        }
                    });
                }
                None => timers.cancel("content-focus"),
            }
            || ()
        });
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            let on_overlay = event
                .target_dyn_into::<Element>()
                .map(|target| target.id() == "projectModal")
                .unwrap_or(false);
            if on_overlay {
                on_close.emit(());
            }
        })
    };

    let on_trap_keydown = {
        let modal_ref = modal_ref.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Tab" {
                return;
            }
            let Some(modal) = modal_ref.cast::<Element>() else {
                return;
            };

            let focusables = dom::query_all_within(&modal, FOCUSABLE_SELECTOR);
            let focused = dom::active_element()
                .and_then(|active| focusables.iter().position(|element| *element == active));

            if let Some(target) = focus_trap_target(focused, focusables.len(), event.shift_key()) {
                event.prevent_default();
                dom::focus_element(&focusables[target]);
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_previous = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Direction::Previous))
    };
    let on_next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Direction::Next))
    };

    html! {
        <div
            id="projectModal"
            class={classes!("project-modal", open.is_some().then_some("active"))}
            aria-hidden={open.is_none().to_string()}
            ref={modal_ref}
            onclick={on_overlay_click}
            onkeydown={on_trap_keydown}
        >
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modalTitle"
                tabindex="-1"
                ref={content_ref}
            >
                if open.is_some() {
                    <button class="modal-close" type="button" aria-label="Close project details" onclick={on_close_click}>
                        {"×"}
                    </button>
                }
                if let Some(project) = shown {
                    <img id="modalImage" class="modal-image" src={project.image} alt={project.title} />
                    <div class="modal-body">
                        <h2 id="modalTitle">{project.title}</h2>
                        <p id="modalDescription">{project.description}</p>
                        <h3>{"Tech stack"}</h3>
                        <ul id="modalTechStack" class="tech-stack">
                            { for project.tech.iter().map(|tech| html! { <li class="tech-tag">{*tech}</li> }) }
                        </ul>
                        <h3>{"Key features"}</h3>
                        <ul id="modalFeatures" class="feature-list">
                            { for project.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                        if open.is_some() {
                            <div class="modal-links">
                                if let Some(live) = project.live_link {
                                    <a id="modalLiveLink" class="btn btn-primary" href={live} target="_blank" rel="noopener noreferrer">
                                        {"Live demo"}
                                    </a>
                                }
                                <a id="modalCodeLink" class="btn btn-ghost" href={project.code_link} target="_blank" rel="noopener noreferrer">
                                    {"View code"}
                                </a>
                            </div>
                            <div class="modal-nav">
                                <button type="button" class="modal-prev" aria-label="Previous project" onclick={on_previous}>{"←"}</button>
                                <button type="button" class="modal-next" aria-label="Next project" onclick={on_next}>{"→"}</button>
                            </div>
                        }
                    </div>
                }
            </div>
        </div>
    }
}
