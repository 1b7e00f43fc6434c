use super::{dom, Timers};
use crate::state::UiState;
use crate::telemetry::Logger;
use crate::theme::{
    cycle_option, pressed_option, Theme, PANEL_CLOSE_DELAY_MS, PANEL_FOCUS_DELAY_MS,
    PRESS_FEEDBACK_MS,
};
use serde_json::json;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemePanelProps {
    pub ui: UseReducerHandle<UiState>,
    pub logger: Logger,
    pub on_select: Callback<Theme>,
    pub on_close: Callback<()>,
}

#[function_component(ThemePanel)]
pub fn theme_panel(props: &ThemePanelProps) -> Html {
    let timers = use_state(Timers::default);
    let pressed = use_state_eq(|| None::<Theme>);
    let open = props.ui.theme_panel_open;

    {
        let keyboard_user = props.ui.keyboard_user;
        let logger = props.logger;
        let timers = (*timers).clone();
        let pressed = pressed.clone();
        use_effect_with(open, move |open| {
            if *open {
                logger.debug("theme_panel_opened", json!({}));
                if keyboard_user {
                    timers.after("panel-focus", PANEL_FOCUS_DELAY_MS, || {
                        if let Some(first) = dom::query(".theme-option") {
                            dom::focus_element(&first);
                        }
                    });
                }
            } else {
                timers.clear();
                pressed.set(None);
            }
            || ()
        });
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let options = Theme::ALL.into_iter().enumerate().map(|(index, theme)| {
        let onclick = {
            let on_select = props.on_select.clone();
            let on_close = props.on_close.clone();
            let pressed = pressed.clone();
            let timers = (*timers).clone();
            let logger = props.logger;
            Callback::from(move |_: MouseEvent| {
                if timers.is_pending("panel-close") {
                    return;
                }
                logger.debug("theme_selected", json!({ "theme": theme.as_str() }));
                on_select.emit(theme);

                pressed.set(Some(theme));
                let release = pressed.clone();
                timers.after("press", PRESS_FEEDBACK_MS, move || release.set(None));

                let on_close = on_close.clone();
                timers.after("panel-close", PANEL_CLOSE_DELAY_MS, move || on_close.emit(()));
            })
        };

        let onkeydown = Callback::from(move |event: KeyboardEvent| {
            let forward = match event.key().as_str() {
                "ArrowDown" => true,
                "ArrowUp" => false,
                _ => return,
            };
            event.prevent_default();

            let options = dom::query_all(".theme-option");
            if let Some(next) = cycle_option(index, options.len(), forward) {
                dom::focus_element(&options[next]);
            }
        });

        let active = props.ui.theme == theme;
        let is_pressed = pressed_option(open, *pressed) == Some(theme);

        html! {
            <button
                type="button"
                class={classes!(
                    "theme-option",
                    active.then_some("active"),
                    is_pressed.then_some("pressed"),
                )}
                data-theme={theme.as_str()}
                aria-pressed={active.to_string()}
                {onclick}
                {onkeydown}
            >
                <span class={classes!("theme-swatch", format!("swatch-{}", theme.as_str()))} aria-hidden="true"></span>
                <span class="theme-name">{theme.label()}</span>
            </button>
        }
    });

    html! {
        <>
            <div
                id="themePanelOverlay"
                class={classes!("theme-panel-overlay", open.then_some("active"))}
                onclick={on_overlay_click}
            ></div>
            <aside
                id="themePanel"
                class={classes!("theme-panel", open.then_some("active"))}
                role="dialog"
                aria-label="Color themes"
                aria-hidden={(!open).to_string()}
            >
                <div class="theme-panel-header">
                    <h3>{"Choose a theme"}</h3>
                    <button
                        id="themePanelClose"
                        class="theme-panel-close"
                        type="button"
                        aria-label="Close theme panel"
                        onclick={on_close_click}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="theme-options">
                    { for options }
                </div>
            </aside>
        </>
    }
}
