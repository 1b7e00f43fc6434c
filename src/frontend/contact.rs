use super::{dom, Timers};
use crate::config::SiteConfig;
use crate::contact::{
    classify_response, counter_label, Banner, ContactDraft, CounterLevel, Field, FieldStatus,
    SubmitError, BANNER_TTL_MS, CONFETTI_COLORS, CONFETTI_COUNT, CONFETTI_TTL_MS,
    MESSAGE_MAX_CHARS, SHAKE_MS,
};
use crate::telemetry::Logger;
use gloo_net::http::Request;
use serde_json::json;
use std::collections::HashMap;
use std::rc::Rc;
use url::Url;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FocusEvent, FormData, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

async fn send(endpoint: &Url, draft: &ContactDraft) -> Result<(), SubmitError> {
    let form = FormData::new().map_err(|err| SubmitError::Network(format!("{err:?}")))?;
    for field in Field::ALL {
        form.append_with_str(field.key(), draft.value(field))
            .map_err(|err| SubmitError::Network(format!("{err:?}")))?;
    }

    let response = Request::post(endpoint.as_str())
        .header("Accept", "application/json")
        .body(form)
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;

    let status = response.status();
    let body = if response.ok() {
        String::new()
    } else {
        response.text().await.unwrap_or_default()
    };

    classify_response(status, &body)
}

#[derive(Clone, PartialEq)]
struct ConfettiPiece {
    left: f64,
    color: &'static str,
    rotation: f64,
    duration: f64,
}

impl ConfettiPiece {
    fn random() -> Self {
        let color_index = (dom::random() * CONFETTI_COLORS.len() as f64) as usize;
        Self {
            left: dom::random() * 100.0,
            color: CONFETTI_COLORS[color_index.min(CONFETTI_COLORS.len() - 1)],
            rotation: dom::random() * 360.0,
            duration: 2.0 + dom::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; background: {}; transform: rotate({:.0}deg); animation-duration: {:.2}s;",
            self.left, self.color, self.rotation, self.duration
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub config: Rc<SiteConfig>,
    pub logger: Logger,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_state(ContactDraft::default);
    let statuses = use_state(HashMap::<Field, FieldStatus>::new);
    let submitting = use_state_eq(|| false);
    let shaking = use_state_eq(|| false);
    let banner = use_state_eq(|| None::<Banner>);
    let confetti = use_state(Vec::<ConfettiPiece>::new);
    let timers = use_state(Timers::default);

    let status_of = |field: Field| statuses.get(&field).copied().unwrap_or_default();

    let oninput = |field: Field| {
        let draft = draft.clone();
        let statuses = statuses.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                Field::Message => event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|input| input.value()),
                _ => event
                    .target_dyn_into::<HtmlInputElement>()
                    .map(|input| input.value()),
            };
            let Some(value) = value else {
                return;
            };

            let mut next = (*draft).clone();
            next.set(field, value);
            draft.set(next);

            let current = statuses.get(&field).copied().unwrap_or_default();
            let updated = current.after_input();
            if updated != current {
                let mut next = (*statuses).clone();
                next.insert(field, updated);
                statuses.set(next);
            }
        })
    };

    let onblur = |field: Field| {
        let draft = draft.clone();
        let statuses = statuses.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*statuses).clone();
            next.insert(field, FieldStatus::after_blur(field, draft.value(field)));
            statuses.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let statuses = statuses.clone();
        let submitting = submitting.clone();
        let shaking = shaking.clone();
        let banner = banner.clone();
        let confetti = confetti.clone();
        let timers = (*timers).clone();
        let endpoint = props.config.contact_endpoint.clone();
        let logger = props.logger;

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let report = draft.validate();
            statuses.set(report.into_iter().collect());

            if !draft.is_submittable() {
                let invalid: Vec<&str> = report
                    .iter()
                    .filter(|(_, status)| *status == FieldStatus::Invalid)
                    .map(|(field, _)| field.key())
                    .collect();
                logger.debug("contact_validation_failed", json!({ "fields": invalid }));

                shaking.set(true);
                let shaking = shaking.clone();
                timers.after("shake", SHAKE_MS, move || shaking.set(false));
                return;
            }

            let show_banner = {
                let banner = banner.clone();
                let timers = timers.clone();
                move |next: Banner| {
                    banner.set(Some(next));
                    let banner = banner.clone();
                    timers.after("banner", BANNER_TTL_MS, move || banner.set(None));
                }
            };

            let endpoint = match &endpoint {
                Ok(endpoint) => endpoint.clone(),
                Err(err) => {
                    let failure = SubmitError::Unconfigured(err.to_string());
                    logger.error(
                        "contact_submit_failed",
                        json!({ "kind": failure.kind(), "error": failure.to_string() }),
                    );
                    show_banner(Banner::Failure);
                    return;
                }
            };

            logger.info("contact_submit_started", json!({ "endpoint": endpoint.as_str() }));
            submitting.set(true);
            banner.set(None);

            let submission = (*draft).clone();
            let draft = draft.clone();
            let statuses = statuses.clone();
            let submitting = submitting.clone();
            let confetti = confetti.clone();
            let timers = timers.clone();

            spawn_local(async move {
                let outcome = send(&endpoint, &submission).await;
                show_banner(Banner::for_outcome(&outcome));

                match &outcome {
                    Ok(()) => {
                        logger.info("contact_submit_succeeded", json!({}));
                        draft.set(ContactDraft::default());
                        statuses.set(HashMap::new());

                        confetti.set((0..CONFETTI_COUNT).map(|_| ConfettiPiece::random()).collect());
                        let confetti = confetti.clone();
                        timers.after("confetti", CONFETTI_TTL_MS, move || confetti.set(Vec::new()));
                    }
                    Err(SubmitError::Rejected { status, detail }) => logger.warn(
                        "contact_submit_rejected",
                        json!({ "status": status, "detail": detail }),
                    ),
                    Err(err) => logger.error(
                        "contact_submit_failed",
                        json!({ "kind": err.kind(), "error": err.to_string() }),
                    ),
                }

                submitting.set(false);
            });
        })
    };

    let message_length = draft.message.chars().count();
    let counter_level = CounterLevel::for_length(message_length);
    let form_action = props
        .config
        .contact_endpoint
        .as_ref()
        .map(|endpoint| endpoint.to_string())
        .unwrap_or_default();

    html! {
        <>
            <form
                id="contactForm"
                class={classes!("contact-form", "reveal", shaking.then_some("shake"))}
                action={form_action}
                method="POST"
                novalidate={true}
                {onsubmit}
            >
                <div class={classes!("form-field", status_of(Field::Name).class())}>
                    <label for={Field::Name.input_id()}>{"Name"}</label>
                    <input
                        id={Field::Name.input_id()}
                        name={Field::Name.key()}
                        type="text"
                        autocomplete="name"
                        value={draft.name.clone()}
                        oninput={oninput(Field::Name)}
                        onblur={onblur(Field::Name)}
                    />
                    <span class="error-message" id="nameError" role="alert">{Field::Name.error_message()}</span>
                </div>

                <div class={classes!("form-field", status_of(Field::Email).class())}>
                    <label for={Field::Email.input_id()}>{"Email"}</label>
                    <input
                        id={Field::Email.input_id()}
                        name={Field::Email.key()}
                        type="email"
                        autocomplete="email"
                        value={draft.email.clone()}
                        oninput={oninput(Field::Email)}
                        onblur={onblur(Field::Email)}
                    />
                    <span class="error-message" id="emailError" role="alert">{Field::Email.error_message()}</span>
                </div>

                <div class={classes!("form-field", status_of(Field::Message).class())}>
                    <label for={Field::Message.input_id()}>{"Message"}</label>
                    <textarea
                        id={Field::Message.input_id()}
                        name={Field::Message.key()}
                        rows="6"
                        maxlength={MESSAGE_MAX_CHARS.to_string()}
                        value={draft.message.clone()}
                        oninput={oninput(Field::Message)}
                        onblur={onblur(Field::Message)}
                    />
                    <span id="charCounter" class={classes!("char-counter", counter_level.class())}>
                        {counter_label(message_length)}
                    </span>
                    <span class="error-message" id="messageError" role="alert">{Field::Message.error_message()}</span>
                </div>

                <button
                    id="submitBtn"
                    class={classes!("btn", "btn-primary", submitting.then_some("loading"))}
                    type="submit"
                    disabled={*submitting}
                >
                    {if *submitting { "Sending…" } else { "Send message" }}
                </button>

                <div
                    id="formSuccess"
                    class={classes!("form-banner", "success", (*banner == Some(Banner::Success)).then_some("show"))}
                    role="status"
                >
                    {"Thanks! Your message is on its way."}
                </div>
                <div
                    id="formError"
                    class={classes!("form-banner", "failure", (*banner == Some(Banner::Failure)).then_some("show"))}
                    role="alert"
                >
                    {"Something went wrong. Please try again or email me directly."}
                </div>
            </form>

            { for confetti.iter().map(|piece| html! {
                <div class="confetti" style={piece.style()} aria-hidden="true"></div>
            }) }
        </>
    }
}
