use super::dom;
use crate::catalog::{skills_for, SkillCategory, SkillRecord};
use crate::skills::{
    bar_delay_ms, counter_step_ms, tilt, CounterAnimation, CounterFrame, NEUTRAL_TILT,
    RENDER_SETTLE_MS,
};
use crate::state::{UiAction, UiState};
use crate::telemetry::Logger;
use gloo_timers::callback::{Interval, Timeout};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillsPanelProps {
    pub ui: UseReducerHandle<UiState>,
    pub logger: Logger,
}

#[function_component(SkillsPanel)]
pub fn skills_panel(props: &SkillsPanelProps) -> Html {
    let category = props.ui.skill_category;
    let skills = skills_for(category.as_str()).unwrap_or_default();

    {
        let logger = props.logger;
        use_effect_with(category, move |category| {
            logger.debug(
                "skills_rendered",
                json!({ "category": category.as_str(), "count": category.skills().len() }),
            );
            || ()
        });
    }

    html! {
        <div class="skills-panel">
            <div class="skill-tabs" role="tablist" aria-label="Skill categories">
                { for SkillCategory::ALL.into_iter().map(|tab| {
                    let onclick = {
                        let ui = props.ui.clone();
                        Callback::from(move |event: MouseEvent| {
                            let selected = event
                                .target_dyn_into::<Element>()
                                .and_then(|button| button.get_attribute("data-category"))
                                .and_then(|value| SkillCategory::from_str(&value));
                            if let Some(selected) = selected {
                                ui.dispatch(UiAction::SelectCategory(selected));
                            }
                        })
                    };
                    let active = tab == category;

                    html! {
                        <button
                            type="button"
                            role="tab"
                            class={classes!("skill-tab", active.then_some("active"))}
                            data-category={tab.as_str()}
                            aria-selected={active.to_string()}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
            <div id="skillsContainer" class="skills-grid" role="tabpanel">
                { for skills.iter().enumerate().map(|(index, skill)| html! {
                    <SkillCard key={format!("{}-{}", category.as_str(), skill.name)} skill={skill} index={index} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    skill: &'static SkillRecord,
    index: usize,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let skill = props.skill;
    let card_ref = use_node_ref();
    let filled = use_state_eq(|| false);
    let counter = use_state_eq(|| CounterFrame {
        value: 0,
        done: false,
    });

    {
        let filled = filled.clone();
        let counter = counter.clone();
        let index = props.index;
        use_effect_with((), move |_| {
            let bar = Timeout::new(RENDER_SETTLE_MS + bar_delay_ms(index), move || {
                filled.set(true);
            });

            let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let animation = Rc::new(RefCell::new(CounterAnimation::new(skill.percentage)));
            let start = {
                let ticker = ticker.clone();
                Timeout::new(RENDER_SETTLE_MS, move || {
                    let tick = {
                        let ticker = ticker.clone();
                        move || {
                            let frame = animation.borrow_mut().advance();
                            counter.set(frame);
                            if frame.done {
                                ticker.borrow_mut().take();
                            }
                        }
                    };
                    *ticker.borrow_mut() = Some(Interval::new(counter_step_ms(), tick));
                })
            };

            move || {
                drop((bar, start));
                ticker.borrow_mut().take();
            }
        });
    }

    let onmousemove = {
        let card_ref = card_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                let angle = tilt(
                    dom::rect(&card),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                dom::set_style(&card, "transform", &angle.transform());
            }
        })
    };

    let onmouseleave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(card) = card_ref.cast::<Element>() {
                dom::set_style(&card, "transform", NEUTRAL_TILT);
            }
        })
    };

    let bar_width = if *filled { skill.percentage } else { 0 };

    html! {
        <div
            class="skill-card-interactive"
            data-percentage={skill.percentage.to_string()}
            ref={card_ref}
            {onmousemove}
            {onmouseleave}
        >
            <div class="skill-header">
                <div class="skill-icon">
                    <img src={skill.icon} alt={skill.name} />
                </div>
                <div class="skill-info">
                    <h3>{skill.name}</h3>
                    <span class="skill-level">{skill.level.as_str()}</span>
                </div>
            </div>
            <div class="skill-progress">
                <div class="progress-bar-container">
                    <div
                        class="progress-bar"
                        data-progress={skill.percentage.to_string()}
                        style={format!("width: {bar_width}%;")}
                    ></div>
                </div>
                <div class="skill-percentage">
                    <span class="percentage-number">{counter.label()}</span>
                    <span class="percentage-label">{"Proficiency"}</span>
                </div>
            </div>
            <p class="skill-description">{skill.description}</p>
        </div>
    }
}
