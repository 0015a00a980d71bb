use yew::prelude::*;

use crate::components::cards::use_page;
use crate::content::icons::{Icon, IconId};
use crate::feedback::toast::use_toasts;
use crate::flow::state::{use_flow, FlowAction};
use crate::forms::collector::{consultation_groups, CheckboxGroup};
use crate::forms::dom::{form_fields, submitted_form};
use crate::forms::pipeline::{spawn_submission, Flow, SubmissionPhase, SuccessAction};
use crate::forms::records::ConsultationRecord;
use crate::i18n::{use_translator, Translator};

fn text_field(tr: &Translator, name: &'static str, label_key: &str, required: bool) -> Html {
    html! {
        <label class="field">
            <span>{ tr.t(label_key) }{ if required { " *" } else { "" } }</span>
            <input type="text" name={name} required={required} />
        </label>
    }
}

fn date_field(tr: &Translator, name: &'static str, label_key: &str, required: bool) -> Html {
    html! {
        <label class="field">
            <span>{ tr.t(label_key) }{ if required { " *" } else { "" } }</span>
            <input type="date" name={name} required={required} />
        </label>
    }
}

fn text_area(tr: &Translator, name: &'static str, label_key: &str) -> Html {
    html! {
        <label class="field full">
            <span>{ tr.t(label_key) }</span>
            <textarea name={name} rows="3"></textarea>
        </label>
    }
}

fn checkbox_group(tr: &Translator, group: &CheckboxGroup, label_key: &str) -> Html {
    html! {
        <fieldset class="field full">
            <legend>{ tr.t(label_key) }</legend>
            <div class="checkbox-grid">
                { for group.items.iter().map(|item| html! {
                    <label class="choice">
                        <input type="checkbox" name={item.field.clone()} />
                        <span>{ &item.label }</span>
                    </label>
                }) }
            </div>
        </fieldset>
    }
}

/// Radio buttons from ordered (value, label) pairs; `default` starts checked.
fn radio_group(name: &'static str, legend: String, options: Vec<(String, String)>, default: &str) -> Html {
    html! {
        <fieldset class="field">
            <legend>{ legend }</legend>
            <div class="radio-row">
                { for options.into_iter().map(|(value, label)| {
                    let checked = value == default;
                    html! {
                        <label class="choice">
                            <input type="radio" name={name} value={value} checked={checked} />
                            <span>{ label }</span>
                        </label>
                    }
                }) }
            </div>
        </fieldset>
    }
}

fn yes_no(tr: &Translator) -> Vec<(String, String)> {
    vec![
        ("yes".to_string(), tr.t("consultation_form.yes")),
        ("no".to_string(), tr.t("consultation_form.no")),
    ]
}

#[function_component]
pub fn DetailedConsultation() -> Html {
    let tr = use_translator();
    let toasts = use_toasts();
    let flow = use_flow();
    let phase = use_state(SubmissionPhase::default);
    // bumping the generation remounts the form, which restores every default
    let generation = use_state(|| 0u32);
    use_page(format!("{} - {}", tr.t("consultation_form.title"), tr.t("meta.site_name")));

    let groups = consultation_groups(&tr);

    let onsubmit = {
        let phase = phase.clone();
        let generation = generation.clone();
        let groups = groups.clone();
        Callback::from(move |e: SubmitEvent| {
            let Some(form) = submitted_form(&e) else {
                return;
            };
            let record = ConsultationRecord::from_fields(&form_fields(&form), &groups);
            let record = match serde_json::to_value(record) {
                Ok(record) => record,
                Err(e) => {
                    log::error!("Failed to encode consultation: {}", e);
                    return;
                }
            };
            let on_success = {
                let generation = generation.clone();
                let flow = flow.clone();
                Callback::from(move |action: SuccessAction| {
                    if action == SuccessAction::ResetAndCelebrate {
                        generation.set(generation.wrapping_add(1));
                        flow.emit(FlowAction::OpenSuccess);
                    }
                })
            };
            spawn_submission(Flow::Consultation, record, phase.clone(), toasts.clone(), tr, on_success);
        })
    };

    let submitting = phase.is_submitting();
    let section = |title_key: &str, body: Html| {
        html! {
            <section class="form-section">
                <h2 class="serif">{ tr.t(title_key) }</h2>
                <div class="grid-2">{ body }</div>
            </section>
        }
    };

    html! {
        <div class="page">
            <section class="page-intro centered">
                <div class="container narrow">
                    <h1 class="serif">{ tr.t("consultation_form.title") }</h1>
                    <p class="lead muted">{ tr.t("consultation_form.subtitle") }</p>
                </div>
            </section>
            <div class="container narrow">
                <form key={*generation} class="consultation-form" onsubmit={onsubmit}>
                    { section("consultation_form.section_basic", html! {
                        <>
                            { text_field(&tr, "name_passport", "consultation_form.name_passport", true) }
                            { date_field(&tr, "dob", "consultation_form.dob", true) }
                            { text_field(&tr, "nationality", "consultation_form.nationality", true) }
                            { text_field(&tr, "passport_number", "consultation_form.passport_number", false) }
                            { text_field(&tr, "phone_kakaotalk", "consultation_form.phone_kakaotalk", true) }
                            { date_field(&tr, "preferred_consultation_date", "consultation_form.consultation_date", false) }
                            { text_area(&tr, "accompanying_travelers", "consultation_form.accompanying_travelers") }
                        </>
                    }) }
                    { section("consultation_form.section_health", html! {
                        <>
                            { checkbox_group(&tr, &groups[0], "consultation_form.health_check_intro") }
                            { text_area(&tr, "health_special_attention", "consultation_form.health_special_attention") }
                            { text_field(&tr, "current_medications", "consultation_form.current_medications", false) }
                            { text_field(&tr, "emergency_contact", "consultation_form.emergency_contact", false) }
                        </>
                    }) }
                    { section("consultation_form.section_diet", html! {
                        <>
                            { radio_group("food_allergies", tr.t("consultation_form.food_allergies.label"), yes_no(&tr), "no") }
                            { text_field(&tr, "food_allergies_specify", "consultation_form.food_allergies.specify", false) }
                            { radio_group("animal_allergies", tr.t("consultation_form.animal_allergies.label"), yes_no(&tr), "no") }
                            { text_field(&tr, "animal_allergies_specify", "consultation_form.animal_allergies.specify", false) }
                            { text_field(&tr, "preferred_diet", "consultation_form.preferred_diet", false) }
                            { text_field(&tr, "avoid_foods", "consultation_form.avoid_foods", false) }
                            { text_field(&tr, "alcohol", "consultation_form.alcohol", false) }
                        </>
                    }) }
                    { section("consultation_form.section_transport", html! {
                        <>
                            { text_field(&tr, "transport_ability", "consultation_form.transport_ability", false) }
                            { text_field(&tr, "long_distance_pref", "consultation_form.long_distance_pref", false) }
                            { text_area(&tr, "transport_discomfort", "consultation_form.transport_discomfort") }
                        </>
                    }) }
                    { section("consultation_form.section_style", html! {
                        <>
                            { checkbox_group(&tr, &groups[1], "consultation_form.travel_style") }
                            { text_field(&tr, "specific_activities", "consultation_form.specific_activities", false) }
                            { text_field(&tr, "avoid_activities", "consultation_form.avoid_activities", false) }
                            { text_field(&tr, "special_anniversary", "consultation_form.special_anniversary", false) }
                        </>
                    }) }
                    { section("consultation_form.section_accommodation", html! {
                        <>
                            { checkbox_group(&tr, &groups[2], "consultation_form.accommodation_type") }
                            { radio_group("bed_config", tr.t("consultation_form.bed_config"), tr.options("consultation_form.bed_configs"), "king") }
                            { text_field(&tr, "additional_services", "consultation_form.additional_services", false) }
                        </>
                    }) }
                    { section("consultation_form.section_additional", html! {
                        { text_area(&tr, "additional_requests", "consultation_form.section_additional") }
                    }) }
                    <button type="submit" class="btn btn-dark btn-block" disabled={submitting}>
                        if submitting {
                            <Icon icon={IconId::Spinner} />
                        } else {
                            { tr.t("consultation_form.submit_button") }
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
