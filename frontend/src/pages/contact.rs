use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::components::cards::use_page;
use crate::content::icons::{Icon, IconId};
use crate::feedback::toast::use_toasts;
use crate::flow::state::{use_flow, FlowAction};
use crate::forms::dom::{form_fields, submitted_form};
use crate::forms::pipeline::{spawn_submission, Flow, SubmissionPhase, SuccessAction};
use crate::forms::records::ContactRecord;
use crate::i18n::use_translator;

#[function_component]
pub fn Contact() -> Html {
    let tr = use_translator();
    let toasts = use_toasts();
    let flow = use_flow();
    let phase = use_state(SubmissionPhase::default);
    let form_ref = use_node_ref();
    use_page(format!("{} - {}", tr.t("contact_page.title"), tr.t("meta.site_name")));

    let onsubmit = {
        let phase = phase.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            let Some(form) = submitted_form(&e) else {
                return;
            };
            let record = match serde_json::to_value(ContactRecord::from_fields(&form_fields(&form))) {
                Ok(record) => record,
                Err(e) => {
                    log::error!("Failed to encode contact message: {}", e);
                    return;
                }
            };
            let on_success = {
                let form_ref = form_ref.clone();
                let flow = flow.clone();
                Callback::from(move |action: SuccessAction| {
                    if action == SuccessAction::ResetAndCelebrate {
                        if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                            form.reset();
                        }
                        flow.emit(FlowAction::OpenSuccess);
                    }
                })
            };
            spawn_submission(Flow::Contact, record, phase.clone(), toasts.clone(), tr, on_success);
        })
    };

    let submitting = phase.is_submitting();
    html! {
        <div class="page">
            <section class="page-intro centered">
                <div class="container narrow">
                    <h1 class="serif">{ tr.t("contact_page.title") }</h1>
                    <p class="lead muted">{ tr.t("contact_page.subtitle") }</p>
                </div>
            </section>
            <section class="section">
                <div class="container grid-2 wide-gap">
                    <form class="stack" ref={form_ref} onsubmit={onsubmit}>
                        <label class="field">
                            <span>{ tr.t("contact_page.form_name") }</span>
                            <input type="text" name="name" required=true />
                        </label>
                        <label class="field">
                            <span>{ tr.t("contact_page.form_email") }</span>
                            <input type="email" name="email" required=true />
                        </label>
                        <label class="field">
                            <span>{ tr.t("contact_page.form_message") }</span>
                            <textarea name="message" rows="6" required=true></textarea>
                        </label>
                        <button type="submit" class="btn btn-dark btn-block" disabled={submitting}>
                            if submitting {
                                <Icon icon={IconId::Spinner} />
                            } else {
                                { tr.t("contact_page.submit") }
                            }
                        </button>
                    </form>
                    <aside class="contact-info">
                        <h2 class="serif">{ tr.t("contact_page.info_title") }</h2>
                        <p><Icon icon={IconId::Envelope} class="accent" /> <strong>{ tr.t("contact_page.email_label") }</strong></p>
                        <p class="muted">{ tr.t("contact_page.email") }</p>
                        <p><Icon icon={IconId::Phone} class="accent" /> <strong>{ tr.t("contact_page.phone_label") }</strong></p>
                        <p class="muted">{ tr.t("contact_page.phone") }</p>
                        <p><Icon icon={IconId::MapMarker} class="accent" /> <strong>{ tr.t("contact_page.address_label") }</strong></p>
                        <p class="muted">{ tr.t("contact_page.address") }</p>
                    </aside>
                </div>
            </section>
        </div>
    }
}
