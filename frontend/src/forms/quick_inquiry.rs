use yew::prelude::*;

use crate::components::modal::Modal;
use crate::content::icons::{Icon, IconId};
use crate::feedback::toast::use_toasts;
use crate::forms::dom::{form_fields, submitted_form};
use crate::forms::pipeline::{spawn_submission, Flow, SubmissionPhase, SuccessAction};
use crate::forms::records::InquiryRecord;
use crate::i18n::use_translator;

#[derive(Properties, PartialEq)]
pub struct QuickInquiryProps {
    pub on_close: Callback<()>,
}

#[function_component]
pub fn QuickInquiryForm(props: &QuickInquiryProps) -> Html {
    let tr = use_translator();
    let toasts = use_toasts();
    let phase = use_state(SubmissionPhase::default);

    let onsubmit = {
        let on_close = props.on_close.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            let Some(form) = submitted_form(&e) else {
                return;
            };
            let record = match serde_json::to_value(InquiryRecord::quick_inquiry(&form_fields(&form))) {
                Ok(record) => record,
                Err(e) => {
                    log::error!("Failed to encode inquiry: {}", e);
                    return;
                }
            };
            let on_close = on_close.clone();
            let on_success = Callback::from(move |action: SuccessAction| {
                if action == SuccessAction::CloseModal {
                    on_close.emit(());
                }
            });
            spawn_submission(Flow::QuickInquiry, record, phase.clone(), toasts.clone(), tr, on_success);
        })
    };

    let submitting = phase.is_submitting();
    html! {
        <Modal on_close={props.on_close.clone()} class="form-modal">
            <div class="centered">
                <h2 class="serif">{ tr.t("quick_inquiry.title") }</h2>
                <p class="muted">{ tr.t("quick_inquiry.subtitle") }</p>
            </div>
            <form class="stack" onsubmit={onsubmit}>
                <div class="grid-2">
                    <label class="field">
                        <span>{ tr.t("modals.your_name") }</span>
                        <input type="text" name="name" required=true />
                    </label>
                    <label class="field">
                        <span>{ tr.t("modals.your_email") }</span>
                        <input type="email" name="email" required=true />
                    </label>
                </div>
                <div class="grid-2">
                    <fieldset class="field">
                        <legend>{ tr.t("quick_inquiry.travel_dates") }</legend>
                        <div class="date-range">
                            <input type="date" name="travel_date_from" aria-label={tr.t("quick_inquiry.date_from")} />
                            <input type="date" name="travel_date_to" aria-label={tr.t("quick_inquiry.date_to")} />
                        </div>
                    </fieldset>
                    <label class="field">
                        <span>{ tr.t("modals.passengers") }</span>
                        <input type="number" name="passengers" min="1" placeholder={tr.t("modals.passengers_placeholder")} />
                    </label>
                </div>
                <label class="field">
                    <span>{ tr.t("quick_inquiry.requests") }</span>
                    <textarea name="requests" rows="4" placeholder={tr.t("modals.specific_requests")}></textarea>
                </label>
                <button type="submit" class="btn btn-dark btn-block" disabled={submitting}>
                    if submitting {
                        <Icon icon={IconId::Spinner} />
                    } else {
                        { tr.t("quick_inquiry.cta") }
                    }
                </button>
            </form>
        </Modal>
    }
}
