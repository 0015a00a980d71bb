use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal::Modal;
use crate::content::icons::{Icon, IconId};
use crate::content::services::{booking_placeholder_key, ServiceOffering};
use crate::feedback::toast::use_toasts;
use crate::forms::dom::{form_fields, submitted_form};
use crate::forms::pipeline::{spawn_submission, Flow, SubmissionPhase, SuccessAction};
use crate::forms::records::InquiryRecord;
use crate::i18n::use_translator;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct QuickBookingProps {
    pub service: ServiceOffering,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn QuickBookingForm(props: &QuickBookingProps) -> Html {
    let tr = use_translator();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let phase = use_state(SubmissionPhase::default);

    let onsubmit = {
        let service = props.service.clone();
        let on_close = props.on_close.clone();
        let phase = phase.clone();
        Callback::from(move |e: SubmitEvent| {
            let Some(form) = submitted_form(&e) else {
                return;
            };
            let record = InquiryRecord::quick_booking(&form_fields(&form), &service);
            let record = match serde_json::to_value(&record) {
                Ok(record) => record,
                Err(e) => {
                    log::error!("Failed to encode booking: {}", e);
                    return;
                }
            };
            let on_success = {
                let on_close = on_close.clone();
                let navigator = navigator.clone();
                Callback::from(move |action: SuccessAction| {
                    if action == SuccessAction::CloseAndContinueToConsultation {
                        on_close.emit(());
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::DetailedConsultation);
                        }
                    }
                })
            };
            spawn_submission(Flow::QuickBooking, record, phase.clone(), toasts.clone(), tr, on_success);
        })
    };

    let submitting = phase.is_submitting();
    html! {
        <Modal on_close={props.on_close.clone()} class="form-modal">
            <h2 class="serif centered">{ format!("{} {}", tr.t("modals.booking_form_title"), props.service.title) }</h2>
            <form class="stack" onsubmit={onsubmit}>
                <div class="grid-2">
                    <label class="field">
                        <span>{ tr.t("modals.your_name") }</span>
                        <input type="text" name="name" placeholder={tr.t("modals.your_name")} required=true />
                    </label>
                    <label class="field">
                        <span>{ tr.t("modals.your_email") }</span>
                        <input type="email" name="email" placeholder={tr.t("modals.your_email")} required=true />
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
                        <input type="number" name="passengers" min="1" placeholder={tr.t("modals.passengers_placeholder")} required=true />
                    </label>
                </div>
                <label class="field">
                    <span>{ tr.t("modals.additional_details") }</span>
                    <textarea name="requests" rows="5" placeholder={tr.t(booking_placeholder_key(props.service.id))}></textarea>
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
