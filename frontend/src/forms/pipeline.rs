use futures::FutureExt;
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

use crate::feedback::toast::{Toast, ToastContext, ToastVariant};
use crate::i18n::Translator;
use crate::utils::api::{Collection, HttpInsertClient, InsertClient, InsertError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// A second submit while one is in flight is ignored.
    pub fn can_submit(&self) -> bool {
        *self != SubmissionPhase::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        *self == SubmissionPhase::Submitting
    }

    /// Phase the form rests in once feedback for `result` has been shown.
    /// Failures go straight back to idle so the visitor can resubmit.
    pub fn settle<T, E>(result: &Result<T, E>) -> SubmissionPhase {
        match result {
            Ok(_) => SubmissionPhase::Succeeded,
            Err(_) => SubmissionPhase::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    QuickBooking,
    QuickInquiry,
    Contact,
    Consultation,
}

/// What the owning component does once the insert has gone through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuccessAction {
    /// Close the booking modal and continue on the detailed consultation page.
    CloseAndContinueToConsultation,
    CloseModal,
    ResetAndCelebrate,
}

impl Flow {
    pub fn collection(&self) -> Collection {
        match self {
            Flow::QuickBooking | Flow::QuickInquiry => Collection::Inquiries,
            Flow::Contact => Collection::Contacts,
            Flow::Consultation => Collection::Consultations,
        }
    }

    pub fn success_action(&self) -> SuccessAction {
        match self {
            Flow::QuickBooking => SuccessAction::CloseAndContinueToConsultation,
            Flow::QuickInquiry => SuccessAction::CloseModal,
            Flow::Contact | Flow::Consultation => SuccessAction::ResetAndCelebrate,
        }
    }

    fn subject_key(&self) -> &'static str {
        match self {
            Flow::QuickBooking | Flow::QuickInquiry => "feedback.subject_inquiries",
            Flow::Contact => "feedback.subject_messages",
            Flow::Consultation => "feedback.subject_consultation",
        }
    }

    /// Toast shown on success; the celebrating flows use the success modal instead.
    pub fn success_toast(&self, tr: &Translator) -> Option<Toast> {
        match self {
            Flow::QuickBooking => Some(Toast::new(
                tr.t("feedback.booking_title"),
                Some(tr.t("feedback.booking_description")),
                ToastVariant::Default,
            )),
            Flow::QuickInquiry => Some(
                Toast::new(
                    tr.t("feedback.inquiry_title"),
                    Some(tr.t("feedback.inquiry_description")),
                    ToastVariant::Success,
                ),
            ),
            Flow::Contact | Flow::Consultation => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Backend not connected")]
    BackendUnavailable,
    #[error(transparent)]
    Insert(#[from] InsertError),
}

impl SubmitError {
    pub fn toast(&self, flow: Flow, tr: &Translator) -> Toast {
        match self {
            SubmitError::BackendUnavailable => {
                let subject = tr.t(flow.subject_key());
                Toast::new(
                    tr.t("feedback.backend_title"),
                    Some(tr.t_with("feedback.backend_description", &[("subject", &subject)])),
                    ToastVariant::Destructive,
                )
            }
            SubmitError::Insert(_) => Toast::new(
                tr.t("feedback.error_title"),
                Some(tr.t("feedback.error_description")),
                ToastVariant::Destructive,
            ),
        }
    }
}

/// One submission attempt: exactly one insert into the flow's collection, or
/// none at all when no client is configured.
pub async fn run_submission<C: InsertClient>(
    client: Option<&C>,
    flow: Flow,
    record: &Value,
) -> Result<SuccessAction, SubmitError> {
    let client = match client {
        Some(client) => client,
        None => {
            log::warn!("{:?} submission skipped: backend not connected", flow);
            return Err(SubmitError::BackendUnavailable);
        }
    };
    let collection = flow.collection();
    log::info!("Submitting {:?} into {}", flow, collection.as_str());
    match client.insert(collection, record).await {
        Ok(()) => {
            log::info!("{:?} stored in {}", flow, collection.as_str());
            Ok(flow.success_action())
        }
        Err(e) => {
            log::error!("{:?} insert into {} failed: {}", flow, collection.as_str(), e);
            Err(SubmitError::Insert(e))
        }
    }
}

/// Shows the feedback for a settled submission: phase changes, toasts and the
/// success action, in the order the form observes them.
pub fn report_outcome(
    flow: Flow,
    result: &Result<SuccessAction, SubmitError>,
    tr: &Translator,
    set_phase: impl Fn(SubmissionPhase),
    push_toast: impl Fn(Toast),
    on_success: impl Fn(SuccessAction),
) {
    match result {
        Ok(action) => {
            if let Some(toast) = flow.success_toast(tr) {
                push_toast(toast);
            }
            on_success(*action);
        }
        Err(error) => {
            set_phase(SubmissionPhase::Failed);
            push_toast(error.toast(flow, tr));
        }
    }
    set_phase(SubmissionPhase::settle(result));
}

/// Runs a submission against the configured backend and reports through
/// toasts. `on_success` receives the flow's success action.
///
/// Handlers only touch state handles and callbacks, so they are safe to run
/// after the owning modal has been closed.
pub fn spawn_submission(
    flow: Flow,
    record: Value,
    phase: UseStateHandle<SubmissionPhase>,
    toasts: ToastContext,
    tr: Translator,
    on_success: Callback<SuccessAction>,
) {
    if !phase.can_submit() {
        log::debug!("{:?} submit ignored, one is already in flight", flow);
        return;
    }
    let report_phase = phase.clone();
    let report = move |result: Result<SuccessAction, SubmitError>| {
        report_outcome(
            flow,
            &result,
            &tr,
            |next| report_phase.set(next),
            |toast| toasts.push.emit(toast),
            |action| on_success.emit(action),
        )
    };
    let Some(client) = HttpInsertClient::from_config() else {
        // resolves without awaiting anything, so the form never shows a spinner
        if let Some(result) = run_submission::<HttpInsertClient>(None, flow, &record).now_or_never() {
            report(result);
        }
        return;
    };
    phase.set(SubmissionPhase::Submitting);
    wasm_bindgen_futures::spawn_local(async move {
        let result = run_submission(Some(&client), flow, &record).await;
        report(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;
    use serde_json::json;
    use std::cell::RefCell;

    /// Everything a form observes while a submission settles.
    #[derive(Debug, PartialEq)]
    enum Observed {
        Phase(SubmissionPhase),
        Toast(String, ToastVariant),
        Success(SuccessAction),
    }

    fn observe(flow: Flow, result: &Result<SuccessAction, SubmitError>) -> Vec<Observed> {
        let seen = RefCell::new(Vec::new());
        report_outcome(
            flow,
            result,
            &Translator::new(Locale::En),
            |phase| seen.borrow_mut().push(Observed::Phase(phase)),
            |toast| seen.borrow_mut().push(Observed::Toast(toast.title, toast.variant)),
            |action| seen.borrow_mut().push(Observed::Success(action)),
        );
        seen.into_inner()
    }

    #[derive(Default)]
    struct RecordingClient {
        calls: RefCell<Vec<(Collection, Value)>>,
        fail: bool,
    }

    impl InsertClient for RecordingClient {
        fn insert<'a>(
            &'a self,
            collection: Collection,
            record: &'a Value,
        ) -> LocalBoxFuture<'a, Result<(), InsertError>> {
            self.calls.borrow_mut().push((collection, record.clone()));
            let result = if self.fail {
                Err(InsertError::Status { status: 500, message: "disk full".to_string() })
            } else {
                Ok(())
            };
            async move { result }.boxed_local()
        }
    }

    #[test]
    fn missing_client_never_inserts() {
        let result = block_on(run_submission::<RecordingClient>(None, Flow::Contact, &json!({})));
        assert_eq!(result, Err(SubmitError::BackendUnavailable));

        let tr = Translator::new(Locale::En);
        let toast = result.unwrap_err().toast(Flow::Contact, &tr);
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "🚧 Backend not connected");
        assert_eq!(
            toast.description.as_deref(),
            Some("Please complete the backend integration to send messages.")
        );
    }

    #[test]
    fn each_flow_inserts_once_into_its_collection() {
        let cases = [
            (Flow::QuickBooking, Collection::Inquiries, SuccessAction::CloseAndContinueToConsultation),
            (Flow::QuickInquiry, Collection::Inquiries, SuccessAction::CloseModal),
            (Flow::Contact, Collection::Contacts, SuccessAction::ResetAndCelebrate),
            (Flow::Consultation, Collection::Consultations, SuccessAction::ResetAndCelebrate),
        ];
        for (flow, collection, action) in cases {
            let client = RecordingClient::default();
            let record = json!({ "name": "Jane" });
            let result = block_on(run_submission(Some(&client), flow, &record));
            assert_eq!(result, Ok(action));
            let calls = client.calls.borrow();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0], (collection, record));
        }
    }

    #[test]
    fn failed_insert_reports_generic_error_and_returns_to_idle() {
        let client = RecordingClient { fail: true, ..Default::default() };
        let result = block_on(run_submission(Some(&client), Flow::Consultation, &json!({})));
        assert!(matches!(result, Err(SubmitError::Insert(InsertError::Status { status: 500, .. }))));
        assert_eq!(client.calls.borrow().len(), 1);
        assert_eq!(SubmissionPhase::settle(&result), SubmissionPhase::Idle);

        let toast = result.unwrap_err().toast(Flow::Consultation, &Translator::new(Locale::En));
        assert_eq!(toast.title, "Uh oh! Something went wrong.");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn only_submitting_blocks_a_new_attempt() {
        assert!(SubmissionPhase::Idle.can_submit());
        assert!(!SubmissionPhase::Submitting.can_submit());
        assert!(SubmissionPhase::Succeeded.can_submit());
        assert_eq!(SubmissionPhase::settle::<(), ()>(&Ok(())), SubmissionPhase::Succeeded);
    }

    #[test]
    fn success_toasts_only_for_modal_flows() {
        let tr = Translator::new(Locale::En);
        let booking = Flow::QuickBooking.success_toast(&tr).unwrap();
        assert_eq!(booking.title, "✅ Quick Inquiry Received!");
        assert_eq!(booking.variant, ToastVariant::Default);
        assert!(Flow::QuickInquiry.success_toast(&tr).is_some());
        assert!(Flow::Contact.success_toast(&tr).is_none());
        assert!(Flow::Consultation.success_toast(&tr).is_none());
    }

    #[test]
    fn missing_client_settles_without_awaiting() {
        let record = json!({});
        let pending = run_submission::<RecordingClient>(None, Flow::QuickInquiry, &record);
        assert_eq!(pending.now_or_never(), Some(Err(SubmitError::BackendUnavailable)));
    }

    #[test]
    fn missing_client_fails_then_returns_to_idle_without_success() {
        let result = block_on(run_submission::<RecordingClient>(None, Flow::Contact, &json!({})));
        assert_eq!(
            observe(Flow::Contact, &result),
            vec![
                Observed::Phase(SubmissionPhase::Failed),
                Observed::Toast("🚧 Backend not connected".to_string(), ToastVariant::Destructive),
                Observed::Phase(SubmissionPhase::Idle),
            ]
        );
    }

    #[test]
    fn failed_insert_never_reaches_the_success_action() {
        let client = RecordingClient { fail: true, ..Default::default() };
        let result = block_on(run_submission(Some(&client), Flow::QuickBooking, &json!({})));
        assert_eq!(
            observe(Flow::QuickBooking, &result),
            vec![
                Observed::Phase(SubmissionPhase::Failed),
                Observed::Toast("Uh oh! Something went wrong.".to_string(), ToastVariant::Destructive),
                Observed::Phase(SubmissionPhase::Idle),
            ]
        );
    }

    #[test]
    fn successful_insert_toasts_before_the_success_action() {
        let client = RecordingClient::default();
        let result = block_on(run_submission(Some(&client), Flow::QuickBooking, &json!({})));
        assert_eq!(
            observe(Flow::QuickBooking, &result),
            vec![
                Observed::Toast("✅ Quick Inquiry Received!".to_string(), ToastVariant::Default),
                Observed::Success(SuccessAction::CloseAndContinueToConsultation),
                Observed::Phase(SubmissionPhase::Succeeded),
            ]
        );

        let result = block_on(run_submission(Some(&client), Flow::Contact, &json!({})));
        assert_eq!(
            observe(Flow::Contact, &result),
            vec![
                Observed::Success(SuccessAction::ResetAndCelebrate),
                Observed::Phase(SubmissionPhase::Succeeded),
            ]
        );
        assert_eq!(client.calls.borrow().len(), 2);
    }
}
