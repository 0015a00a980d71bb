use std::rc::Rc;

use yew::prelude::*;

use crate::content::services::BESPOKE_JOURNEYS_ID;

/// Informational overlays. At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentModal {
    ServiceDetail { service_id: &'static str },
    DetailedService { service_id: &'static str },
    Success,
}

/// Form overlays. At most one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormModal {
    QuickBooking { service_id: &'static str },
    QuickInquiry,
}

/// Which overlays are open. Subjects are kept as offering ids and resolved
/// against the current locale when rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowState {
    pub content: Option<ContentModal>,
    pub form: Option<FormModal>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowAction {
    OpenServiceDetail(&'static str),
    OpenDetailedService(&'static str),
    OpenSuccess,
    CloseContent,
    OpenBooking(&'static str),
    OpenQuickInquiry,
    CloseForm,
    /// "Quick booking" pressed inside a service detail.
    BookFromServiceDetail(&'static str),
    /// "Proceed" pressed inside a detailed service.
    ProceedFromDetailedService,
}

fn booking_form(service_id: &'static str) -> FormModal {
    if service_id == BESPOKE_JOURNEYS_ID {
        FormModal::QuickInquiry
    } else {
        FormModal::QuickBooking { service_id }
    }
}

impl FlowState {
    pub fn apply(self, action: FlowAction) -> FlowState {
        match action {
            FlowAction::OpenServiceDetail(service_id) => FlowState {
                content: Some(ContentModal::ServiceDetail { service_id }),
                ..self
            },
            FlowAction::OpenDetailedService(service_id) => FlowState {
                content: Some(ContentModal::DetailedService { service_id }),
                ..self
            },
            FlowAction::OpenSuccess => FlowState {
                content: Some(ContentModal::Success),
                ..self
            },
            FlowAction::CloseContent => FlowState { content: None, ..self },
            FlowAction::OpenBooking(service_id) => FlowState {
                form: Some(booking_form(service_id)),
                ..self
            },
            FlowAction::OpenQuickInquiry => FlowState {
                form: Some(FormModal::QuickInquiry),
                ..self
            },
            FlowAction::CloseForm => FlowState { form: None, ..self },
            FlowAction::BookFromServiceDetail(service_id) => self
                .apply(FlowAction::CloseContent)
                .apply(FlowAction::OpenBooking(service_id)),
            FlowAction::ProceedFromDetailedService => self
                .apply(FlowAction::CloseContent)
                .apply(FlowAction::OpenQuickInquiry),
        }
    }
}

impl Reducible for FlowState {
    type Action = FlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Hands flow actions from pages and overlays to the reducer owned by the app shell.
#[derive(Clone, PartialEq)]
pub struct FlowContext {
    pub dispatch: Callback<FlowAction>,
}

#[hook]
pub fn use_flow() -> Callback<FlowAction> {
    match use_context::<FlowContext>() {
        Some(ctx) => ctx.dispatch,
        None => Callback::from(|action: FlowAction| {
            log::warn!("Flow action {:?} dispatched outside the app shell", action)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bespoke_booking_opens_quick_inquiry_from_any_state() {
        let starts = [
            FlowState::default(),
            FlowState { content: Some(ContentModal::Success), form: None },
            FlowState { content: None, form: Some(FormModal::QuickBooking { service_id: "ultimate-escape" }) },
            FlowState {
                content: Some(ContentModal::ServiceDetail { service_id: BESPOKE_JOURNEYS_ID }),
                form: Some(FormModal::QuickInquiry),
            },
        ];
        for start in starts {
            let next = start.apply(FlowAction::OpenBooking(BESPOKE_JOURNEYS_ID));
            assert_eq!(next.form, Some(FormModal::QuickInquiry));
            assert_eq!(next.content, start.content);
        }
    }

    #[test]
    fn one_modal_per_category() {
        let state = FlowState::default()
            .apply(FlowAction::OpenServiceDetail("ultimate-escape"))
            .apply(FlowAction::OpenDetailedService("dining"))
            .apply(FlowAction::OpenBooking("business-engagements"))
            .apply(FlowAction::OpenQuickInquiry);
        assert_eq!(state.content, Some(ContentModal::DetailedService { service_id: "dining" }));
        assert_eq!(state.form, Some(FormModal::QuickInquiry));
    }

    #[test]
    fn booking_from_service_detail_swaps_overlays() {
        let state = FlowState::default().apply(FlowAction::OpenServiceDetail("unforgettable-honeymoons"));
        let state = state.apply(FlowAction::BookFromServiceDetail("unforgettable-honeymoons"));
        assert_eq!(state.content, None);
        assert_eq!(
            state.form,
            Some(FormModal::QuickBooking { service_id: "unforgettable-honeymoons" })
        );

        let bespoke = FlowState::default()
            .apply(FlowAction::OpenServiceDetail(BESPOKE_JOURNEYS_ID))
            .apply(FlowAction::BookFromServiceDetail(BESPOKE_JOURNEYS_ID));
        assert_eq!(bespoke, FlowState { content: None, form: Some(FormModal::QuickInquiry) });
    }

    #[test]
    fn proceed_from_detailed_service_opens_inquiry() {
        let state = FlowState::default()
            .apply(FlowAction::OpenDetailedService("security"))
            .apply(FlowAction::ProceedFromDetailedService);
        assert_eq!(state, FlowState { content: None, form: Some(FormModal::QuickInquiry) });
    }

    #[test]
    fn closing_clears_the_subject() {
        let state = FlowState::default()
            .apply(FlowAction::OpenBooking("ultimate-escape"))
            .apply(FlowAction::OpenSuccess)
            .apply(FlowAction::CloseForm);
        assert_eq!(state.form, None);
        assert_eq!(state.content, Some(ContentModal::Success));
        assert_eq!(state.apply(FlowAction::CloseContent), FlowState::default());
    }

    #[test]
    fn reducer_skips_no_op_transitions() {
        let state = Rc::new(FlowState::default());
        let same = state.clone().reduce(FlowAction::CloseForm);
        assert!(Rc::ptr_eq(&state, &same));
    }
}
