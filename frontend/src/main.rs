use yew::prelude::*;
use yew_router::prelude::*;
mod config;
mod i18n;
mod utils {
    pub mod api;
}
mod content {
    pub mod icons;
    pub mod services;
}
mod forms {
    pub mod collector;
    pub mod dom;
    pub mod pipeline;
    pub mod quick_booking;
    pub mod quick_inquiry;
    pub mod records;
}
mod flow {
    pub mod state;
}
mod feedback {
    pub mod celebration;
    pub mod success_modal;
    pub mod toast;
}
mod components {
    pub mod cards;
    pub mod detailed_service;
    pub mod footer;
    pub mod header;
    pub mod modal;
    pub mod service_detail;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod detailed_consultation;
    pub mod home;
    pub mod services;
}
use components::detailed_service::DetailedServiceInfo;
use components::footer::Footer;
use components::header::Header;
use components::service_detail::ServiceDetail;
use content::services::{find_detailed_service, find_service};
use feedback::success_modal::SuccessModal;
use feedback::toast::{ToastAction, ToastContext, ToastQueue, Toaster};
use flow::state::{ContentModal, FlowAction, FlowContext, FlowState, FormModal};
use forms::quick_booking::QuickBookingForm;
use forms::quick_inquiry::QuickInquiryForm;
use i18n::{I18nContext, Locale, Translator};
use pages::{
    about::About,
    contact::Contact,
    detailed_consultation::DetailedConsultation,
    home::Home,
    services::Services,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/detailed-consultation")]
    DetailedConsultation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Services => html! { <Services /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::DetailedConsultation => html! { <DetailedConsultation /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn content_modal(state: &FlowState, tr: &Translator, dispatch: &Callback<FlowAction>) -> Html {
    let on_close = dispatch.reform(|_: ()| FlowAction::CloseContent);
    match state.content {
        Some(ContentModal::ServiceDetail { service_id }) => match find_service(tr, service_id) {
            Some(service) => html! {
                <ServiceDetail
                    service={service}
                    on_close={on_close}
                    on_book={dispatch.reform(FlowAction::BookFromServiceDetail)}
                />
            },
            None => Html::default(),
        },
        Some(ContentModal::DetailedService { service_id }) => match find_detailed_service(tr, service_id) {
            Some(service) => html! {
                <DetailedServiceInfo
                    service={service}
                    on_close={on_close}
                    on_proceed={dispatch.reform(|_: ()| FlowAction::ProceedFromDetailedService)}
                />
            },
            None => Html::default(),
        },
        Some(ContentModal::Success) => html! { <SuccessModal on_close={on_close} /> },
        None => Html::default(),
    }
}

fn form_modal(state: &FlowState, tr: &Translator, dispatch: &Callback<FlowAction>) -> Html {
    let on_close = dispatch.reform(|_: ()| FlowAction::CloseForm);
    match state.form {
        // the subject is looked up on every render so it follows locale switches
        Some(FormModal::QuickBooking { service_id }) => match find_service(tr, service_id) {
            Some(service) => html! { <QuickBookingForm service={service} on_close={on_close} /> },
            None => Html::default(),
        },
        Some(FormModal::QuickInquiry) => html! { <QuickInquiryForm on_close={on_close} /> },
        None => Html::default(),
    }
}

#[function_component]
fn Shell() -> Html {
    let flow = use_reducer(FlowState::default);
    let toasts = use_reducer(ToastQueue::default);
    let locale = use_state(Locale::default);

    {
        use_effect_with_deps(
            |locale: &Locale| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", locale.code());
                }
                || ()
            },
            *locale,
        );
    }

    // built once so context consumers only re-render when a value really changes
    let set_locale = {
        let setter = locale.setter();
        use_memo(move |_| Callback::from(move |next: Locale| setter.set(next)), ())
    };
    let push_toast = {
        let toasts = toasts.dispatcher();
        use_memo(move |_| Callback::from(move |toast| toasts.dispatch(ToastAction::Push(toast))), ())
    };
    let on_dismiss = {
        let toasts = toasts.dispatcher();
        use_memo(move |_| Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id))), ())
    };
    let dispatch = {
        let flow = flow.dispatcher();
        use_memo(move |_| Callback::from(move |action: FlowAction| flow.dispatch(action)), ())
    };

    let i18n = I18nContext {
        locale: *locale,
        set_locale: (*set_locale).clone(),
    };
    let toast_context = ToastContext { push: (*push_toast).clone() };
    let flow_context = FlowContext { dispatch: (*dispatch).clone() };
    let tr = Translator::new(*locale);

    html! {
        <ContextProvider<I18nContext> context={i18n}>
            <ContextProvider<ToastContext> context={toast_context}>
                <ContextProvider<FlowContext> context={flow_context}>
                    <div class="app">
                        <Header />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                        { content_modal(&flow, &tr, &dispatch) }
                        { form_modal(&flow, &tr, &dispatch) }
                        <Toaster entries={toasts.entries().to_vec()} on_dismiss={(*on_dismiss).clone()} />
                    </div>
                </ContextProvider<FlowContext>>
            </ContextProvider<ToastContext>>
        </ContextProvider<I18nContext>>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting TBR frontend");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback::toast::Toast;

    #[test]
    fn contexts_sharing_one_callback_compare_equal() {
        let set_locale = Callback::from(|_: Locale| ());
        let en = I18nContext { locale: Locale::En, set_locale: set_locale.clone() };
        assert!(en == I18nContext { locale: Locale::En, set_locale: set_locale.clone() });
        assert!(en != I18nContext { locale: Locale::Ko, set_locale });

        let push = Callback::from(|_: Toast| ());
        assert!(ToastContext { push: push.clone() } == ToastContext { push });
        assert!(
            ToastContext { push: Callback::from(|_: Toast| ()) }
                != ToastContext { push: Callback::from(|_: Toast| ()) }
        );
    }
}
