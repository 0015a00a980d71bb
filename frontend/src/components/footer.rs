use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::icons::{Icon, IconId};
use crate::feedback::toast::{use_toasts, Toast, ToastVariant};
use crate::flow::state::{use_flow, FlowAction};
use crate::i18n::use_translator;
use crate::Route;

#[function_component]
pub fn Footer() -> Html {
    let tr = use_translator();
    let toasts = use_toasts();
    let flow = use_flow();

    // Legal pages and social links are not live yet.
    let unavailable = {
        let toasts = toasts.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            toasts.push.emit(
                Toast::new(tr.t("footer.unavailable"), None, ToastVariant::Default).with_duration(4_000),
            );
        })
    };
    let quick_reservation = Callback::from(move |_: MouseEvent| flow.emit(FlowAction::OpenQuickInquiry));

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">{ "TBR" }</div>
                    <p class="muted">{ tr.t("footer.about") }</p>
                </div>
                <div>
                    <h4>{ tr.t("footer.explore") }</h4>
                    <ul>
                        <li><Link<Route> to={Route::Services}>{ tr.t("footer.services") }</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{ tr.t("footer.about_us") }</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{ tr.t("footer.contact") }</Link<Route>></li>
                        <li>
                            <button class="link-button" onclick={quick_reservation}>
                                { tr.t("footer.quick_reservation") }
                            </button>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{ tr.t("footer.legal") }</h4>
                    <ul>
                        <li><a href="#" onclick={unavailable.clone()}>{ tr.t("footer.privacy") }</a></li>
                        <li><a href="#" onclick={unavailable.clone()}>{ tr.t("footer.terms") }</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{ tr.t("footer.follow") }</h4>
                    <a href="#" class="social-link" aria-label="Instagram" onclick={unavailable}>
                        <Icon icon={IconId::Instagram} />
                    </a>
                </div>
            </div>
            <p class="copyright">{ tr.t("footer.copyright") }</p>
        </footer>
    }
}
