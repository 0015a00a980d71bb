use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{use_page, DetailedServiceCard, ServiceCard};
use crate::content::icons::{Icon, IconId};
use crate::content::services::{detailed_services, signature_services};
use crate::flow::state::{use_flow, FlowAction};
use crate::i18n::use_translator;
use crate::Route;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1641787540215-53a5914bdef3";
const FEATURE_ICONS: [IconId; 5] = [
    IconId::ShieldCheck,
    IconId::KeyRound,
    IconId::UserTie,
    IconId::Utensils,
    IconId::Palette,
];

#[function_component]
pub fn Home() -> Html {
    let tr = use_translator();
    let flow = use_flow();
    use_page(tr.t("meta.home_title"));

    let services = signature_services(&tr);
    let detailed = detailed_services(&tr);

    let open_inquiry = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.emit(FlowAction::OpenQuickInquiry))
    };
    let open_detail = {
        let flow = flow.clone();
        Callback::from(move |id: &'static str| flow.emit(FlowAction::OpenServiceDetail(id)))
    };
    let open_detailed = Callback::from(move |id: &'static str| flow.emit(FlowAction::OpenDetailedService(id)));

    html! {
        <div class="page">
            <section class="hero">
                <img class="hero-image" src={HERO_IMAGE} alt="Luxury yacht sailing on calm turquoise waters under a clear blue sky" />
                <div class="hero-veil"></div>
                <div class="container hero-content">
                    <p class="eyebrow">{ tr.t("hero.subtitle") }</p>
                    <h1>{ tr.t("hero.title") }</h1>
                    <p class="lead">{ tr.t("hero.description") }</p>
                    <div class="hero-actions">
                        <button class="btn btn-dark" onclick={open_inquiry.clone()}>{ tr.t("hero.button_contact") }</button>
                        <Link<Route> to={Route::Services} classes="btn btn-outline">{ tr.t("hero.button_explore") }</Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow centered">
                    <h2>{ tr.t("brand_intro.title") }</h2>
                    <p class="lead muted">{ tr.t("brand_intro.description") }</p>
                    <div class="feature-row">
                        { for (0..tr.len("brand_intro.features")).map(|i| html! {
                            <div class="feature">
                                <Icon icon={FEATURE_ICONS.get(i).copied().unwrap_or(IconId::Star)} class="muted" />
                                <span>{ tr.t(&format!("brand_intro.features.{}", i)) }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <div class="centered narrow">
                        <h2>{ tr.t("why_choose_us.title") }</h2>
                        <p class="lead muted">{ tr.t("why_choose_us.subtitle") }</p>
                    </div>
                    <div class="grid-3">
                        { for (0..tr.len("why_choose_us.points")).map(|i| {
                            let key = |field: &str| format!("why_choose_us.points.{}.{}", i, field);
                            html! {
                                <div class="point centered">
                                    if let Some(icon) = IconId::from_key(&tr.t(&key("icon"))) {
                                        <div class="icon-badge"><Icon icon={icon} /></div>
                                    }
                                    <h3 class="serif">{ tr.t(&key("title")) }</h3>
                                    <p class="muted">{ tr.t(&key("description")) }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="narrow">
                        <h2>{ tr.t("home_page.signature_journeys_title") }</h2>
                        <p class="lead muted">{ tr.t("home_page.signature_journeys_subtitle") }</p>
                    </div>
                    <div class="grid-4">
                        { for services.into_iter().map(|service| {
                            let id = service.id;
                            html! { <ServiceCard key={id} service={service} on_open={open_detail.clone()} /> }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <div class="narrow">
                        <h2>{ tr.t("services_section.title") }</h2>
                        <p class="lead muted">{ tr.t("services_section.subtitle") }</p>
                    </div>
                    <div class="grid-3">
                        { for detailed.into_iter().map(|service| {
                            let id = service.id;
                            html! { <DetailedServiceCard key={id} service={service} on_open={open_detailed.clone()} /> }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section dark">
                <div class="container narrow centered">
                    <p class="serif brand-line">{ tr.t("possibilities.brand") }</p>
                    <h2 class="display">{ tr.t("possibilities.title") }</h2>
                    <p class="lead">{ tr.t("possibilities.subtitle") }</p>
                </div>
            </section>

            <section class="section">
                <div class="container narrow centered">
                    <h2>{ tr.t("home_page.consultation_cta_title") }</h2>
                    <p class="lead muted">{ tr.t("home_page.consultation_cta_desc") }</p>
                    <button class="btn btn-dark btn-large" onclick={open_inquiry}>
                        { tr.t("home_page.consultation_cta_button") }
                    </button>
                </div>
            </section>
        </div>
    }
}
