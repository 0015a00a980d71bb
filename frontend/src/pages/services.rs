use yew::prelude::*;

use crate::components::cards::{use_page, DetailedServiceCard};
use crate::content::icons::{Icon, IconId};
use crate::content::services::{detailed_services, signature_services, ServiceOffering};
use crate::flow::state::{use_flow, FlowAction};
use crate::i18n::use_translator;

#[derive(Properties, PartialEq)]
struct SignatureCardProps {
    service: ServiceOffering,
    on_details: Callback<&'static str>,
    on_book: Callback<&'static str>,
}

#[function_component]
fn SignatureCard(props: &SignatureCardProps) -> Html {
    let tr = use_translator();
    let id = props.service.id;
    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |_: MouseEvent| on_details.emit(id))
    };
    let on_book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(id))
    };
    html! {
        <article class="signature-card">
            <div class="card-image tall" onclick={on_details.clone()}>
                <img src={props.service.img_src.clone()} alt={props.service.img_alt.clone()} />
            </div>
            <h3 class="serif">{ &props.service.title }</h3>
            <p class="muted">{ &props.service.description }</p>
            <div class="card-actions">
                <button class="btn btn-outline" onclick={on_details}>{ tr.t("modals.view_details") }</button>
                <button class="btn btn-dark" onclick={on_book}>
                    { tr.t("modals.quick_booking") }
                    <Icon icon={IconId::ArrowRight} class="btn-icon" />
                </button>
            </div>
        </article>
    }
}

#[function_component]
pub fn Services() -> Html {
    let tr = use_translator();
    let flow = use_flow();
    use_page(format!("{} - {}", tr.t("nav.services"), tr.t("meta.site_name")));

    let on_details = {
        let flow = flow.clone();
        Callback::from(move |id: &'static str| flow.emit(FlowAction::OpenServiceDetail(id)))
    };
    let on_book = {
        let flow = flow.clone();
        Callback::from(move |id: &'static str| flow.emit(FlowAction::OpenBooking(id)))
    };
    let open_detailed = Callback::from(move |id: &'static str| flow.emit(FlowAction::OpenDetailedService(id)));

    html! {
        <div class="page">
            <section class="page-intro centered">
                <div class="container narrow">
                    <h1 class="serif">{ tr.t("nav.services") }</h1>
                    <p class="lead muted">{ tr.t("home_page.signature_journeys_subtitle") }</p>
                </div>
            </section>
            <section class="section">
                <div class="container grid-2 wide-gap">
                    { for signature_services(&tr).into_iter().map(|service| {
                        let id = service.id;
                        html! {
                            <SignatureCard key={id} service={service} on_details={on_details.clone()} on_book={on_book.clone()} />
                        }
                    }) }
                </div>
            </section>
            <section class="section tinted">
                <div class="container">
                    <div class="centered narrow">
                        <h2>{ tr.t("services_section.title") }</h2>
                        <p class="lead muted">{ tr.t("services_section.subtitle") }</p>
                    </div>
                    <div class="grid-3">
                        { for detailed_services(&tr).into_iter().map(|service| {
                            let id = service.id;
                            html! { <DetailedServiceCard key={id} service={service} on_open={open_detailed.clone()} /> }
                        }) }
                    </div>
                </div>
            </section>
        </div>
    }
}
