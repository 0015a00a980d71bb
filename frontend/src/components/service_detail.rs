use yew::prelude::*;

use crate::components::modal::Modal;
use crate::content::icons::{Icon, IconId};
use crate::content::services::ServiceOffering;
use crate::i18n::use_translator;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service: ServiceOffering,
    pub on_close: Callback<()>,
    pub on_book: Callback<&'static str>,
}

#[function_component]
pub fn ServiceDetail(props: &ServiceDetailProps) -> Html {
    let tr = use_translator();
    let service = &props.service;
    let on_book = {
        let on_book = props.on_book.clone();
        let id = service.id;
        Callback::from(move |_: MouseEvent| on_book.emit(id))
    };
    html! {
        <Modal on_close={props.on_close.clone()} class="service-detail">
            <img class="service-detail-image" src={service.img_src.clone()} alt={service.img_alt.clone()} />
            <div class="service-detail-body">
                <h2 class="serif">{ &service.title }</h2>
                <p class="muted">{ &service.description }</p>

                <h3>{ tr.t("modals.service_breakdown") }</h3>
                <ul class="benefit-list">
                    { for service.details.breakdown.iter().map(|item| html! {
                        <li>
                            <Icon icon={IconId::Check} class="accent" />
                            <div>
                                <strong>{ &item.name }</strong>
                                <p>{ &item.benefit }</p>
                            </div>
                        </li>
                    }) }
                </ul>

                <h3>{ tr.t("modals.testimonials") }</h3>
                <div class="testimonials">
                    { for service.details.testimonials.iter().map(|item| html! {
                        <blockquote>
                            <Icon icon={IconId::Quote} class="accent" />
                            <p>{ &item.quote }</p>
                            <cite>{ format!("- {}", item.author) }</cite>
                        </blockquote>
                    }) }
                </div>

                <button class="btn btn-dark btn-block" onclick={on_book}>
                    { tr.t("modals.quick_booking") }
                </button>
            </div>
        </Modal>
    }
}
