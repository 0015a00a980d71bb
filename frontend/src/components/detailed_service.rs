use yew::prelude::*;

use crate::components::modal::Modal;
use crate::content::icons::{Icon, IconId};
use crate::content::services::DetailedService;
use crate::i18n::use_translator;

#[derive(Properties, PartialEq)]
pub struct DetailedServiceInfoProps {
    pub service: DetailedService,
    pub on_close: Callback<()>,
    pub on_proceed: Callback<()>,
}

#[function_component]
pub fn DetailedServiceInfo(props: &DetailedServiceInfoProps) -> Html {
    let tr = use_translator();
    let service = &props.service;
    let on_proceed = {
        let on_proceed = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| on_proceed.emit(()))
    };
    html! {
        <Modal on_close={props.on_close.clone()} class="detailed-service">
            <img class="service-detail-image" src={service.img_src.clone()} alt={service.img_alt} />
            <div class="service-detail-body">
                <div class="detailed-service-heading">
                    <Icon icon={service.icon} class="accent" />
                    <h2 class="serif">{ &service.title }</h2>
                </div>
                <p class="muted">{ &service.description }</p>
                <button class="btn btn-dark btn-block" onclick={on_proceed}>
                    { tr.t("modals.proceed") }
                    <Icon icon={IconId::ArrowRight} class="btn-icon" />
                </button>
            </div>
        </Modal>
    }
}
