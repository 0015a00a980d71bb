use yew::prelude::*;

use crate::content::services::{DetailedService, ServiceOffering};

/// Scrolls to the top once on mount and keeps the tab title in the active locale.
#[hook]
pub fn use_page(title: String) {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
    use_effect_with_deps(
        move |title: &String| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(title);
            }
            || ()
        },
        title,
    );
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: ServiceOffering,
    pub on_open: Callback<&'static str>,
}

#[function_component]
pub fn ServiceCard(props: &ServiceCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.service.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };
    html! {
        <div class="card" onclick={onclick}>
            <div class="card-image">
                <img src={props.service.img_src.clone()} alt={props.service.img_alt.clone()} />
            </div>
            <h3 class="serif">{ &props.service.title }</h3>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailedServiceCardProps {
    pub service: DetailedService,
    pub on_open: Callback<&'static str>,
}

#[function_component]
pub fn DetailedServiceCard(props: &DetailedServiceCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.service.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };
    html! {
        <div class="card" onclick={onclick}>
            <div class="card-image">
                <img src={props.service.img_src.clone()} alt={props.service.img_alt} />
            </div>
            <h3 class="serif">{ &props.service.title }</h3>
            <p class="muted clamp">{ &props.service.description }</p>
        </div>
    }
}
