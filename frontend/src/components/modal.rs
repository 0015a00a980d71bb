use yew::prelude::*;

use crate::content::icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay with a centered panel. Clicking the backdrop or the close button
/// closes it; clicks inside the panel stay inside.
#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    html! {
        <div class="modal-backdrop" onclick={on_backdrop} onkeydown={on_keydown} tabindex="-1">
            <div class={classes!("modal-panel", props.class.clone())} role="dialog" aria-modal="true" onclick={on_panel}>
                <button class="modal-close" aria-label="Close" onclick={on_close_button}>
                    <Icon icon={IconId::Close} />
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
