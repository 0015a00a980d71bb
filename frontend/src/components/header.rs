use gloo_console::log;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::icons::{Icon, IconId};
use crate::flow::state::{use_flow, FlowAction};
use crate::i18n::{use_translator, I18nContext, Locale};
use crate::Route;

const NAV_LINKS: [(Route, &str); 3] = [
    (Route::Services, "nav.services"),
    (Route::About, "nav.about"),
    (Route::Contact, "nav.contact"),
];

#[function_component]
fn LanguageSwitcher() -> Html {
    let i18n = use_context::<I18nContext>();
    let current = i18n.as_ref().map(|ctx| ctx.locale).unwrap_or_default();
    html! {
        <div class="language-switcher">
            { for Locale::ALL.iter().enumerate().map(|(i, locale)| {
                let onclick = {
                    let i18n = i18n.clone();
                    let locale = *locale;
                    Callback::from(move |_: MouseEvent| {
                        log!("Switching language to", locale.code());
                        if let Some(ctx) = &i18n {
                            ctx.set_locale.emit(locale);
                        }
                    })
                };
                html! {
                    <>
                        if i > 0 {
                            <span class="separator">{ "/" }</span>
                        }
                        <button class={classes!("lang-button", (*locale == current).then_some("active"))} onclick={onclick}>
                            { locale.label() }
                        </button>
                    </>
                }
            }) }
        </div>
    }
}

#[function_component]
pub fn Header() -> Html {
    let tr = use_translator();
    let flow = use_flow();
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    // Only the mobile menu reacts to navigation; open modals stay open.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    scrolled.set(scroll_y > 20.0);
                                }
                            }
                        }
                    });
                    if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        log::warn!("Could not watch scrolling: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let quick_reservation = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.emit(FlowAction::OpenQuickInquiry))
    };
    let nav_link = |target: &Route, key: &str, class: &'static str| {
        let active = route.as_ref() == Some(target);
        html! {
            <Link<Route> to={target.clone()} classes={classes!(class, active.then_some("active"))}>
                { tr.t(key) }
            </Link<Route>>
        }
    };

    html! {
        <>
            <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
                <div class="header-inner">
                    <Link<Route> to={Route::Home} classes="brand">{ "TBR" }</Link<Route>>
                    <nav class="desktop-nav">
                        { for NAV_LINKS.iter().map(|(target, key)| nav_link(target, key, "nav-link")) }
                    </nav>
                    <div class="header-actions">
                        <LanguageSwitcher />
                        <button class="btn btn-dark btn-small" onclick={quick_reservation.clone()}>
                            { tr.t("nav.quick_reservation") }
                        </button>
                    </div>
                    <button
                        class="menu-toggle"
                        aria-label={if *menu_open { tr.t("nav.close_menu") } else { tr.t("nav.open_menu") }}
                        onclick={toggle_menu}
                    >
                        <Icon icon={if *menu_open { IconId::Close } else { IconId::Menu }} />
                    </button>
                </div>
            </header>
            if *menu_open {
                <div class="mobile-menu">
                    <nav>
                        { nav_link(&Route::Home, "nav.home", "mobile-link") }
                        { for NAV_LINKS.iter().map(|(target, key)| nav_link(target, key, "mobile-link")) }
                        <LanguageSwitcher />
                        <button class="btn btn-dark" onclick={quick_reservation}>
                            { tr.t("nav.quick_reservation") }
                        </button>
                    </nav>
                </div>
            }
        </>
    }
}
