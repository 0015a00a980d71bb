use yew::prelude::*;

use crate::components::cards::use_page;
use crate::content::icons::{Icon, IconId};
use crate::i18n::use_translator;

const GENESIS_IMAGE: &str = "https://storage.googleapis.com/hostinger-horizons-assets-prod/7172a818-3ca1-4b7a-bdd1-3a691437a728/8ee7da306746f6540d88a3fbdfb12864.jpg";

#[function_component]
pub fn About() -> Html {
    let tr = use_translator();
    use_page(format!("{} - {}", tr.t("about_page.title"), tr.t("meta.site_name")));

    html! {
        <div class="page">
            <section class="page-intro centered">
                <div class="container narrow">
                    <h1 class="serif">{ tr.t("about_page.title") }</h1>
                    <p class="lead muted">{ tr.t("about_page.subtitle") }</p>
                </div>
            </section>
            <section class="section">
                <div class="container grid-2 align-center">
                    <div>
                        <h2>{ tr.t("about_page.genesis_title") }</h2>
                        <p class="muted">{ tr.t("about_page.genesis_p1") }</p>
                        <p class="muted">{ tr.t("about_page.genesis_p2") }</p>
                    </div>
                    <div class="card-image tall">
                        <img src={GENESIS_IMAGE} alt={tr.t("about_page.genesis_img_alt")} />
                    </div>
                </div>
            </section>
            <section class="section tinted">
                <div class="container grid-3">
                    { for (0..tr.len("about_page.pillars")).map(|i| {
                        let key = |field: &str| format!("about_page.pillars.{}.{}", i, field);
                        let icon = IconId::from_key(&tr.t(&key("icon"))).unwrap_or(IconId::Star);
                        html! {
                            <div class="point centered">
                                <div class="icon-badge"><Icon icon={icon} /></div>
                                <h3 class="serif">{ tr.t(&key("title")) }</h3>
                                <p class="muted">{ tr.t(&key("description")) }</p>
                            </div>
                        }
                    }) }
                </div>
            </section>
        </div>
    }
}
