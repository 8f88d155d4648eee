//! Hero banner with the catalog search box.

use catalog::StorefrontState;
use leptos::prelude::*;

const HERO_IMAGE: &str = "/img/4ba6b31f-8059-40c9-be71-956ddfed233f.jpg";

/// Every keystroke writes the query into `StorefrontState`; the catalog grid
/// re-derives from it.
#[component]
pub fn HeroBanner() -> impl IntoView {
    let storefront = expect_context::<RwSignal<StorefrontState>>();
    let backdrop_style = format!("background-image: url('{HERO_IMAGE}')");

    view! {
        <section class="hero">
            <div class="hero__backdrop" style=backdrop_style></div>
            <div class="container hero__inner">
                <h2 class="hero__title">"Лучшие игры по лучшим ценам"</h2>
                <p class="hero__subtitle">
                    "Покупайте Steam ключи быстро, безопасно и выгодно. Мгновенная доставка на email."
                </p>
                <div class="hero__search">
                    <input
                        class="hero__search-input"
                        type="text"
                        placeholder="Найти игру..."
                        prop:value=move || storefront.with(|s| s.search_query().to_owned())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            storefront.update(|s| s.set_search_query(text));
                        }
                    />
                    <a class="btn btn--primary hero__cta" href="#catalog">
                        "Найти игру →"
                    </a>
                </div>
            </div>
        </section>
    }
}
