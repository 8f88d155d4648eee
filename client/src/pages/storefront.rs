//! Storefront page: header, hero search, catalog grid, legal docs, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. After hydration it fetches the catalog once and
//! installs it into the shared `StorefrontState`; everything afterwards is
//! local cart and search state.

use catalog::{CatalogItem, StorefrontState};
use leptos::prelude::*;

use crate::components::{
    game_card::GameCard, hero::HeroBanner, legal_docs::LegalDocs, site_footer::SiteFooter, site_header::SiteHeader,
};
use crate::state::catalog::CatalogState;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let storefront = expect_context::<RwSignal<StorefrontState>>();
    let catalog_state = expect_context::<RwSignal<CatalogState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_catalog().await;
        match &result {
            Ok(items) => log::info!("catalog loaded: {} items", items.len()),
            Err(e) => log::warn!("catalog fetch failed: {e}"),
        }
        storefront.update(|store| catalog_state.update(|state| state.install(store, result)));
    });

    // Recomputed only when the query or the installed catalog changes.
    let filtered = Memo::new(move |_| {
        storefront.with(|s| s.filtered_catalog().into_iter().cloned().collect::<Vec<CatalogItem>>())
    });

    view! {
        <div class="storefront">
            <SiteHeader/>
            <HeroBanner/>

            <section id="catalog" class="catalog">
                <div class="container">
                    <h3 class="section-title">"Популярные игры"</h3>
                    <Show when=move || catalog_state.get().error.is_some()>
                        <p class="catalog__error">{move || catalog_state.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !catalog_state.get().loading
                        fallback=|| view! { <p class="catalog__status">"Загрузка каталога..."</p> }
                    >
                        <Show
                            when=move || !filtered.get().is_empty()
                            fallback=|| view! { <p class="catalog__status">"Ничего не найдено"</p> }
                        >
                            <div class="catalog__grid">
                                <For
                                    each=move || filtered.get()
                                    key=|item| item.id
                                    children=move |item| view! { <GameCard item=item/> }
                                />
                            </div>
                        </Show>
                    </Show>
                </div>
            </section>

            <LegalDocs/>
            <SiteFooter/>
        </div>
    }
}
