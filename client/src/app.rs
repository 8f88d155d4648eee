//! Root application component with routing and context providers.

use catalog::StorefrontState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::storefront::StorefrontPage;
use crate::state::{catalog::CatalogState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the storefront, catalog-load and UI contexts, then routes `/` to
/// the storefront page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The catalog arrives later from `/api/catalog`; until then the page
    // renders its loading state over an empty catalog.
    let storefront = RwSignal::new(StorefrontState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(storefront);
    provide_context(catalog);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Steam Keys Store"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StorefrontPage/>
            </Routes>
        </Router>
    }
}
